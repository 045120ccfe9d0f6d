use eframe::egui;

// Marker Store Constants
pub const MARKER_MAX: usize = 64;

// Widget Layout Constants
pub const BAR_HEIGHT: f32 = 20.0;
pub const MARKER_WIDTH: f32 = 10.0;
pub const MARKER_HEIGHT: f32 = 15.0;
pub const WIDGET_MARGIN: f32 = 5.0;
pub const MARKER_OUTLINE_INSET: f32 = 2.0;
pub const CHECKER_SIZE: f32 = 10.0;
pub const BAR_BORDER: f32 = 2.0;
pub const INSPECTOR_WIDTH: f32 = 260.0;

// Colors
pub const COLOR_MARKER_OUTLINE: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
pub const COLOR_MARKER_OUTLINE_SELECTED: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
pub const COLOR_BAR_BORDER: egui::Color32 = egui::Color32::from_gray(100);
pub const COLOR_CHECKER_LIGHT: egui::Color32 = egui::Color32::from_gray(100);
pub const COLOR_CHECKER_DARK: egui::Color32 = egui::Color32::from_gray(50);

// Others
pub const APP_TITLE: &str = "HDR Gradient Editor";
pub const CONFIG_FILE_NAME: &str = "config.json";
