use eframe::egui;

use crate::config::Theme;

#[derive(Clone)]
pub struct ThemeManager {
    current_theme: Theme,
    applied: Option<Theme>,
}

impl ThemeManager {
    pub fn new(theme: Theme) -> Self {
        Self {
            current_theme: theme,
            applied: None,
        }
    }

    pub fn current(&self) -> Theme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.current_theme = theme;
    }

    pub fn apply_theme(&mut self, ctx: &egui::Context) {
        if self.applied == Some(self.current_theme) {
            return;
        }
        match self.current_theme {
            Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
            Theme::Light => ctx.set_visuals(egui::Visuals::light()),
        }
        self.applied = Some(self.current_theme);
    }
}
