mod app;
mod gradient_editor;
mod marker_inspector;
mod theme;

pub use app::GradientApp;
pub use gradient_editor::{EguiHost, GradientEditor};
pub use marker_inspector::MarkerInspector;
pub use theme::ThemeManager;
