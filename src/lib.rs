//! Interactive HDR gradient editing for egui: two independently ordered marker
//! channels (color with intensity, and alpha), piecewise-linear evaluation and
//! an immediate-mode editor widget.

pub mod color;
pub mod config;
pub mod constants;
pub mod entry;
pub mod error;
pub mod host;
pub mod interaction;
pub mod interpolation;
pub mod model;
pub mod paths;
pub mod render;
pub mod ui;

pub use error::{GradientError, Result};
pub use host::{GradientHost, PointerState};
pub use interaction::{InteractionState, MarkerRef};
pub use interpolation::ColorSample;
pub use model::{AlphaMarker, Channel, ColorMarker, GradientState, MarkerId};
pub use ui::GradientEditor;
