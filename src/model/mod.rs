pub mod gradient;
pub mod marker;
pub mod marker_list;

pub use gradient::GradientState;
pub use marker::{AlphaMarker, Channel, ColorMarker, MarkerId, Positioned, clamp_position};
pub use marker_list::MarkerList;
