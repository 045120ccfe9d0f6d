use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_MARKER_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a stored marker. Survives re-sorting, unlike its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(u64);

impl MarkerId {
    /// Process-wide and never zero; ids are not persisted.
    pub(crate) fn next() -> Self {
        MarkerId(NEXT_MARKER_ID.fetch_add(1, Ordering::Relaxed).max(1))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Color,
    Alpha,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Channel::Color => write!(f, "color"),
            Channel::Alpha => write!(f, "alpha"),
        }
    }
}

/// Anything placed on the normalized [0, 1] gradient axis.
pub trait Positioned {
    fn position(&self) -> f32;

    /// Writes are clamped to [0, 1].
    fn set_position(&mut self, position: f32);
}

pub fn clamp_position(position: f32) -> f32 {
    // NaN collapses to the start of the bar
    if position.is_nan() {
        0.0
    } else {
        position.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMarker {
    pub position: f32,
    /// Linear RGB, unbounded for HDR.
    pub color: [f32; 3],
    pub intensity: f32,
}

impl ColorMarker {
    pub fn new(position: f32, color: [f32; 3], intensity: f32) -> Self {
        Self {
            position: clamp_position(position),
            color,
            intensity,
        }
    }
}

impl Positioned for ColorMarker {
    fn position(&self) -> f32 {
        self.position
    }

    fn set_position(&mut self, position: f32) {
        self.position = clamp_position(position);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaMarker {
    pub position: f32,
    pub alpha: f32,
}

impl AlphaMarker {
    pub fn new(position: f32, alpha: f32) -> Self {
        Self {
            position: clamp_position(position),
            alpha,
        }
    }
}

impl Positioned for AlphaMarker {
    fn position(&self) -> f32 {
        self.position
    }

    fn set_position(&mut self, position: f32) {
        self.position = clamp_position(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase_and_skip_zero() {
        let a = MarkerId::next();
        let b = MarkerId::next();
        assert_ne!(a.raw(), 0);
        assert!(b > a);
    }

    #[test]
    fn constructors_clamp_position() {
        assert_eq!(ColorMarker::new(1.7, [1.0; 3], 1.0).position, 1.0);
        assert_eq!(AlphaMarker::new(-0.3, 1.0).position, 0.0);
        assert_eq!(AlphaMarker::new(f32::NAN, 1.0).position, 0.0);
    }

    #[test]
    fn set_position_clamps() {
        let mut marker = AlphaMarker::new(0.5, 0.2);
        marker.set_position(3.0);
        assert_eq!(marker.position(), 1.0);
        marker.set_position(0.25);
        assert_eq!(marker.position(), 0.25);
    }
}
