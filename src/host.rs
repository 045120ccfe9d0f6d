use eframe::egui::{Color32, Pos2, Rect, Vec2};

/// Pointer snapshot for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub pos: Option<Pos2>,
    /// Movement since the previous frame, in points.
    pub delta: Vec2,
    pub primary_down: bool,
    /// Primary button went down this frame.
    pub primary_pressed: bool,
}

impl PointerState {
    pub fn is_dragging(&self) -> bool {
        self.primary_down && self.delta != Vec2::ZERO
    }
}

/// What the gradient editor needs from the immediate-mode GUI it runs in:
/// input queries and a handful of fill primitives.
pub trait GradientHost {
    fn pointer(&self) -> PointerState;

    /// Whether the pointer is over `rect` and nothing else claims it.
    fn is_hovered(&self, rect: Rect) -> bool;

    fn fill_triangle(&mut self, points: [Pos2; 3], color: Color32);

    fn fill_rect(&mut self, rect: Rect, color: Color32);

    /// `left` along the left edge blending to `right` along the right edge.
    fn fill_rect_horizontal_gradient(&mut self, rect: Rect, left: Color32, right: Color32);
}
