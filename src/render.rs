use eframe::egui::{Color32, Pos2, Rect, Vec2, pos2, vec2};

use crate::color;
use crate::constants::{
    BAR_BORDER, COLOR_BAR_BORDER, COLOR_CHECKER_DARK, COLOR_CHECKER_LIGHT,
    COLOR_MARKER_OUTLINE, COLOR_MARKER_OUTLINE_SELECTED, MARKER_OUTLINE_INSET,
};
use crate::host::GradientHost;
use crate::model::{AlphaMarker, ColorMarker, GradientState, Positioned};

/// Which way a handle's tip points. Alpha handles sit above the bar and point
/// down at it, color handles sit below and point up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerDirection {
    Down,
    Up,
}

/// A marker kind that can be drawn as a handle.
pub trait HandleMarker: Positioned + Copy {
    fn handle_color(&self) -> Color32;
}

impl HandleMarker for ColorMarker {
    fn handle_color(&self) -> Color32 {
        color::opaque(self.color)
    }
}

impl HandleMarker for AlphaMarker {
    fn handle_color(&self) -> Color32 {
        color::opaque([self.alpha; 3])
    }
}

/// Geometry of one row of handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerRow {
    pub origin: Pos2,
    /// Pixel width of the track the [0, 1] axis maps onto.
    pub width: f32,
    pub marker_size: Vec2,
    pub direction: MarkerDirection,
}

impl MarkerRow {
    pub fn marker_x(&self, position: f32) -> f32 {
        self.origin.x + (position * self.width).trunc()
    }

    pub fn handle_rect(&self, position: f32) -> Rect {
        let x = self.marker_x(position);
        Rect::from_min_size(
            pos2(x - self.marker_size.x / 2.0, self.origin.y),
            self.marker_size,
        )
    }

    pub fn track_rect(&self) -> Rect {
        Rect::from_min_size(self.origin, vec2(self.width, self.marker_size.y))
    }

    pub fn position_at(&self, x: f32) -> f32 {
        (x - self.origin.x) / self.width
    }
}

/// Overall widget geometry: alpha row, bar, color row from top to bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientLayout {
    pub origin: Pos2,
    pub width: f32,
    pub bar_height: f32,
    pub marker_size: Vec2,
    pub checker_size: f32,
}

impl GradientLayout {
    pub fn alpha_row(&self) -> MarkerRow {
        MarkerRow {
            origin: self.origin,
            width: self.width,
            marker_size: self.marker_size,
            direction: MarkerDirection::Down,
        }
    }

    pub fn bar_rect(&self) -> Rect {
        Rect::from_min_size(
            self.origin + vec2(0.0, self.marker_size.y),
            vec2(self.width, self.bar_height),
        )
    }

    pub fn color_row(&self) -> MarkerRow {
        MarkerRow {
            origin: self.origin + vec2(0.0, self.marker_size.y + self.bar_height),
            width: self.width,
            marker_size: self.marker_size,
            direction: MarkerDirection::Up,
        }
    }

    pub fn height(&self) -> f32 {
        self.marker_size.y * 2.0 + self.bar_height
    }
}

pub fn draw_handle<H: GradientHost>(
    host: &mut H,
    rect: Rect,
    direction: MarkerDirection,
    fill: Color32,
    selected: bool,
) {
    let outline = color::to_color32(if selected {
        COLOR_MARKER_OUTLINE_SELECTED
    } else {
        COLOR_MARKER_OUTLINE
    });

    // sign points from the tip toward the body
    let (tip_y, base_y, sign) = match direction {
        MarkerDirection::Down => (rect.bottom(), rect.top(), -1.0),
        MarkerDirection::Up => (rect.top(), rect.bottom(), 1.0),
    };
    let mid_y = rect.center().y;
    let center_x = rect.center().x;
    let inset = MARKER_OUTLINE_INSET;

    host.fill_triangle(
        [
            pos2(center_x, tip_y),
            pos2(rect.left(), mid_y),
            pos2(rect.right(), mid_y),
        ],
        outline,
    );
    host.fill_rect(
        Rect::from_two_pos(pos2(rect.left(), mid_y), pos2(rect.right(), base_y)),
        outline,
    );

    host.fill_triangle(
        [
            pos2(center_x, tip_y + inset * sign),
            pos2(rect.left() + inset, mid_y),
            pos2(rect.right() - inset, mid_y),
        ],
        fill,
    );
    host.fill_rect(
        Rect::from_two_pos(
            pos2(rect.left() + inset, mid_y - sign),
            pos2(rect.right() - inset, base_y - inset * sign),
        ),
        fill,
    );
}

pub fn draw_checkerboard<H: GradientHost>(host: &mut H, rect: Rect, cell: f32) {
    let cell = cell.max(1.0);
    let mut row = 0usize;
    let mut y = rect.top();
    while y < rect.bottom() {
        let mut column = 0usize;
        let mut x = rect.left();
        while x < rect.right() {
            let tile = Rect::from_min_max(
                pos2(x, y),
                pos2((x + cell).min(rect.right()), (y + cell).min(rect.bottom())),
            );
            let fill = if (row + column) % 2 == 0 {
                COLOR_CHECKER_DARK
            } else {
                COLOR_CHECKER_LIGHT
            };
            host.fill_rect(tile, fill);
            x += cell;
            column += 1;
        }
        y += cell;
        row += 1;
    }
}

/// Border, checkerboard, then one horizontal gradient per segment between
/// consecutive stops, each end colored with the combined evaluation.
pub fn draw_bar<H: GradientHost>(host: &mut H, gradient: &GradientState, layout: &GradientLayout) {
    let bar = layout.bar_rect();
    host.fill_rect(bar.expand(BAR_BORDER), COLOR_BAR_BORDER);
    draw_checkerboard(host, bar, layout.checker_size);

    let stops = gradient.segment_stops();
    for pair in stops.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let left = color::to_color32(gradient.evaluate_combined(start));
        let right = color::to_color32(gradient.evaluate_combined(end));
        let segment = Rect::from_min_max(
            pos2(bar.left() + start * bar.width(), bar.top()),
            pos2(bar.left() + end * bar.width(), bar.bottom()),
        );
        host.fill_rect_horizontal_gradient(segment, left, right);
    }
}
