use eframe::egui::{self, Color32, Pos2, Rect};

use crate::config::EditorConfig;
use crate::host::{GradientHost, PointerState};
use crate::interaction::{self, InteractionState};
use crate::model::GradientState;

/// `GradientHost` backed by an egui `Ui`.
pub struct EguiHost<'a> {
    ui: &'a egui::Ui,
    painter: egui::Painter,
    pointer: PointerState,
}

impl<'a> EguiHost<'a> {
    pub fn new(ui: &'a egui::Ui, clip: Rect) -> Self {
        let pointer = ui.input(|i| PointerState {
            pos: i.pointer.latest_pos(),
            delta: i.pointer.delta(),
            primary_down: i.pointer.primary_down(),
            primary_pressed: i.pointer.primary_pressed(),
        });

        Self {
            ui,
            painter: ui.painter_at(clip),
            pointer,
        }
    }
}

impl GradientHost for EguiHost<'_> {
    fn pointer(&self) -> PointerState {
        self.pointer
    }

    fn is_hovered(&self, rect: Rect) -> bool {
        self.ui.rect_contains_pointer(rect)
    }

    fn fill_triangle(&mut self, points: [Pos2; 3], color: Color32) {
        self.painter.add(egui::Shape::convex_polygon(
            points.to_vec(),
            color,
            egui::Stroke::NONE,
        ));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.painter.rect_filled(rect, 0.0, color);
    }

    fn fill_rect_horizontal_gradient(&mut self, rect: Rect, left: Color32, right: Color32) {
        let mut mesh = egui::Mesh::default();
        mesh.colored_vertex(rect.left_top(), left);
        mesh.colored_vertex(rect.right_top(), right);
        mesh.colored_vertex(rect.right_bottom(), right);
        mesh.colored_vertex(rect.left_bottom(), left);
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        self.painter.add(egui::Shape::mesh(mesh));
    }
}

/// HDR gradient editor: alpha handles above a gradient bar, color handles
/// below it.
///
/// ```ignore
/// ui.add(GradientEditor::new("fire", &mut gradient, &mut interaction));
/// ```
///
/// The response is marked changed when a marker moved or was added.
pub struct GradientEditor<'a> {
    id_salt: egui::Id,
    gradient: &'a mut GradientState,
    interaction: &'a mut InteractionState,
    config: EditorConfig,
}

impl<'a> GradientEditor<'a> {
    pub fn new(
        id_salt: impl std::hash::Hash,
        gradient: &'a mut GradientState,
        interaction: &'a mut InteractionState,
    ) -> Self {
        Self {
            id_salt: egui::Id::new(id_salt),
            gradient,
            interaction,
            config: EditorConfig::default(),
        }
    }

    pub fn config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }
}

impl egui::Widget for GradientEditor<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let Self {
            id_salt,
            gradient,
            interaction,
            config,
        } = self;

        ui.push_id(id_salt, |ui| {
            let size = egui::vec2(ui.available_width(), config.height());
            let (rect, mut response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
            let layout = config.layout(rect);

            let mut host = EguiHost::new(ui, rect);
            if interaction::update_gradient(&mut host, gradient, interaction, &layout) {
                response.mark_changed();
            }
            response
        })
        .inner
    }
}
