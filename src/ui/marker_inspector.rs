use egui::Ui;

use crate::interaction::InteractionState;
use crate::model::{Channel, GradientState};

pub struct MarkerInspector;

impl MarkerInspector {
    /// Edits the selected marker in place, returns true if the gradient changed.
    ///
    /// Only fields the user touched this frame are written back; values
    /// outside the widget ranges are shown as-is and left alone.
    pub fn show(
        ui: &mut Ui,
        gradient: &mut GradientState,
        interaction: &mut InteractionState,
    ) -> bool {
        let Some(selected) = interaction.selected() else {
            ui.weak("Click a marker to edit it, or click an empty track to add one.");
            return false;
        };

        let mut changed = false;
        let mut position = None;

        match selected.channel {
            Channel::Color => {
                let Some(marker) = gradient.colors().get_by_id(selected.id).copied() else {
                    return false;
                };
                let mut edited = marker;

                ui.label("Color marker");
                if position_slider(ui, &mut edited.position) {
                    position = Some(edited.position);
                }
                let color_changed = ui
                    .horizontal(|ui| {
                        ui.label("Color");
                        ui.color_edit_button_rgb(&mut edited.color).changed()
                    })
                    .inner;
                let intensity_changed = ui
                    .horizontal(|ui| {
                        ui.label("Intensity");
                        ui.add(
                            egui::DragValue::new(&mut edited.intensity)
                                .speed(0.01)
                                .range(0.0..=64.0)
                                .clamp_existing_to_range(false),
                        )
                        .changed()
                    })
                    .inner;

                if (color_changed || intensity_changed)
                    && let Some(target) = gradient.colors_mut().get_by_id_mut(selected.id)
                {
                    if color_changed {
                        target.color = edited.color;
                    }
                    if intensity_changed {
                        target.intensity = edited.intensity;
                    }
                    changed = true;
                }
            }
            Channel::Alpha => {
                let Some(marker) = gradient.alphas().get_by_id(selected.id).copied() else {
                    return false;
                };
                let mut edited = marker;

                ui.label("Alpha marker");
                if position_slider(ui, &mut edited.position) {
                    position = Some(edited.position);
                }
                let alpha_changed = ui
                    .add(
                        egui::Slider::new(&mut edited.alpha, 0.0..=1.0)
                            .clamping(egui::SliderClamping::Edits)
                            .text("Alpha"),
                    )
                    .changed();

                if alpha_changed
                    && let Some(target) = gradient.alphas_mut().get_by_id_mut(selected.id)
                {
                    target.alpha = edited.alpha;
                    changed = true;
                }
            }
        }

        if let Some(position) = position {
            changed |= gradient.set_marker_position(selected.channel, selected.id, position);
        }

        ui.separator();
        ui.label(format!(
            "{} markers: {}",
            selected.channel,
            gradient.marker_count(selected.channel)
        ));
        if ui.button("Remove marker").clicked() {
            changed |= interaction.remove_selected(gradient);
        }

        changed
    }
}

fn position_slider(ui: &mut Ui, position: &mut f32) -> bool {
    ui.add(egui::Slider::new(position, 0.0..=1.0).text("Position"))
        .changed()
}
