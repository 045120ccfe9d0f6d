use eframe::egui;

use super::gradient_editor::GradientEditor;
use super::marker_inspector::MarkerInspector;
use super::theme::ThemeManager;
use crate::color;
use crate::config::{Config, Theme};
use crate::constants::INSPECTOR_WIDTH;
use crate::interaction::InteractionState;
use crate::model::GradientState;

struct GradientEntry {
    name: String,
    gradient: GradientState,
    interaction: InteractionState,
}

impl GradientEntry {
    fn new(name: impl Into<String>, gradient: GradientState) -> Self {
        Self {
            name: name.into(),
            gradient,
            interaction: InteractionState::new(),
        }
    }
}

pub struct GradientApp {
    entries: Vec<GradientEntry>,
    focused: usize,
    probe: f32,
    config: Config,
    theme_manager: ThemeManager,
}

fn fire_gradient() -> GradientState {
    let mut gradient = GradientState::new();
    gradient.add_color_marker(0.0, [1.0, 0.1, 0.0], 1.0);
    gradient.add_color_marker(0.5, [1.0, 0.6, 0.1], 2.5);
    gradient.add_color_marker(1.0, [1.0, 1.0, 0.8], 4.0);
    gradient.add_alpha_marker(0.0, 0.0);
    gradient.add_alpha_marker(0.2, 1.0);
    gradient.add_alpha_marker(1.0, 1.0);
    gradient
}

fn fade_gradient() -> GradientState {
    let mut gradient = GradientState::new();
    gradient.add_color_marker(0.0, [0.2, 0.4, 1.0], 1.0);
    gradient.add_alpha_marker(0.0, 1.0);
    gradient.add_alpha_marker(1.0, 0.0);
    gradient
}

impl GradientApp {
    pub fn new(config: Config) -> Self {
        let theme_manager = ThemeManager::new(config.ui.theme);
        Self {
            entries: vec![
                GradientEntry::new("Fire", fire_gradient()),
                GradientEntry::new("Fade", fade_gradient()),
            ],
            focused: 0,
            probe: 0.5,
            config,
            theme_manager,
        }
    }

    fn save_config(&self) {
        if let Err(e) = self.config.save() {
            log::warn!("Failed to save config: {e}");
        }
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut theme = self.theme_manager.current();
                ui.selectable_value(&mut theme, Theme::Dark, "Dark");
                ui.selectable_value(&mut theme, Theme::Light, "Light");
                if theme != self.theme_manager.current() {
                    self.theme_manager.set_theme(theme);
                    self.config.ui.theme = theme;
                    self.save_config();
                }

                ui.separator();

                if ui
                    .checkbox(&mut self.config.ui.show_inspector, "Inspector")
                    .changed()
                {
                    self.save_config();
                }

                ui.separator();

                if ui.button("New gradient").clicked() {
                    let name = format!("Gradient {}", self.entries.len() + 1);
                    self.entries.push(GradientEntry::new(name, GradientState::white()));
                }
                if ui.button("Reset").clicked()
                    && let Some(entry) = self.entries.get_mut(self.focused)
                {
                    entry.gradient = GradientState::white();
                    entry.interaction = InteractionState::new();
                }
                if ui.button("Clear").clicked()
                    && let Some(entry) = self.entries.get_mut(self.focused)
                {
                    entry.gradient.clear();
                    entry.interaction = InteractionState::new();
                }
            });
        });
    }

    fn show_inspector(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("inspector")
            .default_width(INSPECTOR_WIDTH)
            .show(ctx, |ui| {
                let Some(entry) = self.entries.get_mut(self.focused) else {
                    return;
                };

                ui.heading(&entry.name);
                ui.separator();
                MarkerInspector::show(ui, &mut entry.gradient, &mut entry.interaction);

                ui.separator();
                ui.add(egui::Slider::new(&mut self.probe, 0.0..=1.0).text("Probe"));
                let [r, g, b, a] = entry.gradient.evaluate_combined(self.probe);
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(24.0, 16.0), egui::Sense::hover());
                    ui.painter()
                        .rect_filled(rect, 2.0, color::to_color32([r, g, b, a]));
                    ui.monospace(format!("{r:.3} {g:.3} {b:.3} {a:.3}"));
                });

                ui.separator();
                ui.label(format!(
                    "Color markers: {}/{}",
                    entry.gradient.color_count(),
                    entry.gradient.colors().capacity()
                ));
                ui.label(format!(
                    "Alpha markers: {}/{}",
                    entry.gradient.alpha_count(),
                    entry.gradient.alphas().capacity()
                ));
            });
    }

    fn show_editors(&mut self, ctx: &egui::Context) {
        let editor_config = self.config.editor;
        let mut focused = self.focused;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                for (index, entry) in self.entries.iter_mut().enumerate() {
                    ui.label(&entry.name);

                    let before = entry.interaction.selected();
                    ui.add(
                        GradientEditor::new(index, &mut entry.gradient, &mut entry.interaction)
                            .config(editor_config),
                    );
                    let after = entry.interaction.selected();
                    if after.is_some() && after != before {
                        focused = index;
                    }

                    ui.add_space(12.0);
                }
            });
        });

        if focused != self.focused {
            // one selection across all editors
            for (index, entry) in self.entries.iter_mut().enumerate() {
                if index != focused {
                    entry.interaction.clear_selection();
                }
            }
            self.focused = focused;
        }
    }

    fn handle_global_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let delete = ctx.input(|i| {
            i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace)
        });
        if delete
            && let Some(entry) = self.entries.get_mut(self.focused)
            && entry.interaction.remove_selected(&mut entry.gradient)
        {
            log::debug!("removed selected marker from {}", entry.name);
        }
    }
}

impl eframe::App for GradientApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme
        self.theme_manager.apply_theme(ctx);

        self.show_top_bar(ctx);

        if self.config.ui.show_inspector {
            self.show_inspector(ctx);
        }

        self.show_editors(ctx);

        // Handle global shortcuts
        self.handle_global_shortcuts(ctx);
    }
}
