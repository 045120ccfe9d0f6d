use crate::{config::Config, constants, ui};

pub fn run_app() -> Result<(), Box<dyn std::error::Error>> {
    // Logging
    env_logger::init();

    log::info!("Starting {}...", constants::APP_TITLE);

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {e}");
        Config::default()
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 420.0])
            .with_min_inner_size([480.0, 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        constants::APP_TITLE,
        native_options,
        Box::new(move |_cc| Ok(Box::new(ui::GradientApp::new(config)))),
    )?;

    Ok(())
}
