use eframe::egui;
use log::{error, info};

use economia_egui::ui::EconomiaApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Economia egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 860.0])
            .with_min_inner_size([380.0, 640.0])
            .with_title("Economia")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Economia",
        options,
        Box::new(|cc| match EconomiaApp::new(cc) {
            Ok(app) => {
                info!("Successfully initialized Economia app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
