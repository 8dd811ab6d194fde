#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the CoTEG comparison UI.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use coteg::config;
use coteg::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use coteg::logging;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let settings = config::load_or_default();
    let maximized = settings
        .as_ref()
        .map(|settings| settings.window.maximized)
        .unwrap_or(false);

    let viewport = egui::ViewportBuilder::default()
        .with_title("CoTEG")
        .with_inner_size([1200.0, 860.0])
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_maximized(maximized);

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "CoTEG",
        native_options,
        Box::new(move |_cc| match settings {
            Ok(settings) => Ok(Box::new(EguiApp::new(&settings))),
            Err(err) => {
                tracing::error!("Failed to load config: {err}");
                Ok(Box::new(LaunchError {
                    message: format!("Failed to load config: {err}"),
                }))
            }
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
