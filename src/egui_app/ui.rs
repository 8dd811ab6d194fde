//! egui renderer for the comparison page.

mod alert;
mod chrome;
mod input;
mod model_panel;
mod overlay_layers;
mod prompt_card;
mod style;
mod update;

use crate::config::AppSettings;
use crate::egui_app::controller::EguiController;
use crate::egui_app::state::PanelSlot;
use eframe::egui::{self, Frame, Margin, Vec2};
use std::time::Duration;

/// Minimum viewport size that keeps both result panels readable.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(720.0, 560.0);
/// Polling cadence for an in-flight prediction.
const LOADING_REPAINT_INTERVAL: Duration = Duration::from_millis(50);
const CONTENT_MAX_WIDTH: f32 = 1100.0;

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app from loaded settings.
    pub fn new(settings: &AppSettings) -> Self {
        Self::with_controller(EguiController::new(settings.api.clone()))
    }

    pub fn with_controller(controller: EguiController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::light();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_ui(&mut self, ctx: &egui::Context) {
        self.render_top_bar(ctx);
        let palette = style::palette();
        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(palette.bg_page)
                    .inner_margin(Margin::symmetric(24, 20)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("page_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.set_max_width(ui.available_width().min(CONTENT_MAX_WIDTH));
                        self.render_page_header(ui);
                        ui.add_space(16.0);
                        self.render_prompt_card(ctx, ui);
                        ui.add_space(24.0);
                        self.render_results(ui);
                    });
            });
        self.render_alert(ctx);
    }

    fn render_results(&mut self, ui: &mut egui::Ui) {
        let Some((enhanced, baseline)) = self.controller.ui.results() else {
            return;
        };
        let panels = &self.controller.ui.panels;
        let mut toggled = None;
        ui.columns(2, |columns| {
            for (column, slot) in columns.iter_mut().zip(PanelSlot::ORDER) {
                let result = match slot {
                    PanelSlot::Enhanced => enhanced,
                    PanelSlot::Baseline => baseline,
                };
                let actions =
                    model_panel::render_model_panel(column, slot, result, panels.get(slot));
                if actions.toggle_details {
                    toggled = Some(slot);
                }
            }
        });
        if let Some(slot) = toggled {
            self.controller.toggle_score_details(slot);
        }
    }
}
