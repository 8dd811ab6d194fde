use super::input::take_plain_enter;
use super::overlay_layers::modal_backdrop;
use super::style;
use super::*;
use eframe::egui::{Frame, Margin, RichText};

impl EguiApp {
    /// Blocking failure notice; the page stays inert until OK or a plain Enter.
    pub(super) fn render_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.controller.ui.alert.message.clone() else {
            return;
        };
        let palette = style::palette();
        modal_backdrop(ctx, "prediction_alert", palette.backdrop);
        let mut dismissed = false;
        egui::Window::new("prediction_alert_window")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .order(egui::Order::Tooltip)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .frame(
                Frame::window(&ctx.style())
                    .fill(palette.bg_card)
                    .inner_margin(Margin::same(20)),
            )
            .show(ctx, |ui| {
                ui.set_max_width(360.0);
                ui.label(RichText::new("Prediction failed").strong().color(palette.warning));
                ui.add_space(8.0);
                ui.label(message);
                ui.add_space(12.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });
        if dismissed || take_plain_enter(ctx) {
            self.controller.dismiss_alert();
        }
    }
}
