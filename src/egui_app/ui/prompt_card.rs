use super::input::take_plain_enter;
use super::style;
use super::*;
use eframe::egui::{Frame, Margin, RichText};

const INPUT_HINT: &str = "Type a complex sentence...";
const INPUT_ROWS: usize = 4;
const CARD_MAX_WIDTH: f32 = 760.0;

impl EguiApp {
    pub(super) fn render_prompt_card(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let palette = style::palette();
        let width = ui.available_width().min(CARD_MAX_WIDTH);
        let inset = (ui.available_width() - width) / 2.0;
        ui.horizontal(|ui| {
            ui.add_space(inset.max(0.0));
            Frame::new()
                .fill(palette.bg_card)
                .stroke(style::card_stroke())
                .corner_radius(egui::CornerRadius::same(16))
                .inner_margin(Margin::same(20))
                .show(ui, |ui| {
                    ui.set_width(width - 40.0);
                    self.render_prompt_input(ctx, ui);
                    ui.add_space(12.0);
                    self.render_submit_button(ui);
                });
        });
    }

    fn render_prompt_input(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let input_id = ui.make_persistent_id("prediction_input");
        // Keys go to the alert while it is up.
        let interactive = !self.controller.alert_open();
        let focused = ctx.memory(|m| m.has_focus(input_id));
        let submit = interactive && focused && take_plain_enter(ctx);
        let mut text = self.controller.input_text().to_string();
        let response = ui.add_enabled(
            interactive,
            egui::TextEdit::multiline(&mut text)
                .id(input_id)
                .hint_text(INPUT_HINT)
                .desired_rows(INPUT_ROWS)
                .desired_width(f32::INFINITY)
                .margin(Margin::same(12)),
        );
        if response.changed() {
            self.controller.set_input_text(text);
        }
        if submit {
            self.controller.submit_prediction();
        }
    }

    fn render_submit_button(&mut self, ui: &mut egui::Ui) {
        let enabled = self.controller.can_submit();
        let caption = if self.controller.is_loading() {
            "Analyzing..."
        } else {
            "Run Comparison"
        };
        let button = egui::Button::new(
            RichText::new(caption)
                .strong()
                .color(egui::Color32::WHITE),
        )
        .fill(style::primary_button_fill(enabled))
        .min_size(egui::vec2(ui.available_width(), 40.0));
        if ui.add_enabled(enabled, button).clicked() {
            self.controller.submit_prediction();
        }
    }
}
