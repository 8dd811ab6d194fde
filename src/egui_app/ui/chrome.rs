use super::style;
use super::*;
use eframe::egui::{Frame, Margin, RichText};

const PRODUCT_NAME: &str = "CoTEG";
const PRODUCT_SUBTITLE: &str =
    "A Hybrid T-GCN Model for Multi-Label Emotion Detection with Emotion Correlation Modeling";
const PAGE_PROMPT: &str = "Enter a complex emotion-laden sentence";
const EXAMPLE_SENTENCE: &str = "I received the acceptance letter for the job abroad today! \
I am over the moon, but realized I have to say goodbye to my parents next week, and it's crushing me.";

impl EguiApp {
    pub(super) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.navbar_fill)
                    .inner_margin(Margin::symmetric(16, 12)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(PRODUCT_NAME)
                            .strong()
                            .size(22.0)
                            .color(egui::Color32::WHITE),
                    );
                    ui.label(
                        RichText::new(PRODUCT_SUBTITLE)
                            .size(15.0)
                            .color(palette.navbar_subtitle),
                    );
                });
            });
    }

    pub(super) fn render_page_header(&self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(PAGE_PROMPT).strong().size(22.0));
            ui.add_space(4.0);
            ui.label(RichText::new(format!("(e.g., \"{EXAMPLE_SENTENCE}\")")).color(palette.text_muted));
        });
    }
}
