use super::style;
use crate::egui_app::state::{MetricRowView, ModelPanelState, PanelSlot, ScoreRowView};
use crate::egui_app::view_model;
use crate::predict::ModelResult;
use eframe::egui::{self, CornerRadius, Frame, Margin, RichText, Stroke};

/// Collapsed score lists scroll past this height.
const COLLAPSED_LIST_MAX_HEIGHT: f32 = 256.0;
const SCORE_BAR_HEIGHT: f32 = 6.0;

/// Things the user asked for while the panel was drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) struct PanelActions {
    pub toggle_details: bool,
}

/// Draw one model's result card.
pub(super) fn render_model_panel(
    ui: &mut egui::Ui,
    slot: PanelSlot,
    result: &ModelResult,
    panel: &ModelPanelState,
) -> PanelActions {
    let palette = style::palette();
    let colors = style::theme_colors(slot.theme());
    let mut actions = PanelActions::default();
    Frame::new()
        .fill(palette.bg_card)
        .stroke(Stroke::new(1.0, colors.border))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::same(0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            render_header(ui, slot);
            Frame::new()
                .inner_margin(Margin::symmetric(16, 12))
                .show(ui, |ui| {
                    render_metrics(ui, slot, result);
                    ui.add_space(12.0);
                    render_badges(ui, slot, result);
                    ui.add_space(12.0);
                    if render_details(ui, slot, result, panel) {
                        actions.toggle_details = true;
                    }
                });
        });
    actions
}

fn render_header(ui: &mut egui::Ui, slot: PanelSlot) {
    let colors = style::theme_colors(slot.theme());
    Frame::new()
        .fill(colors.header_fill)
        .inner_margin(Margin::symmetric(16, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(slot.model_name())
                        .strong()
                        .size(16.0)
                        .color(colors.header_text),
                );
                if slot.highlighted() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        badge(ui, "Recommended", colors.bar, egui::Color32::WHITE);
                    });
                }
            });
        });
}

fn render_metrics(ui: &mut egui::Ui, slot: PanelSlot, result: &ModelResult) {
    let palette = style::palette();
    let Some(metrics) = result.displayed_metrics() else {
        ui.label(
            RichText::new("Metrics not loaded")
                .italics()
                .color(palette.text_muted),
        );
        return;
    };
    let rows = view_model::metric_rows(metrics, slot.highlighted());
    egui::Grid::new(("metrics_grid", slot.model_name()))
        .num_columns(2)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            for row in rows {
                render_metric_row(ui, &row);
                ui.end_row();
            }
        });
}

fn render_metric_row(ui: &mut egui::Ui, row: &MetricRowView) {
    let palette = style::palette();
    ui.label(
        RichText::new(row.label.to_uppercase())
            .small()
            .color(palette.text_muted),
    );
    let mut value = RichText::new(&row.value_text)
        .monospace()
        .color(style::metric_value_color(row.highlight));
    if row.highlight {
        value = value.strong();
    }
    ui.label(value);
}

fn render_badges(ui: &mut egui::Ui, slot: PanelSlot, result: &ModelResult) {
    let palette = style::palette();
    let colors = style::theme_colors(slot.theme());
    ui.label(RichText::new("Final Prediction").strong());
    ui.add_space(4.0);
    let badges = view_model::prediction_badges(result);
    if badges.is_empty() {
        ui.label(
            RichText::new("No strong emotions detected")
                .italics()
                .color(palette.text_muted),
        );
        return;
    }
    ui.horizontal_wrapped(|ui| {
        for caption in &badges {
            badge(ui, caption, colors.badge_fill, colors.badge_text);
        }
    });
}

/// Returns true when the details toggle was clicked.
fn render_details(
    ui: &mut egui::Ui,
    slot: PanelSlot,
    result: &ModelResult,
    panel: &ModelPanelState,
) -> bool {
    let mut toggled = false;
    ui.horizontal(|ui| {
        ui.label(RichText::new("Detailed Analysis").strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let caption = if panel.show_all_scores {
                "Hide details"
            } else {
                "Show all"
            };
            if ui.small_button(caption).clicked() {
                toggled = true;
            }
        });
    });
    ui.add_space(6.0);
    let rows = view_model::score_rows(result, panel.show_all_scores);
    if rows.is_empty() {
        return toggled;
    }
    if panel.show_all_scores {
        for row in &rows {
            render_score_row(ui, slot, row);
        }
    } else {
        egui::ScrollArea::vertical()
            .id_salt(("score_rows", slot.model_name()))
            .max_height(COLLAPSED_LIST_MAX_HEIGHT)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for row in &rows {
                    render_score_row(ui, slot, row);
                }
            });
    }
    toggled
}

fn render_score_row(ui: &mut egui::Ui, slot: PanelSlot, row: &ScoreRowView) {
    let palette = style::palette();
    ui.horizontal(|ui| {
        let mut label = RichText::new(&row.display_label);
        if row.predicted {
            label = label.strong();
        } else {
            label = label.color(palette.text_muted);
        }
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!("Thr: {}", row.threshold_text))
                    .small()
                    .color(palette.text_muted),
            );
            ui.label(RichText::new(&row.score_text).monospace());
        });
    });
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), SCORE_BAR_HEIGHT),
        egui::Sense::hover(),
    );
    let painter = ui.painter();
    painter.rect_filled(rect, SCORE_BAR_HEIGHT / 2.0, palette.bg_track);
    if row.fill > 0.0 {
        let mut filled = rect;
        filled.set_width(rect.width() * row.fill);
        painter.rect_filled(
            filled,
            SCORE_BAR_HEIGHT / 2.0,
            style::score_bar_color(slot.theme(), row.predicted),
        );
    }
    ui.add_space(6.0);
}

fn badge(ui: &mut egui::Ui, caption: &str, fill: egui::Color32, text: egui::Color32) {
    Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::symmetric(10, 3))
        .show(ui, |ui| {
            ui.label(RichText::new(caption).small().strong().color(text));
        });
}
