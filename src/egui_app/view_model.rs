//! Helpers to convert prediction results into egui-facing view structs.

use crate::egui_app::state::{MetricRowView, ScoreRowView};
use crate::predict::{GO_EMOTIONS, MetricKind, Metrics, ModelResult};

/// Collapsed score lists hide unpredicted rows scoring below this.
pub const COLLAPSED_SCORE_FLOOR: f64 = 0.05;

/// Format a metric as a raw 4-decimal loss or a 1-decimal percentage.
pub fn format_metric(value: f64, is_loss: bool) -> String {
    if is_loss {
        format!("{value:.4}")
    } else {
        format!("{:.1}%", value * 100.0)
    }
}

/// Build one metric row, or `None` when the value is missing or not a number.
pub fn metric_row(
    label: &'static str,
    value: Option<f64>,
    highlight: bool,
    is_loss: bool,
) -> Option<MetricRowView> {
    let value = value?;
    Some(MetricRowView {
        label,
        value_text: format_metric(value, is_loss),
        highlight: highlight && !is_loss,
    })
}

/// Summary rows in display order; only Macro F1 inherits the panel highlight.
pub fn metric_rows(metrics: &Metrics, panel_highlight: bool) -> Vec<MetricRowView> {
    MetricKind::ALL
        .iter()
        .filter_map(|&kind| {
            let highlight = panel_highlight && kind == MetricKind::MacroF1;
            metric_row(kind.label(), metrics.value(kind), highlight, kind.is_loss())
        })
        .collect()
}

/// Vocabulary ordered by descending score; ties keep vocabulary order.
pub fn sorted_labels(result: &ModelResult) -> Vec<&'static str> {
    let mut labels = GO_EMOTIONS.to_vec();
    labels.sort_by(|a, b| result.score(b).total_cmp(&result.score(a)));
    labels
}

/// Rows for the detailed score list.
///
/// Collapsed lists keep rows that are predicted or score at least
/// [`COLLAPSED_SCORE_FLOOR`]. Returns nothing when the result carries no
/// scores at all.
pub fn score_rows(result: &ModelResult, show_all: bool) -> Vec<ScoreRowView> {
    if result.scores.is_none() {
        return Vec::new();
    }
    sorted_labels(result)
        .into_iter()
        .filter_map(|label| {
            let score = result.score(label);
            let predicted = result.is_predicted(label);
            if !show_all && !predicted && score < COLLAPSED_SCORE_FLOOR {
                return None;
            }
            Some(ScoreRowView {
                label,
                display_label: display_label(label),
                score,
                score_text: format!("{score:.4}"),
                threshold_text: format!("{:.2}", result.threshold(label)),
                fill: score.clamp(0.0, 1.0) as f32,
                predicted,
            })
        })
        .collect()
}

/// Capitalize the first character of a label for display.
pub fn display_label(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Badge captions for the predicted labels, in server order.
pub fn prediction_badges(result: &ModelResult) -> Vec<String> {
    result
        .predicted
        .iter()
        .map(|label| display_label(label))
        .collect()
}
