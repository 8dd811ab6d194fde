//! Per-model prediction payloads and the fixed label vocabulary.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer};

/// The 28 GoEmotions labels in their canonical order.
pub const GO_EMOTIONS: [&str; 28] = [
    "admiration",
    "amusement",
    "anger",
    "annoyance",
    "approval",
    "caring",
    "confusion",
    "curiosity",
    "desire",
    "disappointment",
    "disapproval",
    "disgust",
    "embarrassment",
    "excitement",
    "fear",
    "gratitude",
    "grief",
    "joy",
    "love",
    "nervousness",
    "optimism",
    "pride",
    "realization",
    "relief",
    "remorse",
    "sadness",
    "surprise",
    "neutral",
];

/// Threshold assumed for labels the server sent no threshold for.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// One model's output for a single input sentence.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ModelResult {
    /// Labels the server asserts, in server order.
    #[serde(default, deserialize_with = "deserialize_predicted")]
    pub predicted: Vec<String>,
    /// Confidence per label; `None` when the server omitted scores entirely.
    /// A `null` entry reads as zero.
    #[serde(default)]
    pub scores: Option<HashMap<String, Option<f64>>>,
    /// A `null` entry falls back to [`DEFAULT_THRESHOLD`].
    #[serde(default)]
    pub thresholds: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub metrics: Option<Metrics>,
}

impl ModelResult {
    /// Score for `label`, with absent labels scoring zero.
    pub fn score(&self, label: &str) -> f64 {
        self.scores
            .as_ref()
            .and_then(|scores| scores.get(label).copied().flatten())
            .unwrap_or(0.0)
    }

    /// Threshold for `label`, falling back to [`DEFAULT_THRESHOLD`].
    pub fn threshold(&self, label: &str) -> f64 {
        self.thresholds
            .get(label)
            .copied()
            .flatten()
            .unwrap_or(DEFAULT_THRESHOLD)
    }

    /// Whether the server listed `label` as predicted.
    ///
    /// This is list membership only; scores and thresholds are not consulted.
    pub fn is_predicted(&self, label: &str) -> bool {
        self.predicted.iter().any(|entry| entry == label)
    }

    /// Metrics to display, or `None` when absent or empty.
    pub fn displayed_metrics(&self) -> Option<&Metrics> {
        self.metrics.as_ref().filter(|metrics| !metrics.is_empty())
    }
}

/// Summary evaluation metrics as reported by the server.
///
/// Values stay raw JSON so a non-numeric entry can be hidden instead of
/// failing the whole response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Metrics(BTreeMap<String, serde_json::Value>);

impl Metrics {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric value for `kind`, or `None` when missing or not a number.
    pub fn value(&self, kind: MetricKind) -> Option<f64> {
        self.0.get(kind.key()).and_then(serde_json::Value::as_f64)
    }
}

impl FromIterator<(String, serde_json::Value)> for Metrics {
    fn from_iter<I: IntoIterator<Item = (String, serde_json::Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The four summary metrics shown in each panel, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricKind {
    MacroF1,
    WeightedF1,
    ExactAccuracy,
    HammingLoss,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [
        Self::MacroF1,
        Self::WeightedF1,
        Self::ExactAccuracy,
        Self::HammingLoss,
    ];

    /// Key used in the response payload.
    pub fn key(self) -> &'static str {
        match self {
            Self::MacroF1 => "macro_f1",
            Self::WeightedF1 => "weighted_f1",
            Self::ExactAccuracy => "exact_accuracy",
            Self::HammingLoss => "hamming_loss",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::MacroF1 => "Macro F1",
            Self::WeightedF1 => "Weighted F1",
            Self::ExactAccuracy => "Exact Acc",
            Self::HammingLoss => "Hamming",
        }
    }

    /// Losses are shown as raw decimals instead of percentages.
    pub fn is_loss(self) -> bool {
        matches!(self, Self::HammingLoss)
    }
}

/// The inference service has emitted predictions both as bare labels and as
/// `{"emotion", "score"}` objects; only the label is kept.
#[derive(Deserialize)]
#[serde(untagged)]
enum PredictedEntry {
    Label(String),
    Scored { emotion: String },
}

fn deserialize_predicted<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<PredictedEntry>>::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(|entry| match entry {
            PredictedEntry::Label(label) => label,
            PredictedEntry::Scored { emotion } => emotion,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> ModelResult {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn vocabulary_has_28_unique_labels() {
        let mut labels = GO_EMOTIONS.to_vec();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 28);
        assert_eq!(GO_EMOTIONS[17], "joy");
        assert_eq!(GO_EMOTIONS[27], "neutral");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let result = parse(json!({}));
        assert!(result.predicted.is_empty());
        assert!(result.scores.is_none());
        assert!(result.displayed_metrics().is_none());
        assert_eq!(result.score("joy"), 0.0);
        assert_eq!(result.threshold("joy"), DEFAULT_THRESHOLD);
    }

    #[test]
    fn lookups_use_server_values() {
        let result = parse(json!({
            "predicted": ["joy"],
            "scores": {"joy": 0.8, "fear": 0.1},
            "thresholds": {"joy": 0.35}
        }));
        assert_eq!(result.score("joy"), 0.8);
        assert_eq!(result.score("anger"), 0.0);
        assert_eq!(result.threshold("joy"), 0.35);
        assert_eq!(result.threshold("fear"), DEFAULT_THRESHOLD);
    }

    #[test]
    fn null_entries_fall_back_instead_of_failing() {
        let result = parse(json!({
            "scores": {"joy": null, "fear": 0.2},
            "thresholds": {"joy": null}
        }));
        assert!(result.scores.is_some());
        assert_eq!(result.score("joy"), 0.0);
        assert_eq!(result.score("fear"), 0.2);
        assert_eq!(result.threshold("joy"), DEFAULT_THRESHOLD);
    }

    #[test]
    fn predicted_membership_ignores_scores() {
        let result = parse(json!({
            "predicted": ["grief"],
            "scores": {"grief": 0.01, "joy": 0.99},
            "thresholds": {"joy": 0.5}
        }));
        assert!(result.is_predicted("grief"));
        assert!(!result.is_predicted("joy"));
    }

    #[test]
    fn predicted_accepts_scored_objects() {
        let result = parse(json!({
            "predicted": [
                {"emotion": "joy", "score": "85.00%"},
                "nervousness"
            ]
        }));
        assert_eq!(result.predicted, vec!["joy", "nervousness"]);
    }

    #[test]
    fn null_predicted_is_empty() {
        let result = parse(json!({"predicted": null}));
        assert!(result.predicted.is_empty());
    }

    #[test]
    fn empty_metrics_are_not_displayed() {
        let result = parse(json!({"metrics": {}}));
        assert!(result.metrics.is_some());
        assert!(result.displayed_metrics().is_none());
    }

    #[test]
    fn non_numeric_metric_values_are_hidden() {
        let result = parse(json!({
            "metrics": {"macro_f1": 0.7, "weighted_f1": "n/a", "exact_accuracy": null}
        }));
        let metrics = result.displayed_metrics().unwrap();
        assert_eq!(metrics.value(MetricKind::MacroF1), Some(0.7));
        assert_eq!(metrics.value(MetricKind::WeightedF1), None);
        assert_eq!(metrics.value(MetricKind::ExactAccuracy), None);
        assert_eq!(metrics.value(MetricKind::HammingLoss), None);
    }

    #[test]
    fn integer_metric_values_count_as_numbers() {
        let result = parse(json!({"metrics": {"hamming_loss": 0}}));
        let metrics = result.displayed_metrics().unwrap();
        assert_eq!(metrics.value(MetricKind::HammingLoss), Some(0.0));
    }

    #[test]
    fn only_hamming_is_a_loss() {
        let losses: Vec<_> = MetricKind::ALL
            .iter()
            .filter(|kind| kind.is_loss())
            .collect();
        assert_eq!(losses, vec![&MetricKind::HammingLoss]);
    }
}
