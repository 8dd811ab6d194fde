//! Shared state types for the egui UI.

mod alert;
mod input;
mod panels;

pub use alert::*;
pub use input::*;
pub use panels::*;

use crate::predict::ModelResult;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub input: PredictionInputState,
    /// Latest baseline model result; replaced together with `enhanced`.
    pub baseline: Option<ModelResult>,
    /// Latest graph-enhanced model result.
    pub enhanced: Option<ModelResult>,
    pub panels: ResultPanelsState,
    /// Blocking notification raised by a failed prediction.
    pub alert: AlertState,
}

impl UiState {
    /// Both results, once a prediction has succeeded at least once.
    pub fn results(&self) -> Option<(&ModelResult, &ModelResult)> {
        match (&self.enhanced, &self.baseline) {
            (Some(enhanced), Some(baseline)) => Some((enhanced, baseline)),
            _ => None,
        }
    }
}
