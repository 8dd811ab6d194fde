/// Identifies one of the two side-by-side result panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelSlot {
    /// Graph-enhanced model, always emphasized.
    Enhanced,
    Baseline,
}

impl PanelSlot {
    /// Display order, left to right.
    pub const ORDER: [PanelSlot; 2] = [Self::Enhanced, Self::Baseline];

    pub fn model_name(self) -> &'static str {
        match self {
            Self::Enhanced => "CoTEG (Graph Enhanced)",
            Self::Baseline => "Baseline (RoBERTa)",
        }
    }

    pub fn theme(self) -> PanelTheme {
        match self {
            Self::Enhanced => PanelTheme::Green,
            Self::Baseline => PanelTheme::Blue,
        }
    }

    pub fn highlighted(self) -> bool {
        matches!(self, Self::Enhanced)
    }
}

/// Accent color family for a result panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelTheme {
    Blue,
    Green,
}

/// Per-panel toggles that survive new predictions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelPanelState {
    /// Expanded score list; collapsed by default.
    pub show_all_scores: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultPanelsState {
    pub enhanced: ModelPanelState,
    pub baseline: ModelPanelState,
}

impl ResultPanelsState {
    pub fn get(&self, slot: PanelSlot) -> &ModelPanelState {
        match slot {
            PanelSlot::Enhanced => &self.enhanced,
            PanelSlot::Baseline => &self.baseline,
        }
    }

    pub fn get_mut(&mut self, slot: PanelSlot) -> &mut ModelPanelState {
        match slot {
            PanelSlot::Enhanced => &mut self.enhanced,
            PanelSlot::Baseline => &mut self.baseline,
        }
    }
}

/// One formatted summary metric.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricRowView {
    pub label: &'static str,
    pub value_text: String,
    /// Emphasis only; never affects `value_text`.
    pub highlight: bool,
}

/// One row of the detailed score list.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreRowView {
    pub label: &'static str,
    pub display_label: String,
    pub score: f64,
    pub score_text: String,
    pub threshold_text: String,
    /// Bar fill in `0.0..=1.0`.
    pub fill: f32,
    pub predicted: bool,
}
