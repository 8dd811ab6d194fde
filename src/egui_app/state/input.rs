/// Text entry and request status for the prediction form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PredictionInputState {
    /// Sentence typed by the user, sent untrimmed.
    pub text: String,
    /// True while a prediction request is in flight.
    pub loading: bool,
}

impl PredictionInputState {
    /// Whether the text contains anything besides whitespace.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.has_text() && !self.loading
    }
}
