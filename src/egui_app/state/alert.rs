/// Message shown when a prediction fails for any reason.
pub const PREDICTION_FAILED_MESSAGE: &str =
    "Backend server error. Ensure the inference service is running.";

/// Blocking modal notification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertState {
    /// Message awaiting acknowledgement, if any.
    pub message: Option<String>,
}

impl AlertState {
    pub fn raise(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }
}
