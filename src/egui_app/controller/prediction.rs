use super::jobs::{PredictionJob, PredictionResult, prediction_span};
use super::*;
use crate::predict::PredictRequest;

impl EguiController {
    /// Send the current text for prediction.
    ///
    /// Whitespace-only text is ignored. A request already in flight or an
    /// unacknowledged alert blocks new submissions from every entry point.
    pub fn submit_prediction(&mut self) {
        if !self.ui.input.has_text() {
            return;
        }
        if self.ui.alert.is_open() {
            tracing::debug!("Alert awaiting acknowledgement; ignoring submit");
            return;
        }
        if self.ui.input.loading {
            tracing::debug!("Prediction already in flight; ignoring submit");
            return;
        }
        let request = PredictRequest {
            text: self.ui.input.text.clone(),
        };
        let chars = request.text.chars().count();
        let started = self.jobs.begin_prediction(PredictionJob {
            endpoint: self.api.endpoint.clone(),
            request,
            max_response_bytes: self.api.max_response_bytes,
        });
        if let Some(request_id) = started {
            prediction_span(request_id, &self.api.endpoint)
                .in_scope(|| tracing::info!(chars, "Prediction submitted"));
            self.ui.input.loading = true;
        }
    }

    pub(super) fn apply_prediction_result(&mut self, message: PredictionResult) {
        let span = prediction_span(message.request_id, &self.api.endpoint);
        let _entered = span.enter();
        if self.jobs.pending_prediction() != Some(message.request_id) {
            tracing::warn!("Dropping outcome of a prediction that is no longer pending");
            return;
        }
        self.jobs.clear_prediction();
        match message.result {
            Ok(response) => {
                tracing::info!(
                    baseline = response.baseline.predicted.len(),
                    coteg = response.coteg.predicted.len(),
                    "Prediction finished"
                );
                self.ui.baseline = Some(response.baseline);
                self.ui.enhanced = Some(response.coteg);
            }
            Err(err) => {
                tracing::error!("Prediction failed: {err}");
                self.ui.alert.raise(PREDICTION_FAILED_MESSAGE);
            }
        }
        self.ui.input.loading = false;
    }
}
