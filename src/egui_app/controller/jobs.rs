use crate::predict::{PredictError, PredictRequest, PredictResponse};
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
    time::Instant,
};

type TryRecvError = std::sync::mpsc::TryRecvError;

pub(crate) enum JobMessage {
    PredictionFinished(PredictionResult),
}

#[derive(Debug)]
pub(crate) struct PredictionJob {
    pub(crate) endpoint: String,
    pub(crate) request: PredictRequest,
    pub(crate) max_response_bytes: usize,
}

#[derive(Debug)]
pub(crate) struct PredictionResult {
    pub(crate) request_id: u64,
    pub(crate) result: Result<PredictResponse, PredictError>,
}

/// Span shared by every event about one prediction request.
pub(super) fn prediction_span(request_id: u64, endpoint: &str) -> tracing::Span {
    tracing::info_span!("prediction", request_id, endpoint)
}

pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    pending_prediction: Option<u64>,
    next_request_id: u64,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            pending_prediction: None,
            next_request_id: 1,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    #[cfg(test)]
    pub(super) fn message_sender(&self) -> Sender<JobMessage> {
        self.message_tx.clone()
    }

    pub(super) fn pending_prediction(&self) -> Option<u64> {
        self.pending_prediction
    }

    /// Run a prediction on a worker thread; `None` while one is already pending.
    pub(super) fn begin_prediction(&mut self, job: PredictionJob) -> Option<u64> {
        if self.pending_prediction.is_some() {
            return None;
        }
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.pending_prediction = Some(request_id);
        let tx = self.message_tx.clone();
        let span = prediction_span(request_id, &job.endpoint);
        thread::spawn(move || {
            let _entered = span.enter();
            let started = Instant::now();
            let result = crate::predict::request_prediction(
                &job.endpoint,
                &job.request,
                job.max_response_bytes,
            );
            tracing::debug!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                ok = result.is_ok(),
                "Backend answered"
            );
            let _ = tx.send(JobMessage::PredictionFinished(PredictionResult {
                request_id,
                result,
            }));
        });
        Some(request_id)
    }

    pub(super) fn clear_prediction(&mut self) {
        self.pending_prediction = None;
    }
}
