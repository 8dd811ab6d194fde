//! Emotion predictions fetched from the remote inference service.

pub mod api;
pub mod model;

pub use api::{PredictError, PredictRequest, PredictResponse, request_prediction};
pub use model::{DEFAULT_THRESHOLD, GO_EMOTIONS, MetricKind, Metrics, ModelResult};
