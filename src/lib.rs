//! Library exports for reuse in benchmarks and tests.
/// Application directory resolution.
pub mod app_dirs;
/// TOML settings for the prediction endpoint and window.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Shared HTTP agent and bounded response reads.
pub(crate) mod http_client;
/// Tracing setup for stdout and per-launch log files.
pub mod logging;
/// Prediction result model and API client.
pub mod predict;
