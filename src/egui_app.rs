//! egui front end: state, controller, view models, and rendering.

/// Page controller and background prediction jobs.
pub mod controller;
/// Plain-data UI state shared between the controller and renderer.
pub mod state;
/// egui renderer for the comparison page.
pub mod ui;
/// Conversions from prediction results to render-ready rows.
pub mod view_model;
