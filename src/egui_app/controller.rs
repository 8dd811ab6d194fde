//! Page controller: owns UI state and bridges it to prediction jobs.

mod background_jobs;
mod jobs;
mod prediction;


use crate::config::ApiSettings;
use crate::egui_app::state::*;
use jobs::ControllerJobs;

/// Maintains app state and bridges prediction requests to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    api: ApiSettings,
    jobs: ControllerJobs,
}

impl EguiController {
    pub fn new(api: ApiSettings) -> Self {
        Self {
            ui: UiState::default(),
            api,
            jobs: ControllerJobs::new(),
        }
    }

    /// Replace the input text; called on every edit.
    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.ui.input.text = text.into();
    }

    pub fn input_text(&self) -> &str {
        &self.ui.input.text
    }

    pub fn can_submit(&self) -> bool {
        self.ui.input.can_submit() && !self.ui.alert.is_open()
    }

    pub fn alert_open(&self) -> bool {
        self.ui.alert.is_open()
    }

    pub fn is_loading(&self) -> bool {
        self.ui.input.loading
    }

    /// Flip one panel between the collapsed and full score list.
    pub fn toggle_score_details(&mut self, slot: PanelSlot) {
        let panel = self.ui.panels.get_mut(slot);
        panel.show_all_scores = !panel.show_all_scores;
    }

    pub fn dismiss_alert(&mut self) {
        self.ui.alert.dismiss();
    }
}
