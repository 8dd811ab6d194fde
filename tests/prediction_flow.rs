mod support;

use std::time::Duration;

use coteg::config::ApiSettings;
use coteg::egui_app::controller::EguiController;
use coteg::egui_app::state::{PREDICTION_FAILED_MESSAGE, PanelSlot};
use coteg::egui_app::view_model;
use support::backend::serve_json_once;

const RESPONSE: &str = r#"{
    "baseline": {
        "predicted": ["joy"],
        "scores": {"joy": 0.8, "nervousness": 0.2},
        "thresholds": {"joy": 0.4},
        "metrics": {"macro_f1": 0.7, "weighted_f1": 0.72, "exact_accuracy": 0.41, "hamming_loss": 0.0312}
    },
    "coteg": {
        "predicted": [{"emotion": "joy", "score": "85.0%"}, {"emotion": "nervousness", "score": "60.0%"}],
        "scores": {"joy": 0.85, "nervousness": 0.6},
        "thresholds": {},
        "metrics": {"macro_f1": 0.75, "weighted_f1": null}
    }
}"#;

fn controller(endpoint: String) -> EguiController {
    EguiController::new(ApiSettings {
        endpoint,
        ..ApiSettings::default()
    })
}

fn run_to_completion(controller: &mut EguiController) {
    for _ in 0..1_000 {
        controller.poll_background_jobs();
        if !controller.is_loading() {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("prediction never finished");
}

#[test]
fn comparison_renders_both_models() {
    let mut controller = controller(serve_json_once("200 OK", RESPONSE));
    controller.set_input_text("I got the job abroad, but leaving home is crushing me.");
    controller.submit_prediction();
    assert!(controller.is_loading());
    run_to_completion(&mut controller);

    let (enhanced, baseline) = controller.ui.results().expect("results");
    assert_eq!(
        view_model::prediction_badges(enhanced),
        vec!["Joy", "Nervousness"]
    );

    let baseline_metrics = view_model::metric_rows(
        baseline.displayed_metrics().unwrap(),
        PanelSlot::Baseline.highlighted(),
    );
    let texts: Vec<_> = baseline_metrics
        .iter()
        .map(|row| row.value_text.as_str())
        .collect();
    assert_eq!(texts, vec!["70.0%", "72.0%", "41.0%", "0.0312"]);

    // Null metric values are skipped.
    let enhanced_metrics = view_model::metric_rows(
        enhanced.displayed_metrics().unwrap(),
        PanelSlot::Enhanced.highlighted(),
    );
    assert_eq!(enhanced_metrics.len(), 1);
    assert!(enhanced_metrics[0].highlight);

    let rows = view_model::score_rows(baseline, false);
    let labels: Vec<_> = rows.iter().map(|row| row.label).collect();
    assert_eq!(labels, vec!["joy", "nervousness"]);
    assert_eq!(rows[0].threshold_text, "0.40");
    assert_eq!(rows[1].threshold_text, "0.50");
    assert!(rows[0].predicted);
    assert!(!rows[1].predicted);
    assert_eq!(view_model::score_rows(baseline, true).len(), 28);
}

#[test]
fn backend_failure_shows_single_alert() {
    let mut controller = controller(serve_json_once(
        "503 Service Unavailable",
        r#"{"detail": "model loading"}"#,
    ));
    controller.set_input_text("anything at all");
    controller.submit_prediction();
    run_to_completion(&mut controller);

    assert_eq!(
        controller.ui.alert.message.as_deref(),
        Some(PREDICTION_FAILED_MESSAGE)
    );
    assert!(controller.ui.results().is_none());
    assert!(!controller.can_submit());
    controller.dismiss_alert();
    assert!(controller.can_submit());
}
