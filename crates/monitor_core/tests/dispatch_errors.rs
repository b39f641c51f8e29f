use std::sync::Once;

use monitor_core::{apply, Controller, DispatchError, Effect, MonitorState, Msg};
use serde_json::json;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(monitor_logging::initialize_for_tests);
}

#[test]
fn update_for_unknown_name_is_a_noop() {
    init_logging();
    let mut controller = Controller::default();
    controller.dispatch(json!({ "message_type": "progress-bar-add", "name": "paper" }));
    assert!(controller.consume_dirty());
    let before = controller.state().clone();

    let effects = controller.dispatch(json!({
        "message_type": "progress-bar-update",
        "name": "person",
        "counter": "1",
    }));

    assert!(effects.is_empty());
    assert_eq!(controller.state(), &before);
    assert!(!controller.consume_dirty());

    // The controller keeps working afterwards.
    controller.dispatch(json!({ "message_type": "progress-bar-add", "name": "meeting" }));
    assert!(controller.state().is_active("meeting"));
    assert!(controller.state().is_active("paper"));
}

#[test]
fn apply_reports_the_missing_entry() {
    init_logging();
    let mut state = MonitorState::new();
    let err = apply(
        &mut state,
        Msg::ProgressBarFinish {
            name: "paper".to_string(),
            message: "done".to_string(),
        },
    )
    .unwrap_err();

    assert_eq!(
        err,
        DispatchError::UnknownEntry {
            kind: "progress-bar-finish",
            name: "paper".to_string(),
        }
    );
    assert_eq!(state, MonitorState::new());
}

#[test]
fn message_and_finish_without_add_are_noops() {
    init_logging();
    let mut controller = Controller::default();
    controller.dispatch(json!({
        "message_type": "progress-bar-message",
        "name": "paper",
        "message": "page 1",
    }));
    controller.dispatch(json!({
        "message_type": "progress-bar-finish",
        "name": "paper",
        "message": "done",
    }));

    let view = controller.view();
    assert!(view.rows.is_empty());
    assert_eq!(view.active_count, 0);
}

#[test]
fn bogus_kind_alerts_and_leaves_state_untouched() {
    init_logging();
    let mut controller = Controller::default();
    controller.dispatch(json!({ "message_type": "progress-bar-add", "name": "paper" }));
    controller.dispatch(json!({
        "message_type": "problem-report",
        "problems": ["a"],
        "is_final": false,
    }));
    controller.consume_dirty();
    let before = controller.state().clone();

    let effects = controller.dispatch(json!({ "message_type": "bogus" }));

    assert_eq!(effects.len(), 1);
    let Effect::Alert { text } = &effects[0];
    assert!(text.starts_with("Invalid message: "));
    assert!(text.contains("bogus"));
    assert_eq!(controller.state(), &before);
    assert!(!controller.consume_dirty());
}

#[test]
fn non_object_frames_alert() {
    init_logging();
    let mut controller = Controller::default();
    for frame in [json!("progress-bar-add"), json!(42), json!(null), json!([1, 2])] {
        let effects = controller.dispatch(frame);
        assert_eq!(effects.len(), 1);
    }
    assert!(controller.view().rows.is_empty());
}

#[test]
fn malformed_known_kind_is_logged_without_alert() {
    init_logging();
    let mut controller = Controller::default();
    let effects = controller.dispatch(json!({ "message_type": "progress-bar-add" }));
    assert!(effects.is_empty());

    let effects = controller.dispatch(json!({
        "message_type": "problem-report",
        "problems": ["a"],
    }));
    assert!(effects.is_empty());

    let view = controller.view();
    assert!(view.rows.is_empty());
    assert!(view.report.is_none());
}

#[test]
fn messages_after_failures_are_still_handled() {
    init_logging();
    let mut controller = Controller::default();
    let frames = [
        json!({ "message_type": "progress-bar-update", "name": "paper", "counter": "1" }),
        json!({ "message_type": "bogus" }),
        json!({ "message_type": "progress-bar-add", "name": "paper" }),
        json!({ "message_type": "progress-bar-add" }),
        json!({ "message_type": "progress-bar-update", "name": "paper", "counter": "2/3" }),
    ];
    let alerts: usize = frames
        .into_iter()
        .map(|frame| controller.dispatch(frame).len())
        .sum();

    assert_eq!(alerts, 1);
    assert_eq!(controller.state().entry("paper").unwrap().counter(), "2/3");
}
