use std::sync::Arc;
use std::time::Duration;

use monitor_core::{Controller, Effect, Indicator};
use monitor_engine::{
    message_channel, ChannelReporter, MessagePort, ReplayRunner, RunError, RunHandle, TaskRunner,
};
use pretty_assertions::assert_eq;

const SCRIPT: &str = r#"
{"message_type": "progress-bar-add", "name": "paper"}
{"message_type": "progress-bar-add", "name": "person"}

{"message_type": "progress-bar-update", "name": "paper", "counter": "1/2"}
{"message_type": "problem-report", "problems": ["a"], "is_final": false}
{"message_type": "bogus"}
{"message_type": "progress-bar-finish", "name": "paper", "message": "Found 40 Paper in 2 pages"}
{"message_type": "problem-report", "problems": ["b", "c"], "is_final": true}
"#;

#[test]
fn script_skips_blank_lines() {
    let runner = ReplayRunner::from_jsonl(SCRIPT).unwrap();
    assert_eq!(runner.frames().len(), 7);
}

#[test]
fn script_error_names_the_line() {
    let err = ReplayRunner::from_jsonl("{}\n\n{oops\n").unwrap_err();
    assert!(matches!(err, RunError::Script { line: 3, .. }));
}

#[test]
fn replay_drives_controller_end_to_end() {
    let runner = ReplayRunner::from_jsonl(SCRIPT)
        .unwrap()
        .with_delay(Duration::from_millis(1));
    let (port, receiver) = message_channel();
    let handle = RunHandle::spawn(Arc::new(runner), "https://example.org/oparl/system", port)
        .expect("runtime starts");

    let mut controller = Controller::default();
    let mut alerts = Vec::new();
    while let Some(frame) = receiver.recv() {
        alerts.extend(controller.dispatch(frame));
    }
    handle.join().expect("run ok");

    assert_eq!(alerts.len(), 1);
    assert!(matches!(&alerts[0], Effect::Alert { text } if text.contains("bogus")));

    let view = controller.view();
    assert_eq!(controller.state().active_names(), vec!["person"]);
    assert_eq!(view.rows[0].indicator, Indicator::Done);
    assert_eq!(view.rows[0].message, "Found 40 Paper in 2 pages");
    let report = view.report.unwrap();
    assert_eq!(report.problems, vec!["b".to_string(), "c".to_string()]);
    assert!(report.is_final);
}

#[tokio::test]
async fn replay_fails_on_closed_channel() {
    let runner = ReplayRunner::from_jsonl(SCRIPT).unwrap();
    let (port, receiver) = message_channel();
    drop(receiver);

    let err = runner.run("https://example.org", port).await.unwrap_err();
    assert!(matches!(err, RunError::Channel(_)));
}

/// Walks a fixed number of pages per object type and reports through a [`ChannelReporter`].
struct PagingRunner {
    pages: u64,
}

#[async_trait::async_trait]
impl TaskRunner for PagingRunner {
    async fn run(&self, _target_url: &str, port: MessagePort) -> Result<(), RunError> {
        let reporter = ChannelReporter::new(Arc::new(port));
        let bar = reporter.add_bar("paper")?;
        bar.set_length(self.pages)?;
        for page in 1..=self.pages {
            bar.set_message(format!("page {page}"))?;
            bar.inc(1)?;
        }
        reporter.report_problems(vec!["paper 7 has no date".to_string()], false)?;
        bar.finish_with_message(format!("Found {} pages", self.pages))?;
        reporter.report_problems(vec!["paper 7 has no date".to_string()], true)?;
        Ok(())
    }
}

#[test]
fn reporter_based_runner_drives_controller() {
    let (port, receiver) = message_channel();
    let handle = RunHandle::spawn(Arc::new(PagingRunner { pages: 3 }), "https://example.org", port)
        .expect("runtime starts");

    let mut controller = Controller::default();
    while let Some(frame) = receiver.recv() {
        assert!(controller.dispatch(frame).is_empty());
    }
    handle.join().expect("run ok");

    let view = controller.view();
    assert_eq!(view.active_count, 0);
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].counter, "3/3");
    assert_eq!(view.rows[0].message, "Found 3 pages");
    assert_eq!(view.rows[0].indicator, Indicator::Done);
    assert!(view.report.unwrap().is_final);
}
