use monitor_core::{Indicator, MonitorViewModel, ProgressRowView};

use super::constants::*;

/// Renders the whole monitor as plain-text lines.
pub fn render(view: &MonitorViewModel) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.rows.len() + 3);

    lines.push(format!(
        "Progress: {} running | {} total",
        view.active_count,
        view.rows.len()
    ));
    lines.extend(view.rows.iter().map(format_row));

    if let Some(report) = &view.report {
        lines.push(String::new());
        lines.push(format!("== {} ==", plain_text(&report.heading)));
        lines.extend(
            report
                .problems
                .iter()
                .map(|problem| format!("{} {}", PROBLEM_BULLET, plain_text(problem))),
        );
    }

    lines
}

fn format_row(row: &ProgressRowView) -> String {
    let marker = match row.indicator {
        Indicator::Spinner => SPINNER_MARKER,
        Indicator::Done => DONE_MARKER,
    };
    if row.message.is_empty() {
        format!(
            "{marker} [{name}] {counter}",
            name = plain_text(&row.name),
            counter = plain_text(&row.counter)
        )
    } else {
        format!(
            "{marker} [{name}] {counter}: {message}",
            name = plain_text(&row.name),
            counter = plain_text(&row.counter),
            message = plain_text(&row.message)
        )
    }
}

/// Untrusted text as a single inert line: whitespace controls become spaces, other
/// control characters (escape sequences included) become U+FFFD.
pub fn plain_text(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '\n' | '\r' | '\t' => ' ',
            ch if ch.is_control() => char::REPLACEMENT_CHARACTER,
            ch => ch,
        })
        .collect()
}

/// Selection list for the endpoint catalog, placeholder first.
pub fn render_endpoint_options(options: &[(String, String)]) -> Vec<String> {
    let mut lines = Vec::with_capacity(options.len() + 1);
    lines.push(ENDPOINT_PLACEHOLDER.to_string());
    lines.extend(
        options
            .iter()
            .map(|(name, url)| format!("{} ({})", plain_text(name), plain_text(url))),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use monitor_core::{Controller, Msg};
    use pretty_assertions::assert_eq;

    fn view_after(msgs: Vec<Msg>) -> MonitorViewModel {
        let mut controller = Controller::default();
        for msg in msgs {
            controller.dispatch_msg(msg);
        }
        controller.view()
    }

    #[test]
    fn rows_and_report_render_in_order() {
        let view = view_after(vec![
            Msg::ProgressBarAdd {
                name: "paper".to_string(),
            },
            Msg::ProgressBarAdd {
                name: "person".to_string(),
            },
            Msg::ProgressBarUpdate {
                name: "paper".to_string(),
                counter: "3/10".into(),
            },
            Msg::ProgressBarMessage {
                name: "paper".to_string(),
                message: "fetching page 4".to_string(),
            },
            Msg::ProgressBarFinish {
                name: "person".to_string(),
                message: "done".to_string(),
            },
            Msg::ProblemReport {
                problems: vec!["a".to_string(), "b".to_string()],
                is_final: false,
            },
        ]);

        assert_eq!(
            render(&view),
            vec![
                "Progress: 1 running | 2 total".to_string(),
                "⏳ [paper] 3/10: fetching page 4".to_string(),
                "✅ [person] 0: done".to_string(),
                String::new(),
                "== Interim validation report ==".to_string(),
                "- a".to_string(),
                "- b".to_string(),
            ]
        );
    }

    #[test]
    fn empty_view_has_only_status_line() {
        let lines = render(&MonitorViewModel::default());
        assert_eq!(lines, vec!["Progress: 0 running | 0 total".to_string()]);
    }

    #[test]
    fn control_characters_are_neutralized() {
        assert_eq!(plain_text("a\nb\tc"), "a b c");
        assert_eq!(plain_text("\u{1b}[2Jboom"), "\u{fffd}[2Jboom");
        assert_eq!(plain_text("<b>bold</b>"), "<b>bold</b>");
    }

    #[test]
    fn endpoint_options_start_with_placeholder() {
        let lines = render_endpoint_options(&[(
            "Bonn".to_string(),
            "https://example.org/system".to_string(),
        )]);
        assert_eq!(
            lines,
            vec![
                ENDPOINT_PLACEHOLDER.to_string(),
                "Bonn (https://example.org/system)".to_string(),
            ]
        );
    }
}
