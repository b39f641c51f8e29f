use std::io::{self, BufRead, IsTerminal, Write};

use monitor_core::Effect;
use monitor_logging::monitor_info;

use super::ui::constants::ALERT_MARKER;
use super::ui::render::plain_text;

/// Where operator warnings go.
pub trait AlertSink {
    fn alert(&mut self, text: &str);
}

/// Prints alerts to stderr. When attached to a terminal it waits for Enter, so the
/// warning cannot scroll away unnoticed.
pub struct TerminalAlert {
    blocking: bool,
}

impl TerminalAlert {
    pub fn new() -> Self {
        Self {
            blocking: io::stdin().is_terminal() && io::stderr().is_terminal(),
        }
    }
}

impl Default for TerminalAlert {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertSink for TerminalAlert {
    fn alert(&mut self, text: &str) {
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{} {}", ALERT_MARKER, plain_text(text));
        if self.blocking {
            let _ = write!(stderr, "Press Enter to continue...");
            let _ = stderr.flush();
            let mut line = String::new();
            let _ = io::stdin().lock().read_line(&mut line);
        }
    }
}

/// Performs the effects returned by the controller.
pub struct EffectRunner<A: AlertSink> {
    alerts: A,
}

impl<A: AlertSink> EffectRunner<A> {
    pub fn new(alerts: A) -> Self {
        Self { alerts }
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Alert { text } => {
                    monitor_info!("Alerting operator: {}", text);
                    self.alerts.alert(&text);
                }
            }
        }
    }

    #[cfg(test)]
    pub fn alerts(&self) -> &A {
        &self.alerts
    }
}
