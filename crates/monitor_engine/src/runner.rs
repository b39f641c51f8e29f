use std::time::Duration;

use monitor_logging::{monitor_debug, monitor_info};
use serde_json::Value;

use crate::{MessagePort, RunError};

/// Producer of monitor messages for one validation run.
///
/// A runner sends zero or more frames through `port` and then returns; dropping the port
/// is what tells the host that the run stopped reporting.
#[async_trait::async_trait]
pub trait TaskRunner: Send + Sync {
    async fn run(&self, target_url: &str, port: MessagePort) -> Result<(), RunError>;
}

/// Replays a recorded JSON-lines message script.
#[derive(Debug, Clone, Default)]
pub struct ReplayRunner {
    frames: Vec<Value>,
    delay: Duration,
}

impl ReplayRunner {
    /// Parses one frame per non-blank line.
    pub fn from_jsonl(script: &str) -> Result<Self, RunError> {
        let frames = script
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|source| RunError::Script {
                    line: index + 1,
                    source,
                })
            })
            .collect::<Result<Vec<Value>, _>>()?;
        Ok(Self {
            frames,
            delay: Duration::ZERO,
        })
    }

    /// Pause between two frames.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn frames(&self) -> &[Value] {
        &self.frames
    }
}

#[async_trait::async_trait]
impl TaskRunner for ReplayRunner {
    async fn run(&self, target_url: &str, port: MessagePort) -> Result<(), RunError> {
        monitor_info!(
            "Replaying {} frames for {}",
            self.frames.len(),
            target_url
        );
        for (index, frame) in self.frames.iter().enumerate() {
            if index > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            monitor_debug!("Posting frame {}", index + 1);
            port.post_frame(frame.clone())?;
        }
        Ok(())
    }
}
