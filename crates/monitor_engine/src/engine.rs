use std::sync::Arc;
use std::thread;

use monitor_logging::{monitor_info, monitor_warn};

use crate::{MessagePort, RunError, TaskRunner};

/// A task runner executing on its own thread and tokio runtime.
pub struct RunHandle {
    thread: thread::JoinHandle<Result<(), RunError>>,
}

impl RunHandle {
    /// Starts `runner` against `target_url`. The port is dropped when the run ends, which
    /// closes the channel once no other ports remain.
    pub fn spawn(
        runner: Arc<dyn TaskRunner>,
        target_url: impl Into<String>,
        port: MessagePort,
    ) -> Result<Self, RunError> {
        let runtime = tokio::runtime::Runtime::new()?;
        let target_url = target_url.into();
        monitor_info!("Starting run for {}", target_url);

        let thread = thread::spawn(move || {
            let result = runtime.block_on(runner.run(&target_url, port));
            if let Err(err) = &result {
                monitor_warn!("Run for {} failed: {}", target_url, err);
            }
            result
        });

        Ok(Self { thread })
    }

    /// Waits for the run to end and returns its outcome.
    pub fn join(self) -> Result<(), RunError> {
        self.thread.join().map_err(|_| RunError::Panicked)?
    }
}
