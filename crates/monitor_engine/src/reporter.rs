use std::sync::Arc;

use monitor_core::{Counter, Msg};
use parking_lot::Mutex;

use crate::{ChannelError, ProgressSink};

/// Producer-side handle a validation run uses to talk to the monitor.
///
/// Runners that compute progress themselves, rather than replaying recorded frames, wrap
/// their [`crate::MessagePort`] in one of these.
#[derive(Clone)]
pub struct ChannelReporter {
    sink: Arc<dyn ProgressSink>,
}

impl ChannelReporter {
    pub fn new(sink: Arc<dyn ProgressSink>) -> Self {
        Self { sink }
    }

    /// Announces a new unit of progress and returns the bar driving it.
    pub fn add_bar(&self, name: impl Into<String>) -> Result<ChannelProgressBar, ChannelError> {
        let name = name.into();
        self.sink.emit(Msg::ProgressBarAdd { name: name.clone() })?;
        Ok(ChannelProgressBar {
            name,
            sink: self.sink.clone(),
            progress: Mutex::new(BarProgress::default()),
        })
    }

    /// Sends the full problem list; interim reports use `is_final = false`.
    pub fn report_problems(&self, problems: Vec<String>, is_final: bool) -> Result<(), ChannelError> {
        self.sink.emit(Msg::ProblemReport { problems, is_final })
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct BarProgress {
    count: u64,
    length: Option<u64>,
}

impl BarProgress {
    fn counter(&self) -> Counter {
        match self.length {
            Some(length) => Counter::new(format!("{}/{}", self.count, length)),
            None => Counter::from(self.count),
        }
    }
}

/// A line of progress on the monitor: spinner, name, counter and last message.
pub struct ChannelProgressBar {
    name: String,
    sink: Arc<dyn ProgressSink>,
    progress: Mutex<BarProgress>,
}

impl ChannelProgressBar {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_message(&self, message: impl Into<String>) -> Result<(), ChannelError> {
        self.sink.emit(Msg::ProgressBarMessage {
            name: self.name.clone(),
            message: message.into(),
        })
    }

    pub fn inc(&self, value: u64) -> Result<(), ChannelError> {
        let counter = {
            let mut progress = self.progress.lock();
            progress.count = progress.count.saturating_add(value);
            progress.counter()
        };
        self.send_counter(counter)
    }

    /// The total may only become known with the first page.
    pub fn set_length(&self, length: u64) -> Result<(), ChannelError> {
        let counter = {
            let mut progress = self.progress.lock();
            progress.length = Some(length);
            progress.counter()
        };
        self.send_counter(counter)
    }

    pub fn finish_with_message(&self, message: impl Into<String>) -> Result<(), ChannelError> {
        self.sink.emit(Msg::ProgressBarFinish {
            name: self.name.clone(),
            message: message.into(),
        })
    }

    /// Counter text as last sent, e.g. `"3"` or `"3/10"`.
    pub fn counter(&self) -> Counter {
        self.progress.lock().counter()
    }

    fn send_counter(&self, counter: Counter) -> Result<(), ChannelError> {
        self.sink.emit(Msg::ProgressBarUpdate {
            name: self.name.clone(),
            counter,
        })
    }
}
