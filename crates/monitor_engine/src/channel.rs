use std::sync::mpsc;

use monitor_core::Msg;
use serde::Serialize;
use serde_json::Value;

use crate::ChannelError;

/// Creates a point-to-point channel of structured frames.
pub fn message_channel() -> (MessagePort, MessageReceiver) {
    let (tx, rx) = mpsc::channel();
    (MessagePort { tx }, MessageReceiver { rx })
}

/// Sending end, handed to the task runner. Cheap to clone.
#[derive(Debug, Clone)]
pub struct MessagePort {
    tx: mpsc::Sender<Value>,
}

impl MessagePort {
    pub fn post_message(&self, message: &impl Serialize) -> Result<(), ChannelError> {
        let frame = serde_json::to_value(message)?;
        self.post_frame(frame)
    }

    /// Posts a frame verbatim, without checking it against the schema.
    pub fn post_frame(&self, frame: Value) -> Result<(), ChannelError> {
        self.tx.send(frame).map_err(|_| ChannelError::Closed)
    }
}

/// Receiving end, owned by the host loop.
#[derive(Debug)]
pub struct MessageReceiver {
    rx: mpsc::Receiver<Value>,
}

impl MessageReceiver {
    /// Blocks for the next frame. `None` once every port is dropped and the queue is drained.
    pub fn recv(&self) -> Option<Value> {
        self.rx.recv().ok()
    }

    /// Everything queued right now, in arrival order.
    pub fn drain(&self) -> Vec<Value> {
        self.rx.try_iter().collect()
    }
}

/// Destination for the messages a run produces.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, msg: Msg) -> Result<(), ChannelError>;
}

impl ProgressSink for MessagePort {
    fn emit(&self, msg: Msg) -> Result<(), ChannelError> {
        self.post_message(&msg)
    }
}
