use serde_json::Value;

use crate::{update, update_msg, Effect, MonitorState, MonitorViewModel, Msg, ReportHeadings};

/// Single dispatch point for every frame arriving on the channel.
///
/// Owns the monitor state; nothing else can reach the entries or the report except by
/// dispatching a message.
#[derive(Debug, Default)]
pub struct Controller {
    state: MonitorState,
}

impl Controller {
    pub fn new(headings: ReportHeadings) -> Self {
        Self {
            state: MonitorState::with_headings(headings),
        }
    }

    /// Handles one frame to completion. Never fails; see [`update`].
    pub fn dispatch(&mut self, frame: Value) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, frame);
        self.state = state;
        effects
    }

    pub fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        self.state = update_msg(state, msg);
    }

    pub fn view(&self) -> MonitorViewModel {
        self.state.view()
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    pub fn state(&self) -> &MonitorState {
        &self.state
    }
}
