use monitor_logging::{monitor_debug, monitor_error, monitor_warn};
use serde_json::Value;

use crate::{DispatchError, Effect, MonitorState, Msg};

/// Pure update function: applies one raw frame to state and returns any effects.
///
/// Never fails. Unrecognized frames become an [`Effect::Alert`], malformed payloads and
/// references to unknown entries are logged and leave the state as it was.
pub fn update(mut state: MonitorState, frame: Value) -> (MonitorState, Vec<Effect>) {
    let effects = match Msg::decode(frame) {
        Ok(msg) => {
            apply_logged(&mut state, msg);
            Vec::new()
        }
        Err(err) if err.is_unrecognized() => {
            monitor_error!("Unrecognized message: {}", err);
            vec![Effect::Alert {
                text: format!("Invalid message: {}", err.frame_text().unwrap_or_default()),
            }]
        }
        Err(err) => {
            monitor_warn!("Failed to handle message: {}", err);
            Vec::new()
        }
    };

    (state, effects)
}

/// Same as [`update`] for an already decoded message.
pub fn update_msg(mut state: MonitorState, msg: Msg) -> MonitorState {
    apply_logged(&mut state, msg);
    state
}

fn apply_logged(state: &mut MonitorState, msg: Msg) {
    if let Err(err) = apply(state, msg) {
        monitor_warn!("Failed to handle message: {}", err);
    }
}

/// Applies one message. On error the state is unchanged.
pub fn apply(state: &mut MonitorState, msg: Msg) -> Result<(), DispatchError> {
    let kind = msg.kind();
    monitor_debug!("Dispatching {}", kind);
    match msg {
        Msg::ProgressBarAdd { name } => {
            if state.add_entry(name.clone()) {
                // The old row stays on screen but can no longer be updated.
                monitor_warn!("Progress entry {:?} added twice, replacing it", name);
            }
        }
        Msg::ProgressBarUpdate { name, counter } => {
            state
                .entry_mut(kind, &name)?
                .set_counter(counter.into_string());
        }
        Msg::ProgressBarMessage { name, message } => {
            state.entry_mut(kind, &name)?.set_message(message);
        }
        Msg::ProgressBarFinish { name, message } => {
            state.entry_mut(kind, &name)?.finish(message);
            state.remove_entry(&name);
        }
        Msg::ProblemReport { problems, is_final } => {
            monitor_debug!(
                "Problem report with {} entries (final: {})",
                problems.len(),
                is_final
            );
            state.replace_report(problems, is_final);
        }
    }
    Ok(())
}
