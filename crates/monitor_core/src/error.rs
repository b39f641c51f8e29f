use thiserror::Error;

/// Why a frame could not be turned into a [`crate::Msg`].
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("frame is not a JSON object: {0}")]
    NotAnObject(String),
    #[error("unknown message type {kind:?} in frame {frame}")]
    UnknownKind { kind: Option<String>, frame: String },
    #[error("malformed {kind} message: {source}")]
    Malformed {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    /// Unrecognized frames point at a schema mismatch and are surfaced to the operator.
    /// Malformed payloads of a known kind are only logged.
    pub fn is_unrecognized(&self) -> bool {
        matches!(
            self,
            DecodeError::NotAnObject(_) | DecodeError::UnknownKind { .. }
        )
    }

    /// The offending frame as shown to the operator.
    pub fn frame_text(&self) -> Option<&str> {
        match self {
            DecodeError::NotAnObject(frame) | DecodeError::UnknownKind { frame, .. } => {
                Some(frame.as_str())
            }
            DecodeError::Malformed { .. } => None,
        }
    }
}

/// A decoded message that could not be applied to the current state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("{kind} for unknown progress entry {name:?}")]
    UnknownEntry { kind: &'static str, name: String },
}
