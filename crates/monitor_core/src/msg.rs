use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::DecodeError;

/// Name of the discriminant field every frame must carry.
pub const MESSAGE_TYPE_FIELD: &str = "message_type";

/// Every `message_type` value the controller understands.
pub const KNOWN_KINDS: [&str; 5] = [
    "progress-bar-add",
    "progress-bar-update",
    "progress-bar-message",
    "progress-bar-finish",
    "problem-report",
];

/// One message sent by the task runner to the monitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "message_type", rename_all = "kebab-case")]
pub enum Msg {
    /// A new unit of progress started.
    ProgressBarAdd { name: String },
    /// New counter text for a running unit.
    ProgressBarUpdate { name: String, counter: Counter },
    /// New last-message text for a running unit.
    ProgressBarMessage { name: String, message: String },
    /// The unit is done; `message` is its closing text.
    ProgressBarFinish { name: String, message: String },
    /// Snapshot of all problems found so far.
    ProblemReport {
        problems: Vec<String>,
        /// `true` only for the report sent at the end of the run.
        is_final: bool,
    },
}

impl Msg {
    /// Decodes a structured frame, separating unknown kinds from malformed payloads.
    pub fn decode(frame: Value) -> Result<Msg, DecodeError> {
        let kind = match frame.as_object() {
            Some(object) => object.get(MESSAGE_TYPE_FIELD).and_then(Value::as_str),
            None => return Err(DecodeError::NotAnObject(frame.to_string())),
        };
        let Some(kind) =
            kind.and_then(|kind| KNOWN_KINDS.iter().copied().find(|known| *known == kind))
        else {
            return Err(DecodeError::UnknownKind {
                kind: kind.map(ToOwned::to_owned),
                frame: frame.to_string(),
            });
        };
        serde_json::from_value(frame).map_err(|source| DecodeError::Malformed { kind, source })
    }

    /// The wire `message_type` of this message.
    pub fn kind(&self) -> &'static str {
        match self {
            Msg::ProgressBarAdd { .. } => KNOWN_KINDS[0],
            Msg::ProgressBarUpdate { .. } => KNOWN_KINDS[1],
            Msg::ProgressBarMessage { .. } => KNOWN_KINDS[2],
            Msg::ProgressBarFinish { .. } => KNOWN_KINDS[3],
            Msg::ProblemReport { .. } => KNOWN_KINDS[4],
        }
    }
}

/// Counter text as reported by the producer, e.g. `"3"` or `"3/10"`.
///
/// On the wire this is either a string or a number; numbers keep their decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Counter(String);

impl Counter {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Counter {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<String> for Counter {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<u64> for Counter {
    fn from(count: u64) -> Self {
        Self(count.to_string())
    }
}

/// Decimal text of a number, with integral floats written without a fraction (`3.0` as `"3"`).
fn number_text(number: &serde_json::Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() => value.to_string(),
        _ => number.to_string(),
    }
}

impl Serialize for Counter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Counter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Text(text) => Counter(text),
            Wire::Number(number) => Counter(number_text(&number)),
        })
    }
}
