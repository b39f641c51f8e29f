pub const SPINNER_MARKER: &str = "⏳";
pub const DONE_MARKER: &str = "✅";
pub const PROBLEM_BULLET: &str = "-";
pub const ALERT_MARKER: &str = "⚠";
pub const FRAME_SEPARATOR: &str = "----";
pub const ENDPOINT_PLACEHOLDER: &str = "... or choose a city";
