#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Blocking operator warning naming a frame the monitor does not understand.
    Alert { text: String },
}
