/// Counter text of a freshly created entry.
const INITIAL_COUNTER: &str = "0";

/// What is shown in front of an entry's label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indicator {
    #[default]
    Spinner,
    Done,
}

/// Display state of one named unit of progress.
///
/// All text is stored verbatim; rendering treats it as plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEntry {
    name: String,
    counter: String,
    message: String,
    indicator: Indicator,
}

impl ProgressEntry {
    pub fn create(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            counter: INITIAL_COUNTER.to_string(),
            message: String::new(),
            indicator: Indicator::Spinner,
        }
    }

    pub fn set_counter(&mut self, value: impl Into<String>) {
        self.counter = value.into();
    }

    pub fn set_message(&mut self, text: impl Into<String>) {
        self.message = text.into();
    }

    /// Sets the closing message and swaps the spinner for the completion marker.
    pub fn finish(&mut self, text: impl Into<String>) {
        self.message = text.into();
        self.indicator = Indicator::Done;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn counter(&self) -> &str {
        &self.counter
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    pub fn is_finished(&self) -> bool {
        self.indicator == Indicator::Done
    }
}
