use serde::{Deserialize, Serialize};

/// Latest problem snapshot received from the run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProblemReport {
    items: Vec<String>,
    is_final: bool,
}

impl ProblemReport {
    pub fn new(items: Vec<String>, is_final: bool) -> Self {
        Self { items, is_final }
    }

    /// Overwrites the whole report; nothing from the previous snapshot survives.
    pub fn replace(&mut self, items: Vec<String>, is_final: bool) {
        self.items = items;
        self.is_final = is_final;
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }
}

/// Heading texts for the problem report. Localizable, so they come from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportHeadings {
    pub interim: String,
    pub finished: String,
}

impl Default for ReportHeadings {
    fn default() -> Self {
        Self {
            interim: "Interim validation report".to_string(),
            finished: "Validation report".to_string(),
        }
    }
}

impl ReportHeadings {
    pub fn heading_for(&self, is_final: bool) -> &str {
        if is_final {
            &self.finished
        } else {
            &self.interim
        }
    }
}
