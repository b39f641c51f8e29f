use std::collections::BTreeMap;

use crate::view_model::{MonitorViewModel, ProblemReportView, ProgressRowView};
use crate::{DispatchError, ProblemReport, ProgressEntry, ReportHeadings};

/// Everything the monitor displays.
///
/// `rows` holds every row ever attached to the display, in creation order. `active` maps a
/// name to the row it currently drives; finished rows and rows orphaned by a duplicate add
/// stay in `rows` but are no longer reachable by name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonitorState {
    rows: Vec<ProgressEntry>,
    active: BTreeMap<String, usize>,
    report: Option<ProblemReport>,
    headings: ReportHeadings,
    dirty: bool,
}

impl MonitorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_headings(headings: ReportHeadings) -> Self {
        Self {
            headings,
            ..Self::default()
        }
    }

    pub fn view(&self) -> MonitorViewModel {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, entry)| ProgressRowView {
                name: entry.name().to_string(),
                counter: entry.counter().to_string(),
                message: entry.message().to_string(),
                indicator: entry.indicator(),
                active: self.active.get(entry.name()) == Some(&index),
            })
            .collect();

        let report = self.report.as_ref().map(|report| ProblemReportView {
            heading: self.headings.heading_for(report.is_final()).to_string(),
            problems: report.items().to_vec(),
            is_final: report.is_final(),
        });

        MonitorViewModel {
            rows,
            active_count: self.active.len(),
            report,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// The active entry registered under `name`, if any.
    pub fn entry(&self, name: &str) -> Option<&ProgressEntry> {
        self.active.get(name).map(|&index| &self.rows[index])
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active.contains_key(name)
    }

    /// Active names in creation order.
    pub fn active_names(&self) -> Vec<&str> {
        let mut indices: Vec<usize> = self.active.values().copied().collect();
        indices.sort_unstable();
        indices
            .into_iter()
            .map(|index| self.rows[index].name())
            .collect()
    }

    pub fn report(&self) -> Option<&ProblemReport> {
        self.report.as_ref()
    }

    /// Attaches a fresh row for `name`. Returns `true` when an active entry was displaced.
    pub(crate) fn add_entry(&mut self, name: String) -> bool {
        let index = self.rows.len();
        self.rows.push(ProgressEntry::create(name.clone()));
        self.mark_dirty();
        self.active.insert(name, index).is_some()
    }

    pub(crate) fn entry_mut(
        &mut self,
        kind: &'static str,
        name: &str,
    ) -> Result<&mut ProgressEntry, DispatchError> {
        let index = *self
            .active
            .get(name)
            .ok_or_else(|| DispatchError::UnknownEntry {
                kind,
                name: name.to_string(),
            })?;
        self.mark_dirty();
        Ok(&mut self.rows[index])
    }

    pub(crate) fn remove_entry(&mut self, name: &str) {
        if self.active.remove(name).is_some() {
            self.mark_dirty();
        }
    }

    pub(crate) fn replace_report(&mut self, problems: Vec<String>, is_final: bool) {
        match self.report.as_mut() {
            Some(report) => report.replace(problems, is_final),
            None => self.report = Some(ProblemReport::new(problems, is_final)),
        }
        self.mark_dirty();
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
