use crate::Indicator;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonitorViewModel {
    pub rows: Vec<ProgressRowView>,
    pub active_count: usize,
    pub report: Option<ProblemReportView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRowView {
    pub name: String,
    pub counter: String,
    pub message: String,
    pub indicator: Indicator,
    /// Still reachable by name; `false` for finished and orphaned rows.
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemReportView {
    pub heading: String,
    pub problems: Vec<String>,
    pub is_final: bool,
}
