//! Monitor core: message schema, progress entries and the pure dispatch state machine.
mod controller;
mod effect;
mod entry;
mod error;
mod msg;
mod report;
mod state;
mod update;
mod view_model;

pub use controller::Controller;
pub use effect::Effect;
pub use entry::{Indicator, ProgressEntry};
pub use error::{DecodeError, DispatchError};
pub use msg::{Counter, Msg, KNOWN_KINDS, MESSAGE_TYPE_FIELD};
pub use report::{ProblemReport, ReportHeadings};
pub use state::MonitorState;
pub use update::{apply, update, update_msg};
pub use view_model::{MonitorViewModel, ProblemReportView, ProgressRowView};
