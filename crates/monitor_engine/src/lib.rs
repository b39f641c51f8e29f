//! Monitor engine: message channel, producer-side reporter, task runners and the endpoint catalog.
mod channel;
mod endpoints;
mod engine;
mod reporter;
mod runner;
mod types;

pub use channel::{message_channel, MessagePort, MessageReceiver, ProgressSink};
pub use endpoints::{
    parse_endpoints_yml, CatalogSettings, Endpoint, EndpointCatalog, DEFAULT_ENDPOINTS_URL,
};
pub use engine::RunHandle;
pub use reporter::{ChannelProgressBar, ChannelReporter};
pub use runner::{ReplayRunner, TaskRunner};
pub use types::{CatalogError, ChannelError, RunError};
