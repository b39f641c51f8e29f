use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("message channel is closed")]
    Closed,
    #[error("message could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("script line {line} is not valid JSON: {source}")]
    Script {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Channel(#[from] ChannelError),
    #[error("could not start runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("task runner panicked")]
    Panicked,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog url: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("catalog is not a valid endpoint list: {0}")]
    Parse(#[from] serde_yaml::Error),
}
