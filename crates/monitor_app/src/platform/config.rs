use std::fs;
use std::path::Path;

use monitor_core::ReportHeadings;
use monitor_engine::DEFAULT_ENDPOINTS_URL;
use monitor_logging::{monitor_info, monitor_warn};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "./monitor.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub headings: ReportHeadings,
    pub endpoints_url: String,
    /// Pause between replayed frames.
    pub replay_delay_ms: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            headings: ReportHeadings::default(),
            endpoints_url: DEFAULT_ENDPOINTS_URL.to_string(),
            replay_delay_ms: 0,
        }
    }
}

/// Reads the config file; any problem falls back to the defaults.
pub(crate) fn load_config(path: &Path) -> MonitorConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return MonitorConfig::default();
        }
        Err(err) => {
            monitor_warn!("Failed to read config from {:?}: {}", path, err);
            return MonitorConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            monitor_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            monitor_warn!("Failed to parse config from {:?}: {}", path, err);
            MonitorConfig::default()
        }
    }
}
