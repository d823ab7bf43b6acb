//! Operator commands, decoded once at the control boundary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Command {
    SetRover,
    SetSurveyIn {
        min_duration_secs: u32,
        /// Metres as a decimal string, e.g. `"2.0"`.
        accuracy_limit_m: String,
    },
    SetFixed {
        lat: String,
        lon: String,
        alt: String,
    },
    DiscoverMounts,
    RelayConnect {
        /// Falls back to the configured relay mount point.
        #[serde(default)]
        mountpoint: Option<String>,
    },
    RelayDisconnect,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::SetRover => "set_rover",
            Command::SetSurveyIn { .. } => "set_survey_in",
            Command::SetFixed { .. } => "set_fixed",
            Command::DiscoverMounts => "discover_mounts",
            Command::RelayConnect { .. } => "relay_connect",
            Command::RelayDisconnect => "relay_disconnect",
        }
    }
}
