//! Status registry: last-known human-readable state of each subsystem.

use std::collections::BTreeMap;
use std::sync::Arc;

use dashmap::DashMap;

/// Longest value kept per key, in bytes.
pub const MAX_VALUE_LEN: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatusKey {
    /// Last GGA sentence.
    GnssStatus,
    /// Last GST sentence.
    GnssAccuracy,
    GnssMode,
    NtripClient,
    /// Connected cast clients, as a decimal string.
    NtripCaster,
}

impl StatusKey {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusKey::GnssStatus => "GNSS_STATUS",
            StatusKey::GnssAccuracy => "GNSS_ACCURACY",
            StatusKey::GnssMode => "GNSS_MODE",
            StatusKey::NtripClient => "NTRIP_CLI_STATUS",
            StatusKey::NtripCaster => "NTRIP_CAS_STATUS",
        }
    }
}

/// Relay client connection state as shown to operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayState {
    Unavailable,
    Connecting,
    Connected,
    Disconnected,
}

impl RelayState {
    pub fn as_str(self) -> &'static str {
        match self {
            RelayState::Unavailable => "Unavailable",
            RelayState::Connecting => "Connecting",
            RelayState::Connected => "Connected",
            RelayState::Disconnected => "Disconnected",
        }
    }
}

/// Shared handle; clones see the same table.
#[derive(Clone, Default)]
pub struct StatusRegistry {
    entries: Arc<DashMap<StatusKey, String>>,
}

impl StatusRegistry {
    pub fn new() -> Self {
        let registry = Self::default();
        registry.set(StatusKey::NtripClient, RelayState::Unavailable.as_str());
        registry.set(StatusKey::NtripCaster, "0");
        registry
    }

    /// Store `value`, truncated to [`MAX_VALUE_LEN`] on a char boundary.
    pub fn set(&self, key: StatusKey, value: &str) {
        let mut end = value.len().min(MAX_VALUE_LEN);
        while !value.is_char_boundary(end) {
            end -= 1;
        }
        self.entries.insert(key, value[..end].to_string());
    }

    pub fn get(&self, key: StatusKey) -> Option<String> {
        self.entries.get(&key).map(|v| v.value().clone())
    }

    pub fn set_relay(&self, state: RelayState) {
        self.set(StatusKey::NtripClient, state.as_str());
    }

    pub fn snapshot(&self) -> BTreeMap<&'static str, String> {
        self.entries
            .iter()
            .map(|e| (e.key().as_str(), e.value().clone()))
            .collect()
    }
}
