use serde::{Deserialize, Serialize};

use super::driver::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_READ_TIMEOUT_MS, DS5_PID, DS5_VID};

/// Runtime configuration for a [DualSense](crate::DualSense) controller.
/// Report sizes are fixed by the wire format and are not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// USB vendor id to match when opening the device.
    pub vendor_id: u16,
    /// USB product id to match when opening the device.
    pub product_id: u16,
    /// How long to sleep between polls, in milliseconds.
    pub polling_interval_ms: u64,
    /// How long a single read blocks waiting for a report, in milliseconds.
    pub read_timeout_ms: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vendor_id: DS5_VID,
            product_id: DS5_PID,
            polling_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
        }
    }
}
