//! Configuration for the GPS-to-AIS bridge.
//!
//! Everything has a usable default: the stock multicast group/port that
//! OpenCPN setups conventionally use for this bridge, and a test-range MMSI
//! that must be replaced for any real deployment. A TOML file can override
//! any subset:
//!
//! ```toml
//! [station]
//! mmsi = 316013198
//! nav_status = 0
//!
//! [network]
//! group = "224.1.1.4"
//! port = 65433
//! ```

use std::net::Ipv4Addr;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AisError, Result};

/// System-wide bridge configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeConfig {
    /// Multicast transport settings.
    pub network: NetworkConfig,
    /// Fixed station identity fields for every encoded report.
    pub station: StationConfig,
    /// Bridge loop behavior.
    pub bridge: BridgeOptions,
}

/// UDP multicast settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkConfig {
    /// Multicast group the sentences are sent to / received from.
    pub group: Ipv4Addr,
    /// UDP port.
    pub port: u16,
    /// Multicast TTL for outgoing datagrams.
    pub ttl: u32,
    /// Local interface address for receivers (0.0.0.0 = default interface).
    pub interface: Ipv4Addr,
}

/// Station identity: the fields of a report that do not come from the GPS.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StationConfig {
    /// Maritime Mobile Service Identity of the bridged vessel.
    pub mmsi: u32,
    /// Navigation status field (0-15, 15 = not defined).
    pub nav_status: u8,
    /// RAIM flag.
    pub raim: bool,
    /// Opaque 19-bit radio status field.
    pub radio_status: u32,
}

/// Bridge loop behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeOptions {
    /// Warn when no GPS fix has arrived for this many seconds.
    pub fix_warning_timeout_secs: f32,
    /// Also print each sentence to stdout.
    pub echo: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            group: Ipv4Addr::new(224, 1, 1, 4),
            port: 65433,
            ttl: 20,
            interface: Ipv4Addr::UNSPECIFIED,
        }
    }
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            mmsi: 123_456_789,
            nav_status: 0,
            raim: false,
            radio_status: 0,
        }
    }
}

impl Default for BridgeOptions {
    fn default() -> Self {
        Self {
            fix_warning_timeout_secs: 60.0,
            echo: false,
        }
    }
}

impl BridgeConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| AisError::Config(format!("{}: {e}", path.display())))?;
        toml::from_str(&text).map_err(|e| AisError::Config(format!("{}: {e}", path.display())))
    }
}
