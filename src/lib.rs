pub mod ais;
pub mod config;
pub mod error;
pub mod gps;
pub mod net;
pub mod output;

pub use ais::CommonNavigationBlock;
pub use config::BridgeConfig;
pub use error::{AisError, Result};
pub use gps::GpsFix;
