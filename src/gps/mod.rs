//! GPS fix records and NMEA parsing.
//!
//! The radio / serial collaborator delivers NMEA lines; this module turns
//! them into explicit fix values that get handed to the encoder. There is
//! no ambient "current position" state anywhere.

pub mod nmea;

pub use nmea::parse_line;

/// One GPS fix, in decimal degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct GpsFix {
    /// Degrees north.
    pub latitude: f64,
    /// Degrees east.
    pub longitude: f64,
    /// UTC second of the fix (0-59), used as the AIS time stamp.
    pub seconds: u8,
    /// Speed over ground in knots, when the sentence carries it (RMC).
    pub speed_knots: Option<f64>,
    /// Course over ground in degrees true, when the sentence carries it (RMC).
    pub course_degrees: Option<f64>,
}
