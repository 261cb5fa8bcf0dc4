//! Common Navigation Block (AIS message type 1) field codec.
//!
//! The block is 16 fields packed into exactly 168 bits:
//!
//! | field | bits | | field | bits |
//! |---|---|---|---|---|
//! | message type | 6 | | longitude | 28 |
//! | repeat indicator | 2 | | latitude | 27 |
//! | MMSI | 30 | | COG | 12 |
//! | navigation status | 4 | | true heading | 9 |
//! | rate of turn | 8 | | time stamp | 6 |
//! | SOG | 10 | | maneuver indicator | 2 |
//! | position accuracy | 1 | | spare | 3 |
//! | | | | RAIM | 1 |
//! | | | | radio status | 19 |
//!
//! Position and velocity fields carry "not available" sentinels rather than
//! options: 181 deg longitude, 91 deg latitude, SOG 1023, COG 3600, heading
//! 511, rate of turn +/-128, time stamp 60.

use serde::Serialize;

use crate::error::Result;

use super::bitfield::{BLOCK_BYTES, BitReader, BitWriter};

/// AIS rate-of-turn indicator coefficient (deg/min -> indicator).
const ROT_COEFFICIENT: f64 = 4.733;

/// Navigation status labels, indexed by field value.
pub const NAV_STATUS_LABELS: [&str; 16] = [
    "Under way using engine",
    "At anchor",
    "Not under command",
    "Restricted manoeuverability",
    "Constrained by her draught",
    "Moored",
    "Aground",
    "Engaged in Fishing",
    "Under way sailing",
    "Reserved for future amendment of Navigational Status for HSC",
    "Reserved for future amendment of Navigational Status for WIG",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "AIS-SART is active",
    "Not defined (default)",
];

/// Maneuver indicator labels, indexed by field value.
pub const MANEUVER_LABELS: [&str; 3] = [
    "Not available (default)",
    "No special maneuver",
    "Special maneuver (such as regional passing arrangement)",
];

/// One decoded (or to-be-encoded) position report.
///
/// Speed, course, longitude and latitude are stored in natural units (knots
/// and degrees); encoding applies the wire scaling. Rate of turn is the
/// sensor value in deg/min on the encode side and the raw AIS indicator
/// after decode; the wire format never carries the deg/min value, so the two
/// only coincide at the +/-128 "not available" sentinel. Decode also never
/// inverts the indicator scaling, matching established consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommonNavigationBlock {
    pub message_type: u8,
    pub repeat: u8,
    pub mmsi: u32,
    pub nav_status: u8,
    pub rate_of_turn: i16,
    /// Knots; 1022.0 means "over 102 knots", 1023.0 means not available.
    pub speed_over_ground: f64,
    pub position_accuracy: bool,
    /// Degrees east; 181.0 means not available.
    pub longitude: f64,
    /// Degrees north; 91.0 means not available.
    pub latitude: f64,
    /// Degrees true; 3600.0 means not available (360.0 encodes identically).
    pub course_over_ground: f64,
    /// Degrees; 511 means not available.
    pub true_heading: u16,
    /// UTC second of the fix; 60 means not available.
    pub timestamp: u8,
    pub maneuver: u8,
    pub spare: u8,
    pub raim: bool,
    pub radio_status: u32,
}

impl Default for CommonNavigationBlock {
    fn default() -> Self {
        Self {
            message_type: 1,
            repeat: 0,
            mmsi: 123_456_789,
            nav_status: 8,
            rate_of_turn: 128,
            speed_over_ground: 1023.0,
            position_accuracy: false,
            longitude: 181.0,
            latitude: 91.0,
            course_over_ground: 360.0,
            true_heading: 511,
            timestamp: 60,
            maneuver: 0,
            spare: 0,
            raim: false,
            radio_status: 0,
        }
    }
}

impl CommonNavigationBlock {
    /// Pack the block into its 168-bit wire representation.
    pub fn encode(&self) -> Result<[u8; BLOCK_BYTES]> {
        let mut w = BitWriter::new();
        w.put_unsigned("message type", u64::from(self.message_type), 6)?;
        w.put_unsigned("repeat indicator", u64::from(self.repeat), 2)?;
        w.put_unsigned("MMSI", u64::from(self.mmsi), 30)?;
        w.put_unsigned("navigation status", u64::from(self.nav_status), 4)?;

        let rot = self.rot_indicator();
        if rot == 128 {
            w.put_unsigned("rate of turn", 128, 8)?;
        } else {
            w.put_signed("rate of turn", rot, 8)?;
        }

        let sog = match self.speed_over_ground {
            s if s == 1022.0 => 1022,
            s if s == 1023.0 => 1023,
            s => scale_down("SOG", s, 10.0, 10)?,
        };
        w.put_unsigned("SOG", sog as u64, 10)?;
        w.put_unsigned("position accuracy", u64::from(self.position_accuracy), 1)?;
        w.put_signed(
            "longitude",
            scale_down("longitude", self.longitude, 600_000.0, 28)?,
            28,
        )?;
        w.put_signed(
            "latitude",
            scale_down("latitude", self.latitude, 600_000.0, 27)?,
            27,
        )?;

        let cog = match self.course_over_ground {
            c if c == 3600.0 => 3600,
            c => scale_down("COG", c, 10.0, 12)?,
        };
        w.put_unsigned("COG", cog as u64, 12)?;
        w.put_unsigned("true heading", u64::from(self.true_heading), 9)?;
        w.put_unsigned("time stamp", u64::from(self.timestamp), 6)?;
        w.put_unsigned("maneuver indicator", u64::from(self.maneuver), 2)?;
        w.put_unsigned("spare", u64::from(self.spare), 3)?;
        w.put_unsigned("RAIM", u64::from(self.raim), 1)?;
        w.put_unsigned("radio status", u64::from(self.radio_status), 19)?;
        w.finish()
    }

    /// Unpack a 168-bit block. Field ranges are not checked here; run the
    /// result through [`validate`](super::validate::validate) for that.
    pub fn decode(block: &[u8; BLOCK_BYTES]) -> Self {
        let mut r = BitReader::new(block);
        let message_type = r.take_unsigned(6) as u8;
        let repeat = r.take_unsigned(2) as u8;
        let mmsi = r.take_unsigned(30) as u32;
        let nav_status = r.take_unsigned(4) as u8;

        // The bit pattern 0x80 is the "not available" indicator and decodes
        // to +128, not to two's-complement -128.
        let rot_raw = r.take_unsigned(8) as u8;
        let rate_of_turn = if rot_raw == 0x80 {
            128
        } else {
            i16::from(rot_raw as i8)
        };

        let sog_raw = r.take_unsigned(10);
        let position_accuracy = r.take_unsigned(1) != 0;
        let longitude = r.take_signed(28) as f64 / 600_000.0;
        let latitude = r.take_signed(27) as f64 / 600_000.0;
        let cog_raw = r.take_unsigned(12);
        let true_heading = r.take_unsigned(9) as u16;
        let timestamp = r.take_unsigned(6) as u8;
        let maneuver = r.take_unsigned(2) as u8;
        let spare = r.take_unsigned(3) as u8;
        let raim = r.take_unsigned(1) != 0;
        let radio_status = r.take_unsigned(19) as u32;

        // Sentinel raw values stay as sentinels instead of dividing down to
        // 102.2/102.3 knots or 360.0 degrees.
        let speed_over_ground = match sog_raw {
            1022 => 1022.0,
            1023 => 1023.0,
            s => s as f64 / 10.0,
        };
        let course_over_ground = match cog_raw {
            3600 => 3600.0,
            c => c as f64 / 10.0,
        };

        Self {
            message_type,
            repeat,
            mmsi,
            nav_status,
            rate_of_turn,
            speed_over_ground,
            position_accuracy,
            longitude,
            latitude,
            course_over_ground,
            true_heading,
            timestamp,
            maneuver,
            spare,
            raim,
            radio_status,
        }
    }

    /// AIS rate-of-turn indicator for this block's deg/min value.
    ///
    /// -128 folds into 128 before scaling (both mean "not available"), and
    /// 128 bypasses the scaling entirely.
    fn rot_indicator(&self) -> i64 {
        let rot = if self.rate_of_turn == -128 {
            128
        } else {
            self.rate_of_turn
        };
        if rot == 128 {
            return 128;
        }
        let scaled = (ROT_COEFFICIENT * f64::from(rot.unsigned_abs()).sqrt()).round() as i64;
        if rot < 0 { -scaled } else { scaled }
    }

    /// Textual navigation status, or None for out-of-table values.
    pub fn nav_status_label(&self) -> Option<&'static str> {
        NAV_STATUS_LABELS.get(usize::from(self.nav_status)).copied()
    }

    /// Textual maneuver indicator, or None for out-of-table values.
    pub fn maneuver_label(&self) -> Option<&'static str> {
        MANEUVER_LABELS.get(usize::from(self.maneuver)).copied()
    }
}

/// Wire scaling: multiply and truncate toward zero. Non-finite inputs are
/// reported as overflow of the target field, carrying the unscaled value.
fn scale_down(field: &'static str, value: f64, factor: f64, width: u32) -> Result<i64> {
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= i64::MAX as f64 {
        return Err(crate::error::AisError::EncodingOverflow {
            field,
            value: value.to_string(),
            width,
        });
    }
    Ok(scaled.trunc() as i64)
}
