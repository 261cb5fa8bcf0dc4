//! NMEA-0183 position sentence parsing.
//!
//! Handles the three position sentences a serial GPS emits: `$GPGGA`,
//! `$GPRMC` and `$GPGLL`. Coordinates arrive as ddmm.mmmm (latitude) /
//! dddmm.mmmm (longitude) with a separate N/S/E/W hemisphere field and are
//! converted to signed decimal degrees. Anything else parses to `None`.

use crate::ais::checksum::xor_checksum;
use crate::error::{AisError, Result};

use super::GpsFix;

/// Parse one line of NMEA. Returns `Ok(None)` for sentence types this
/// bridge does not use. A trailing `*XX` checksum, when present, is
/// verified over the span between `$` and `*`.
pub fn parse_line(line: &str) -> Result<Option<GpsFix>> {
    let line = line.trim();
    let Some(body) = line.strip_prefix('$') else {
        return Err(AisError::NmeaParse(format!("missing '$': {line:?}")));
    };

    let body = match body.split_once('*') {
        Some((body, digits)) => {
            let indicated = u8::from_str_radix(digits, 16)
                .map_err(|_| AisError::NmeaParse(format!("bad checksum digits {digits:?}")))?;
            let computed = xor_checksum(body);
            if indicated != computed {
                return Err(AisError::ChecksumMismatch {
                    indicated,
                    computed,
                });
            }
            body
        }
        None => body,
    };

    let fields: Vec<&str> = body.split(',').collect();
    match fields[0] {
        "GPGGA" => {
            require(&fields, 6)?;
            Ok(Some(GpsFix {
                latitude: parse_coord(fields[2], fields[3], 2)?,
                longitude: parse_coord(fields[4], fields[5], 3)?,
                seconds: parse_seconds(fields[1])?,
                speed_knots: None,
                course_degrees: None,
            }))
        }
        "GPRMC" => {
            require(&fields, 10)?;
            Ok(Some(GpsFix {
                latitude: parse_coord(fields[3], fields[4], 2)?,
                longitude: parse_coord(fields[5], fields[6], 3)?,
                seconds: parse_seconds(fields[1])?,
                speed_knots: opt_number(fields[7])?,
                course_degrees: opt_number(fields[8])?,
            }))
        }
        "GPGLL" => {
            require(&fields, 6)?;
            Ok(Some(GpsFix {
                latitude: parse_coord(fields[1], fields[2], 2)?,
                longitude: parse_coord(fields[3], fields[4], 3)?,
                seconds: parse_seconds(fields[5])?,
                speed_knots: None,
                course_degrees: None,
            }))
        }
        _ => Ok(None),
    }
}

fn require(fields: &[&str], count: usize) -> Result<()> {
    if fields.len() < count {
        return Err(AisError::NmeaParse(format!(
            "{} needs {} fields, got {}",
            fields[0],
            count,
            fields.len()
        )));
    }
    Ok(())
}

/// ddmm.mmmm / dddmm.mmmm to signed decimal degrees. `deg_digits` is 2 for
/// latitude and 3 for longitude; N and E are positive.
fn parse_coord(value: &str, hemisphere: &str, deg_digits: usize) -> Result<f64> {
    if !value.is_ascii() || value.len() < deg_digits {
        return Err(AisError::NmeaParse(format!("bad coordinate {value:?}")));
    }
    let (deg, minutes) = value.split_at(deg_digits);
    let deg: f64 = deg
        .parse()
        .map_err(|_| AisError::NmeaParse(format!("bad coordinate {value:?}")))?;
    let minutes: f64 = minutes
        .parse()
        .map_err(|_| AisError::NmeaParse(format!("bad coordinate {value:?}")))?;
    let unsigned = deg + minutes / 60.0;
    match hemisphere {
        "N" | "E" => Ok(unsigned),
        "S" | "W" => Ok(-unsigned),
        other => Err(AisError::NmeaParse(format!("bad hemisphere {other:?}"))),
    }
}

/// UTC second of the fix from an hhmmss.ss time-of-day field, for the AIS
/// time stamp.
fn parse_seconds(time: &str) -> Result<u8> {
    if !time.is_ascii() || time.len() < 6 {
        return Err(AisError::NmeaParse(format!("bad time {time:?}")));
    }
    let seconds: f64 = time[4..]
        .parse()
        .map_err(|_| AisError::NmeaParse(format!("bad time {time:?}")))?;
    Ok(seconds as u8)
}

fn opt_number(field: &str) -> Result<Option<f64>> {
    if field.is_empty() {
        return Ok(None);
    }
    field
        .parse()
        .map(Some)
        .map_err(|_| AisError::NmeaParse(format!("bad number {field:?}")))
}
