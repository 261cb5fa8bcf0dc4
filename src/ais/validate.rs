//! Per-field range checks for decoded navigation blocks.
//!
//! These are the locally accepted ranges, several of them tighter than the
//! AIS standard (single-fragment messages only, a restricted set of message
//! types). Used as a round-trip self-check on the decode path.

use crate::error::{AisError, Result};

use super::cnb::CommonNavigationBlock;

/// Message types this system handles or might handle locally. The standard
/// allows 1-27.
const ACCEPTED_TYPES: [u8; 5] = [1, 2, 3, 5, 18];

fn fail(field: &'static str, value: impl std::fmt::Display) -> AisError {
    AisError::FieldValidation {
        field,
        value: value.to_string(),
    }
}

/// Check every field of a decoded block against its accepted range.
/// The first violated constraint is reported, naming the field.
pub fn validate(block: &CommonNavigationBlock) -> Result<()> {
    if !(1..27).contains(&block.message_type) {
        return Err(fail("message type", block.message_type));
    }
    if !ACCEPTED_TYPES.contains(&block.message_type) {
        return Err(fail("message type", block.message_type));
    }
    if block.repeat != 0 {
        // multi-fragment messages are not supported
        return Err(fail("repeat indicator", block.repeat));
    }
    if !(99_999 < block.mmsi && block.mmsi < 1_000_000_000) {
        // short MMSIs occur (US vessels in home waters omit the country
        // code), so the lower bound is loose
        return Err(fail("MMSI", block.mmsi));
    }
    if block.nav_status >= 16 {
        return Err(fail("navigation status", block.nav_status));
    }
    if !(-128..=128).contains(&block.rate_of_turn) {
        return Err(fail("rate of turn", block.rate_of_turn));
    }
    let sog = block.speed_over_ground;
    if !((0.0..=102.0).contains(&sog) || sog == 1022.0 || sog == 1023.0) {
        return Err(fail("SOG", sog));
    }
    if !(-180.0..=181.0).contains(&block.longitude) {
        return Err(fail("longitude", block.longitude));
    }
    if !(-90.0..=91.0).contains(&block.latitude) {
        return Err(fail("latitude", block.latitude));
    }
    let cog = block.course_over_ground;
    if !((-360.0..=360.0).contains(&cog) || cog == 3600.0) {
        return Err(fail("COG", cog));
    }
    if !(block.true_heading <= 359 || block.true_heading == 511) {
        return Err(fail("true heading", block.true_heading));
    }
    if !(1..63).contains(&block.timestamp) {
        return Err(fail("time stamp", block.timestamp));
    }
    if block.maneuver >= 3 {
        return Err(fail("maneuver indicator", block.maneuver));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_block() -> CommonNavigationBlock {
        CommonNavigationBlock {
            mmsi: 227_006_760,
            nav_status: 0,
            timestamp: 14,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_block_passes() {
        assert!(validate(&valid_block()).is_ok());
    }

    #[test]
    fn test_violation_names_the_field() {
        let mut block = valid_block();
        block.mmsi = 99_999;
        match validate(&block) {
            Err(AisError::FieldValidation { field, .. }) => assert_eq!(field, "MMSI"),
            other => panic!("expected MMSI validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_message_type_restricted_locally() {
        let mut block = valid_block();
        block.message_type = 4; // legal AIS, rejected here
        assert!(validate(&block).is_err());
        block.message_type = 18;
        assert!(validate(&block).is_ok());
        block.message_type = 0;
        assert!(validate(&block).is_err());
    }

    #[test]
    fn test_sog_sentinels_accepted() {
        let mut block = valid_block();
        for sog in [0.0, 102.0, 1022.0, 1023.0] {
            block.speed_over_ground = sog;
            assert!(validate(&block).is_ok(), "SOG {sog} should pass");
        }
        for sog in [-0.1, 102.1, 500.0, 1024.0] {
            block.speed_over_ground = sog;
            assert!(validate(&block).is_err(), "SOG {sog} should fail");
        }
    }

    #[test]
    fn test_heading_and_cog_sentinels() {
        let mut block = valid_block();
        block.true_heading = 511;
        block.course_over_ground = 3600.0;
        assert!(validate(&block).is_ok());
        block.true_heading = 360;
        assert!(validate(&block).is_err());
        block.true_heading = 0;
        block.course_over_ground = 361.0;
        assert!(validate(&block).is_err());
    }

    #[test]
    fn test_timestamp_range() {
        let mut block = valid_block();
        for tm in [1u8, 60, 62] {
            block.timestamp = tm;
            assert!(validate(&block).is_ok(), "tm {tm} should pass");
        }
        for tm in [0u8, 63] {
            block.timestamp = tm;
            assert!(validate(&block).is_err(), "tm {tm} should fail");
        }
    }

    #[test]
    fn test_repeat_must_be_zero() {
        let mut block = valid_block();
        block.repeat = 1;
        assert!(validate(&block).is_err());
    }
}
