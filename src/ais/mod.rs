//! AIS message type 1 codec: navigation block packing, six-bit armoring,
//! sentence framing and checksum.
//!
//! The encode path turns a [`CommonNavigationBlock`] into a complete
//! `!AIVDM,...` sentence string; the decode path is its inverse and exists
//! for self-test and the debug listener, not for real traffic reception.
//! All of it is pure and stateless, safe to call from any thread.

pub mod armor;
pub mod bitfield;
pub mod checksum;
pub mod cnb;
pub mod sentence;
pub mod validate;

pub use cnb::{CommonNavigationBlock, MANEUVER_LABELS, NAV_STATUS_LABELS};

use crate::error::{AisError, Result};

use bitfield::{BLOCK_BITS, BLOCK_BYTES};

/// Length of an armored navigation block payload: 168 bits / 6.
pub const PAYLOAD_CHARS: usize = BLOCK_BITS / 6;

/// Encode a block into its 28-character armored payload.
pub fn encode_payload(block: &CommonNavigationBlock) -> Result<String> {
    let bits = block.encode()?;
    Ok(armor::encode(&bits, BLOCK_BITS))
}

/// Encode a block into a complete framed sentence with checksum.
pub fn encode(block: &CommonNavigationBlock) -> Result<String> {
    Ok(sentence::frame(&encode_payload(block)?))
}

/// Decode and validate an armored payload.
pub fn decode_payload(payload: &str) -> Result<CommonNavigationBlock> {
    if payload.len() != PAYLOAD_CHARS {
        return Err(AisError::BadPayloadLength(payload.len()));
    }
    let (bits, _) = armor::decode(payload)?;
    let mut block = [0u8; BLOCK_BYTES];
    block.copy_from_slice(&bits[..BLOCK_BYTES]);
    let decoded = CommonNavigationBlock::decode(&block);
    validate::validate(&decoded)?;
    Ok(decoded)
}

/// Verify the checksum of a framed sentence, then decode and validate its
/// payload.
pub fn decode(framed: &str) -> Result<CommonNavigationBlock> {
    decode_payload(sentence::extract_payload(framed)?)
}
