//! AIVDM sentence framing.
//!
//! One fragment, channel A, no fill bits:
//! `!AIVDM,1,1,,A,<28-char payload>,0*XX`

use crate::error::{AisError, Result};

use super::checksum::{format_checksum, xor_checksum};

/// Index of the armored payload in the comma-separated sentence body.
const PAYLOAD_FIELD: usize = 5;

/// Number of comma-separated fields in a framed sentence body.
const BODY_FIELDS: usize = 7;

/// Wrap an armored payload in sentence framing with its checksum.
pub fn frame(payload: &str) -> String {
    let body = format!("AIVDM,1,1,,A,{payload},0");
    let sum = xor_checksum(&body);
    format!("!{body}*{}", format_checksum(sum))
}

/// Verify the trailing checksum and extract the armored payload.
///
/// The checksum is compared numerically, so a historical single-digit
/// rendering of a sum below 0x10 still verifies.
pub fn extract_payload(sentence: &str) -> Result<&str> {
    let sentence = sentence.trim();
    let (framed, indicated) = sentence
        .split_once('*')
        .ok_or_else(|| AisError::MalformedSentence("no checksum delimiter".into()))?;
    let body = framed
        .strip_prefix('!')
        .ok_or_else(|| AisError::MalformedSentence("missing leading '!'".into()))?;

    let indicated = u8::from_str_radix(indicated, 16)
        .map_err(|_| AisError::MalformedSentence(format!("bad checksum digits {indicated:?}")))?;
    let computed = xor_checksum(body);
    if indicated != computed {
        return Err(AisError::ChecksumMismatch {
            indicated,
            computed,
        });
    }

    let fields: Vec<&str> = body.split(',').collect();
    if fields.len() != BODY_FIELDS {
        return Err(AisError::MalformedSentence(format!(
            "expected {} fields, got {}",
            BODY_FIELDS,
            fields.len()
        )));
    }
    Ok(fields[PAYLOAD_FIELD])
}
