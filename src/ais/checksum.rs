//! NMEA-style XOR checksum.
//!
//! The checksum covers every byte strictly between the leading delimiter
//! (`!` for AIVDM, `$` for GPS sentences) and the `*`.

/// XOR-accumulate the bytes of a sentence body.
pub fn xor_checksum(body: &str) -> u8 {
    body.bytes().fold(0u8, |sum, b| sum ^ b)
}

/// Render a checksum as two uppercase hex digits.
pub fn format_checksum(sum: u8) -> String {
    format!("{sum:02X}")
}
