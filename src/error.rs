use thiserror::Error;

#[derive(Error, Debug)]
pub enum AisError {
    #[error("Checksum mismatch: sentence says {indicated:02X}, computed {computed:02X}")]
    ChecksumMismatch { indicated: u8, computed: u8 },

    #[error("Malformed sentence: {0}")]
    MalformedSentence(String),

    #[error("Field {field} out of range: {value}")]
    FieldValidation { field: &'static str, value: String },

    #[error("Value {value} does not fit {field} ({width} bits)")]
    EncodingOverflow {
        field: &'static str,
        value: String,
        width: u32,
    },

    #[error("Invalid armor character: {0:?}")]
    InvalidArmorCharacter(char),

    #[error("Armored payload must be 28 characters, got {0}")]
    BadPayloadLength(usize),

    #[error("NMEA parse error: {0}")]
    NmeaParse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AisError>;
