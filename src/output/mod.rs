mod json;
mod nmea;
mod text;

use chrono::Utc;

pub use self::json::JsonFormatter;
pub use self::nmea::NmeaFormatter;
pub use self::text::TextFormatter;

use crate::ais::CommonNavigationBlock;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Nmea,
}

/// One received sentence together with its decoded report.
pub struct ReportOutput {
    pub sentence: String,
    pub block: CommonNavigationBlock,
}

pub trait Formatter: Send {
    fn format(&self, output: &ReportOutput) -> String;
}

pub fn create_formatter(format: OutputFormat, descriptive: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(descriptive)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Nmea => Box::new(NmeaFormatter),
    }
}

pub fn iso8601_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
