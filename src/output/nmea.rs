use super::{Formatter, ReportOutput};

/// Raw sentence pass-through, for piping into other NMEA consumers.
pub struct NmeaFormatter;

impl Formatter for NmeaFormatter {
    fn format(&self, output: &ReportOutput) -> String {
        output.sentence.clone()
    }
}
