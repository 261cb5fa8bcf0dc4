use super::{Formatter, ReportOutput, iso8601_timestamp};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, output: &ReportOutput) -> String {
        serde_json::json!({
            "ts": iso8601_timestamp(),
            "sentence": output.sentence,
            "report": output.block,
        })
        .to_string()
    }
}
