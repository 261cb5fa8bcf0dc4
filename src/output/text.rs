use super::{Formatter, ReportOutput};

pub struct TextFormatter {
    descriptive: bool,
}

impl TextFormatter {
    pub fn new(descriptive: bool) -> Self {
        Self { descriptive }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, output: &ReportOutput) -> String {
        let b = &output.block;
        let sog = match b.speed_over_ground {
            s if s == 1023.0 => "-".to_string(),
            s if s == 1022.0 => ">102".to_string(),
            s => format!("{s:.1}"),
        };
        let cog = match b.course_over_ground {
            c if c == 3600.0 => "-".to_string(),
            c => format!("{c:.1}"),
        };
        let hdg = if b.true_heading == 511 {
            "-".to_string()
        } else {
            b.true_heading.to_string()
        };
        if self.descriptive {
            format!(
                "MMSI {:>9}  {:>11.6},{:>12.6}  SOG {:>5} kn  COG {:>5}°  HDG {:>3}  tm {:>2}  {}",
                b.mmsi,
                b.latitude,
                b.longitude,
                sog,
                cog,
                hdg,
                b.timestamp,
                b.nav_status_label().unwrap_or("?"),
            )
        } else {
            format!(
                "MMSI {:>9}  {:>11.6},{:>12.6}  SOG {:>5} kn  COG {:>5}°  HDG {:>3}  tm {:>2}  status {}",
                b.mmsi, b.latitude, b.longitude, sog, cog, hdg, b.timestamp, b.nav_status,
            )
        }
    }
}
