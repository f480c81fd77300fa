use chrono::Local;

pub(crate) mod logging;
pub(crate) mod time;

pub struct DateTimeUtils {}

impl DateTimeUtils {
    /// Human-readable generation timestamp for the report.
    pub fn generation_date() -> String {
        Local::now().format("%d %B %Y à %X").to_string()
    }
}
