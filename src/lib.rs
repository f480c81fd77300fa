use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use data_types::{outing::Outings, report::Report};
use processors::ReportPipeline;
use settings::Settings;
use util::{time::Stopwatch, DateTimeUtils};

pub mod data_types;
pub mod error;
pub mod processors;
pub mod settings;
mod util;

pub use error::{Error, Result};

/// Facade tying settings and the aggregation pipeline together: takes an
/// already-parsed outing collection, computes the statistics bundle, stamps
/// the timing metadata and writes the JSON report.
pub struct App {
    settings: Settings,
}

impl App {
    const CC: &str = "App";

    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Default report location under the configured output directory.
    pub fn output_file(&self) -> PathBuf {
        self.settings.output_dir.join("stats.json")
    }

    /// Generate the full statistics report and write it to `filename`.
    /// Either the complete bundle is produced or generation fails outright;
    /// there is no partial report.
    pub fn generate_report(&self, outings: &Outings, filename: &Path) -> Result<Report> {
        let generation = Stopwatch::start("generation");

        let mut report = ReportPipeline::new(outings).run()?;

        report.date_generated = DateTimeUtils::generation_date();
        report.generation_time = format!("{:.3}", generation.seconds());
        report.total_time = format!(
            "{:.2}",
            outings.download_time() + outings.parse_time() + generation.seconds()
        );

        crate::logln!(
            "Writing report for {} outings to {}",
            outings.nb_outings(),
            filename.display()
        );

        let file = File::create(filename)?;
        serde_json::to_writer(BufWriter::new(file), &report)?;

        Ok(report)
    }
}
