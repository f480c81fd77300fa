use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use c2c_stats::{data_types::outing::Outings, settings::Settings, App};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(outings_file) = args.next() else {
        bail!("usage: c2c-stats <outings.json> [settings.toml]");
    };
    let settings_file = args.next().map(PathBuf::from);

    let settings = Settings::load(settings_file.as_deref())?;

    let content = std::fs::read_to_string(&outings_file)
        .with_context(|| format!("Unable to read {}", outings_file))?;
    let outings: Outings =
        serde_json::from_str(&content).context("Failed to parse the outing collection")?;

    let app = App::new(settings);
    std::fs::create_dir_all(&app.settings().output_dir)?;

    let report = app.generate_report(&outings, &app.output_file())?;

    println!(
        "Generated report for {} outings ({} activities) in {}s",
        report.nb_outings,
        report.activities.len(),
        report.generation_time
    );

    Ok(())
}
