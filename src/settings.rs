use std::path::{Path, PathBuf};

use crate::{
    data_types::activity::Activity,
    error::{Error, Result},
    logvbln,
};

/// Immutable run configuration, resolved once at startup.
///
/// Defaults can be overridden by a TOML file. Only the uppercase keys
/// `OUTPUT_DIR`, `LINK` and `ACTIVITIES` are recognized; everything else in
/// the file is ignored.
#[derive(Debug, Clone)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub link: String,
    /// Full names of the activity taxonomy.
    pub activities: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("_output"),
            link: "https://github.com/saimn/c2c-stats".to_owned(),
            activities: Activity::ALL
                .iter()
                .map(|activity| activity.full_name().to_owned())
                .collect(),
        }
    }
}

impl Settings {
    const CC: &str = "Settings";

    pub fn load(filename: Option<&Path>) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = filename {
            let content = std::fs::read_to_string(path).map_err(|err| Error::Settings {
                path: path.to_owned(),
                reason: err.to_string(),
            })?;

            let table: toml::Table = content.parse().map_err(|err: toml::de::Error| {
                Error::Settings {
                    path: path.to_owned(),
                    reason: err.to_string(),
                }
            })?;

            for (key, value) in table {
                if !key.chars().all(|c| c.is_ascii_uppercase() || c == '_') {
                    continue;
                }

                match (key.as_str(), value) {
                    ("OUTPUT_DIR", toml::Value::String(dir)) => {
                        settings.output_dir = PathBuf::from(dir);
                    }
                    ("LINK", toml::Value::String(link)) => settings.link = link,
                    ("ACTIVITIES", toml::Value::Array(entries)) => {
                        let mut activities = Vec::with_capacity(entries.len());
                        for entry in entries {
                            match entry {
                                toml::Value::String(name) => activities.push(name),
                                other => {
                                    return Err(Error::Settings {
                                        path: path.to_owned(),
                                        reason: format!(
                                            "ACTIVITIES entries must be strings, got {}",
                                            other.type_str()
                                        ),
                                    })
                                }
                            }
                        }
                        settings.activities = activities;
                    }
                    (known @ ("OUTPUT_DIR" | "LINK" | "ACTIVITIES"), other) => {
                        return Err(Error::Settings {
                            path: path.to_owned(),
                            reason: format!("{} has invalid type {}", known, other.type_str()),
                        })
                    }
                    (unknown, _) => {
                        logvbln!("Ignoring unrecognized settings key {}", unknown);
                    }
                }
            }
        }

        if !settings.output_dir.is_absolute() {
            settings.output_dir = std::env::current_dir()?.join(&settings.output_dir);
        }

        Ok(settings)
    }
}
