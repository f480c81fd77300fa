use chrono::NaiveDate;
use serde_derive::{Deserialize, Serialize};

/// One recorded outing, as produced by the upstream fetch/parse layer.
///
/// The `cot_*` fields are nullable ordinal grades, each drawn from one of the
/// scales in [`super::grades`]; a grade is `None` when the scale does not
/// apply to the outing's activity.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Outing {
    pub activity: String,
    pub date: NaiveDate,
    pub area: String,
    /// Elevation gain in metres. Not serialized in the report yet, but kept
    /// available for per-year gain bucketing.
    #[serde(default)]
    pub gain: u32,
    #[serde(default)]
    pub cot_globale: Option<String>,
    #[serde(default)]
    pub cot_libre: Option<String>,
    #[serde(default)]
    pub cot_oblige: Option<String>,
    #[serde(default)]
    pub cot_glace: Option<String>,
    #[serde(default)]
    pub cot_rando: Option<String>,
}

/// The full outing collection for one report, plus the metadata the producer
/// hands over with it. Immutable once built; the aggregation engine only ever
/// derives new values from it.
#[derive(Debug, Deserialize)]
#[serde(from = "RawOutings")]
pub struct Outings {
    outings: Vec<Outing>,
    activities: Vec<String>,
    download_time: f64,
    parse_time: f64,
}

#[derive(Deserialize)]
struct RawOutings {
    outings: Vec<Outing>,
    #[serde(default)]
    download_time: f64,
    #[serde(default)]
    parse_time: f64,
}

impl From<RawOutings> for Outings {
    fn from(raw: RawOutings) -> Self {
        Outings::new(raw.outings, raw.download_time, raw.parse_time)
    }
}

impl Outings {
    pub fn new(outings: Vec<Outing>, download_time: f64, parse_time: f64) -> Self {
        // Distinct full activity names, in first-appearance order.
        let mut activities: Vec<String> = Vec::new();
        for outing in &outings {
            if !activities.iter().any(|name| name == &outing.activity) {
                activities.push(outing.activity.clone());
            }
        }

        Self {
            outings,
            activities,
            download_time,
            parse_time,
        }
    }

    pub fn outings(&self) -> &[Outing] {
        &self.outings
    }

    pub fn activities(&self) -> &[String] {
        &self.activities
    }

    pub fn nb_outings(&self) -> usize {
        self.outings.len()
    }

    pub fn download_time(&self) -> f64 {
        self.download_time
    }

    pub fn parse_time(&self) -> f64 {
        self.parse_time
    }
}
