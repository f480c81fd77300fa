use std::collections::BTreeMap;

use serde_derive::Serialize;

use super::Count;

/// Fixed-scale histogram: one value per scale label, in scale order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distribution {
    pub title: String,
    pub labels: Vec<&'static str>,
    pub values: Vec<Count>,
}

/// Open-vocabulary frequency list. Pairs serialize as `[label, count]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranking {
    pub title: String,
    pub values: Vec<(String, Count)>,
}

/// Cross-activity section of the report.
#[derive(Debug, Serialize)]
pub struct GlobalSection {
    pub activities: Ranking,
    /// One raw year list per observed activity, in observation order, left
    /// unbinned for the renderer's stacked chart.
    pub activities_per_year: Vec<Vec<i32>>,
    pub area: Ranking,
    pub cotation_globale: Distribution,
}

/// Per-activity section. Activities without a dedicated grade scale have no
/// `cotation` key at all in the serialized report.
#[derive(Debug, Serialize)]
pub struct ActivitySection {
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cotation: Option<Distribution>,
}

/// The complete report bundle, serialized as one JSON object. Per-activity
/// sections are flattened to the top level under their short names; the
/// `BTreeMap` keeps the serialized key order deterministic.
#[derive(Debug, Serialize)]
pub struct Report {
    pub activities: Vec<String>,
    pub nb_outings: usize,
    pub global: GlobalSection,
    #[serde(flatten)]
    pub per_activity: BTreeMap<String, ActivitySection>,
    pub date_generated: String,
    pub download_time: String,
    pub parse_time: String,
    pub generation_time: String,
    pub total_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_pairs_serialize_as_arrays() {
        let ranking = Ranking {
            title: "Répartition par région".to_owned(),
            values: vec![("Chartreuse".to_owned(), 4), ("Other".to_owned(), 0)],
        };

        let json = serde_json::to_value(&ranking).unwrap();
        assert_eq!(json["values"][0][0], "Chartreuse");
        assert_eq!(json["values"][0][1], 4);
        assert_eq!(json["values"][1][0], "Other");
    }

    #[test]
    fn absent_cotation_is_omitted() {
        let section = ActivitySection {
            full_name: "raquette".to_owned(),
            cotation: None,
        };

        let json = serde_json::to_value(&section).unwrap();
        assert!(json.get("cotation").is_none());
        assert_eq!(json["full_name"], "raquette");
    }
}
