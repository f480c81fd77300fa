use std::collections::BTreeMap;

use crate::{
    data_types::{
        activity::Activity,
        outing::Outings,
        report::{ActivitySection, GlobalSection, Report},
    },
    error::Result,
    logln,
};

use self::{
    generators::{ActivityGenerator, GlobalGenerator},
    record_view::RecordView,
};

pub mod aggregator;
pub mod generators;
pub mod record_view;

/// Orchestrates one report: resolves the observed activities against the
/// closed taxonomy, runs the global and per-activity generators over a
/// single record view, and assembles the result bundle.
///
/// An empty collection is not an error: the report comes back with zero
/// outings, no per-activity sections and zero-filled histograms. Timing and
/// date metadata are stamped by the caller.
pub struct ReportPipeline<'a> {
    outings: &'a Outings,
}

impl<'a> ReportPipeline<'a> {
    const CC: &'static str = "ReportPipeline";

    pub fn new(outings: &'a Outings) -> Self {
        Self { outings }
    }

    pub fn run(&self) -> Result<Report> {
        // An unknown activity must abort before any aggregation runs.
        let mut present: Vec<Activity> = Vec::with_capacity(self.outings.activities().len());
        for name in self.outings.activities() {
            present.push(Activity::from_full_name(name)?);
        }

        logln!(
            "Aggregating {} outings over {} activities",
            self.outings.nb_outings(),
            present.len()
        );

        let view = RecordView::new(self.outings.outings());

        let global = GlobalGenerator::new(&view, self.outings.activities());
        let global_section = GlobalSection {
            activities: global.activities(),
            activities_per_year: global.activities_per_year(),
            area: global.area(),
            cotation_globale: global.cotation_globale(),
        };

        let mut per_activity = BTreeMap::new();
        for activity in &present {
            let generator = ActivityGenerator::new(*activity, &view);
            per_activity.insert(
                activity.short_name().to_owned(),
                ActivitySection {
                    full_name: activity.full_name().to_owned(),
                    cotation: generator.cotation(),
                },
            );
        }

        let mut activities: Vec<String> = present
            .iter()
            .map(|activity| activity.short_name().to_owned())
            .collect();
        activities.sort_unstable();

        Ok(Report {
            activities,
            nb_outings: self.outings.nb_outings(),
            global: global_section,
            per_activity,
            date_generated: String::new(),
            download_time: format!("{:.2}", self.outings.download_time()),
            parse_time: format!("{:.2}", self.outings.parse_time()),
            generation_time: String::new(),
            total_time: String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::{
        data_types::outing::{Outing, Outings},
        error::Error,
    };

    use super::*;

    fn outing(activity: &str, year: i32, area: &str) -> Outing {
        Outing {
            activity: activity.to_owned(),
            date: NaiveDate::from_ymd_opt(year, 1, 20).unwrap(),
            area: area.to_owned(),
            gain: 0,
            cot_globale: None,
            cot_libre: None,
            cot_oblige: None,
            cot_glace: None,
            cot_rando: None,
        }
    }

    #[test]
    fn empty_collection_yields_all_zero_report() {
        let outings = Outings::new(Vec::new(), 0.0, 0.0);
        let report = ReportPipeline::new(&outings).run().unwrap();

        assert_eq!(report.nb_outings, 0);
        assert!(report.activities.is_empty());
        assert!(report.per_activity.is_empty());
        assert!(report.global.activities.values.is_empty());
        assert!(report.global.activities_per_year.is_empty());
        assert_eq!(report.global.cotation_globale.values, vec![0; 16]);
        assert_eq!(
            report.global.area.values,
            [(super::aggregator::OTHER_LABEL.to_owned(), 0)]
        );
    }

    #[test]
    fn unknown_activity_aborts_generation() {
        let outings = Outings::new(vec![outing("base jump", 2013, "Chamonix")], 0.0, 0.0);
        let err = ReportPipeline::new(&outings).run().unwrap_err();

        assert!(matches!(err, Error::UnknownActivity(name) if name == "base jump"));
    }

    #[test]
    fn activities_list_is_sorted_short_names() {
        let outings = Outings::new(
            vec![
                outing("raquette", 2010, "Vercors"),
                outing("escalade", 2011, "Verdon"),
                outing("cascade de glace", 2012, "Écrins"),
            ],
            0.0,
            0.0,
        );
        let report = ReportPipeline::new(&outings).run().unwrap();

        assert_eq!(report.activities, ["escalade", "glace", "raquette"]);
        assert_eq!(report.nb_outings, 3);
        assert_eq!(report.per_activity["raquette"].full_name, "raquette");
        assert!(report.per_activity["raquette"].cotation.is_none());
        assert!(report.per_activity["glace"].cotation.is_some());
    }

    #[test]
    fn producer_timings_are_carried_over() {
        let outings = Outings::new(Vec::new(), 1.234, 0.5);
        let report = ReportPipeline::new(&outings).run().unwrap();

        assert_eq!(report.download_time, "1.23");
        assert_eq!(report.parse_time, "0.50");
    }
}
