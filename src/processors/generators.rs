use chrono::Datelike;

use crate::data_types::{
    activity::Activity,
    grades::{GradeScale, COTATION_ESCALADE, COTATION_GLACE, COTATION_GLOBALE, COTATION_RANDO},
    outing::Outing,
    report::{Distribution, Ranking},
    Count,
};

use super::{aggregator::Aggregator, record_view::RecordView};

/// How many regions are ranked individually before the rest collapses into
/// the `Other` bucket.
const TOP_AREAS: usize = 10;

/// Cross-activity distributions.
pub struct GlobalGenerator<'a> {
    view: &'a RecordView<'a>,
    activities: &'a [String],
}

impl<'a> GlobalGenerator<'a> {
    pub fn new(view: &'a RecordView<'a>, activities: &'a [String]) -> Self {
        Self { view, activities }
    }

    /// Outing counts per activity, in observation order.
    pub fn activities(&self) -> Ranking {
        let values = self
            .activities
            .iter()
            .map(|name| {
                let count = self
                    .view
                    .outings()
                    .iter()
                    .filter(|outing| &outing.activity == name)
                    .count() as Count;
                (name.clone(), count)
            })
            .collect();

        Ranking {
            title: "Répartition par activité".to_owned(),
            values,
        }
    }

    /// One raw year list per observed activity, in observation order. Left
    /// unbinned; the renderer bins these itself for its stacked chart.
    pub fn activities_per_year(&self) -> Vec<Vec<i32>> {
        self.activities
            .iter()
            .map(|name| self.view.filter_by_activity(|outing| outing.date.year(), name))
            .collect()
    }

    /// Outing counts per area, top regions plus an `Other` remainder.
    pub fn area(&self) -> Ranking {
        let areas = self.view.column(|outing| outing.area.clone());

        Ranking {
            title: "Répartition par région".to_owned(),
            values: Aggregator::top_n_with_remainder(areas, TOP_AREAS),
        }
    }

    /// Global alpine grade histogram over all records, unfiltered.
    pub fn cotation_globale(&self) -> Distribution {
        let values: Vec<&str> = self
            .view
            .column(|outing| outing.cot_globale.as_deref())
            .into_iter()
            .flatten()
            .collect();

        Distribution {
            title: "Cotation globale".to_owned(),
            labels: COTATION_GLOBALE.labels().to_vec(),
            values: Aggregator::bucket_by_label(&values, &COTATION_GLOBALE),
        }
    }
}

/// Per-activity summary. Zero matching records is fine and yields full
/// length all-zero histograms.
pub struct ActivityGenerator<'a> {
    activity: Activity,
    view: &'a RecordView<'a>,
}

impl<'a> ActivityGenerator<'a> {
    pub fn new(activity: Activity, view: &'a RecordView<'a>) -> Self {
        Self { activity, view }
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    /// The activity's grade histogram, or `None` for the four activities
    /// without a dedicated scale.
    pub fn cotation(&self) -> Option<Distribution> {
        match self.activity {
            Activity::Escalade => Some(self.grade_distribution(
                "Cotation escalade",
                &COTATION_ESCALADE,
                |outing| outing.cot_libre.as_deref(),
            )),
            Activity::Glace => Some(self.grade_distribution(
                "Cotation glace",
                &COTATION_GLACE,
                |outing| outing.cot_glace.as_deref(),
            )),
            Activity::Rando => Some(self.grade_distribution(
                "Cotation rando",
                &COTATION_RANDO,
                |outing| outing.cot_rando.as_deref(),
            )),
            Activity::Alpinisme | Activity::Raquette | Activity::Rocher | Activity::Ski => None,
        }
    }

    /// Obligatory-grade histogram over the free-climbing scale. Not part of
    /// the serialized report, kept available for future sections.
    pub fn cot_oblige(&self) -> Option<Vec<Count>> {
        match self.activity {
            Activity::Escalade => {
                let values: Vec<&str> = self
                    .view
                    .filter_by_activity(
                        |outing| outing.cot_oblige.as_deref(),
                        self.activity.full_name(),
                    )
                    .into_iter()
                    .flatten()
                    .collect();
                Some(Aggregator::bucket_by_label(&values, &COTATION_ESCALADE))
            }
            _ => None,
        }
    }

    /// Elevation gain summed per distinct year (all years of the full
    /// collection, so rows stay aligned across activities). Not serialized
    /// yet; kept available for future bucketing.
    pub fn gain_per_year(&self) -> Vec<Count> {
        let full_name = self.activity.full_name();
        let gains = self.view.filter_by_activity(|outing| outing.gain, full_name);
        let years = self
            .view
            .filter_by_activity(|outing| outing.date.year(), full_name);

        Aggregator::sum_by_year(&gains, &years, self.view.year_uniq())
    }

    fn grade_distribution(
        &self,
        title: &str,
        scale: &'static GradeScale,
        accessor: impl Fn(&'a Outing) -> Option<&'a str>,
    ) -> Distribution {
        let values: Vec<&str> = self
            .view
            .filter_by_activity(accessor, self.activity.full_name())
            .into_iter()
            .flatten()
            .collect();

        Distribution {
            title: title.to_owned(),
            labels: scale.labels().to_vec(),
            values: Aggregator::bucket_by_label(&values, scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn outing(activity: &str, year: i32, area: &str) -> Outing {
        Outing {
            activity: activity.to_owned(),
            date: NaiveDate::from_ymd_opt(year, 7, 14).unwrap(),
            area: area.to_owned(),
            gain: 0,
            cot_globale: None,
            cot_libre: None,
            cot_oblige: None,
            cot_glace: None,
            cot_rando: None,
        }
    }

    fn climbing(year: i32, area: &str, libre: &str) -> Outing {
        Outing {
            cot_libre: Some(libre.to_owned()),
            cot_globale: Some("AD".to_owned()),
            ..outing("escalade", year, area)
        }
    }

    #[test]
    fn activities_ranking_counts_in_observation_order() {
        let outings = vec![
            outing("raquette", 2010, "Vercors"),
            climbing(2011, "Verdon", "6a"),
            outing("raquette", 2011, "Vercors"),
        ];
        let view = RecordView::new(&outings);
        let observed = ["raquette".to_owned(), "escalade".to_owned()];
        let global = GlobalGenerator::new(&view, &observed);

        let ranking = global.activities();
        assert_eq!(ranking.title, "Répartition par activité");
        assert_eq!(
            ranking.values,
            [("raquette".to_owned(), 2), ("escalade".to_owned(), 1)]
        );
    }

    #[test]
    fn activities_per_year_stays_unbinned() {
        let outings = vec![
            outing("raquette", 2010, "Vercors"),
            climbing(2011, "Verdon", "6a"),
            outing("raquette", 2012, "Vercors"),
        ];
        let view = RecordView::new(&outings);
        let observed = ["raquette".to_owned(), "escalade".to_owned()];
        let global = GlobalGenerator::new(&view, &observed);

        assert_eq!(global.activities_per_year(), [vec![2010, 2012], vec![2011]]);
    }

    #[test]
    fn cotation_globale_is_unfiltered() {
        let outings = vec![
            climbing(2011, "Verdon", "6a"),
            Outing {
                cot_globale: Some("AD".to_owned()),
                ..outing("raquette", 2010, "Vercors")
            },
        ];
        let view = RecordView::new(&outings);
        let global = GlobalGenerator::new(&view, &[]);

        let distribution = global.cotation_globale();
        assert_eq!(distribution.labels.len(), 16);
        // both outings' AD grades are counted, whatever the activity
        assert_eq!(distribution.values[5], 2);
        assert_eq!(distribution.values.iter().sum::<Count>(), 2);
    }

    #[test]
    fn escalade_cotation_strips_plus_and_filters_by_activity() {
        let outings = vec![
            climbing(2011, "Verdon", "6a+"),
            climbing(2011, "Verdon", "6a"),
            // a hiking outing with a stray free-climbing grade must not leak
            // into the escalade histogram
            Outing {
                cot_libre: Some("6a".to_owned()),
                ..outing("randonnée pédestre", 2011, "Vercors")
            },
        ];
        let view = RecordView::new(&outings);
        let generator = ActivityGenerator::new(Activity::Escalade, &view);

        let distribution = generator.cotation().unwrap();
        assert_eq!(distribution.title, "Cotation escalade");
        assert_eq!(distribution.values[9], 2); // "6a", "+" stripped
        assert_eq!(distribution.values.iter().sum::<Count>(), 2);
    }

    #[test]
    fn zero_matching_records_yield_all_zero_histogram() {
        let outings = vec![climbing(2011, "Verdon", "6a")];
        let view = RecordView::new(&outings);
        let generator = ActivityGenerator::new(Activity::Glace, &view);

        let distribution = generator.cotation().unwrap();
        assert_eq!(distribution.labels.len(), 11);
        assert!(distribution.values.iter().all(|count| *count == 0));
    }

    #[test]
    fn pass_through_activities_have_no_cotation() {
        let view = RecordView::new(&[]);
        for activity in [
            Activity::Alpinisme,
            Activity::Raquette,
            Activity::Rocher,
            Activity::Ski,
        ] {
            assert!(ActivityGenerator::new(activity, &view).cotation().is_none());
        }
    }

    #[test]
    fn cot_oblige_only_exists_for_escalade() {
        let outings = vec![Outing {
            cot_oblige: Some("5c".to_owned()),
            ..climbing(2011, "Verdon", "6a")
        }];
        let view = RecordView::new(&outings);

        let escalade = ActivityGenerator::new(Activity::Escalade, &view);
        let histogram = escalade.cot_oblige().unwrap();
        assert_eq!(histogram[8], 1); // "5c"

        assert!(ActivityGenerator::new(Activity::Rando, &view)
            .cot_oblige()
            .is_none());
    }

    #[test]
    fn gain_per_year_sums_only_the_generator_activity() {
        let outings = vec![
            Outing {
                gain: 800,
                ..climbing(2010, "Verdon", "6a")
            },
            Outing {
                gain: 400,
                ..climbing(2012, "Verdon", "6a")
            },
            Outing {
                gain: 1200,
                ..outing("raquette", 2011, "Vercors")
            },
        ];
        let view = RecordView::new(&outings);
        let generator = ActivityGenerator::new(Activity::Escalade, &view);

        assert_eq!(generator.gain_per_year(), [800, 0, 400]);
    }
}
