use chrono::Datelike;

use crate::data_types::outing::Outing;

/// Read-only projection over the outing collection: parallel column access
/// plus activity-scoped filtering. Year columns are precomputed once and
/// shared by every per-year aggregation.
pub struct RecordView<'a> {
    outings: &'a [Outing],
    years: Vec<i32>,
    year_uniq: Vec<i32>,
    year_labels: Vec<String>,
}

impl<'a> RecordView<'a> {
    pub fn new(outings: &'a [Outing]) -> Self {
        let years: Vec<i32> = outings.iter().map(|outing| outing.date.year()).collect();

        let mut year_uniq = years.clone();
        year_uniq.sort_unstable();
        year_uniq.dedup();

        let year_labels = year_uniq.iter().map(|year| year.to_string()).collect();

        Self {
            outings,
            years,
            year_uniq,
            year_labels,
        }
    }

    pub fn outings(&self) -> &'a [Outing] {
        self.outings
    }

    /// Per-record years, aligned with the outing sequence.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Distinct years, ascending.
    pub fn year_uniq(&self) -> &[i32] {
        &self.year_uniq
    }

    /// 4-digit-year labels for `year_uniq`, same order.
    pub fn year_labels(&self) -> &[String] {
        &self.year_labels
    }

    /// Project one column over all records.
    pub fn column<T>(&self, accessor: impl Fn(&'a Outing) -> T) -> Vec<T> {
        self.outings.iter().map(accessor).collect()
    }

    /// Project one column over the records of a single activity (full name),
    /// preserving record order. No matching records yields an empty column.
    pub fn filter_by_activity<T>(
        &self,
        accessor: impl Fn(&'a Outing) -> T,
        activity: &str,
    ) -> Vec<T> {
        self.outings
            .iter()
            .filter(|outing| outing.activity == activity)
            .map(accessor)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn outing(activity: &str, year: i32, area: &str) -> Outing {
        Outing {
            activity: activity.to_owned(),
            date: NaiveDate::from_ymd_opt(year, 8, 1).unwrap(),
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
    fn years_are_deduplicated_and_sorted() {
        let outings = vec![
            outing("escalade", 2012, "Verdon"),
            outing("escalade", 2010, "Verdon"),
            outing("raquette", 2010, "Vercors"),
        ];
        let view = RecordView::new(&outings);

        assert_eq!(view.years(), [2012, 2010, 2010]);
        assert_eq!(view.year_uniq(), [2010, 2012]);
        assert_eq!(view.year_labels(), ["2010", "2012"]);
    }

    #[test]
    fn filter_by_activity_preserves_order() {
        let outings = vec![
            outing("escalade", 2010, "Verdon"),
            outing("raquette", 2010, "Vercors"),
            outing("escalade", 2012, "Céüse"),
        ];
        let view = RecordView::new(&outings);

        let areas = view.filter_by_activity(|o| o.area.as_str(), "escalade");
        assert_eq!(areas, ["Verdon", "Céüse"]);
    }

    #[test]
    fn filtering_an_absent_activity_yields_empty() {
        let outings = vec![outing("escalade", 2010, "Verdon")];
        let view = RecordView::new(&outings);

        let filtered = view.filter_by_activity(|o| o.area.as_str(), "cascade de glace");
        assert!(filtered.is_empty());
    }

    #[test]
    fn empty_collection_has_no_years() {
        let view = RecordView::new(&[]);
        assert!(view.years().is_empty());
        assert!(view.year_uniq().is_empty());
        assert!(view.year_labels().is_empty());
    }
}
