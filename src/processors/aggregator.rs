use std::collections::HashMap;

use crate::data_types::{grades::GradeScale, Count};

/// Synthetic bucket appended by [`Aggregator::top_n_with_remainder`].
pub const OTHER_LABEL: &str = "Other";

/// Generic counting primitives, independent of activity semantics.
pub struct Aggregator {}

impl Aggregator {
    /// Count occurrences of each value, aligned to the scale's label order.
    /// Values are normalized through the scale first; values that still fall
    /// outside the scale are dropped from the histogram.
    pub fn bucket_by_label(values: &[&str], scale: &GradeScale) -> Vec<Count> {
        let mut counts: HashMap<&str, Count> = HashMap::new();
        for value in values {
            *counts.entry(scale.normalize(value)).or_insert(0) += 1;
        }

        scale
            .labels()
            .iter()
            .map(|label| counts.get(label).copied().unwrap_or(0))
            .collect()
    }

    /// Number of records per distinct year, one count per `year_uniq` entry
    /// in the same (ascending) order.
    pub fn count_by_year(years: &[i32], year_uniq: &[i32]) -> Vec<Count> {
        year_uniq
            .iter()
            .map(|uniq| years.iter().filter(|year| *year == uniq).count() as Count)
            .collect()
    }

    /// Per-year sums of a numeric column aligned with `years`.
    pub fn sum_by_year(values: &[u32], years: &[i32], year_uniq: &[i32]) -> Vec<Count> {
        year_uniq
            .iter()
            .map(|uniq| {
                values
                    .iter()
                    .zip(years)
                    .filter(|(_, year)| *year == uniq)
                    .map(|(value, _)| *value as Count)
                    .sum()
            })
            .collect()
    }

    /// The up-to-`n` most frequent values as `(label, count)` pairs in
    /// descending count order, ties broken by first-encounter order,
    /// followed by exactly one `(Other, remainder)` pair, emitted even when
    /// the remainder is zero.
    pub fn top_n_with_remainder(
        values: impl IntoIterator<Item = String>,
        n: usize,
    ) -> Vec<(String, Count)> {
        let mut order: Vec<String> = Vec::new();
        let mut counts: HashMap<String, Count> = HashMap::new();
        for value in values {
            if !counts.contains_key(&value) {
                order.push(value.clone());
            }
            *counts.entry(value).or_insert(0) += 1;
        }

        let total: Count = counts.values().sum();

        let mut ranked: Vec<(String, Count)> = order
            .into_iter()
            .map(|label| {
                let count = counts[&label];
                (label, count)
            })
            .collect();
        // stable sort: equal counts keep first-encounter order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);

        let kept: Count = ranked.iter().map(|(_, count)| count).sum();
        ranked.push((OTHER_LABEL.to_owned(), total - kept));

        ranked
    }
}
