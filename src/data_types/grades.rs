use super::Count;

/// An ordered, activity-specific difficulty scale used as histogram bins.
///
/// A histogram over a scale always has exactly one value per label, in scale
/// order. Values outside the scale are silently dropped from the histogram.
pub struct GradeScale {
    labels: &'static [&'static str],
    strip_plus: bool,
}

impl GradeScale {
    const fn new(labels: &'static [&'static str], strip_plus: bool) -> Self {
        Self { labels, strip_plus }
    }

    pub fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Map a raw grade onto the scale's canonical form. Scales that do not
    /// distinguish `+` grades drop the trailing modifier, so `6a+` counts as
    /// `6a`. Idempotent.
    pub fn normalize<'a>(&self, value: &'a str) -> &'a str {
        if self.strip_plus {
            value.strip_suffix('+').unwrap_or(value)
        } else {
            value
        }
    }

    /// All-zero histogram, one bucket per label.
    pub fn empty_histogram(&self) -> Vec<Count> {
        vec![0; self.labels.len()]
    }
}

/// Global alpine scale, applicable across all activities.
pub const COTATION_GLOBALE: GradeScale = GradeScale::new(
    &[
        "F", "PD-", "PD", "PD+", "AD-", "AD", "AD+", "D-", "D", "D+", "TD-", "TD", "TD+", "ED-",
        "ED", "ED+",
    ],
    false,
);

/// Free-climbing scale. Does not distinguish `+` grades.
pub const COTATION_ESCALADE: GradeScale = GradeScale::new(
    &[
        "3a", "3b", "3c", "4a", "4b", "4c", "5a", "5b", "5c", "6a", "6b", "6c", "7a", "7b", "7c",
        "8a",
    ],
    true,
);

/// Ice-climbing scale.
pub const COTATION_GLACE: GradeScale = GradeScale::new(
    &["2", "3", "3+", "4", "4+", "5", "5+", "6", "6+", "7", "7+"],
    false,
);

/// Hiking difficulty scale.
pub const COTATION_RANDO: GradeScale =
    GradeScale::new(&["T1", "T2", "T3", "T4", "T5", "T6"], false);
