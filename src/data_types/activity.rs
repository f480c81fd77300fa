use crate::error::Error;

/// The seven camptocamp activity categories. The taxonomy is closed: outing
/// records carry the full activity name as produced by the parsing layer,
/// and anything outside this set is a data contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    Alpinisme,
    Escalade,
    Glace,
    Rando,
    Raquette,
    Rocher,
    Ski,
}

impl Activity {
    pub const ALL: [Activity; 7] = [
        Activity::Alpinisme,
        Activity::Escalade,
        Activity::Glace,
        Activity::Rando,
        Activity::Raquette,
        Activity::Rocher,
        Activity::Ski,
    ];

    /// Short name, used as key in the serialized report.
    pub fn short_name(&self) -> &'static str {
        match self {
            Activity::Alpinisme => "alpinisme",
            Activity::Escalade => "escalade",
            Activity::Glace => "glace",
            Activity::Rando => "rando",
            Activity::Raquette => "raquette",
            Activity::Rocher => "rocher",
            Activity::Ski => "ski",
        }
    }

    /// Full name, as found in the `activity` field of outing records.
    pub fn full_name(&self) -> &'static str {
        match self {
            Activity::Alpinisme => "alpinisme neige, glace, mixte",
            Activity::Escalade => "escalade",
            Activity::Glace => "cascade de glace",
            Activity::Rando => "randonnée pédestre",
            Activity::Raquette => "raquette",
            Activity::Rocher => "rocher haute montagne",
            Activity::Ski => "ski, surf",
        }
    }

    pub fn from_full_name(name: &str) -> Result<Activity, Error> {
        Activity::ALL
            .iter()
            .copied()
            .find(|activity| activity.full_name() == name)
            .ok_or_else(|| Error::UnknownActivity(name.to_owned()))
    }

    pub fn from_short_name(name: &str) -> Result<Activity, Error> {
        Activity::ALL
            .iter()
            .copied()
            .find(|activity| activity.short_name() == name)
            .ok_or_else(|| Error::UnknownActivity(name.to_owned()))
    }
}
