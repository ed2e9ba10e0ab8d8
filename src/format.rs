//! Pattern selection for rendering rounded instants.

use std::fmt;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::unit::Unit;

/// Format patterns appropriate for instants rounded at various granularities.
///
/// Each field holds a chrono strftime pattern; `None` means no pattern is
/// configured for that granularity and [`FormatSet::format`] falls back to a
/// neighboring one. At least one pattern must be set — a set with every field
/// `None` is an invalid configuration, and formatting with one panics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSet {
    pub seconds: Option<String>,
    pub minutes: Option<String>,
    pub hours: Option<String>,
    pub days: Option<String>,
}

impl FormatSet {
    /// Patterns concise enough for storage keys but still readable at a
    /// glance: `20170107-093712`, `20170107-0937`, `20170107-09`, `20170107`.
    pub fn concise() -> Self {
        Self {
            seconds: Some("%Y%m%d-%H%M%S".to_owned()),
            minutes: Some("%Y%m%d-%H%M".to_owned()),
            hours: Some("%Y%m%d-%H".to_owned()),
            days: Some("%Y%m%d".to_owned()),
        }
    }

    /// Render `t` with the pattern appropriate for the given granularity.
    ///
    /// The pattern for the coarsest configured granularity at or below `unit`
    /// wins; if none of those is set, the fallback runs through seconds,
    /// minutes, hours and days, in that order.
    pub fn format<Tz: TimeZone>(&self, t: &DateTime<Tz>, unit: Unit) -> String
    where
        Tz::Offset: fmt::Display,
    {
        t.format(self.pattern_for(unit)).to_string()
    }

    fn pattern_for(&self, unit: Unit) -> &str {
        if unit >= Unit::Days {
            if let Some(pattern) = &self.days {
                return pattern;
            }
        }
        if unit >= Unit::Hours {
            if let Some(pattern) = &self.hours {
                return pattern;
            }
        }
        if unit >= Unit::Minutes {
            if let Some(pattern) = &self.minutes {
                return pattern;
            }
        }
        self.seconds
            .as_deref()
            .or(self.minutes.as_deref())
            .or(self.hours.as_deref())
            .or(self.days.as_deref())
            .expect("FormatSet has no patterns configured")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2017, 1, 7, 9, 37, 12).unwrap()
    }

    #[test]
    fn concise_pattern_per_unit() {
        let formats = FormatSet::concise();
        assert_eq!(formats.format(&sample(), Unit::Seconds), "20170107-093712");
        assert_eq!(formats.format(&sample(), Unit::Minutes), "20170107-0937");
        assert_eq!(formats.format(&sample(), Unit::Hours), "20170107-09");
        assert_eq!(formats.format(&sample(), Unit::Days), "20170107");
    }

    #[test]
    fn unit_none_uses_the_finest_available_pattern() {
        let formats = FormatSet::concise();
        assert_eq!(formats.format(&sample(), Unit::None), "20170107-093712");
    }

    #[test]
    fn coarse_unit_falls_back_to_finer_patterns() {
        let formats = FormatSet {
            minutes: Some("%H%M".to_owned()),
            ..Default::default()
        };
        assert_eq!(formats.format(&sample(), Unit::Days), "0937");
    }

    #[test]
    fn fine_unit_falls_back_to_coarser_patterns() {
        let formats = FormatSet {
            days: Some("%Y%m%d".to_owned()),
            ..Default::default()
        };
        assert_eq!(formats.format(&sample(), Unit::Seconds), "20170107");
    }

    #[test]
    fn seconds_pattern_wins_over_other_fallbacks() {
        let formats = FormatSet {
            seconds: Some("%H%M%S".to_owned()),
            hours: Some("%H".to_owned()),
            ..Default::default()
        };
        // Unit::Minutes has no minutes pattern; seconds comes first in the
        // fallback order.
        assert_eq!(formats.format(&sample(), Unit::Minutes), "093712");
    }

    #[test]
    #[should_panic(expected = "no patterns configured")]
    fn empty_set_panics() {
        FormatSet::default().format(&sample(), Unit::Minutes);
    }

    #[test]
    fn deserializes_partial_configuration() {
        let formats: FormatSet = serde_json::from_str(r#"{"minutes":"%H%M"}"#).unwrap();
        assert_eq!(formats.minutes.as_deref(), Some("%H%M"));
        assert!(formats.seconds.is_none());
        assert!(formats.hours.is_none());
        assert!(formats.days.is_none());
    }
}
