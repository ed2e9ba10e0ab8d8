//! Time units supported for interval rounding.

use std::fmt;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// A unit of time: seconds, minutes, hours or days.
///
/// Variants are declared in ascending granularity, so the derived ordering
/// means "at least this coarse": `None < Seconds < Minutes < Hours < Days`.
/// The format fallback chain relies on this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// No unit — rounding disabled.
    None,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl Unit {
    /// The fixed duration of one unit; [`Unit::None`] maps to zero.
    pub fn duration(self) -> TimeDelta {
        match self {
            Unit::None => TimeDelta::zero(),
            Unit::Seconds => TimeDelta::seconds(1),
            Unit::Minutes => TimeDelta::minutes(1),
            Unit::Hours => TimeDelta::hours(1),
            Unit::Days => TimeDelta::hours(24),
        }
    }

    /// Short suffix used in interval notation ("5m", "2h", "1d").
    pub const fn label(self) -> &'static str {
        match self {
            Unit::None => "none",
            Unit::Seconds => "s",
            Unit::Minutes => "m",
            Unit::Hours => "h",
            Unit::Days => "d",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
