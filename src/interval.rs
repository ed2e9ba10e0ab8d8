//! Interval arithmetic: rounding instants down to a boundary grid and
//! stepping between boundaries.

use std::fmt;

use chrono::{
    DateTime, Datelike, Days, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, Offset,
    TimeDelta, TimeZone, Timelike,
};
use serde::{Deserialize, Serialize};

use crate::error::IntervalError;
use crate::format::FormatSet;
use crate::unit::Unit;

/// A multiple of a time unit (5 minutes, 1 hour, 2 days) defining a repeating
/// boundary grid.
///
/// An interval with [`Unit::None`] is the canonical "no rounding" value;
/// every operation passes instants through unchanged. Intervals are
/// immutable — operations return new values or new instants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub count: u32,
    pub unit: Unit,
}

/// Units tried during inference, coarsest first.
const UNITS: [Unit; 4] = [Unit::Days, Unit::Hours, Unit::Minutes, Unit::Seconds];

impl Interval {
    /// The canonical "no rounding" interval.
    pub const NONE: Self = Self::new(0, Unit::None);
    pub const MINUTE: Self = Self::new(1, Unit::Minutes);
    pub const FIVE_MINUTES: Self = Self::new(5, Unit::Minutes);
    pub const QUARTER_HOUR: Self = Self::new(15, Unit::Minutes);
    pub const HOUR: Self = Self::new(1, Unit::Hours);
    pub const DAY: Self = Self::new(1, Unit::Days);

    /// Literal construction. The count is not validated against the unit;
    /// callers are trusted.
    pub const fn new(count: u32, unit: Unit) -> Self {
        Self { count, unit }
    }

    /// Infer the interval corresponding to a raw duration, or an error if the
    /// duration cannot be expressed as one. A zero duration yields
    /// [`Interval::NONE`].
    ///
    /// Invalid durations are negative ones, durations mixing several units
    /// (2h5m), and positive durations below one second (350ms). The
    /// mixed-units error carries the truncated-division interval, so callers
    /// that can live with the lost remainder may still use it.
    pub fn try_from_duration(d: TimeDelta) -> Result<Self, IntervalError> {
        if d == TimeDelta::zero() {
            return Ok(Self::NONE);
        }
        if d < TimeDelta::zero() {
            return Err(IntervalError::NegativeDuration);
        }

        for unit in UNITS {
            let step = unit.duration();
            if d >= step {
                // The scan assigns Days to anything a day or longer, so the
                // quotient fits in u32 across TimeDelta's whole range.
                let count = (d.num_seconds() / step.num_seconds()) as u32;
                let truncated = Self::new(count, unit);
                if truncated.to_duration() != d {
                    tracing::debug!(
                        duration = %d,
                        truncated = %truncated,
                        "duration mixes units; returning truncated interval"
                    );
                    return Err(IntervalError::DurationMixesUnits { truncated });
                }
                return Ok(truncated);
            }
        }

        Err(IntervalError::DurationTooSmall)
    }

    /// Like [`Interval::try_from_duration`], but panics on an invalid
    /// duration, for call sites that treat one as a programming error.
    pub fn from_duration(d: TimeDelta) -> Self {
        match Self::try_from_duration(d) {
            Ok(interval) => interval,
            Err(err) => panic!("invalid interval duration {d}: {err}"),
        }
    }

    /// Whether the unit is [`Unit::None`], i.e. no rounding is configured.
    pub const fn is_none(&self) -> bool {
        matches!(self.unit, Unit::None)
    }

    /// Total span of one interval: count × unit duration.
    pub fn to_duration(&self) -> TimeDelta {
        TimeDelta::seconds(self.unit.duration().num_seconds() * i64::from(self.count))
    }

    /// Round `t` down to the most recent interval boundary, in `t`'s own
    /// calendar and time zone. E.g. 9:37 rounded to a 5-minute interval is
    /// 9:35; rounded to a 2-hour interval, 8:00. A [`Unit::None`] interval
    /// returns `t` unchanged.
    ///
    /// Day rounding truncates the day-of-month field, anchored at day 1 of
    /// the month rather than at a fixed epoch; a truncated day of 0
    /// normalizes to the last day of the previous month.
    pub fn round<Tz: TimeZone>(&self, t: DateTime<Tz>) -> DateTime<Tz> {
        let n = self.count;
        let local = match self.unit {
            Unit::None => return t,
            Unit::Seconds => t
                .date_naive()
                .and_hms_opt(t.hour(), t.minute(), t.second() / n * n),
            Unit::Minutes => t.date_naive().and_hms_opt(t.hour(), t.minute() / n * n, 0),
            Unit::Hours => t.date_naive().and_hms_opt(t.hour() / n * n, 0, 0),
            Unit::Days => {
                let day = t.day() / n * n;
                let first = NaiveDate::from_ymd_opt(t.year(), t.month(), 1)
                    .expect("first of a valid month");
                (first + TimeDelta::days(i64::from(day) - 1)).and_hms_opt(0, 0, 0)
            }
        };
        let local = local.expect("truncated clock fields are in range");
        resolve_local(&t.timezone(), &t, local)
    }

    /// Advance `t` by `n` whole intervals (negative `n` steps backward)
    /// without rounding first: adding three 5-minute intervals to 9:37 gives
    /// 9:52. Sub-day units add exact wall-clock duration; day intervals add
    /// calendar days, so month rollover and daylight-saving shifts follow the
    /// calendar instead of being assumed to be 24-hour blocks.
    pub fn add_to<Tz: TimeZone>(&self, t: DateTime<Tz>, n: i32) -> DateTime<Tz> {
        match self.unit {
            Unit::None => t,
            Unit::Seconds | Unit::Minutes | Unit::Hours => t + self.to_duration() * n,
            Unit::Days => {
                let days = i64::from(self.count) * i64::from(n);
                let local = if days >= 0 {
                    t.naive_local().checked_add_days(Days::new(days as u64))
                } else {
                    t.naive_local().checked_sub_days(Days::new(days.unsigned_abs()))
                };
                let local = local.expect("date within the representable range");
                resolve_local(&t.timezone(), &t, local)
            }
        }
    }

    /// The start of the nth interval after the one `t` falls into. E.g. the
    /// next 5-minute interval after 9:37 starts at 9:40.
    pub fn next<Tz: TimeZone>(&self, t: DateTime<Tz>, n: i32) -> DateTime<Tz> {
        let rounded = self.round(t);
        self.add_to(rounded, n)
    }

    /// The start of the nth interval before the one `t` falls into. E.g. the
    /// previous 5-minute interval before 9:37 starts at 9:30. Equivalent to
    /// [`Interval::next`] with a negated `n`.
    pub fn prev<Tz: TimeZone>(&self, t: DateTime<Tz>, n: i32) -> DateTime<Tz> {
        self.next(t, -n)
    }

    /// Round `t` to this interval, then render it with the pattern the
    /// format set selects for this interval's unit.
    pub fn format_rounded<Tz: TimeZone>(&self, t: DateTime<Tz>, formats: &FormatSet) -> String
    where
        Tz::Offset: fmt::Display,
    {
        formats.format(&self.round(t), self.unit)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("none")
        } else {
            write!(f, "{}{}", self.count, self.unit)
        }
    }
}

/// Re-attach `tz` to a truncated local time. An ambiguous local time (DST
/// fall-back) resolves to the earlier instant; a nonexistent one
/// (spring-forward gap) keeps the offset `t` already had.
fn resolve_local<Tz: TimeZone>(tz: &Tz, t: &DateTime<Tz>, local: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(resolved) => resolved,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => {
            let offset = t.offset().fix();
            let utc = local - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
            DateTime::<FixedOffset>::from_naive_utc_and_offset(utc, offset).with_timezone(tz)
        }
    }
}

/// Round `t` to the interval given as a raw duration. E.g. 9:37 rounded to a
/// 5-minute interval is 9:35. Panics if the duration is not a valid interval;
/// see [`Interval::try_from_duration`].
pub fn round<Tz: TimeZone>(t: DateTime<Tz>, d: TimeDelta) -> DateTime<Tz> {
    Interval::from_duration(d).round(t)
}

/// Round `t` to the interval given as a raw duration and render it with the
/// given format set. Panics if the duration is not a valid interval.
pub fn format_rounded<Tz: TimeZone>(t: DateTime<Tz>, d: TimeDelta, formats: &FormatSet) -> String
where
    Tz::Offset: fmt::Display,
{
    Interval::from_duration(d).format_rounded(t, formats)
}
