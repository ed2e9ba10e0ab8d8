//! Round instants to interval boundaries — 9:37 rounded to a 5-minute
//! interval is 9:35 — for statistical bucketing, analytics aggregation keys,
//! and rate-limiting windows.
//!
//! The crate is three small value types: [`Unit`] enumerates the supported
//! granularities, [`Interval`] is a count of one unit with rounding and
//! stepping operations, and [`FormatSet`] picks a unit-appropriate strftime
//! pattern for rendering rounded instants. Instants are
//! `chrono::DateTime<Tz>`; rounding happens in the instant's own calendar and
//! time zone, never converting zones.

pub mod error;
pub mod format;
pub mod interval;
pub mod unit;

pub use error::IntervalError;
pub use format::FormatSet;
pub use interval::{format_rounded, round, Interval};
pub use unit::Unit;
