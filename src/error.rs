//! Errors produced by duration-to-interval inference.

use thiserror::Error;

use crate::interval::Interval;

/// Why a raw duration could not be expressed as an [`Interval`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IntervalError {
    #[error("negative duration")]
    NegativeDuration,

    #[error("duration too small")]
    DurationTooSmall,

    /// The duration is not an exact multiple of any single unit (e.g. 2h5m).
    /// The truncated-division interval is carried along so callers that can
    /// live with the lost remainder may still use it.
    #[error("duration is a mix of multiple units")]
    DurationMixesUnits { truncated: Interval },
}
