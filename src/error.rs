use thiserror::Error;

use crate::measurement::SatelliteId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Satellite identifiers are formatted as `<letter>#<svid>`, for example `G#03`.
    #[error("invalid satellite identifier \"{0}\"")]
    InvalidSatelliteId(String),

    /// A status report may only be attached to the result of the same satellite.
    #[error("status of {1} does not match {0}")]
    StatusMismatch(SatelliteId, SatelliteId),

    /// Each clock snapshot is valid for a single batch of measurements.
    /// A snapshot that is not strictly newer than the previous one
    /// was either reused or received out of order.
    #[error("clock snapshot reuse: t={current}ns is not past t={previous}ns")]
    ClockSnapshotReuse { previous: i64, current: i64 },
}
