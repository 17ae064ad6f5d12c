//! Satellite status, as reported by the receiver
use std::collections::HashMap;

use crate::{
    error::Error,
    prelude::{PseudorangeResult, SatelliteId},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [SatelliteStatus] as tracked by the receiver. We do not compute
/// any of these: they are only attached to the [PseudorangeResult]s.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SatelliteStatus {
    /// [SatelliteId]
    pub identifier: SatelliteId,
    /// Carrier to noise density (dB.Hz)
    pub cn0_dbhz: f64,
    /// Azimuth angle (degrees)
    pub azimuth_deg: f64,
    /// Elevation angle (degrees)
    pub elevation_deg: f64,
    pub has_almanac: bool,
    pub has_ephemeris: bool,
    /// True when this satellite contributed to the latest fix
    pub used_in_fix: bool,
}

/// [SatelliteReport] is what we report for each satellite of an epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SatelliteReport {
    /// [PseudorangeResult]
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub result: PseudorangeResult,
    /// Possibly attached [SatelliteStatus]
    pub status: Option<SatelliteStatus>,
}

impl SatelliteReport {
    /// Creates a new [SatelliteReport] without [SatelliteStatus]
    pub fn new(result: PseudorangeResult) -> Self {
        Self {
            result,
            status: None,
        }
    }

    /// Copies and returns [SatelliteReport] with attached [SatelliteStatus].
    /// Both must describe the same satellite.
    pub fn with_status(&self, status: SatelliteStatus) -> Result<Self, Error> {
        if status.identifier != self.result.identifier {
            return Err(Error::StatusMismatch(
                self.result.identifier,
                status.identifier,
            ));
        }
        let mut s = *self;
        s.status = Some(status);
        Ok(s)
    }
}

/// Attaches each [SatelliteStatus] to the [PseudorangeResult] of the same satellite.
/// Results with no matching status are reported without status, statuses
/// with no matching result are dropped.
pub fn merge(results: &[PseudorangeResult], statuses: &[SatelliteStatus]) -> Vec<SatelliteReport> {
    let statuses = statuses
        .iter()
        .map(|status| (status.identifier, *status))
        .collect::<HashMap<_, _>>();

    results
        .iter()
        .map(|result| SatelliteReport {
            result: *result,
            status: statuses.get(&result.identifier).copied(),
        })
        .collect()
}
