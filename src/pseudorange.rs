//! Pseudo range engine
use log::{debug, trace};

use crate::{
    cfg::Config,
    constants::{
        BDT_GPST_OFFSET_NANOS, DAY_NANOSECONDS, GLONASST_UTC_OFFSET_NANOS, SPEED_OF_LIGHT_M_NS,
    },
    prelude::{ConstellationType, Measurement, ReceiverClock, SatelliteId},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [PseudorangeResult] of one satellite, for one epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PseudorangeResult {
    /// [SatelliteId], for example `G#03`
    pub identifier: SatelliteId,
    /// Carrier frequency, in MHz
    pub carrier_frequency_mhz: f64,
    /// Transmission time (tTx), in nanoseconds, as received (uncorrected).
    pub transmission_time_ns: f64,
    /// Reception time (tRx), in nanoseconds, expressed in the time system of the satellite.
    pub reception_time_ns: f64,
    /// Pseudo range, in meters
    pub pseudorange_m: f64,
}

/// Computes [PseudorangeResult] for this [Measurement] sampled within this [ReceiverClock] epoch,
/// using default [Config]uration.
pub fn compute(clock: &ReceiverClock, measurement: &Measurement) -> PseudorangeResult {
    Engine::default().compute(clock, measurement)
}

/// Pseudo range [Engine]. It holds no state other than its [Config]uration,
/// it may therefore be shared across threads freely.
#[derive(Default, Debug, Clone)]
pub struct Engine {
    /// [Config]uration
    pub cfg: Config,
}

impl Engine {
    /// Creates a new [Engine] from [Config]
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    /// Forms the [PseudorangeResult] of one satellite, for one epoch.
    /// Missing clock fields are replaced by 0, missing carrier frequency
    /// by [Config::fallback_carrier_frequency_hz]: this never fails.
    pub fn compute(&self, clock: &ReceiverClock, measurement: &Measurement) -> PseudorangeResult {
        let identifier = measurement.satellite_id();

        let carrier_frequency_hz = measurement
            .carrier_frequency_hz
            .unwrap_or(self.cfg.fallback_carrier_frequency_hz);

        let t_tx = measurement.received_sv_time_nanos as f64;

        // GPST receiver time, then aligned to the SV time system
        let t_rx = clock.gps_time_nanos(measurement.time_offset_nanos);

        let t_rx = match measurement.constellation {
            ConstellationType::Gps | ConstellationType::Galileo => t_rx,
            ConstellationType::Beidou => t_rx - BDT_GPST_OFFSET_NANOS,
            ConstellationType::Glonass => {
                let t_rx =
                    t_rx - clock.leap_second_or_zero() * 1E9 + GLONASST_UTC_OFFSET_NANOS;
                // tiny negative values round up to one full day
                let t_rx = t_rx.rem_euclid(DAY_NANOSECONDS);
                if t_rx < DAY_NANOSECONDS {
                    t_rx
                } else {
                    0.0
                }
            },
            ConstellationType::Qzss | ConstellationType::Other(_) => {
                debug!("{} - no time system model: null pseudo range", identifier);
                t_tx
            },
        };

        let pseudorange_m = (t_rx - t_tx) * SPEED_OF_LIGHT_M_NS;

        trace!(
            "{} - t_tx={}ns t_rx={}ns pr={:.3}m",
            identifier,
            t_tx,
            t_rx,
            pseudorange_m
        );

        PseudorangeResult {
            identifier,
            carrier_frequency_mhz: carrier_frequency_hz / 1E6,
            transmission_time_ns: t_tx,
            reception_time_ns: t_rx,
            pseudorange_m,
        }
    }
}
