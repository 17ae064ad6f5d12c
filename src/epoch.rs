//! Epoch (batch) processing
use log::{debug, warn};

use crate::{
    cfg::UnknownConstellation,
    error::Error,
    prelude::{Engine, Measurement, PseudorangeResult, ReceiverClock},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [MeasurementBatch] gathers all [Measurement]s sampled
/// within a single [ReceiverClock] snapshot. It is processed as a whole.
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeasurementBatch {
    /// [ReceiverClock] snapshot
    pub clock: ReceiverClock,
    /// [Measurement]s of this epoch
    pub measurements: Vec<Measurement>,
}

impl MeasurementBatch {
    pub fn new(clock: ReceiverClock, measurements: Vec<Measurement>) -> Self {
        Self {
            clock,
            measurements,
        }
    }
}

impl Engine {
    /// Processes one [MeasurementBatch], returning one [PseudorangeResult]
    /// per [Measurement], in order of appearance.
    /// [UnknownConstellation::Discard] drops satellites we cannot align in time.
    pub fn process(&self, batch: &MeasurementBatch) -> Vec<PseudorangeResult> {
        let results = batch
            .measurements
            .iter()
            .filter(|m| {
                self.cfg.unknown_constellation == UnknownConstellation::Report
                    || m.constellation.is_modeled()
            })
            .map(|m| self.compute(&batch.clock, m))
            .collect::<Vec<_>>();

        debug!(
            "t={}ns - {}/{} satellites",
            batch.clock.time_nanos,
            results.len(),
            batch.measurements.len()
        );

        results
    }
}

/// [EpochTracker] sequences [MeasurementBatch]es over time and makes
/// sure one [ReceiverClock] snapshot is never processed twice.
#[derive(Default, Debug, Clone)]
pub struct EpochTracker {
    /// [Engine]
    engine: Engine,
    /// Latest snapshot we processed
    prev_clock: Option<ReceiverClock>,
}

impl EpochTracker {
    /// Creates a new [EpochTracker] using this [Engine]
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            prev_clock: None,
        }
    }

    /// Latest [ReceiverClock] snapshot processed
    pub fn last_clock(&self) -> Option<&ReceiverClock> {
        self.prev_clock.as_ref()
    }

    /// Processes the next [MeasurementBatch]. Its clock snapshot
    /// must be strictly more recent than the previous one.
    pub fn process(&mut self, batch: &MeasurementBatch) -> Result<Vec<PseudorangeResult>, Error> {
        if let Some(prev) = &self.prev_clock {
            if batch.clock.time_nanos <= prev.time_nanos {
                return Err(Error::ClockSnapshotReuse {
                    previous: prev.time_nanos,
                    current: batch.clock.time_nanos,
                });
            }

            if batch.clock.hardware_clock_discontinuity_count
                != prev.hardware_clock_discontinuity_count
            {
                warn!(
                    "t={}ns - hardware clock discontinuity (count={})",
                    batch.clock.time_nanos, batch.clock.hardware_clock_discontinuity_count
                );
            }
        }

        let results = self.engine.process(batch);
        self.prev_clock = Some(batch.clock);
        Ok(results)
    }
}
