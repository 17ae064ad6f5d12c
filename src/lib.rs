#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

// private modules
mod cfg;
mod clock;
mod constellation;
mod epoch;
mod error;
mod measurement;
mod pseudorange;
mod status;

pub mod constants;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::{Config, UnknownConstellation};
    pub use crate::clock::ReceiverClock;
    pub use crate::constellation::ConstellationType;
    pub use crate::epoch::{EpochTracker, MeasurementBatch};
    pub use crate::error::Error;
    pub use crate::measurement::{Measurement, SatelliteId};
    pub use crate::pseudorange::{compute, Engine, PseudorangeResult};
    pub use crate::status::{merge, SatelliteReport, SatelliteStatus};
    // re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale};
}

// pub export
pub use error::Error;
