#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::GPS_L1_FREQUENCY_HZ;

/// Policy applied to satellites of constellations we have no
/// time system alignment model for (QZSS and unknown platform codes).
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnknownConstellation {
    /// Report these satellites with a null pseudo range.
    #[default]
    Report,
    /// Do not report these satellites.
    Discard,
}

fn default_fallback_carrier_frequency_hz() -> f64 {
    GPS_L1_FREQUENCY_HZ
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Carrier frequency (Hz) reported for measurements that
    /// do not specify one. GPS L1 by default.
    #[cfg_attr(
        feature = "serde",
        serde(default = "default_fallback_carrier_frequency_hz")
    )]
    pub fallback_carrier_frequency_hz: f64,
    /// [UnknownConstellation] policy, in batch processing.
    #[cfg_attr(feature = "serde", serde(default))]
    pub unknown_constellation: UnknownConstellation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback_carrier_frequency_hz: default_fallback_carrier_frequency_hz(),
            unknown_constellation: UnknownConstellation::default(),
        }
    }
}
