//! Raw satellite measurement
use std::str::FromStr;

use crate::{
    constellation::ConstellationType,
    error::Error,
    prelude::SV,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// [SatelliteId] identifies one satellite, formatted as `<letter>#<svid>`,
/// for example `G#03` or `C#07`.
/// All [ConstellationType::Other] codes share the `U` letter, so the string form
/// (and its serde representation) does not preserve the platform code:
/// `U#nn` always parses as `Other(0)`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SatelliteId {
    /// [ConstellationType]
    pub constellation: ConstellationType,
    /// Satellite vehicle number, constellation dependent
    pub svid: u16,
}

impl SatelliteId {
    pub fn new(constellation: ConstellationType, svid: u16) -> Self {
        Self {
            constellation,
            svid,
        }
    }

    /// Converts to [SV], when constellation is known to the GNSS library
    /// and svid fits a PRN number.
    pub fn sv(&self) -> Option<SV> {
        let constellation = self.constellation.constellation()?;
        let prn = u8::try_from(self.svid).ok()?;
        Some(SV::new(constellation, prn))
    }
}

impl std::fmt::Display for SatelliteId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}#{:02}", self.constellation.letter(), self.svid)
    }
}

impl FromStr for SatelliteId {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidSatelliteId(s.to_string());

        let (letter, svid) = s.trim().split_once('#').ok_or_else(invalid)?;

        let mut chars = letter.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }

        let constellation = ConstellationType::from_letter(letter).ok_or_else(invalid)?;
        let svid = svid.parse::<u16>().map_err(|_| invalid())?;

        Ok(Self::new(constellation, svid))
    }
}

#[cfg(feature = "serde")]
impl Serialize for SatelliteId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for SatelliteId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Raw [Measurement] of a single satellite signal, sampled
/// within the epoch described by a [ReceiverClock](crate::prelude::ReceiverClock).
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement {
    /// Satellite vehicle number
    pub svid: u16,
    /// [ConstellationType]
    pub constellation: ConstellationType,
    /// Carrier frequency (Hz), when reported by the receiver.
    pub carrier_frequency_hz: Option<f64>,
    /// Satellite time decoded from the tracked code phase, in nanoseconds.
    /// Its meaning (time of week, time of day..) depends on the constellation.
    pub received_sv_time_nanos: i64,
    /// Sampling time offset with respect to [ReceiverClock::time_nanos](crate::prelude::ReceiverClock), in nanoseconds.
    pub time_offset_nanos: f64,
}

impl Measurement {
    /// Defines a new [Measurement], sampled at the clock snapshot instant.
    pub fn new(constellation: ConstellationType, svid: u16, received_sv_time_nanos: i64) -> Self {
        Self {
            svid,
            constellation,
            received_sv_time_nanos,
            time_offset_nanos: 0.0,
            carrier_frequency_hz: None,
        }
    }

    /// Copies and returns [Measurement] with carrier frequency (Hz)
    pub fn with_carrier_frequency_hz(&self, frequency_hz: f64) -> Self {
        let mut s = *self;
        s.carrier_frequency_hz = Some(frequency_hz);
        s
    }

    /// Copies and returns [Measurement] with sampling time offset (nanoseconds)
    pub fn with_time_offset_nanos(&self, time_offset_nanos: f64) -> Self {
        let mut s = *self;
        s.time_offset_nanos = time_offset_nanos;
        s
    }

    /// [SatelliteId] of this [Measurement]
    pub fn satellite_id(&self) -> SatelliteId {
        SatelliteId::new(self.constellation, self.svid)
    }
}
