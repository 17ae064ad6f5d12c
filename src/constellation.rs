//! Constellation identification, as reported by the receiver platform
use crate::prelude::Constellation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [ConstellationType] describes the constellation a raw measurement belongs to,
/// using the platform (receiver API) integer codes.
/// Codes that we do not know how to align to GPST wind up in [ConstellationType::Other].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConstellationType {
    /// GPS (code 1)
    #[default]
    Gps,
    /// Glonass (code 3)
    Glonass,
    /// QZSS (code 4)
    Qzss,
    /// BeiDou (code 5)
    Beidou,
    /// Galileo (code 6)
    Galileo,
    /// Any other platform code: unknown (0), SBAS (2), IRNSS (7)..
    /// Build it with `From<u8>` only: `Other(1)` to `Other(6)` are not
    /// mapped back to their constellation and receive no time correction.
    /// The code is not carried through [SatelliteId](crate::prelude::SatelliteId)
    /// strings: every `U#nn` identifier parses back as `Other(0)`.
    Other(u8),
}

impl ConstellationType {
    pub const UNKNOWN_CODE: u8 = 0;
    pub const GPS_CODE: u8 = 1;
    pub const SBAS_CODE: u8 = 2;
    pub const GLONASS_CODE: u8 = 3;
    pub const QZSS_CODE: u8 = 4;
    pub const BEIDOU_CODE: u8 = 5;
    pub const GALILEO_CODE: u8 = 6;
    pub const IRNSS_CODE: u8 = 7;

    /// Returns the platform code of this [ConstellationType]
    pub fn code(&self) -> u8 {
        match self {
            Self::Gps => Self::GPS_CODE,
            Self::Glonass => Self::GLONASS_CODE,
            Self::Qzss => Self::QZSS_CODE,
            Self::Beidou => Self::BEIDOU_CODE,
            Self::Galileo => Self::GALILEO_CODE,
            Self::Other(code) => *code,
        }
    }

    /// Single letter prefix used in satellite identifiers.
    /// Every [ConstellationType::Other] shares the 'U' (unknown) prefix.
    pub fn letter(&self) -> char {
        match self {
            Self::Beidou => 'C',
            Self::Glonass => 'R',
            Self::Gps => 'G',
            Self::Galileo => 'E',
            Self::Qzss => 'J',
            Self::Other(_) => 'U',
        }
    }

    /// Builds [ConstellationType] from identifier letter.
    pub(crate) fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'C' => Some(Self::Beidou),
            'R' => Some(Self::Glonass),
            'G' => Some(Self::Gps),
            'E' => Some(Self::Galileo),
            'J' => Some(Self::Qzss),
            'U' => Some(Self::Other(Self::UNKNOWN_CODE)),
            _ => None,
        }
    }

    /// True if a time system alignment model exists for this constellation.
    /// Measurements of other constellations report a null pseudo range.
    pub fn is_modeled(&self) -> bool {
        matches!(
            self,
            Self::Gps | Self::Galileo | Self::Beidou | Self::Glonass
        )
    }

    /// Converts to [Constellation], when it is known to the GNSS library.
    pub fn constellation(&self) -> Option<Constellation> {
        match self {
            Self::Gps => Some(Constellation::GPS),
            Self::Glonass => Some(Constellation::Glonass),
            Self::Qzss => Some(Constellation::QZSS),
            Self::Beidou => Some(Constellation::BeiDou),
            Self::Galileo => Some(Constellation::Galileo),
            Self::Other(Self::SBAS_CODE) => Some(Constellation::SBAS),
            Self::Other(Self::IRNSS_CODE) => Some(Constellation::IRNSS),
            Self::Other(_) => None,
        }
    }
}

impl From<u8> for ConstellationType {
    fn from(code: u8) -> Self {
        match code {
            Self::GPS_CODE => Self::Gps,
            Self::GLONASS_CODE => Self::Glonass,
            Self::QZSS_CODE => Self::Qzss,
            Self::BEIDOU_CODE => Self::Beidou,
            Self::GALILEO_CODE => Self::Galileo,
            code => Self::Other(code),
        }
    }
}

impl std::fmt::Display for ConstellationType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Gps => write!(f, "GPS"),
            Self::Glonass => write!(f, "Glonass"),
            Self::Qzss => write!(f, "QZSS"),
            Self::Beidou => write!(f, "BeiDou"),
            Self::Galileo => write!(f, "Galileo"),
            Self::Other(code) => write!(f, "Unknown({})", code),
        }
    }
}
