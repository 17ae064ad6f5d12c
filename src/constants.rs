/// Speed of light in m.ns⁻¹
pub const SPEED_OF_LIGHT_M_NS: f64 = 299_792_458E-9;

/// Duration of one week, in seconds
pub const WEEK_SECONDS: f64 = 604_800.0;

/// Duration of one week, in nanoseconds
pub const WEEK_NANOSECONDS: f64 = 604_800.0 * 1E9;

/// Duration of one day, in nanoseconds
pub const DAY_NANOSECONDS: f64 = 86_400.0 * 1E9;

/// GPS L1 carrier frequency (Hz), used when the receiver does not report one
pub const GPS_L1_FREQUENCY_HZ: f64 = 1575.42E6;

/// BDT lags GPST by the 14 leap seconds accumulated at the BDT origin (nanoseconds)
pub const BDT_GPST_OFFSET_NANOS: f64 = 14E9;

/// GLONASS system time is UTC(SU) + 3h (nanoseconds)
pub const GLONASST_UTC_OFFSET_NANOS: f64 = 3.0 * 3600.0 * 1E9;
