//! Receiver clock snapshot
use crate::{
    constants::{WEEK_NANOSECONDS, WEEK_SECONDS},
    prelude::{Duration, Epoch},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [ReceiverClock] is the state of the receiver hardware clock, sampled once per epoch.
/// It is shared by all the satellite [Measurement](crate::prelude::Measurement)s
/// of that epoch and must not be reused for another one.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReceiverClock {
    /// Hardware clock reading, in nanoseconds since an arbitrary (fixed) origin.
    pub time_nanos: i64,
    /// Difference between hardware clock and GPST, in nanoseconds.
    /// Negative and large by construction.
    pub full_bias_nanos: Option<i64>,
    /// Sub-nanosecond part of the bias, in nanoseconds.
    pub bias_nanos: Option<f64>,
    /// Current leap second, only used to align Glonass time.
    pub leap_second: Option<i32>,
    /// Uncertainty on [Self::time_nanos], 1 sigma.
    pub time_uncertainty_nanos: Option<f64>,
    /// Uncertainty on [Self::bias_nanos], 1 sigma.
    pub bias_uncertainty_nanos: Option<f64>,
    /// Clock drift, in ns.s⁻¹
    pub drift_nanos_per_second: Option<f64>,
    /// Uncertainty on [Self::drift_nanos_per_second], 1 sigma.
    pub drift_uncertainty_nanos_per_second: Option<f64>,
    /// Increments each time the hardware clock lost continuity.
    /// Biases are only comparable between snapshots with identical counts.
    pub hardware_clock_discontinuity_count: u32,
}

impl ReceiverClock {
    /// Defines a new [ReceiverClock] snapshot, from hardware clock reading (in nanoseconds).
    /// All bias terms are unknown at this point.
    pub fn new(time_nanos: i64) -> Self {
        Self {
            time_nanos,
            ..Default::default()
        }
    }

    /// Copies and returns [ReceiverClock] with full bias (in nanoseconds)
    pub fn with_full_bias_nanos(&self, full_bias_nanos: i64) -> Self {
        let mut s = *self;
        s.full_bias_nanos = Some(full_bias_nanos);
        s
    }

    /// Copies and returns [ReceiverClock] with sub-nanosecond bias (in nanoseconds)
    pub fn with_bias_nanos(&self, bias_nanos: f64) -> Self {
        let mut s = *self;
        s.bias_nanos = Some(bias_nanos);
        s
    }

    /// Copies and returns [ReceiverClock] with current leap second
    pub fn with_leap_second(&self, leap_second: i32) -> Self {
        let mut s = *self;
        s.leap_second = Some(leap_second);
        s
    }

    /// Copies and returns [ReceiverClock] with hardware clock discontinuity counter
    pub fn with_hardware_clock_discontinuity_count(&self, count: u32) -> Self {
        let mut s = *self;
        s.hardware_clock_discontinuity_count = count;
        s
    }

    /// Copies and returns [ReceiverClock] with clock drift (in ns.s⁻¹) and its uncertainty
    pub fn with_drift_nanos_per_second(&self, drift: f64, uncertainty: Option<f64>) -> Self {
        let mut s = *self;
        s.drift_nanos_per_second = Some(drift);
        s.drift_uncertainty_nanos_per_second = uncertainty;
        s
    }

    /// Full bias (nanoseconds) or 0 when not reported
    pub(crate) fn full_bias_or_zero(&self) -> f64 {
        self.full_bias_nanos.unwrap_or_default() as f64
    }

    /// Sub-nanosecond bias or 0 when not reported
    pub(crate) fn bias_or_zero(&self) -> f64 {
        self.bias_nanos.unwrap_or_default()
    }

    /// Leap second or 0 when not reported
    pub(crate) fn leap_second_or_zero(&self) -> f64 {
        self.leap_second.unwrap_or_default() as f64
    }

    /// Returns the current GPS week number, implied by the full bias.
    pub fn gps_week_number(&self) -> f64 {
        (-self.full_bias_or_zero() * 1E-9 / WEEK_SECONDS).floor()
    }

    /// Returns the receiver time, expressed as nanoseconds of current GPS week,
    /// for a measurement sampled `time_offset_nanos` after this snapshot.
    pub fn gps_time_nanos(&self, time_offset_nanos: f64) -> f64 {
        let time_nanos = self.time_nanos as f64;
        (time_nanos + time_offset_nanos)
            - (self.full_bias_or_zero() + self.bias_or_zero())
            - self.gps_week_number() * WEEK_NANOSECONDS
    }

    /// Returns the receiver time as GPST [Epoch], if full bias is known.
    pub fn gpst_epoch(&self) -> Option<Epoch> {
        let full_bias_nanos = self.full_bias_nanos?;
        let nanos = self.time_nanos as i128 - full_bias_nanos as i128;
        let dt = Duration::from_total_nanoseconds(nanos)
            - Duration::from_nanoseconds(self.bias_or_zero());
        Some(Epoch::from_gpst_duration(dt))
    }
}

#[cfg(test)]
mod test {
    use super::ReceiverClock;
    use crate::{
        constants::WEEK_NANOSECONDS,
        prelude::{Epoch, TimeScale},
    };

    #[test]
    fn week_number() {
        let clock = ReceiverClock::new(0);
        assert_eq!(clock.gps_week_number(), 0.0);

        let clock = ReceiverClock::new(0).with_full_bias_nanos(-3_000_000_000);
        assert_eq!(clock.gps_week_number(), 0.0);

        let clock =
            ReceiverClock::new(0).with_full_bias_nanos(-(WEEK_NANOSECONDS as i64) * 2149);
        assert_eq!(clock.gps_week_number(), 2149.0);

        let clock = ReceiverClock::new(0)
            .with_full_bias_nanos(-(WEEK_NANOSECONDS as i64) * 2149 + 1_000_000_000);
        assert_eq!(clock.gps_week_number(), 2148.0);
    }

    #[test]
    fn gps_time_of_week() {
        let clock = ReceiverClock::new(1_000)
            .with_full_bias_nanos(-5_000)
            .with_bias_nanos(0.5);

        assert_eq!(clock.gps_time_nanos(0.0), 5_999.5);
        assert_eq!(clock.gps_time_nanos(10.0), 6_009.5);

        // week rollover: values are multiples of the f64 resolution at this magnitude
        let clock =
            ReceiverClock::new(2_048).with_full_bias_nanos(-(WEEK_NANOSECONDS as i64) * 2149);

        assert_eq!(clock.gps_time_nanos(0.0), 2_048.0);
    }

    #[test]
    fn gpst_epoch() {
        assert!(ReceiverClock::new(1_000).gpst_epoch().is_none());

        let clock =
            ReceiverClock::new(1_000).with_full_bias_nanos(-(WEEK_NANOSECONDS as i64) * 2149);

        let epoch = clock.gpst_epoch().unwrap();
        assert_eq!(epoch, Epoch::from_time_of_week(2149, 1_000, TimeScale::GPST));
        assert_eq!(epoch.to_time_of_week(), (2149, 1_000));
    }
}
