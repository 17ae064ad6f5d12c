mod status;


use log::LevelFilter;
use std::sync::Once;

use crate::prelude::ReceiverClock;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Trace)
            .init();
    });
}

/// Hardware clock reading of the reference epoch (ns)
pub const REFERENCE_TIME_NANOS: i64 = 1_000_000_000_000;

/// Full bias of the reference epoch (ns)
pub const REFERENCE_FULL_BIAS_NANOS: i64 = -3_000_000_000;

/// GPST time of week of the reference epoch (ns)
pub const REFERENCE_GPST_NANOS: f64 = 1_003_000_000_000.0;

/// Reference clock snapshot, with known full bias only
pub fn reference_clock() -> ReceiverClock {
    ReceiverClock::new(REFERENCE_TIME_NANOS).with_full_bias_nanos(REFERENCE_FULL_BIAS_NANOS)
}
