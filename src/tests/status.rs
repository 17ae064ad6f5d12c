use crate::{
    prelude::{
        compute, merge, ConstellationType, Error, Measurement, SatelliteId, SatelliteReport,
        SatelliteStatus,
    },
    tests::reference_clock,
};

fn status(constellation: ConstellationType, svid: u16, cn0_dbhz: f64) -> SatelliteStatus {
    SatelliteStatus {
        identifier: SatelliteId::new(constellation, svid),
        cn0_dbhz,
        azimuth_deg: 120.0,
        elevation_deg: 45.0,
        has_almanac: true,
        has_ephemeris: true,
        used_in_fix: false,
    }
}

#[test]
fn report_with_status() {
    let result = compute(
        &reference_clock(),
        &Measurement::new(ConstellationType::Gps, 3, 999_999_000),
    );

    let report = SatelliteReport::new(result);
    assert!(report.status.is_none());

    let gps03 = status(ConstellationType::Gps, 3, 42.0);
    let report = report.with_status(gps03).unwrap();
    assert_eq!(report.status, Some(gps03));

    let gal03 = status(ConstellationType::Galileo, 3, 42.0);
    assert_eq!(
        report.with_status(gal03),
        Err(Error::StatusMismatch(
            SatelliteId::new(ConstellationType::Gps, 3),
            SatelliteId::new(ConstellationType::Galileo, 3),
        ))
    );
}

#[test]
fn status_merging() {
    let clock = reference_clock();

    let results = [
        Measurement::new(ConstellationType::Gps, 3, 0),
        Measurement::new(ConstellationType::Beidou, 3, 0),
        Measurement::new(ConstellationType::Glonass, 21, 0),
    ]
    .iter()
    .map(|m| compute(&clock, m))
    .collect::<Vec<_>>();

    let statuses = [
        status(ConstellationType::Glonass, 21, 30.0),
        status(ConstellationType::Gps, 3, 45.0),
        status(ConstellationType::Galileo, 11, 38.0),
    ];

    let reports = merge(&results, &statuses);
    assert_eq!(reports.len(), 3);

    assert_eq!(reports[0].result, results[0]);
    assert_eq!(reports[0].status.map(|s| s.cn0_dbhz), Some(45.0));

    assert_eq!(reports[1].result, results[1]);
    assert!(reports[1].status.is_none());

    assert_eq!(reports[2].result, results[2]);
    assert_eq!(reports[2].status.map(|s| s.cn0_dbhz), Some(30.0));
}
