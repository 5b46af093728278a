//! End-to-end estimator tests against hand-computed values.

use approx::assert_relative_eq;
use chronos_acf::{AcfError, TimeSeries, acf, acf_profile, avf, lag};

#[test]
fn toy_sequence_hand_computed() {
    // Mean 3, deviations [-2, -1, 0, 1, 2].
    let s = [1.0, 2.0, 3.0, 4.0, 5.0];

    assert_relative_eq!(avf(&s, 0).unwrap(), 2.0, epsilon = 1e-12);
    assert_relative_eq!(avf(&s, 1).unwrap(), 0.8, epsilon = 1e-12);
    assert_relative_eq!(acf(&s, 1).unwrap(), 0.4, epsilon = 1e-12);
}

#[test]
fn estimators_work_through_validated_series() {
    let ts = TimeSeries::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    assert_relative_eq!(avf(ts.as_slice(), 1).unwrap(), 0.8, epsilon = 1e-12);
    assert_relative_eq!(acf(ts.as_ref(), 1).unwrap(), 0.4, epsilon = 1e-12);
}

#[test]
fn lag_view_feeds_the_estimator() {
    // The estimator's aligned pairs are exactly what the lag view exposes.
    let s = [1.0, 2.0, 3.0, 4.0, 5.0];
    let (past, present) = lag(&s, 1).unwrap();
    let mu = 3.0;
    let by_hand: f64 = present
        .iter()
        .zip(past.iter())
        .map(|(&a, &b)| (a - mu) * (b - mu))
        .sum::<f64>()
        / s.len() as f64;
    assert_relative_eq!(by_hand, avf(&s, 1).unwrap(), epsilon = 1e-12);
}

#[test]
fn profile_tabulates_the_correlogram() {
    let s = [1.0, 2.0, 3.0, 4.0, 5.0];
    let profile = acf_profile(&s, 4).unwrap();
    assert_eq!(profile.len(), 5);
    assert_eq!(profile[0], 1.0);
    assert_relative_eq!(profile[1], 0.4, epsilon = 1e-12);
}

#[test]
fn empty_series_is_invalid() {
    assert!(matches!(avf(&[], 0).unwrap_err(), AcfError::EmptyData));
    assert!(matches!(acf(&[], 0).unwrap_err(), AcfError::EmptyData));
    assert!(matches!(
        TimeSeries::new(vec![]).unwrap_err(),
        AcfError::EmptyData
    ));
}

#[test]
fn constant_series_has_no_autocorrelation() {
    let err = acf(&[5.0, 5.0, 5.0], 0).unwrap_err();
    assert!(matches!(err, AcfError::ConstantData));
    // The autocovariance itself is fine: it is exactly zero.
    assert_eq!(avf(&[5.0, 5.0, 5.0], 1).unwrap(), 0.0);
}

#[test]
fn lag_at_or_past_length_is_invalid() {
    let s = [1.0, 2.0, 3.0];
    for h in [3, 4, 100] {
        assert!(matches!(
            avf(&s, h).unwrap_err(),
            AcfError::LagOutOfRange { .. }
        ));
        assert!(matches!(
            acf(&s, h).unwrap_err(),
            AcfError::LagOutOfRange { .. }
        ));
    }
}
