use pidplot::analysis::*;
use pidplot::config::AnalysisConfig;
use pidplot::error::SliceError;

/// Synthetic heating curve: cools to a minimum at row `k`, then rises 1 C per row.
fn heating_log(n: usize, k: usize, start_temp: f64) -> TemperatureLog {
    let time: Vec<f64> = (0..n).map(|i| 10.0 + i as f64 * 0.5).collect();
    let temperature: Vec<f64> = (0..n)
        .map(|i| {
            if i <= k {
                start_temp + (k - i) as f64 * 0.1
            } else {
                start_temp + (i - k) as f64
            }
        })
        .collect();
    TemperatureLog::from_columns(time, temperature)
}

#[test]
fn minimum_index_for_unique_minimum() {
    let log = heating_log(50, 7, 20.0);
    assert_eq!(locate_minimum_temperature_index(&log).unwrap(), 7);
}

#[test]
fn minimum_index_prefers_first_of_ties() {
    let log = TemperatureLog::from_columns(
        vec![0.0, 1.0, 2.0, 3.0, 4.0],
        vec![25.0, 21.0, 22.0, 21.0, 30.0],
    );
    assert_eq!(locate_minimum_temperature_index(&log).unwrap(), 1);
}

#[test]
fn minimum_index_skips_nan() {
    let log = TemperatureLog::from_columns(vec![0.0, 1.0, 2.0], vec![f64::NAN, 23.0, 22.0]);
    assert_eq!(locate_minimum_temperature_index(&log).unwrap(), 2);
}

#[test]
fn minimum_index_on_empty_log_fails() {
    let log = TemperatureLog::from_columns(vec![], vec![]);
    assert_eq!(
        locate_minimum_temperature_index(&log),
        Err(SliceError::EmptyLog)
    );
}

#[test]
fn first_crossing_is_inclusive_and_earliest() {
    let log = TemperatureLog::from_columns(
        vec![0.0, 1.0, 2.0, 3.0, 4.0],
        vec![20.0, 59.9, 60.0, 58.0, 61.0],
    );
    assert_eq!(locate_first_crossing(&log, 60.0).unwrap(), 2);
}

#[test]
fn first_crossing_not_found() {
    let log = heating_log(20, 3, 20.0);
    assert_eq!(
        locate_first_crossing(&log, 500.0),
        Err(SliceError::NoCrossing { threshold: 500.0 })
    );
}

#[test]
fn slice_from_starts_at_zero() {
    let log = heating_log(30, 4, 20.0);
    for k in [0, 4, 17, 29] {
        let seg = slice_from(&log, k, None).unwrap();
        assert_eq!(seg.time[0], 0.0);
        assert_eq!(seg.start, k);
        assert_eq!(seg.len(), 30 - k);
    }
}

#[test]
fn slice_from_truncates_to_length() {
    let log = heating_log(30, 4, 20.0);
    let seg = slice_from(&log, 10, Some(5)).unwrap();
    assert_eq!(seg.len(), 5);
    assert_eq!(seg.temperature, log.temperature()[10..15].to_vec());
    assert_eq!(seg.time, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
}

#[test]
fn slice_from_out_of_range() {
    let log = heating_log(10, 2, 20.0);
    assert_eq!(
        slice_from(&log, 10, None),
        Err(SliceError::IndexOutOfRange { index: 10, len: 10 })
    );
}

#[test]
fn rise_covers_minimum_up_to_crossing() {
    let (n, k) = (100, 12);
    let log = heating_log(n, k, 20.0);
    let m = locate_first_crossing(&log, 60.0).unwrap();
    assert!(m > k);
    let k_found = locate_minimum_temperature_index(&log).unwrap();
    let rise = extract_rise(&log, k_found, m).unwrap();
    assert_eq!(rise.start, k);
    assert_eq!(rise.end(), m);
    assert_eq!(rise.temperature, log.temperature()[k..m].to_vec());
    let t0 = log.time()[k];
    let expected: Vec<f64> = log.time()[k..m].iter().map(|t| t - t0).collect();
    assert_eq!(rise.time, expected);
    assert_eq!(rise.time[0], 0.0);
}

#[test]
fn rise_with_crossing_before_start_fails() {
    let log = heating_log(20, 5, 20.0);
    assert_eq!(
        extract_rise(&log, 5, 2),
        Err(SliceError::InvertedRange { start: 5, end: 2 })
    );
}

#[test]
fn oscillation_window_is_clamped_to_log_end() {
    let log = heating_log(5000, 10, 20.0);
    let m = locate_first_crossing(&log, 60.0).unwrap();
    let seg = extract_oscillation(&log, m, DEFAULT_OSCILLATION_WINDOW).unwrap();
    assert_eq!(seg.len(), DEFAULT_OSCILLATION_WINDOW.min(5000 - m));
    assert_eq!(seg.start, m);

    let seg = extract_oscillation(&log, 4500, DEFAULT_OSCILLATION_WINDOW).unwrap();
    assert_eq!(seg.len(), 500);
}

#[test]
fn heating_runs_from_minimum_to_end() {
    let log = heating_log(40, 9, 20.0);
    let seg = extract_heating(&log).unwrap();
    assert_eq!(seg.start, 9);
    assert_eq!(seg.end(), 40);
    assert_eq!(seg.time[0], 0.0);
}

#[test]
fn analyze_reports_indices_and_rise_time() {
    let log = heating_log(200, 20, 20.0);
    let cfg = AnalysisConfig {
        target_temperature: 60.0,
        oscillation_window: 50,
        ..Default::default()
    };
    let report = analyze(&log, &cfg).unwrap();
    assert_eq!(report.minimum_index, 20);
    assert_eq!(report.crossing_index, 60);
    assert_eq!(report.rise_time_s, 20.0);
    assert_eq!(report.rise.len(), 40);
    assert_eq!(report.oscillation.len(), 50);
    assert!(report.band.is_some());
}

#[test]
fn analyze_propagates_missing_crossing() {
    let log = heating_log(30, 2, 20.0);
    let cfg = AnalysisConfig {
        target_temperature: 100.0,
        ..Default::default()
    };
    assert!(matches!(
        analyze(&log, &cfg),
        Err(SliceError::NoCrossing { .. })
    ));
}

#[test]
fn crossing_from_skips_rows_before_offset() {
    let log = TemperatureLog::from_columns(
        vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
        vec![65.0, 50.0, 30.0, 45.0, 61.0, 62.0],
    );
    assert_eq!(locate_first_crossing(&log, 60.0).unwrap(), 0);
    assert_eq!(locate_first_crossing_from(&log, 60.0, 2).unwrap(), 4);
    assert_eq!(locate_first_crossing_from(&log, 60.0, 4).unwrap(), 4);
    assert!(matches!(
        locate_first_crossing_from(&log, 60.0, 6),
        Err(SliceError::NoCrossing { .. })
    ));
    assert!(matches!(
        locate_first_crossing_from(&log, 60.0, 100),
        Err(SliceError::NoCrossing { .. })
    ));
}

#[test]
fn analyze_log_starting_above_target() {
    // Starts hot at 70 C, cools to 25 C at row 45, then heats 1 C per row.
    let time: Vec<f64> = (0..200).map(|i| i as f64).collect();
    let temperature: Vec<f64> = (0..200)
        .map(|i| if i <= 45 { 70.0 - i as f64 } else { 25.0 + (i - 45) as f64 })
        .collect();
    let log = TemperatureLog::from_columns(time, temperature);
    let cfg = AnalysisConfig {
        target_temperature: 60.0,
        oscillation_window: 50,
        ..Default::default()
    };
    let report = analyze(&log, &cfg).unwrap();
    assert_eq!(report.minimum_index, 45);
    assert_eq!(report.crossing_index, 80);
    assert_eq!(report.rise.start, 45);
    assert_eq!(report.rise.len(), 35);
    assert_eq!(report.rise_time_s, 35.0);
    assert_eq!(report.oscillation.start, 80);
}

#[test]
fn rise_with_crossing_past_end_fails() {
    let log = heating_log(10, 2, 20.0);
    assert_eq!(
        extract_rise(&log, 2, 11),
        Err(SliceError::IndexOutOfRange { index: 11, len: 10 })
    );
}

#[test]
fn rise_with_crossing_at_start_is_empty() {
    let log = heating_log(10, 2, 20.0);
    let rise = extract_rise(&log, 3, 3).unwrap();
    assert!(rise.is_empty());
    assert_eq!(rise.start, 3);
    assert_eq!(rise.end(), 3);
}

#[test]
fn oscillation_starting_past_end_fails() {
    let log = heating_log(10, 2, 20.0);
    assert_eq!(
        extract_oscillation(&log, 10, DEFAULT_OSCILLATION_WINDOW),
        Err(SliceError::IndexOutOfRange { index: 10, len: 10 })
    );
}
