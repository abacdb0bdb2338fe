use std::io::Write;

use pidplot::analysis::BandMode;
use pidplot::config::*;
use pidplot::error::ConfigError;

fn write_temp(suffix: &str, text: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    f.write_all(text.as_bytes()).unwrap();
    f
}

#[test]
fn defaults_match_lab_setup() {
    let cfg = PidPlotConfig::default();
    assert_eq!(cfg.acquisition.port, "COM4");
    assert_eq!(cfg.acquisition.baud_rate, 115_200);
    assert_eq!(cfg.acquisition.tick_ms, 80);
    assert_eq!(cfg.acquisition.duty_max_count, 62499.0);
    assert_eq!(cfg.analysis.preamble_lines, 11);
    assert_eq!(cfg.analysis.oscillation_window, 4000);
    assert_eq!(cfg.analysis.effective_setpoint(), cfg.analysis.target_temperature);
}

#[test]
fn loads_partial_yaml() {
    let f = write_temp(
        ".yaml",
        "acquisition:\n  port: /dev/ttyACM0\n  tick_ms: 50\nanalysis:\n  target_temperature: 45.0\n  band:\n    mode: hysteresis\n    width: 2.5\n",
    );
    let cfg = PidPlotConfig::load(f.path()).unwrap();
    assert_eq!(cfg.acquisition.port, "/dev/ttyACM0");
    assert_eq!(cfg.acquisition.tick_ms, 50);
    assert_eq!(cfg.acquisition.baud_rate, 115_200);
    assert_eq!(cfg.analysis.target_temperature, 45.0);
    assert_eq!(cfg.analysis.band, BandMode::Hysteresis { width: 2.5 });
}

#[test]
fn loads_json() {
    let f = write_temp(".json", r#"{"analysis": {"setpoint": 55.0, "oscillation_window": 100}}"#);
    let cfg = PidPlotConfig::load(f.path()).unwrap();
    assert_eq!(cfg.analysis.effective_setpoint(), 55.0);
    assert_eq!(cfg.analysis.oscillation_window, 100);
    assert_eq!(cfg.acquisition, AcquisitionConfig::default());
}

#[test]
fn rejects_unknown_extension() {
    let f = write_temp(".toml", "port = 'COM4'");
    assert!(matches!(
        PidPlotConfig::load(f.path()),
        Err(ConfigError::UnsupportedFormat(_))
    ));
}
