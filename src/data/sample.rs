//! The sample record shared by stored logs and live serial packets.

/// One acquisition row: elapsed time, measured temperature and heater power.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Elapsed time in seconds.
    pub time_s: f64,
    /// Temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Heater power as a percentage of the full duty cycle.
    pub power_pct: f64,
}

impl Sample {
    pub fn new(time_s: f64, temperature_c: f64, power_pct: f64) -> Self {
        Self {
            time_s,
            temperature_c,
            power_pct,
        }
    }
}
