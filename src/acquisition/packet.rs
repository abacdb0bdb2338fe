//! Decoding of the controller's serial packets.
//!
//! Wire format: one ASCII line per sample, `millis,temperature_C,duty_raw\r\n`.

use crate::data::sample::Sample;

/// Line terminator sent by the controller after every packet.
pub const TERMINATOR: &str = "\r\n";

/// Parse one packet into a [`Sample`].
///
/// Returns `None` for anything that is not exactly three finite numeric fields,
/// including an empty buffer left by a read timeout.
pub fn parse_packet(packet: &[u8], duty_max_count: f64) -> Option<Sample> {
    let line = std::str::from_utf8(packet).ok()?;
    let line = line.trim_matches(|c: char| TERMINATOR.contains(c));
    let mut fields = line.split(',');
    let millis = parse_field(fields.next()?)?;
    let temperature = parse_field(fields.next()?)?;
    let duty = parse_field(fields.next()?)?;
    if fields.next().is_some() {
        return None;
    }
    Some(Sample {
        time_s: millis / 1000.0,
        temperature_c: temperature,
        power_pct: 100.0 * duty / duty_max_count,
    })
}

fn parse_field(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DUTY_MAX_COUNT;

    #[test]
    fn strips_only_terminator_chars() {
        let s = parse_packet(b"\r\n10,20,0\r\n", DUTY_MAX_COUNT).unwrap();
        assert_eq!(s.time_s, 0.01);
        assert_eq!(s.power_pct, 0.0);
    }

    #[test]
    fn full_scale_duty_is_one_hundred_percent() {
        let s = parse_packet(b"0,25.0,62499\r\n", DUTY_MAX_COUNT).unwrap();
        assert!((s.power_pct - 100.0).abs() < 1e-12);
    }
}
