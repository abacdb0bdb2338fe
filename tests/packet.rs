use pidplot::acquisition::parse_packet;
use pidplot::config::DUTY_MAX_COUNT;

#[test]
fn parses_reference_packet() {
    let s = parse_packet(b"1500,37.25,31250\r\n", DUTY_MAX_COUNT).expect("valid packet");
    assert_eq!(s.time_s, 1.5);
    assert_eq!(s.temperature_c, 37.25);
    // 31250 counts out of a 62499 full scale
    assert!((s.power_pct - 50.0).abs() < 1e-2, "power was {}", s.power_pct);
}

#[test]
fn accepts_missing_terminator_and_padding() {
    let s = parse_packet(b" 250 , 21.5 , 0 ", DUTY_MAX_COUNT).unwrap();
    assert_eq!(s.time_s, 0.25);
    assert_eq!(s.temperature_c, 21.5);
    assert_eq!(s.power_pct, 0.0);
}

#[test]
fn rejects_garbage() {
    assert!(parse_packet(b"garbage\r\n", DUTY_MAX_COUNT).is_none());
}

#[test]
fn rejects_wrong_field_count() {
    assert!(parse_packet(b"1,2\r\n", DUTY_MAX_COUNT).is_none());
    assert!(parse_packet(b"1,2,3,4\r\n", DUTY_MAX_COUNT).is_none());
}

#[test]
fn rejects_empty_timeout_read() {
    assert!(parse_packet(b"", DUTY_MAX_COUNT).is_none());
    assert!(parse_packet(b"\r\n", DUTY_MAX_COUNT).is_none());
}

#[test]
fn rejects_partial_line_and_non_numeric_fields() {
    assert!(parse_packet(b"1500,37.2", DUTY_MAX_COUNT).is_none());
    assert!(parse_packet(b"1500,abc,100\r\n", DUTY_MAX_COUNT).is_none());
    assert!(parse_packet(b"1500,,100\r\n", DUTY_MAX_COUNT).is_none());
    assert!(parse_packet(b"1500,nan,100\r\n", DUTY_MAX_COUNT).is_none());
}

#[test]
fn rejects_invalid_utf8() {
    assert!(parse_packet(&[0xff, 0xfe, b',', b'1', b',', b'2'], DUTY_MAX_COUNT).is_none());
}

#[test]
fn custom_full_scale() {
    let s = parse_packet(b"0,20,128\r\n", 256.0).unwrap();
    assert_eq!(s.power_pct, 50.0);
}
