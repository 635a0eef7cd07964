use campaign_dashboard::utils::format::*;

#[test]
fn test_format_number_large_values() {
    assert_eq!(format_number(Some(12_345_678_901)), "12,345,678,901");
    assert_eq!(format_number(Some(100_000)), "100,000");
    assert_eq!(format_number(Some(-1)), "-1");
}

#[test]
fn test_zero_is_not_a_placeholder() {
    assert_eq!(format_number(Some(0)), "0");
    assert_eq!(format_decimal(Some(0.0)), "0");
    assert_eq!(format_plain(Some(0.0)), "0");
    assert_ne!(format_number(Some(0)), format_number(None));
}

#[test]
fn test_format_decimal_grouping() {
    assert_eq!(format_decimal(Some(1_500_000.5)), "1,500,000.5");
    assert_eq!(format_decimal(Some(0.1234)), "0.123");
    assert_eq!(format_decimal(Some(-2500.25)), "-2,500.25");
}

#[test]
fn test_format_text() {
    assert_eq!(format_text(Some("Valla")), "Valla");
    assert_eq!(format_text(Some("")), "—");
}
