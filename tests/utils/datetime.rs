use campaign_dashboard::utils::datetime::*;
use chrono::NaiveDate;

#[test]
fn test_parse_date() {
    assert_eq!(parse_date("2024-03-15").unwrap(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    assert_eq!(parse_date(" 2024-03-15 ").unwrap(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    assert!(parse_date("15/03/2024").is_err());
    assert!(parse_date("2024-02-30").is_err());
    assert!(parse_date("").is_err());
}

#[test]
fn test_format_ymd() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    assert_eq!(format_ymd(date), "2024-01-05");
}

#[test]
fn test_parse_api_date_variants() {
    let expected = NaiveDate::from_ymd_opt(2024, 6, 1);
    assert_eq!(parse_api_date("2024-06-01"), expected);
    assert_eq!(parse_api_date("2024-06-01T10:30:00Z"), expected);
    assert_eq!(parse_api_date("2024-06-01T10:30:00+02:00"), expected);
    assert_eq!(parse_api_date("2024-06-01T10:30:00"), expected);
    assert_eq!(parse_api_date("2024-06-01 10:30:00.123"), expected);
    assert_eq!(parse_api_date(""), None);
    assert_eq!(parse_api_date("junio"), None);
}

#[test]
fn test_format_display_date() {
    assert_eq!(format_display_date(Some("2024-06-01"), DISPLAY_DATE_FORMAT), "01/06/2024");
    assert_eq!(format_display_date(Some("2024-06-01"), "%Y.%m.%d"), "2024.06.01");
    assert_eq!(format_display_date(None, DISPLAY_DATE_FORMAT), "—");
    assert_eq!(format_display_date(Some(""), DISPLAY_DATE_FORMAT), "—");
    assert_eq!(format_display_date(Some("not-a-date"), DISPLAY_DATE_FORMAT), "—");
}
