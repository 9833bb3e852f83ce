use chrono::NaiveDate;
use pricechart_rs::core::{
    ExpectedImpact, ParsedSeries, RawPrice, RawPricePoint, date_to_unix_seconds, parse_date,
    parse_price,
};

fn row(date: &str, price: RawPrice) -> RawPricePoint {
    RawPricePoint {
        date: date.to_owned(),
        price,
    }
}

#[test]
fn parses_textual_and_numeric_prices() {
    let raw = vec![
        row("2020-01-01", RawPrice::Text("63.76".to_owned())),
        row("2020-01-02", RawPrice::Number(64.5)),
    ];

    let series = ParsedSeries::parse(&raw);
    assert_eq!(series.len(), 2);
    assert_eq!(series.dropped(), 0);
    assert!((series.points()[0].price - 63.76).abs() < 1e-9);
    assert!((series.points()[1].price - 64.5).abs() < 1e-9);
}

#[test]
fn malformed_date_is_dropped_and_counted() {
    let raw = vec![
        row("2020-01-01", RawPrice::Number(50.0)),
        row("01/02/2020", RawPrice::Number(51.0)),
        row("not-a-date", RawPrice::Number(52.0)),
    ];

    let series = ParsedSeries::parse(&raw);
    assert_eq!(series.len(), 1);
    assert_eq!(series.dropped(), 2);
}

#[test]
fn malformed_price_is_dropped_and_counted() {
    let raw = vec![
        row("2020-01-01", RawPrice::Text("abc".to_owned())),
        row("2020-01-02", RawPrice::Number(-1.0)),
        row("2020-01-03", RawPrice::Number(f64::NAN)),
        row("2020-01-04", RawPrice::Number(48.0)),
    ];

    let series = ParsedSeries::parse(&raw);
    assert_eq!(series.len(), 1);
    assert_eq!(series.dropped(), 3);
    assert_eq!(
        series.points()[0].date,
        NaiveDate::from_ymd_opt(2020, 1, 4).expect("valid date")
    );
}

#[test]
fn lookup_returns_exact_match_only() {
    let raw = vec![
        row("2020-01-01", RawPrice::Number(50.0)),
        row("2020-01-03", RawPrice::Number(45.0)),
    ];
    let series = ParsedSeries::parse(&raw);

    let hit = series
        .lookup(NaiveDate::from_ymd_opt(2020, 1, 3).expect("valid date"))
        .expect("exact match");
    assert!((hit.price - 45.0).abs() < 1e-9);

    assert!(
        series
            .lookup(NaiveDate::from_ymd_opt(2020, 1, 2).expect("valid date"))
            .is_none()
    );
}

#[test]
fn duplicate_dates_keep_first_occurrence_in_index() {
    let raw = vec![
        row("2020-01-01", RawPrice::Number(50.0)),
        row("2020-01-01", RawPrice::Number(99.0)),
    ];
    let series = ParsedSeries::parse(&raw);

    // Both points survive, the index resolves to the first.
    assert_eq!(series.len(), 2);
    let hit = series
        .lookup(NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"))
        .expect("exact match");
    assert!((hit.price - 50.0).abs() < 1e-9);
}

#[test]
fn wire_rows_deserialize_from_dashboard_json() {
    let raw: Vec<RawPricePoint> = serde_json::from_str(
        r#"[{"Date":"2020-01-01","Price":"50.25"},{"Date":"2020-01-02","Price":51.5}]"#,
    )
    .expect("valid payload");

    let series = ParsedSeries::parse(&raw);
    assert_eq!(series.len(), 2);
}

#[test]
fn date_parsing_rejects_non_literal_formats() {
    assert!(parse_date("2020-01-01").is_ok());
    assert!(parse_date("2020-13-01").is_err());
    assert!(parse_date("2020/01/01").is_err());
    assert!(parse_date("2020-01-01T00:00:00").is_err());
    assert!(parse_date("").is_err());
}

#[test]
fn price_parsing_requires_finite_non_negative() {
    assert!(parse_price(&RawPrice::Number(0.0)).is_ok());
    assert!(parse_price(&RawPrice::Text(" 12.5 ".to_owned())).is_ok());
    assert!(parse_price(&RawPrice::Number(f64::INFINITY)).is_err());
    assert!(parse_price(&RawPrice::Number(-0.01)).is_err());
    assert!(parse_price(&RawPrice::Text("12,5".to_owned())).is_err());
}

#[test]
fn unix_seconds_are_midnight_utc() {
    let date = NaiveDate::from_ymd_opt(1970, 1, 2).expect("valid date");
    assert_eq!(date_to_unix_seconds(date), 86_400.0);
}

#[test]
fn expected_impact_buckets_are_case_insensitive_with_neutral_default() {
    assert_eq!(ExpectedImpact::from_label("increase"), ExpectedImpact::Increase);
    assert_eq!(ExpectedImpact::from_label("Decrease"), ExpectedImpact::Decrease);
    assert_eq!(ExpectedImpact::from_label("mixed"), ExpectedImpact::Neutral);
    assert_eq!(ExpectedImpact::from_label(""), ExpectedImpact::Neutral);
}
