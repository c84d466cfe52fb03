//! Model parsing and serialization tests.

mod common;

use common::{date, fundamentals, series};
use rust_decimal_macros::dec;
use ticker_sdk::analytics::build_report;
use ticker_sdk::config::{VALID_INTERVALS, VALID_PERIODS};
use ticker_sdk::models::{DividendEvent, DividendSeries, Frequency, Interval, Period};
use ticker_sdk::TickerError;

// ---------------------------------------------------------------------------
// Period / Interval
// ---------------------------------------------------------------------------

#[test]
fn every_valid_period_round_trips_through_its_string() {
    for s in VALID_PERIODS {
        let period: Period = s.parse().unwrap();
        assert_eq!(period.to_string(), s);
    }
}

#[test]
fn every_valid_interval_round_trips_through_its_string() {
    for s in VALID_INTERVALS {
        let interval: Interval = s.parse().unwrap();
        assert_eq!(interval.to_string(), s);
    }
}

#[test]
fn unknown_period_lists_the_valid_ones() {
    let err = "7d".parse::<Period>().unwrap_err();
    match err {
        TickerError::InvalidPeriod(msg) => {
            assert!(msg.contains("'7d'"));
            assert!(msg.contains("ytd"));
        }
        other => panic!("expected InvalidPeriod, got {other:?}"),
    }
}

#[test]
fn period_strings_are_case_sensitive() {
    assert!("1D".parse::<Period>().is_err());
    assert!("1M".parse::<Interval>().is_err());
}

#[test]
fn defaults_are_daily() {
    assert_eq!(Period::default(), Period::OneDay);
    assert_eq!(Interval::default(), Interval::OneDay);
}

#[test]
fn period_start_bounds() {
    let end = common::at(2024, 3, 15);
    assert_eq!(Period::FiveDays.start(end), Some(common::at(2024, 3, 10)));
    assert_eq!(Period::YearToDate.start(end), Some(common::at(2024, 1, 1)));
    assert_eq!(Period::Max.start(end), None);
}

#[test]
fn period_serializes_as_wire_string() {
    assert_eq!(serde_json::to_string(&Period::YearToDate).unwrap(), "\"ytd\"");
    let interval: Interval = serde_json::from_str("\"1wk\"").unwrap();
    assert_eq!(interval, Interval::OneWeek);
}

// ---------------------------------------------------------------------------
// DividendSeries
// ---------------------------------------------------------------------------

#[test]
fn series_is_sorted_on_construction() {
    let s = series(&[
        ((2022, 9, 30), dec!(0.5)),
        ((2022, 3, 31), dec!(0.4)),
        ((2022, 6, 30), dec!(0.45)),
    ]);
    let dates: Vec<_> = s.iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![date(2022, 3, 31), date(2022, 6, 30), date(2022, 9, 30)]);
}

#[test]
fn negative_amounts_are_rejected() {
    let err = DividendSeries::new(vec![DividendEvent::new(date(2022, 1, 1), dec!(-0.1))]).unwrap_err();
    assert!(matches!(err, TickerError::InvalidArgument(_)));
}

#[test]
fn deserialized_series_is_sorted_and_validated() {
    let s: DividendSeries = serde_json::from_str(
        r#"[{"date":"2022-06-30","amount":"0.5"},{"date":"2022-03-31","amount":"0.4"}]"#,
    )
    .unwrap();
    assert_eq!(s.first().unwrap().date, date(2022, 3, 31));

    let bad = serde_json::from_str::<DividendSeries>(r#"[{"date":"2022-06-30","amount":"-1"}]"#);
    assert!(bad.is_err());
}

#[test]
fn same_day_events_are_summed_in_history() {
    let s = series(&[((2022, 3, 31), dec!(0.5)), ((2022, 3, 31), dec!(0.25))]);
    let history = s.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[&date(2022, 3, 31)], dec!(0.75));
}

#[test]
fn between_is_inclusive() {
    let s = series(&[
        ((2022, 1, 1), dec!(1)),
        ((2022, 6, 1), dec!(1)),
        ((2022, 12, 31), dec!(1)),
    ]);
    assert_eq!(s.between(date(2022, 1, 1), date(2022, 12, 31)).count(), 3);
    assert_eq!(s.between(date(2022, 1, 2), date(2022, 12, 30)).count(), 1);
}

// ---------------------------------------------------------------------------
// Frequency / DividendReport
// ---------------------------------------------------------------------------

#[test]
fn frequency_wire_names() {
    assert_eq!(serde_json::to_string(&Frequency::SemiAnnually).unwrap(), "\"semi-annually\"");
    assert_eq!(Frequency::Quarterly.to_string(), "quarterly");
    assert!(Frequency::Irregular.is_low_confidence());
    assert!(!Frequency::Annually.is_low_confidence());
}

#[test]
fn report_json_shape() {
    let s = series(&[((2022, 3, 31), dec!(0.5)), ((2022, 9, 30), dec!(0.5))]);
    let report = build_report("T", &s, fundamentals(dec!(20), dec!(2)), date(2022, 12, 31)).unwrap();

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["frequency"], "semi-annually");
    assert!(value.get("yield").is_some());
    assert!(value.get("dividend_yield").is_none());
    assert!(value["history"].get("2022-03-31").is_some());

    let back: ticker_sdk::models::DividendReport = serde_json::from_value(value).unwrap();
    assert_eq!(back, report);
}
