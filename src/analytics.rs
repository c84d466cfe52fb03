//! Dividend analytics: payout frequency, annualized dividend, growth and the
//! ratios derived from them.
//!
//! Everything here is a pure function of its inputs plus a reference date,
//! so reports for different symbols can be computed in parallel without
//! coordination.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::config;
use crate::error::{Result, TickerError};
use crate::models::{DividendReport, DividendSeries, Frequency, Fundamentals};

/// Classify how often a symbol pays from the average number of payouts per
/// calendar year.
///
/// Only years with at least one payout take part in the average; a gap year
/// does not pull the average down. An empty series is
/// [`Frequency::Irregular`].
pub fn classify_frequency(series: &DividendSeries) -> Frequency {
    let mut per_year: BTreeMap<i32, u32> = BTreeMap::new();
    for event in series {
        *per_year.entry(event.date.year()).or_insert(0) += 1;
    }
    if per_year.is_empty() {
        return Frequency::Irregular;
    }

    let total: u32 = per_year.values().sum();
    let avg = Decimal::from(total) / Decimal::from(per_year.len() as u32);

    if avg >= Decimal::from(4) {
        Frequency::Quarterly
    } else if avg >= Decimal::from(2) {
        Frequency::SemiAnnually
    } else if avg >= Decimal::ONE {
        Frequency::Annually
    } else {
        Frequency::Irregular
    }
}

/// Estimate the dividend paid over a year, ending at `as_of`.
///
/// Windows count `as_of` as their last day: the trailing year is the 365
/// days `as_of - 364 ..= as_of`, the half year the 182 days ending there.
///
/// Semi-annual payers are extrapolated from the last half year. Irregular
/// payers fall back to the sum of the whole series.
pub fn trailing_annual_dividend(
    series: &DividendSeries,
    frequency: Frequency,
    as_of: NaiveDate,
) -> Decimal {
    match frequency {
        Frequency::Quarterly | Frequency::Annually => {
            trailing_sum(series, as_of, config::TRAILING_YEAR_DAYS)
        }
        Frequency::SemiAnnually => {
            trailing_sum(series, as_of, config::TRAILING_HALF_YEAR_DAYS) * Decimal::from(2)
        }
        Frequency::Irregular => series.iter().map(|e| e.amount).sum(),
    }
}

/// Relative change between the first and last payout of the trailing five
/// years (1825 days counting `as_of`).
///
/// Returns zero when the window holds no payout, or when the first payout in
/// the window is zero and the ratio is undefined.
pub fn growth_5y(series: &DividendSeries, as_of: NaiveDate) -> Decimal {
    let mut window = series.between(window_start(as_of, config::GROWTH_WINDOW_DAYS), as_of);

    let Some(first) = window.next() else {
        return Decimal::ZERO;
    };
    let last = window.last().unwrap_or(first);

    (last.amount - first.amount)
        .checked_div(first.amount)
        .unwrap_or(Decimal::ZERO)
}

/// `annual / price`, or zero when the price is not positive.
pub fn dividend_yield(annual_dividend: Decimal, current_price: Decimal) -> Decimal {
    ratio_or_zero(annual_dividend, current_price)
}

/// `annual / eps`, or zero when EPS is zero.
///
/// A negative EPS still produces a (negative) ratio; only the division by
/// zero is guarded.
pub fn payout_ratio(annual_dividend: Decimal, trailing_eps: Decimal) -> Decimal {
    annual_dividend
        .checked_div(trailing_eps)
        .unwrap_or(Decimal::ZERO)
}

/// Assemble a [`DividendReport`] from an already-fetched series.
///
/// Fails with [`TickerError::NoData`] when the series is empty.
pub fn build_report(
    symbol: &str,
    series: &DividendSeries,
    fundamentals: Fundamentals,
    as_of: NaiveDate,
) -> Result<DividendReport> {
    if series.is_empty() {
        return Err(TickerError::NoData(format!(
            "No dividend history returned for symbol '{}'",
            symbol
        )));
    }

    let frequency = classify_frequency(series);
    let annual_dividend = trailing_annual_dividend(series, frequency, as_of);

    let report = DividendReport {
        symbol: symbol.to_string(),
        as_of,
        history: series.history(),
        annual_dividend,
        dividend_yield: dividend_yield(annual_dividend, fundamentals.current_price),
        payout_ratio: payout_ratio(annual_dividend, fundamentals.trailing_eps),
        growth_5y: growth_5y(series, as_of),
        frequency,
    };

    tracing::debug!(
        symbol = symbol,
        frequency = %report.frequency,
        annual_dividend = %report.annual_dividend,
        dividend_yield = %report.dividend_yield,
        payout_ratio = %report.payout_ratio,
        growth_5y = %report.growth_5y,
        "dividend report computed"
    );

    Ok(report)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn trailing_sum(series: &DividendSeries, as_of: NaiveDate, days: i64) -> Decimal {
    series
        .between(window_start(as_of, days), as_of)
        .map(|e| e.amount)
        .sum()
}

/// First day of a window of `days` calendar days ending on `as_of`.
///
/// `as_of` itself is one of the days, so a 365-day window never holds both
/// ends of an anniversary.
fn window_start(as_of: NaiveDate, days: i64) -> NaiveDate {
    as_of - Duration::days(days - 1)
}

fn ratio_or_zero(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    numerator
        .checked_div(denominator)
        .unwrap_or(Decimal::ZERO)
}
