//! Price queries: the latest close and the close-price spread over a window.

use crate::error::{Result, TickerError};
use crate::models::{Interval, LatestPrice, Period, PricePoint};
use crate::provider::MarketDataProvider;
use crate::queries::checked_symbol;

// ---------------------------------------------------------------------------
// PriceQuery
// ---------------------------------------------------------------------------

/// Query interface for closing prices.
///
/// The string-taking methods validate in a fixed order (symbol, period,
/// interval, then the period/interval combination) and fail before any
/// fetch happens.
pub struct PriceQuery<'a> {
    provider: &'a dyn MarketDataProvider,
}

impl<'a> PriceQuery<'a> {
    /// Create a new `PriceQuery` bound to the given provider.
    pub fn new(provider: &'a dyn MarketDataProvider) -> Self {
        Self { provider }
    }

    /// Timestamp and close of the last data point in the window.
    ///
    /// `period` and `interval` use the wire strings (`"1d"`, `"1mo"`, ...).
    pub fn latest(&self, symbol: &str, period: &str, interval: &str) -> Result<LatestPrice> {
        let (symbol, period, interval) = parse_request(symbol, period, interval)?;
        self.latest_with(symbol, period, interval)
    }

    /// Every (timestamp, close) pair in the window, oldest first.
    pub fn spread(&self, symbol: &str, period: &str, interval: &str) -> Result<Vec<PricePoint>> {
        let (symbol, period, interval) = parse_request(symbol, period, interval)?;
        self.spread_with(symbol, period, interval)
    }

    /// Typed variant of [`latest`](Self::latest).
    pub fn latest_with(
        &self,
        symbol: &str,
        period: Period,
        interval: Interval,
    ) -> Result<LatestPrice> {
        let points = self.spread_with(symbol, period, interval)?;
        points
            .last()
            .copied()
            .map(LatestPrice::from)
            .ok_or_else(|| no_data(symbol, period, interval))
    }

    /// Typed variant of [`spread`](Self::spread).
    pub fn spread_with(
        &self,
        symbol: &str,
        period: Period,
        interval: Interval,
    ) -> Result<Vec<PricePoint>> {
        let symbol = checked_symbol(symbol)?;
        interval.check_period(period)?;

        tracing::debug!(
            symbol,
            period = %period,
            interval = %interval,
            provider = self.provider.name(),
            "fetching price history"
        );
        let mut points = self.provider.fetch_history(symbol, period, interval)?;
        if points.is_empty() {
            return Err(no_data(symbol, period, interval));
        }
        points.sort_by_key(|p| p.timestamp);
        Ok(points)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_request<'s>(
    symbol: &'s str,
    period: &str,
    interval: &str,
) -> Result<(&'s str, Period, Interval)> {
    let symbol = checked_symbol(symbol)?;
    let period: Period = period.parse()?;
    let interval: Interval = interval.parse()?;
    interval.check_period(period)?;
    Ok((symbol, period, interval))
}

fn no_data(symbol: &str, period: Period, interval: Interval) -> TickerError {
    TickerError::NoData(format!(
        "No data returned for symbol '{}' with period '{}' and interval '{}'",
        symbol, period, interval
    ))
}
