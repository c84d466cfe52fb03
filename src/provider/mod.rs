//! Market data providers.
//!
//! A provider is the only place the SDK touches the outside world. The
//! query interfaces validate their inputs before calling into a provider,
//! and turn empty provider results into [`TickerError::NoData`](crate::TickerError::NoData).

pub mod file;
pub mod yahoo;

pub use file::{FileProvider, Snapshot};
pub use yahoo::YahooProvider;

use crate::error::Result;
use crate::models::{DividendSeries, Fundamentals, Interval, Period, PricePoint};

/// Source of raw time series and fundamentals for ticker symbols.
///
/// Implementations must not retry or cache; each call maps to a single
/// upstream read. They are shared across threads, so they must be
/// `Send + Sync`.
pub trait MarketDataProvider: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &str;

    /// Full dividend history for `symbol`. An unknown symbol or a symbol
    /// that never paid yields an empty series rather than an error.
    fn fetch_dividends(&self, symbol: &str) -> Result<DividendSeries>;

    /// Current price and trailing twelve-month EPS for `symbol`.
    fn fetch_fundamentals(&self, symbol: &str) -> Result<Fundamentals>;

    /// Closing prices for `symbol` over `period`, spaced by `interval`,
    /// oldest first. May be empty.
    fn fetch_history(
        &self,
        symbol: &str,
        period: Period,
        interval: Interval,
    ) -> Result<Vec<PricePoint>>;
}
