//! Dividend queries: raw payout history and the derived dividend report.

use chrono::NaiveDate;

use crate::analytics;
use crate::error::{Result, TickerError};
use crate::models::{DividendReport, DividendSeries, Frequency};
use crate::provider::MarketDataProvider;
use crate::queries::checked_symbol;

// ---------------------------------------------------------------------------
// DividendQuery
// ---------------------------------------------------------------------------

/// Query interface for dividend data, with every trailing window ending at
/// a fixed reference date.
pub struct DividendQuery<'a> {
    provider: &'a dyn MarketDataProvider,
    as_of: NaiveDate,
}

impl<'a> DividendQuery<'a> {
    /// Create a new `DividendQuery` bound to the given provider and
    /// reference date.
    pub fn new(provider: &'a dyn MarketDataProvider, as_of: NaiveDate) -> Self {
        Self { provider, as_of }
    }

    /// The reference date trailing windows end on.
    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Build the dividend report for `symbol`.
    ///
    /// # Errors
    ///
    /// * [`TickerError::InvalidSymbol`] if `symbol` is blank. Nothing is
    ///   fetched in that case.
    /// * [`TickerError::NoData`] if the provider has no dividend history.
    /// * Any provider error, unchanged.
    pub fn report(&self, symbol: &str) -> Result<DividendReport> {
        let symbol = checked_symbol(symbol)?;
        let series = self.non_empty_series(symbol)?;
        let fundamentals = self.provider.fetch_fundamentals(symbol)?;
        analytics::build_report(symbol, &series, fundamentals, self.as_of)
    }

    /// Fetch the full dividend history for `symbol`, oldest first.
    pub fn history(&self, symbol: &str) -> Result<DividendSeries> {
        let symbol = checked_symbol(symbol)?;
        self.non_empty_series(symbol)
    }

    /// Classify the payout frequency of `symbol` without fetching
    /// fundamentals.
    pub fn frequency(&self, symbol: &str) -> Result<Frequency> {
        let series = self.history(symbol)?;
        Ok(analytics::classify_frequency(&series))
    }

    fn non_empty_series(&self, symbol: &str) -> Result<DividendSeries> {
        tracing::debug!(symbol, provider = self.provider.name(), "fetching dividends");
        let series = self.provider.fetch_dividends(symbol)?;
        if series.is_empty() {
            return Err(TickerError::NoData(format!(
                "No dividend history returned for symbol '{}'",
                symbol
            )));
        }
        Ok(series)
    }
}
