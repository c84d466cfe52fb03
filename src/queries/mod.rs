//! Query modules for the ticker SDK.
//!
//! Each module provides a query struct that borrows a
//! [`MarketDataProvider`](crate::provider::MarketDataProvider), validates
//! its arguments before any fetch, and returns typed models.

pub mod dividends;
pub mod prices;

pub use dividends::DividendQuery;
pub use prices::PriceQuery;

use crate::error::{Result, TickerError};

/// Trim `symbol` and reject it if nothing is left.
pub(crate) fn checked_symbol(symbol: &str) -> Result<&str> {
    let trimmed = symbol.trim();
    if trimmed.is_empty() {
        return Err(TickerError::InvalidSymbol(
            "Symbol must be a non-empty string".to_string(),
        ));
    }
    Ok(trimmed)
}
