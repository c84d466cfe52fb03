//! Ticker SDK for Rust.
//!
//! Provides a high-level client for market data on ticker symbols: the
//! latest close, the close-price spread over a window, and a dividend
//! report (payout frequency, yield, payout ratio, five-year growth).
//! Data comes from a [`MarketDataProvider`]; the SDK ships an online
//! Yahoo Finance provider and an offline provider over JSON snapshots.
//!
//! # Quick start
//!
//! ```no_run
//! use ticker_sdk::TickerSdk;
//!
//! let sdk = TickerSdk::builder().build().unwrap();
//!
//! // Last daily close
//! let latest = sdk.prices().latest("AAPL", "1d", "1d").unwrap();
//!
//! // Dividend report
//! let report = sdk.dividends().report("KO").unwrap();
//! println!("{} pays {}, yield {}", report.symbol, report.frequency, report.dividend_yield);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod analytics;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod queries;

#[cfg(feature = "async")]
pub use async_client::AsyncTickerSdk;
pub use error::{Result, TickerError};
pub use provider::{FileProvider, MarketDataProvider, YahooProvider};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{NaiveDate, Utc};

// ---------------------------------------------------------------------------
// TickerSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`TickerSdk`] instance.
///
/// Use [`TickerSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](TickerSdkBuilder::build) to create the SDK.
pub struct TickerSdkBuilder {
    base_url: String,
    timeout: Duration,
    offline: bool,
    data_dir: Option<PathBuf>,
    as_of: Option<NaiveDate>,
    provider: Option<Box<dyn MarketDataProvider>>,
}

impl Default for TickerSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::YAHOO_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            offline: false,
            data_dir: None,
            as_of: None,
            provider: None,
        }
    }
}

impl TickerSdkBuilder {
    /// Seed a builder from the process environment.
    ///
    /// Reads `TICKER_SDK_BASE_URL`, `TICKER_SDK_TIMEOUT_SECS` and
    /// `TICKER_SDK_DATA_DIR`. Setting a data directory switches the builder
    /// to offline mode. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::default();
        if let Ok(url) = std::env::var(config::ENV_BASE_URL) {
            builder = builder.base_url(url);
        }
        if let Ok(secs) = std::env::var(config::ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                TickerError::InvalidArgument(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    config::ENV_TIMEOUT_SECS,
                    secs
                ))
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Ok(dir) = std::env::var(config::ENV_DATA_DIR) {
            builder = builder.data_dir(dir).offline(true);
        }
        Ok(builder)
    }

    /// Set the provider base URL.
    ///
    /// Defaults to `https://query1.finance.yahoo.com`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the HTTP request timeout for provider calls.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable or disable offline mode.
    ///
    /// When offline, the SDK never touches the network and serves every
    /// call from snapshot files under the data directory. Defaults to
    /// `false`.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the directory offline snapshots are read from.
    ///
    /// If not set, the platform cache directory is used (e.g.
    /// `~/.cache/ticker-sdk` on Linux).
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Pin the reference date trailing windows end on.
    ///
    /// Defaults to the current UTC date, evaluated on each query.
    pub fn as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = Some(date);
        self
    }

    /// Use a custom provider. Overrides `offline`, `data_dir`, `base_url`
    /// and `timeout`.
    pub fn provider<P: MarketDataProvider + 'static>(mut self, provider: P) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Build the SDK.
    ///
    /// No request is made here; providers fetch lazily on first query.
    pub fn build(self) -> Result<TickerSdk> {
        let provider: Box<dyn MarketDataProvider> = match self.provider {
            Some(provider) => provider,
            None if self.offline => {
                let dir = self.data_dir.unwrap_or_else(config::default_data_dir);
                Box::new(FileProvider::new(dir))
            }
            None => Box::new(YahooProvider::new(self.base_url, self.timeout)?),
        };
        tracing::debug!(provider = provider.name(), "ticker sdk ready");
        Ok(TickerSdk {
            provider,
            as_of: self.as_of,
        })
    }
}

// ---------------------------------------------------------------------------
// TickerSdk
// ---------------------------------------------------------------------------

/// The main entry point for the ticker SDK.
///
/// Owns a [`MarketDataProvider`] and exposes domain-specific query
/// interfaces as lightweight borrowing wrappers. Holds no mutable state, so
/// a shared reference can be used from many threads at once.
///
/// Created via [`TickerSdk::builder()`].
pub struct TickerSdk {
    provider: Box<dyn MarketDataProvider>,
    as_of: Option<NaiveDate>,
}

impl TickerSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> TickerSdkBuilder {
        TickerSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the dividend query interface.
    ///
    /// Trailing windows end on the pinned reference date, or today (UTC).
    pub fn dividends(&self) -> queries::dividends::DividendQuery<'_> {
        queries::dividends::DividendQuery::new(self.provider.as_ref(), self.as_of())
    }

    /// Access the price query interface.
    pub fn prices(&self) -> queries::prices::PriceQuery<'_> {
        queries::prices::PriceQuery::new(self.provider.as_ref())
    }

    // -- Convenience -------------------------------------------------------

    /// Build the dividend report for `symbol`.
    ///
    /// Shorthand for `sdk.dividends().report(symbol)`.
    pub fn build_dividend_report(&self, symbol: &str) -> Result<models::DividendReport> {
        self.dividends().report(symbol)
    }

    /// The reference date queries use right now.
    pub fn as_of(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Return a reference to the underlying provider for advanced usage.
    pub fn provider(&self) -> &dyn MarketDataProvider {
        self.provider.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for TickerSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_of {
            Some(date) => write!(f, "TickerSdk(provider={}, as_of={})", self.provider.name(), date),
            None => write!(f, "TickerSdk(provider={}, as_of=today)", self.provider.name()),
        }
    }
}
