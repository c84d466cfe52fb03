//! Async wrapper around [`TickerSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the provider waits on the network.
//!
//! # Example
//!
//! ```no_run
//! use ticker_sdk::AsyncTickerSdk;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let sdk = AsyncTickerSdk::builder().build().await.unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let freq = sdk.run(|s| s.dividends().frequency("KO")).await.unwrap();
//!
//!     // Convenience method for the dividend report
//!     let report = sdk.dividend_report("KO").await.unwrap();
//! }
//! ```

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;

use crate::error::{Result, TickerError};
use crate::models::{DividendReport, LatestPrice, PricePoint};
use crate::{MarketDataProvider, TickerSdk, TickerSdkBuilder};

// ---------------------------------------------------------------------------
// AsyncTickerSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncTickerSdk`] instance.
///
/// Mirrors [`TickerSdkBuilder`]; see there for the meaning of each option.
#[derive(Default)]
pub struct AsyncTickerSdkBuilder {
    inner: TickerSdkBuilder,
}

impl AsyncTickerSdkBuilder {
    /// Set the provider base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.inner = self.inner.base_url(url);
        self
    }

    /// Set the HTTP request timeout for provider calls.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Enable or disable offline mode.
    pub fn offline(mut self, offline: bool) -> Self {
        self.inner = self.inner.offline(offline);
        self
    }

    /// Set the directory offline snapshots are read from.
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.inner = self.inner.data_dir(path);
        self
    }

    /// Pin the reference date trailing windows end on.
    pub fn as_of(mut self, date: NaiveDate) -> Self {
        self.inner = self.inner.as_of(date);
        self
    }

    /// Use a custom provider.
    pub fn provider<P: MarketDataProvider + 'static>(mut self, provider: P) -> Self {
        self.inner = self.inner.provider(provider);
        self
    }

    /// Build the async SDK.
    ///
    /// Construction runs on the blocking thread pool, since the blocking
    /// HTTP client may not be created on an async worker thread. For the
    /// same reason the last handle of the result must be released with
    /// [`AsyncTickerSdk::close`]: dropping it on a worker thread panics
    /// when the provider owns that client.
    pub async fn build(self) -> Result<AsyncTickerSdk> {
        let inner = self.inner;
        tokio::task::spawn_blocking(move || {
            let sdk = inner.build()?;
            Ok(AsyncTickerSdk {
                inner: Arc::new(sdk),
            })
        })
        .await
        .map_err(join_error)?
    }
}

// ---------------------------------------------------------------------------
// AsyncTickerSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`TickerSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. [`TickerSdk`] holds no mutable state,
/// so concurrent calls share it through an [`Arc`] without locking.
///
/// Call [`close()`](Self::close) rather than dropping the last handle on an
/// async worker thread. Dropping the last handle drops the provider, and the
/// blocking HTTP client inside [`YahooProvider`](crate::YahooProvider)
/// panics when dropped from within a runtime.
#[derive(Clone)]
pub struct AsyncTickerSdk {
    inner: Arc<TickerSdk>,
}

impl AsyncTickerSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncTickerSdkBuilder {
        AsyncTickerSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives a `&TickerSdk` reference and should return a
    /// `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&TickerSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&sdk))
            .await
            .map_err(join_error)?
    }

    /// Build the dividend report for `symbol` asynchronously.
    pub async fn dividend_report(&self, symbol: &str) -> Result<DividendReport> {
        let symbol = symbol.to_string();
        self.run(move |s| s.dividends().report(&symbol)).await
    }

    /// Fetch the latest close for `symbol` asynchronously.
    pub async fn latest_price(
        &self,
        symbol: &str,
        period: &str,
        interval: &str,
    ) -> Result<LatestPrice> {
        let (symbol, period, interval) = (symbol.to_string(), period.to_string(), interval.to_string());
        self.run(move |s| s.prices().latest(&symbol, &period, &interval))
            .await
    }

    /// Fetch the close-price spread for `symbol` asynchronously.
    pub async fn price_spread(
        &self,
        symbol: &str,
        period: &str,
        interval: &str,
    ) -> Result<Vec<PricePoint>> {
        let (symbol, period, interval) = (symbol.to_string(), period.to_string(), interval.to_string());
        self.run(move |s| s.prices().spread(&symbol, &period, &interval))
            .await
    }

    /// Release this handle on the blocking thread pool.
    ///
    /// The SDK itself is dropped once the last clone is closed or dropped.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || drop(self.inner))
            .await
            .map_err(join_error)
    }
}

fn join_error(e: tokio::task::JoinError) -> TickerError {
    TickerError::InvalidArgument(format!("Task join error: {e}"))
}
