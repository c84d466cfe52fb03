//! Shared test fixtures for the ticker SDK integration tests.
//!
//! Provides an in-memory `RecordingProvider` that counts upstream calls,
//! series builders, and helpers that write snapshot files for
//! `FileProvider` into a temp directory.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use flate2::write::GzEncoder;
use flate2::Compression;
use rust_decimal::Decimal;
use ticker_sdk::models::{
    DividendEvent, DividendSeries, Fundamentals, Interval, Period, PricePoint,
};
use ticker_sdk::provider::Snapshot;
use ticker_sdk::{MarketDataProvider, Result, TickerError};

// ---------------------------------------------------------------------------
// RecordingProvider
// ---------------------------------------------------------------------------

/// In-memory provider serving fixed snapshots and counting every fetch.
#[derive(Default)]
pub struct RecordingProvider {
    snapshots: HashMap<String, Snapshot>,
    calls: Arc<AtomicUsize>,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, symbol: &str, snapshot: Snapshot) -> Self {
        self.snapshots.insert(symbol.to_string(), snapshot);
        self
    }

    /// Number of fetches made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Shared handle to the call counter, usable after the provider has been
    /// moved into an SDK.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }

    fn get(&self, symbol: &str) -> Option<&Snapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.snapshots.get(symbol)
    }
}

impl MarketDataProvider for RecordingProvider {
    fn name(&self) -> &str {
        "recording"
    }

    fn fetch_dividends(&self, symbol: &str) -> Result<DividendSeries> {
        Ok(self
            .get(symbol)
            .map(|s| s.dividends.clone())
            .unwrap_or_default())
    }

    fn fetch_fundamentals(&self, symbol: &str) -> Result<Fundamentals> {
        self.get(symbol)
            .and_then(|s| s.fundamentals)
            .ok_or_else(|| TickerError::NoData(format!("no fundamentals for {}", symbol)))
    }

    fn fetch_history(
        &self,
        symbol: &str,
        _period: Period,
        _interval: Interval,
    ) -> Result<Vec<PricePoint>> {
        Ok(self
            .get(symbol)
            .map(|s| s.prices.clone())
            .unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

pub fn series(events: &[((i32, u32, u32), Decimal)]) -> DividendSeries {
    DividendSeries::new(
        events
            .iter()
            .map(|&((y, m, d), amount)| DividendEvent::new(date(y, m, d), amount))
            .collect(),
    )
    .unwrap()
}

/// `per_year` equal payouts of `amount` in each year of `years`, spread
/// evenly through the year.
pub fn regular_series(years: std::ops::RangeInclusive<i32>, per_year: u32, amount: Decimal) -> DividendSeries {
    let step = 12 / per_year;
    let mut events = Vec::new();
    for year in years {
        for i in 0..per_year {
            events.push(DividendEvent::new(date(year, 1 + i * step, 15), amount));
        }
    }
    DividendSeries::new(events).unwrap()
}

pub fn fundamentals(current_price: Decimal, trailing_eps: Decimal) -> Fundamentals {
    Fundamentals {
        current_price,
        trailing_eps,
    }
}

pub fn price(ts: DateTime<Utc>, close: Decimal) -> PricePoint {
    PricePoint { timestamp: ts, close }
}

// ---------------------------------------------------------------------------
// Snapshot files
// ---------------------------------------------------------------------------

/// Write `snapshot` as `{symbol}.json` under `dir`.
pub fn write_snapshot(dir: &Path, symbol: &str, snapshot: &Snapshot) {
    let path = dir.join(format!("{}.json", symbol));
    fs::write(path, serde_json::to_string_pretty(snapshot).unwrap()).unwrap();
}

/// Write `snapshot` gzip-compressed as `{symbol}.json.gz` under `dir`.
pub fn write_gz_snapshot(dir: &Path, symbol: &str, snapshot: &Snapshot) {
    let path = dir.join(format!("{}.json.gz", symbol));
    let file = fs::File::create(path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder
        .write_all(serde_json::to_string(snapshot).unwrap().as_bytes())
        .unwrap();
    encoder.finish().unwrap();
}
