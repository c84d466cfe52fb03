//! Offline provider reading per-symbol JSON snapshots from a directory.
//!
//! Each symbol lives in `{SYMBOL}.json` or `{SYMBOL}.json.gz` (gzip is
//! handled transparently). The provider only ever reads; producing the
//! snapshots is up to the caller.

use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TickerError};
use crate::models::{DividendSeries, Fundamentals, Interval, Period, PricePoint};
use crate::provider::MarketDataProvider;

/// Everything the SDK knows about one symbol, as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub dividends: DividendSeries,
    #[serde(default)]
    pub fundamentals: Option<Fundamentals>,
    #[serde(default)]
    pub prices: Vec<PricePoint>,
}

/// Serves provider calls from snapshot files under a data directory.
pub struct FileProvider {
    data_dir: PathBuf,
}

impl FileProvider {
    /// Create a provider over `data_dir`. The directory does not need to
    /// exist yet; missing snapshots read as "no data".
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Directory the snapshots are read from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the plain JSON snapshot for `symbol`.
    pub fn snapshot_path(&self, symbol: &str) -> Result<PathBuf> {
        Ok(self.data_dir.join(format!("{}.json", file_stem(symbol)?)))
    }

    /// Load the snapshot for `symbol`, or `None` if there is none on disk.
    pub fn load(&self, symbol: &str) -> Result<Option<Snapshot>> {
        let plain = self.snapshot_path(symbol)?;
        let gzipped = plain.with_extension("json.gz");

        let contents = if plain.exists() {
            fs::read_to_string(&plain)?
        } else if gzipped.exists() {
            let file = fs::File::open(&gzipped)?;
            let mut decoder = BufReader::new(GzDecoder::new(BufReader::new(file)));
            let mut contents = String::new();
            decoder.read_to_string(&mut contents)?;
            contents
        } else {
            tracing::debug!(symbol, dir = %self.data_dir.display(), "no snapshot on disk");
            return Ok(None);
        };

        let snapshot = serde_json::from_str(&contents).map_err(|e| {
            tracing::warn!(symbol, "corrupt snapshot: {}", e);
            TickerError::from(e)
        })?;
        Ok(Some(snapshot))
    }
}

impl MarketDataProvider for FileProvider {
    fn name(&self) -> &str {
        "file"
    }

    fn fetch_dividends(&self, symbol: &str) -> Result<DividendSeries> {
        Ok(self.load(symbol)?.map(|s| s.dividends).unwrap_or_default())
    }

    fn fetch_fundamentals(&self, symbol: &str) -> Result<Fundamentals> {
        self.load(symbol)?
            .and_then(|s| s.fundamentals)
            .ok_or_else(|| {
                TickerError::NoData(format!("No fundamentals stored for symbol '{}'", symbol))
            })
    }

    /// Stored prices within `period` of the newest stored point.
    ///
    /// Points are returned at the resolution they were recorded with;
    /// `interval` is not used to resample.
    fn fetch_history(
        &self,
        symbol: &str,
        period: Period,
        _interval: Interval,
    ) -> Result<Vec<PricePoint>> {
        let Some(snapshot) = self.load(symbol)? else {
            return Ok(Vec::new());
        };

        let mut prices = snapshot.prices;
        prices.sort_by_key(|p| p.timestamp);

        let Some(end) = prices.last().map(|p| p.timestamp) else {
            return Ok(prices);
        };
        if let Some(start) = period.start(end) {
            prices.retain(|p| p.timestamp >= start);
        }
        Ok(prices)
    }
}

/// Normalize a symbol into a file stem, refusing anything that could escape
/// the data directory.
fn file_stem(symbol: &str) -> Result<String> {
    let stem = symbol.trim().to_uppercase();
    let valid = !stem.is_empty()
        && !stem.starts_with('.')
        && stem
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '=' | '_'));
    if !valid {
        return Err(TickerError::InvalidSymbol(format!(
            "'{}' cannot be used as a snapshot name",
            symbol
        )));
    }
    Ok(stem)
}
