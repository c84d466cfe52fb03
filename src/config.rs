use std::path::PathBuf;
use std::time::Duration;

pub const YAHOO_BASE: &str = "https://query1.finance.yahoo.com";
pub const CHART_PATH: &str = "v8/finance/chart";
pub const QUOTE_PATH: &str = "v7/finance/quote";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_BASE_URL: &str = "TICKER_SDK_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "TICKER_SDK_TIMEOUT_SECS";
pub const ENV_DATA_DIR: &str = "TICKER_SDK_DATA_DIR";

/// Period strings accepted by the price queries, in ascending order of span.
pub const VALID_PERIODS: [&str; 11] = [
    "1d", "5d", "1mo", "3mo", "6mo", "1y", "2y", "5y", "10y", "ytd", "max",
];

/// Interval strings accepted by the price queries, finest first.
pub const VALID_INTERVALS: [&str; 13] = [
    "1m", "2m", "5m", "15m", "30m", "60m", "90m", "1h", "1d", "5d", "1wk", "1mo", "3mo",
];

// Dividend analytics windows, in days.
pub const TRAILING_YEAR_DAYS: i64 = 365;
pub const TRAILING_HALF_YEAR_DAYS: i64 = 182;
pub const GROWTH_WINDOW_DAYS: i64 = 5 * 365;

/// Directory holding offline snapshots when none is configured.
pub fn default_data_dir() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("ticker-sdk")
    } else {
        PathBuf::from(".ticker-sdk-data")
    }
}
