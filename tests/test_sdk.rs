//! SDK builder and configuration tests. None of these touch the network.

mod common;

use std::time::Duration;

use common::{date, RecordingProvider};
use ticker_sdk::config;
use ticker_sdk::{TickerError, TickerSdk, TickerSdkBuilder, YahooProvider};

#[test]
fn default_build_uses_yahoo_provider() {
    let sdk = TickerSdk::builder().build().unwrap();
    assert_eq!(sdk.provider().name(), "yahoo");
}

#[test]
fn yahoo_provider_strips_trailing_slash() {
    let provider = YahooProvider::new("http://localhost:9/", Duration::from_secs(1)).unwrap();
    assert_eq!(provider.base_url(), "http://localhost:9");
}

#[test]
fn offline_without_data_dir_uses_default_dir() {
    let sdk = TickerSdk::builder().offline(true).build().unwrap();
    assert_eq!(sdk.provider().name(), "file");
    assert!(config::default_data_dir().ends_with("ticker-sdk") || config::default_data_dir().ends_with(".ticker-sdk-data"));
}

#[test]
fn custom_provider_overrides_offline() {
    let sdk = TickerSdk::builder()
        .offline(true)
        .provider(RecordingProvider::new())
        .build()
        .unwrap();
    assert_eq!(sdk.provider().name(), "recording");
}

#[test]
fn display_shows_provider_and_date() {
    let sdk = TickerSdk::builder()
        .provider(RecordingProvider::new())
        .as_of(date(2023, 5, 1))
        .build()
        .unwrap();
    assert_eq!(sdk.to_string(), "TickerSdk(provider=recording, as_of=2023-05-01)");

    let sdk = TickerSdk::builder()
        .provider(RecordingProvider::new())
        .build()
        .unwrap();
    assert_eq!(sdk.to_string(), "TickerSdk(provider=recording, as_of=today)");
}

#[test]
fn blank_symbol_through_sdk_makes_no_fetch() {
    let provider = RecordingProvider::new();
    let calls = provider.counter();
    let sdk = TickerSdk::builder().provider(provider).build().unwrap();

    assert!(matches!(
        sdk.build_dividend_report(""),
        Err(TickerError::InvalidSymbol(_))
    ));
    assert!(matches!(
        sdk.prices().latest(" ", "1d", "1d"),
        Err(TickerError::InvalidSymbol(_))
    ));
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
}

// The only test that touches the process environment.
#[test]
fn from_env_reads_overrides() {
    let tmp = tempfile::tempdir().unwrap();

    std::env::set_var(config::ENV_TIMEOUT_SECS, "not-a-number");
    let err = TickerSdkBuilder::from_env().err().unwrap();
    assert!(matches!(err, TickerError::InvalidArgument(_)));

    std::env::set_var(config::ENV_TIMEOUT_SECS, "5");
    std::env::set_var(config::ENV_DATA_DIR, tmp.path());
    let sdk = TickerSdkBuilder::from_env().unwrap().build().unwrap();
    assert_eq!(sdk.provider().name(), "file");

    std::env::remove_var(config::ENV_TIMEOUT_SECS);
    std::env::remove_var(config::ENV_DATA_DIR);
}
