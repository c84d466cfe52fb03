//! Online provider backed by the Yahoo Finance chart and quote endpoints.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config;
use crate::error::{Result, TickerError};
use crate::models::{DividendEvent, DividendSeries, Fundamentals, Interval, Period, PricePoint};
use crate::provider::MarketDataProvider;

/// Fetches dividends, fundamentals and price history over HTTP.
///
/// One request per call; no retries and no caching.
pub struct YahooProvider {
    base_url: String,
    client: Client,
}

impl YahooProvider {
    /// Create a provider talking to `base_url` (normally [`config::YAHOO_BASE`]).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ticker-sdk/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn chart(&self, symbol: &str, range: Period, interval: Interval) -> Result<Option<ChartResult>> {
        let url = format!("{}/{}/{}", self.base_url, config::CHART_PATH, symbol);
        tracing::debug!(%url, range = %range, interval = %interval, "requesting chart");

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("range", range.as_str()),
                ("interval", interval.as_str()),
                ("events", "div"),
            ])
            .send()?;

        let Some(body) = read_json::<ChartEnvelope>(resp)? else {
            return Ok(None);
        };

        if let Some(err) = body.chart.error {
            tracing::warn!(symbol, code = %err.code, "chart request rejected: {}", err.description);
            return Ok(None);
        }
        Ok(body.chart.result.and_then(|r| r.into_iter().next()))
    }

    fn quote(&self, symbol: &str) -> Result<Option<QuoteResult>> {
        let url = format!("{}/{}", self.base_url, config::QUOTE_PATH);
        tracing::debug!(%url, symbol, "requesting quote");

        let resp = self
            .client
            .get(&url)
            .query(&[("symbols", symbol)])
            .send()?;

        let Some(body) = read_json::<QuoteEnvelope>(resp)? else {
            return Ok(None);
        };
        Ok(body
            .quote_response
            .result
            .and_then(|r| r.into_iter().next()))
    }
}

impl MarketDataProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo"
    }

    fn fetch_dividends(&self, symbol: &str) -> Result<DividendSeries> {
        let Some(chart) = self.chart(symbol, Period::Max, Interval::OneMonth)? else {
            return Ok(DividendSeries::empty());
        };

        let dividends = chart
            .events
            .and_then(|e| e.dividends)
            .unwrap_or_default();

        let mut events = Vec::with_capacity(dividends.len());
        for raw in dividends.into_values() {
            let date = timestamp(raw.date)?.date_naive();
            let amount = decimal(raw.amount, "dividend amount")?;
            events.push(DividendEvent::new(date, amount));
        }
        DividendSeries::new(events)
    }

    fn fetch_fundamentals(&self, symbol: &str) -> Result<Fundamentals> {
        let quote = self.quote(symbol)?.ok_or_else(|| {
            TickerError::NoData(format!("No quote returned for symbol '{}'", symbol))
        })?;

        let current_price = quote
            .regular_market_price
            .ok_or_else(|| {
                TickerError::NoData(format!("No market price returned for symbol '{}'", symbol))
            })
            .and_then(|p| decimal(p, "market price"))?;

        let trailing_eps = match quote.eps_trailing_twelve_months {
            Some(eps) => decimal(eps, "trailing EPS")?,
            None => {
                tracing::warn!(symbol, "quote has no trailing EPS; treating it as zero");
                Decimal::ZERO
            }
        };

        Ok(Fundamentals {
            current_price,
            trailing_eps,
        })
    }

    fn fetch_history(
        &self,
        symbol: &str,
        period: Period,
        interval: Interval,
    ) -> Result<Vec<PricePoint>> {
        let Some(chart) = self.chart(symbol, period, interval)? else {
            return Ok(Vec::new());
        };

        let closes = chart
            .indicators
            .and_then(|i| i.quote.into_iter().next())
            .map(|q| q.close)
            .unwrap_or_default();
        let timestamps = chart.timestamp.unwrap_or_default();

        let mut points = Vec::with_capacity(timestamps.len());
        for (ts, close) in timestamps.into_iter().zip(closes) {
            // Halted or partial bars come back as nulls.
            let Some(close) = close else { continue };
            points.push(PricePoint {
                timestamp: timestamp(ts)?,
                close: decimal(close, "close price")?,
            });
        }
        Ok(points)
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    events: Option<ChartEvents>,
    indicators: Option<Indicators>,
}

#[derive(Debug, Deserialize)]
struct ChartEvents {
    dividends: Option<HashMap<String, RawDividend>>,
}

#[derive(Debug, Deserialize)]
struct RawDividend {
    amount: f64,
    date: i64,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<RawQuote>,
}

#[derive(Debug, Deserialize)]
struct RawQuote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct QuoteEnvelope {
    #[serde(rename = "quoteResponse")]
    quote_response: QuoteBody,
}

#[derive(Debug, Deserialize)]
struct QuoteBody {
    result: Option<Vec<QuoteResult>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteResult {
    regular_market_price: Option<f64>,
    eps_trailing_twelve_months: Option<f64>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Decode a JSON body, mapping 404 to `None`.
///
/// The chart endpoint answers unknown symbols with 404 and an error body;
/// that is "no data", not a transport failure.
fn read_json<T: DeserializeOwned>(resp: Response) -> Result<Option<T>> {
    if resp.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    let resp = resp.error_for_status()?;
    let text = resp.text()?;
    Ok(Some(serde_json::from_str(&text)?))
}

fn timestamp(secs: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| TickerError::Provider(format!("timestamp out of range: {}", secs)))
}

fn decimal(value: f64, what: &str) -> Result<Decimal> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp(6).normalize())
        .ok_or_else(|| TickerError::Provider(format!("{} is not a finite number: {}", what, value)))
}
