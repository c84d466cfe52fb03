use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TickerError};

// ---------------------------------------------------------------------------
// DividendEvent: a single cash distribution
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DividendEvent {
    pub date: NaiveDate,
    pub amount: Decimal,
}

impl DividendEvent {
    pub fn new(date: NaiveDate, amount: Decimal) -> Self {
        Self { date, amount }
    }
}

// ---------------------------------------------------------------------------
// DividendSeries: chronologically ordered events for one symbol
// ---------------------------------------------------------------------------

/// Dividend events for a single symbol, always sorted by date.
///
/// The ordering and the non-negative amount rule are enforced on
/// construction (including deserialization), so every consumer can rely on
/// `first()` being the oldest event and `last()` the newest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DividendEvent>", into = "Vec<DividendEvent>")]
pub struct DividendSeries {
    events: Vec<DividendEvent>,
}

impl DividendSeries {
    /// Build a series from events in any order.
    ///
    /// Returns [`TickerError::InvalidArgument`] if any amount is negative.
    pub fn new(mut events: Vec<DividendEvent>) -> Result<Self> {
        if let Some(bad) = events.iter().find(|e| e.amount < Decimal::ZERO) {
            return Err(TickerError::InvalidArgument(format!(
                "dividend amount must be non-negative, got {} on {}",
                bad.amount, bad.date
            )));
        }
        // Stable sort keeps provider order for same-day events.
        events.sort_by_key(|e| e.date);
        Ok(Self { events })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[DividendEvent] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DividendEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn first(&self) -> Option<&DividendEvent> {
        self.events.first()
    }

    pub fn last(&self) -> Option<&DividendEvent> {
        self.events.last()
    }

    /// Events dated within `[start, end]`, inclusive on both ends.
    pub fn between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = &DividendEvent> + '_ {
        self.events
            .iter()
            .filter(move |e| e.date >= start && e.date <= end)
    }

    /// Date → amount mapping. Same-day events are summed.
    pub fn history(&self) -> BTreeMap<NaiveDate, Decimal> {
        let mut history = BTreeMap::new();
        for event in &self.events {
            *history.entry(event.date).or_insert(Decimal::ZERO) += event.amount;
        }
        history
    }
}

impl TryFrom<Vec<DividendEvent>> for DividendSeries {
    type Error = TickerError;

    fn try_from(events: Vec<DividendEvent>) -> Result<Self> {
        Self::new(events)
    }
}

impl From<DividendSeries> for Vec<DividendEvent> {
    fn from(series: DividendSeries) -> Self {
        series.events
    }
}

impl<'a> IntoIterator for &'a DividendSeries {
    type Item = &'a DividendEvent;
    type IntoIter = std::slice::Iter<'a, DividendEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

// ---------------------------------------------------------------------------
// Frequency
// ---------------------------------------------------------------------------

/// How often a symbol pays, as inferred from its payout history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    Quarterly,
    SemiAnnually,
    Annually,
    Irregular,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Quarterly => "quarterly",
            Frequency::SemiAnnually => "semi-annually",
            Frequency::Annually => "annually",
            Frequency::Irregular => "irregular",
        }
    }

    /// Irregular payers are annualized from the whole history, so derived
    /// yield and payout figures are only rough estimates.
    pub fn is_low_confidence(&self) -> bool {
        matches!(self, Frequency::Irregular)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DividendReport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividendReport {
    pub symbol: String,
    /// Reference date every trailing window ends on.
    pub as_of: NaiveDate,
    pub history: BTreeMap<NaiveDate, Decimal>,
    /// Trailing annual dividend estimate the ratios are derived from.
    pub annual_dividend: Decimal,
    #[serde(rename = "yield")]
    pub dividend_yield: Decimal,
    pub payout_ratio: Decimal,
    pub growth_5y: Decimal,
    pub frequency: Frequency,
}
