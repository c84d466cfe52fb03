use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PricePoint: Single closing price (query result)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: Decimal,
}

// ---------------------------------------------------------------------------
// LatestPrice: Last data point within a requested window
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestPrice {
    pub timestamp: DateTime<Utc>,
    pub close: Decimal,
}

impl From<PricePoint> for LatestPrice {
    fn from(point: PricePoint) -> Self {
        Self {
            timestamp: point.timestamp,
            close: point.close,
        }
    }
}

// ---------------------------------------------------------------------------
// Fundamentals: Scalar inputs to the dividend ratios
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Fundamentals {
    pub current_price: Decimal,
    pub trailing_eps: Decimal,
}
