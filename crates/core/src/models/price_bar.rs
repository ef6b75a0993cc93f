use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily OHLCV bar for a stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub adjusted_close: f64,
    pub volume: f64,
}

impl PriceBar {
    /// Intraday change from open to close, in percent.
    /// `None` when the open is zero (e.g. a field that failed to parse).
    pub fn change_percent(&self) -> Option<f64> {
        if self.open == 0.0 {
            return None;
        }
        Some((self.close - self.open) / self.open * 100.0)
    }

    /// A bar counts as up when it closed at or above its open.
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }
}

/// Parse a numeric API field, coercing anything unparseable to `0.0`.
pub fn parse_number(value: Option<&str>) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|n| !n.is_nan())
        .unwrap_or(0.0)
}
