use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One `[timestamp_ms, value]` pair from the market-chart endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartSample(pub i64, pub f64);

impl ChartSample {
    pub fn timestamp_ms(&self) -> i64 {
        self.0
    }

    pub fn value(&self) -> f64 {
        self.1
    }

    /// The sample time, or `None` if the timestamp is out of range.
    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

/// Price history for a single coin over a fixed window
/// (`/coins/{id}/market_chart`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketChart {
    pub prices: Vec<ChartSample>,

    #[serde(default)]
    pub market_caps: Vec<ChartSample>,

    #[serde(default)]
    pub total_volumes: Vec<ChartSample>,
}

impl MarketChart {
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Lowest and highest price in the window.
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        let mut iter = self.prices.iter().map(ChartSample::value);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}
