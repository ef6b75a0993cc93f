use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::CoreError;

/// Which Alpha Vantage daily series to request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockSeriesFunction {
    /// `TIME_SERIES_DAILY`, available on the free tier.
    #[default]
    Daily,
    /// `TIME_SERIES_DAILY_ADJUSTED`, which carries the adjusted close.
    DailyAdjusted,
}

impl StockSeriesFunction {
    pub fn as_query(&self) -> &'static str {
        match self {
            StockSeriesFunction::Daily => "TIME_SERIES_DAILY",
            StockSeriesFunction::DailyAdjusted => "TIME_SERIES_DAILY_ADJUSTED",
        }
    }
}

/// User-configurable settings for a dashboard session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Quote currency for crypto prices (CoinGecko `vs_currency`).
    pub vs_currency: String,

    /// How many coins the market list requests.
    pub market_list_size: u32,

    /// Window of the crypto detail chart, in days.
    pub chart_days: u32,

    /// Rows per table page.
    pub page_size: usize,

    /// Ticker shown on the landing page.
    pub stock_symbol: String,

    pub stock_function: StockSeriesFunction,

    /// API keys for providers that require them.
    /// Keys: provider name (e.g., "alphavantage").
    pub api_keys: HashMap<String, String>,

    #[serde(default)]
    pub coingecko_base_url: Option<String>,

    #[serde(default)]
    pub alphavantage_base_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vs_currency: "usd".to_string(),
            market_list_size: 100,
            chart_days: 30,
            page_size: 10,
            stock_symbol: "AAPL".to_string(),
            stock_function: StockSeriesFunction::Daily,
            api_keys: HashMap::new(),
            coingecko_base_url: None,
            alphavantage_base_url: None,
        }
    }
}

impl Settings {
    pub fn with_api_key(mut self, provider: impl Into<String>, key: impl Into<String>) -> Self {
        self.api_keys.insert(provider.into(), key.into());
        self
    }

    pub fn api_key(&self, provider: &str) -> Option<&str> {
        self.api_keys
            .get(provider)
            .map(String::as_str)
            .filter(|k| !k.trim().is_empty())
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.page_size == 0 {
            return Err(CoreError::InvalidSettings("page size must be at least 1".into()));
        }
        if self.market_list_size == 0 || self.market_list_size > 250 {
            return Err(CoreError::InvalidSettings(format!(
                "market list size must be between 1 and 250, got {}",
                self.market_list_size
            )));
        }
        if self.chart_days == 0 {
            return Err(CoreError::InvalidSettings("chart window must be at least 1 day".into()));
        }
        if self.vs_currency.trim().is_empty() {
            return Err(CoreError::InvalidSettings("quote currency must not be empty".into()));
        }
        if self.stock_symbol.trim().is_empty() {
            return Err(CoreError::InvalidSettings("stock symbol must not be empty".into()));
        }
        Ok(())
    }
}
