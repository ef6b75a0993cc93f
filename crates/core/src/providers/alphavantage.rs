use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::price_bar::{parse_number, PriceBar};
use crate::models::settings::StockSeriesFunction;
use super::traits::StockDataProvider;

const BASE_URL: &str = "https://www.alphavantage.co/query";
const PROVIDER: &str = "Alpha Vantage";

/// Daily stock bars from Alpha Vantage's `TIME_SERIES_DAILY[_ADJUSTED]`.
///
/// The key travels as the `apikey` query parameter. Free keys are heavily
/// rate limited; an exhausted quota comes back as HTTP 200 with a `Note`
/// or `Information` field instead of the series.
pub struct AlphaVantageProvider {
    client: Client,
    api_key: String,
    base_url: String,
    function: StockSeriesFunction,
}

impl AlphaVantageProvider {
    pub fn new(api_key: String) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            api_key,
            base_url: BASE_URL.to_string(),
            function: StockSeriesFunction::Daily,
        }
    }

    pub fn with_function(mut self, function: StockSeriesFunction) -> Self {
        self.function = function;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn function(&self) -> StockSeriesFunction {
        self.function
    }

    /// Parse a daily time-series body into bars, newest first.
    ///
    /// The `"Time Series (Daily)"` object must be present. Numeric fields
    /// that are missing or malformed become `0.0`; entries whose date key
    /// does not parse are skipped.
    pub fn parse_daily_series(body: &str) -> Result<Vec<PriceBar>, CoreError> {
        let resp: TimeSeriesResponse = serde_json::from_str(body).map_err(|e| {
            CoreError::api(PROVIDER, format!("Failed to parse time series: {e}"))
        })?;

        let time_series = match resp.time_series {
            Some(ts) => ts,
            None => {
                let mut message = "Time Series (Daily) data not found in response".to_string();
                if let Some(detail) = resp.error_message.or(resp.note).or(resp.information) {
                    message.push_str(": ");
                    message.push_str(&detail);
                }
                return Err(CoreError::api(PROVIDER, message));
            }
        };

        let mut skipped = 0usize;
        let mut bars: Vec<PriceBar> = time_series
            .into_iter()
            .filter_map(|(date_str, data)| {
                let Ok(date) = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d") else {
                    skipped += 1;
                    return None;
                };
                Some(data.into_bar(date))
            })
            .collect();

        if skipped > 0 {
            log::warn!("{PROVIDER}: skipped {skipped} entries with malformed dates");
        }

        bars.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(bars)
    }
}

// ── Alpha Vantage API response types ────────────────────────────────

#[derive(Deserialize)]
struct TimeSeriesResponse {
    #[serde(rename = "Time Series (Daily)")]
    time_series: Option<HashMap<String, DailyData>>,

    #[serde(rename = "Error Message")]
    error_message: Option<String>,

    #[serde(rename = "Note")]
    note: Option<String>,

    #[serde(rename = "Information")]
    information: Option<String>,
}

/// One day of the series. `TIME_SERIES_DAILY` puts volume under
/// `5. volume`; the adjusted series uses `5. adjusted close` and `6. volume`.
#[derive(Deserialize)]
struct DailyData {
    #[serde(rename = "1. open")]
    open: Option<String>,
    #[serde(rename = "2. high")]
    high: Option<String>,
    #[serde(rename = "3. low")]
    low: Option<String>,
    #[serde(rename = "4. close")]
    close: Option<String>,
    #[serde(rename = "5. adjusted close")]
    adjusted_close: Option<String>,
    #[serde(rename = "5. volume")]
    volume: Option<String>,
    #[serde(rename = "6. volume")]
    adjusted_volume: Option<String>,
}

impl DailyData {
    fn into_bar(self, date: NaiveDate) -> PriceBar {
        PriceBar {
            date,
            open: parse_number(self.open.as_deref()),
            high: parse_number(self.high.as_deref()),
            low: parse_number(self.low.as_deref()),
            close: parse_number(self.close.as_deref()),
            adjusted_close: parse_number(self.adjusted_close.as_deref()),
            volume: parse_number(self.adjusted_volume.as_deref().or(self.volume.as_deref())),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl StockDataProvider for AlphaVantageProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn daily_series(&self, symbol: &str) -> Result<Vec<PriceBar>, CoreError> {
        let symbol = symbol.trim().to_uppercase();
        log::debug!("{PROVIDER}: requesting {} for {symbol}", self.function.as_query());

        let body = self
            .client
            .get(&self.base_url)
            .query(&[
                ("function", self.function.as_query()),
                ("symbol", symbol.as_str()),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let bars = Self::parse_daily_series(&body).map_err(|e| match e {
            CoreError::Api { provider, message } => CoreError::Api {
                provider,
                message: format!("{message} (symbol {symbol})"),
            },
            other => other,
        })?;
        log::debug!("{PROVIDER}: parsed {} daily bars for {symbol}", bars.len());
        Ok(bars)
    }
}
