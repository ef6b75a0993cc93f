use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::market_chart::{ChartSample, MarketChart};
use crate::models::quote::MarketQuote;
use super::traits::MarketDataProvider;

const BASE_URL: &str = "https://api.coingecko.com/api/v3";
const PROVIDER: &str = "CoinGecko";

/// CoinGecko API provider for cryptocurrency market data.
///
/// - **Free**: No API key required; public tier is rate limited per IP.
/// - **Endpoints**: `/coins/markets`, `/coins/{id}/market_chart`
///
/// CoinGecko identifies coins by lowercase slugs ("bitcoin", "ethereum"),
/// which is also what the detail route carries.
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
}

impl CoinGeckoProvider {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Point the provider at a different host (proxy, mirror, or test server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Parse a `/coins/markets` body. Anything but a JSON array of
    /// quotes is rejected.
    pub fn parse_markets(body: &str) -> Result<Vec<MarketQuote>, CoreError> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        if !value.is_array() {
            return Err(CoreError::api(
                PROVIDER,
                format!("Expected a list of markets, got: {}", error_hint(&value)),
            ));
        }
        serde_json::from_value(value).map_err(|e| {
            CoreError::api(PROVIDER, format!("Failed to parse markets: {e}"))
        })
    }

    /// Parse a `/coins/{id}/market_chart` body. A body without a
    /// `prices` field is treated as a failed request.
    pub fn parse_market_chart(body: &str) -> Result<MarketChart, CoreError> {
        let resp: MarketChartResponse = serde_json::from_str(body).map_err(|e| {
            CoreError::api(PROVIDER, format!("Failed to parse market chart: {e}"))
        })?;

        let prices = resp.prices.ok_or_else(|| {
            CoreError::api(PROVIDER, "No price data found for this cryptocurrency.")
        })?;

        Ok(MarketChart {
            prices,
            market_caps: resp.market_caps.unwrap_or_default(),
            total_volumes: resp.total_volumes.unwrap_or_default(),
        })
    }

    async fn get_text(&self, url: &str, query: &[(&str, String)]) -> Result<String, CoreError> {
        log::debug!("{PROVIDER}: GET {url}");
        let resp = self.client.get(url).query(query).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            let hint = serde_json::from_str::<serde_json::Value>(&body)
                .map(|v| error_hint(&v))
                .unwrap_or_else(|_| body.chars().take(120).collect());
            return Err(CoreError::api(
                PROVIDER,
                format!("Request failed with status {status}: {hint}"),
            ));
        }
        Ok(body)
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── CoinGecko API response types ────────────────────────────────────

#[derive(Deserialize)]
struct MarketChartResponse {
    prices: Option<Vec<ChartSample>>,
    market_caps: Option<Vec<ChartSample>>,
    total_volumes: Option<Vec<ChartSample>>,
}

/// CoinGecko reports failures as `{"error": "..."}` or
/// `{"status": {"error_message": "..."}}`.
fn error_hint(value: &serde_json::Value) -> String {
    value
        .get("error")
        .and_then(|e| e.as_str())
        .or_else(|| {
            value
                .get("status")
                .and_then(|s| s.get("error_message"))
                .and_then(|e| e.as_str())
        })
        .map(str::to_string)
        .unwrap_or_else(|| "unexpected response shape".to_string())
}

/// Coin ids go into the URL path, so only plain slug characters pass.
fn check_coin_id(id: &str) -> Result<&str, CoreError> {
    let id = id.trim();
    let slug = id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if id.is_empty() || !slug || id.chars().all(|c| c == '.') {
        return Err(CoreError::ValidationError(format!("Invalid coin id: '{id}'")));
    }
    Ok(id)
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MarketDataProvider for CoinGeckoProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn list_markets(
        &self,
        vs_currency: &str,
        per_page: u32,
        page: u32,
    ) -> Result<Vec<MarketQuote>, CoreError> {
        let url = format!("{}/coins/markets", self.base_url);
        let body = self
            .get_text(
                &url,
                &[
                    ("vs_currency", vs_currency.to_lowercase()),
                    ("order", "market_cap_desc".to_string()),
                    ("per_page", per_page.to_string()),
                    ("page", page.to_string()),
                ],
            )
            .await?;

        let quotes = Self::parse_markets(&body)?;
        log::debug!("{PROVIDER}: received {} market quotes", quotes.len());
        Ok(quotes)
    }

    async fn market_chart(
        &self,
        id: &str,
        vs_currency: &str,
        days: u32,
    ) -> Result<MarketChart, CoreError> {
        let id = check_coin_id(id)?;
        let url = format!("{}/coins/{id}/market_chart", self.base_url);
        let body = self
            .get_text(
                &url,
                &[
                    ("vs_currency", vs_currency.to_lowercase()),
                    ("days", days.to_string()),
                ],
            )
            .await?;

        let chart = Self::parse_market_chart(&body)?;
        log::debug!("{PROVIDER}: received {} price samples for {id}", chart.prices.len());
        Ok(chart)
    }
}
