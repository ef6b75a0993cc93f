use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::market_chart::MarketChart;
use crate::models::price_bar::PriceBar;
use crate::models::quote::MarketQuote;

/// Source of cryptocurrency market data.
///
/// CoinGecko implements this in production; tests plug in mocks. Views
/// and services only ever see the trait, so the API can be swapped
/// without touching them.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// One page of market quotes, ordered by market capitalisation (largest first).
    async fn list_markets(
        &self,
        vs_currency: &str,
        per_page: u32,
        page: u32,
    ) -> Result<Vec<MarketQuote>, CoreError>;

    /// Price history of one coin over the last `days` days.
    async fn market_chart(
        &self,
        id: &str,
        vs_currency: &str,
        days: u32,
    ) -> Result<MarketChart, CoreError>;
}

/// Source of daily stock bars.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait StockDataProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Daily bars for `symbol`, newest first.
    async fn daily_series(&self, symbol: &str) -> Result<Vec<PriceBar>, CoreError>;
}
