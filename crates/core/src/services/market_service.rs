use crate::errors::CoreError;
use crate::models::market_chart::MarketChart;
use crate::models::quote::MarketQuote;
use crate::models::settings::Settings;
use crate::providers::traits::MarketDataProvider;

/// Fetches crypto market data through a `MarketDataProvider`.
///
/// Applies the session settings (quote currency, list size, chart window)
/// so views never deal with request parameters.
pub struct MarketService {
    provider: Box<dyn MarketDataProvider>,
    vs_currency: String,
    list_size: u32,
    chart_days: u32,
}

impl MarketService {
    pub fn new(provider: Box<dyn MarketDataProvider>, settings: &Settings) -> Self {
        Self {
            provider,
            vs_currency: settings.vs_currency.clone(),
            list_size: settings.market_list_size,
            chart_days: settings.chart_days,
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn chart_days(&self) -> u32 {
        self.chart_days
    }

    /// The first page of coins by market capitalisation.
    pub async fn top_markets(&self) -> Result<Vec<MarketQuote>, CoreError> {
        self.provider
            .list_markets(&self.vs_currency, self.list_size, 1)
            .await
    }

    /// Price history of `id` over the configured window.
    pub async fn market_chart(&self, id: &str) -> Result<MarketChart, CoreError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(CoreError::ValidationError("Coin identifier must not be empty".into()));
        }
        self.provider
            .market_chart(id, &self.vs_currency, self.chart_days)
            .await
    }
}
