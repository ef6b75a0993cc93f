use crate::errors::CoreError;
use crate::models::price_bar::PriceBar;
use crate::models::settings::Settings;
use crate::providers::alphavantage::AlphaVantageProvider;
use crate::providers::traits::StockDataProvider;

/// Fetches daily stock bars.
///
/// Built without a provider when no Alpha Vantage key is configured; every
/// request then fails with `MissingApiKey` and the view shows its error
/// string instead of a table.
pub struct StockService {
    provider: Option<Box<dyn StockDataProvider>>,
}

impl StockService {
    pub fn new(provider: Box<dyn StockDataProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// A service with no provider; every request fails with `MissingApiKey`.
    pub fn unavailable() -> Self {
        Self { provider: None }
    }

    /// Build the default Alpha Vantage-backed service from settings.
    pub fn from_settings(settings: &Settings) -> Self {
        let provider = settings.api_key("alphavantage").map(|key| {
            let mut provider = AlphaVantageProvider::new(key.to_string())
                .with_function(settings.stock_function);
            if let Some(url) = &settings.alphavantage_base_url {
                provider = provider.with_base_url(url.clone());
            }
            Box::new(provider) as Box<dyn StockDataProvider>
        });
        if provider.is_none() {
            log::warn!("No Alpha Vantage API key configured; stock data is unavailable");
        }
        Self { provider }
    }

    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    /// Daily bars for `symbol`, newest first.
    pub async fn daily_series(&self, symbol: &str) -> Result<Vec<PriceBar>, CoreError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| CoreError::MissingApiKey("Alpha Vantage".into()))?;

        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(CoreError::ValidationError("Stock symbol must not be empty".into()));
        }
        provider.daily_series(&symbol).await
    }
}
