use serde::{Deserialize, Serialize};

/// A market snapshot for one coin, as returned by CoinGecko's
/// `/coins/markets` endpoint.
///
/// `id`, `name` and `symbol` are required. The numeric fields are `null`
/// for thinly traded coins, so they are optional here and rendered as
/// `N/A` by the view layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketQuote {
    /// CoinGecko identifier (e.g., "bitcoin"), used for the detail route.
    pub id: String,

    /// Display name (e.g., "Bitcoin").
    pub name: String,

    /// Ticker symbol as the API returns it, usually lowercase ("btc").
    pub symbol: String,

    #[serde(default)]
    pub current_price: Option<f64>,

    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,

    #[serde(default)]
    pub market_cap: Option<f64>,

    #[serde(default)]
    pub total_volume: Option<f64>,
}

impl MarketQuote {
    /// Uppercased symbol for display ("BTC").
    pub fn display_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }

    /// Route path of the detail page for this coin.
    pub fn detail_path(&self) -> String {
        format!("/crypto/{}", self.id)
    }
}
