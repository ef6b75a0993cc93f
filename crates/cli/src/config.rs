use anyhow::{bail, Context, Result};
use teleskop_core::models::settings::{Settings, StockSeriesFunction};

/// Settings from the environment (`.env` included), with command-line
/// values taking precedence.
pub fn load(api_key: Option<String>, symbol: Option<String>) -> Result<Settings> {
    from_lookup(api_key, symbol, |name| std::env::var(name).ok())
}

/// Same as [`load`], reading variables through `var` instead of the
/// process environment.
fn from_lookup<F>(api_key: Option<String>, symbol: Option<String>, var: F) -> Result<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = Settings::default();

    if let Some(key) = api_key.or_else(|| var("ALPHAVANTAGE_API_KEY")) {
        settings = settings.with_api_key("alphavantage", key);
    }

    if let Some(symbol) = symbol.or_else(|| var("TELESKOP_STOCK_SYMBOL")) {
        settings.stock_symbol = symbol.trim().to_uppercase();
    }

    if let Some(size) = var("TELESKOP_PAGE_SIZE") {
        settings.page_size = size
            .parse()
            .with_context(|| format!("TELESKOP_PAGE_SIZE is not a number: {size}"))?;
    }

    if let Some(series) = var("TELESKOP_STOCK_SERIES") {
        settings.stock_function = match series.trim().to_lowercase().as_str() {
            "daily" => StockSeriesFunction::Daily,
            "adjusted" => StockSeriesFunction::DailyAdjusted,
            other => bail!("TELESKOP_STOCK_SERIES must be 'daily' or 'adjusted', got '{other}'"),
        };
    }

    if let Some(url) = var("TELESKOP_COINGECKO_URL") {
        settings.coingecko_base_url = Some(url);
    }

    if let Some(url) = var("TELESKOP_ALPHAVANTAGE_URL") {
        settings.alphavantage_base_url = Some(url);
    }

    settings.validate()?;
    log::debug!(
        "Loaded settings: symbol {}, series {}, page size {}, alpha vantage key {}",
        settings.stock_symbol,
        settings.stock_function.as_query(),
        settings.page_size,
        if settings.api_key("alphavantage").is_some() { "set" } else { "missing" }
    );
    Ok(settings)
}
