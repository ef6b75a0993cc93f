pub mod asset;
pub mod chart;
pub mod market_chart;
pub mod price_bar;
pub mod quote;
pub mod settings;
