pub mod asset_service;
pub mod chart_service;
pub mod market_service;
pub mod stock_service;
