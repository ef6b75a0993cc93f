//! Render-ready view models. A frontend draws what these produce and
//! forwards user input back into them.

pub mod assets;
pub mod crypto_detail;
pub mod crypto_list;
pub mod format;
pub mod navbar;
pub mod pagination;
pub mod request;
pub mod search;
pub mod state;
pub mod static_pages;
pub mod stock_list;
