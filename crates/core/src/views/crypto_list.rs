use crate::errors::CoreError;
use crate::models::quote::MarketQuote;
use crate::services::market_service::MarketService;

use super::format::{
    format_optional, format_percent, format_usd, format_usd_grouped, ChangeDirection,
};
use super::pagination::Paginator;
use super::request::{RequestTracker, Ticket};
use super::search::{matching_indices, Searchable};
use super::state::ViewState;

/// One formatted row of the crypto table.
#[derive(Debug, Clone, PartialEq)]
pub struct CryptoRow {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price: String,
    pub change_24h: String,
    pub direction: Option<ChangeDirection>,
    pub market_cap: String,
    pub volume: String,
    /// Where the name links to.
    pub detail_path: String,
}

impl From<&MarketQuote> for CryptoRow {
    fn from(q: &MarketQuote) -> Self {
        Self {
            id: q.id.clone(),
            name: q.name.clone(),
            symbol: q.display_symbol(),
            price: format_optional(q.current_price, format_usd),
            change_24h: format_optional(q.price_change_percentage_24h, format_percent),
            direction: q.price_change_percentage_24h.map(ChangeDirection::of),
            market_cap: format_optional(q.market_cap, format_usd_grouped),
            volume: format_optional(q.total_volume, format_usd_grouped),
            detail_path: q.detail_path(),
        }
    }
}

impl Searchable for MarketQuote {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.symbol.to_lowercase().contains(needle)
    }
}

/// Top coins by market cap, searchable by name or symbol, ten per page.
#[derive(Debug)]
pub struct CryptoListView {
    state: ViewState<Vec<MarketQuote>>,
    /// Indices into the loaded quotes that match the search.
    matching: Vec<usize>,
    search: String,
    paginator: Paginator,
    requests: RequestTracker,
}

impl CryptoListView {
    pub const HEADING: &'static str = "Crypto Data";
    pub const SEARCH_PLACEHOLDER: &'static str = "Search by name or symbol...";
    pub const COLUMNS: [&'static str; 6] =
        ["Name", "Symbol", "Price", "24h Change", "Market Cap", "Volume"];

    pub fn new(page_size: usize) -> Self {
        Self {
            state: ViewState::Loading,
            matching: Vec::new(),
            search: String::new(),
            paginator: Paginator::new(page_size),
            requests: RequestTracker::new(),
        }
    }

    pub fn state(&self) -> &ViewState<Vec<MarketQuote>> {
        &self.state
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn requests(&self) -> &RequestTracker {
        &self.requests
    }

    /// Fetch and apply the market list.
    pub async fn load(&mut self, service: &MarketService) {
        let ticket = self.begin_load();
        let result = service.top_markets().await;
        self.finish_load(ticket, result);
    }

    pub fn begin_load(&mut self) -> Ticket {
        self.state = ViewState::Loading;
        self.requests.begin()
    }

    /// Apply a response. Returns `false` if it was stale and discarded.
    pub fn finish_load(&mut self, ticket: Ticket, result: Result<Vec<MarketQuote>, CoreError>) -> bool {
        let requests = self.requests.clone();
        requests.apply_if_current(ticket, || {
            self.state = match result {
                Ok(quotes) => ViewState::Ready(quotes),
                Err(e) => {
                    log::error!("Crypto market list failed: {e}");
                    ViewState::Failed(format!("Error fetching crypto data: {e}"))
                }
            };
            self.refilter();
        })
    }

    /// Change the search text; results go back to page 1.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.refilter();
    }

    pub fn next_page(&mut self) -> bool {
        self.paginator.next()
    }

    pub fn prev_page(&mut self) -> bool {
        self.paginator.prev()
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.paginator.go_to(page)
    }

    /// Number of quotes matching the current search.
    pub fn match_count(&self) -> usize {
        self.matching.len()
    }

    /// Rows of the current page.
    pub fn rows(&self) -> Vec<CryptoRow> {
        let Some(quotes) = self.state.data() else {
            return Vec::new();
        };
        self.paginator
            .slice(&self.matching)
            .iter()
            .filter_map(|&idx| quotes.get(idx))
            .map(CryptoRow::from)
            .collect()
    }

    /// Stop applying responses for fetches still in flight.
    pub fn unmount(&self) {
        self.requests.invalidate();
    }

    fn refilter(&mut self) {
        self.matching = match self.state.data() {
            Some(quotes) => matching_indices(quotes, &self.search),
            None => Vec::new(),
        };
        self.paginator.reset(self.matching.len());
    }
}
