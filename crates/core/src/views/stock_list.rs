use crate::errors::CoreError;
use crate::models::chart::LineChart;
use crate::models::price_bar::PriceBar;
use crate::services::chart_service::ChartService;
use crate::services::stock_service::StockService;

use super::format::{
    format_bar_date, format_grouped, format_optional, format_percent, format_usd, ChangeDirection,
};
use super::pagination::Paginator;
use super::request::{RequestTracker, Ticket};
use super::state::ViewState;

/// Shown instead of the table when the series cannot be fetched.
/// The underlying error goes to the log.
pub const STOCK_ERROR_TEXT: &str =
    "Error fetching market data. Please check the logs for details.";

/// One formatted row of the stock table.
#[derive(Debug, Clone, PartialEq)]
pub struct StockRow {
    pub date: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
    pub adjusted_close: String,
    pub change: String,
    pub direction: ChangeDirection,
}

impl From<&PriceBar> for StockRow {
    fn from(bar: &PriceBar) -> Self {
        Self {
            date: format_bar_date(bar.date),
            open: format_usd(bar.open),
            high: format_usd(bar.high),
            low: format_usd(bar.low),
            close: format_usd(bar.close),
            volume: format_grouped(bar.volume),
            adjusted_close: format_usd(bar.adjusted_close),
            change: format_optional(bar.change_percent(), format_percent),
            direction: if bar.is_up() {
                ChangeDirection::Up
            } else {
                ChangeDirection::Down
            },
        }
    }
}

/// Daily bars for one ticker, ten per page, with an open/close chart of
/// the visible page.
///
/// The series is fetched once per symbol; paging never refetches.
#[derive(Debug)]
pub struct StockListView {
    symbol: String,
    state: ViewState<Vec<PriceBar>>,
    paginator: Paginator,
    requests: RequestTracker,
}

impl StockListView {
    pub const COLUMNS: [&'static str; 8] = [
        "Date",
        "Open",
        "High",
        "Low",
        "Close",
        "Volume",
        "Adjusted Close",
        "Change",
    ];

    pub fn new(symbol: impl Into<String>, page_size: usize) -> Self {
        Self {
            symbol: symbol.into().trim().to_uppercase(),
            state: ViewState::Loading,
            paginator: Paginator::new(page_size),
            requests: RequestTracker::new(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn heading(&self) -> String {
        format!("Market Data for {}", self.symbol)
    }

    pub fn state(&self) -> &ViewState<Vec<PriceBar>> {
        &self.state
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn requests(&self) -> &RequestTracker {
        &self.requests
    }

    /// Switch to another ticker. Any fetch still in flight for the old
    /// one is abandoned. Returns `true` if the symbol changed and the
    /// view needs a reload.
    pub fn set_symbol(&mut self, symbol: &str) -> bool {
        let symbol = symbol.trim().to_uppercase();
        if symbol == self.symbol {
            return false;
        }
        self.symbol = symbol;
        self.requests.invalidate();
        self.state = ViewState::Loading;
        self.paginator.reset(0);
        true
    }

    pub async fn load(&mut self, service: &StockService) {
        let ticket = self.begin_load();
        let result = service.daily_series(&self.symbol).await;
        self.finish_load(ticket, result);
    }

    pub fn begin_load(&mut self) -> Ticket {
        self.state = ViewState::Loading;
        self.requests.begin()
    }

    /// Apply a response. Returns `false` if it was stale and discarded.
    pub fn finish_load(&mut self, ticket: Ticket, result: Result<Vec<PriceBar>, CoreError>) -> bool {
        let requests = self.requests.clone();
        requests.apply_if_current(ticket, || match result {
            Ok(bars) => {
                self.paginator.reset(bars.len());
                self.state = ViewState::Ready(bars);
            }
            Err(e) => {
                log::error!("Error fetching market data for {}: {e}", self.symbol);
                self.paginator.reset(0);
                self.state = ViewState::Failed(STOCK_ERROR_TEXT.to_string());
            }
        })
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

    /// Bars on the current page, newest first.
    pub fn page_bars(&self) -> &[PriceBar] {
        match self.state.data() {
            Some(bars) => self.paginator.slice(bars),
            None => &[],
        }
    }

    pub fn rows(&self) -> Vec<StockRow> {
        self.page_bars().iter().map(StockRow::from).collect()
    }

    /// Open/close chart of the current page.
    pub fn chart(&self) -> Option<LineChart> {
        self.state.data()?;
        Some(ChartService::new().stock_chart(self.page_bars()))
    }

    pub fn unmount(&self) {
        self.requests.invalidate();
    }
}
