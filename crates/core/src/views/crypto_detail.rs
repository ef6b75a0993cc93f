use crate::errors::CoreError;
use crate::models::chart::LineChart;
use crate::models::market_chart::MarketChart;
use crate::services::chart_service::ChartService;
use crate::services::market_service::MarketService;

use super::request::{RequestTracker, Ticket};
use super::state::ViewState;

/// Price chart for a single coin, keyed by its CoinGecko id.
///
/// Navigating from one id to another before the first response lands
/// discards that response.
#[derive(Debug)]
pub struct CryptoDetailView {
    id: String,
    vs_currency: String,
    state: ViewState<LineChart>,
    requests: RequestTracker,
}

impl CryptoDetailView {
    pub fn new(id: impl Into<String>, vs_currency: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            vs_currency: vs_currency.into(),
            state: ViewState::Loading,
            requests: RequestTracker::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn heading(&self) -> String {
        format!("{} Detail", self.id)
    }

    pub fn state(&self) -> &ViewState<LineChart> {
        &self.state
    }

    pub fn chart(&self) -> Option<&LineChart> {
        self.state.data()
    }

    pub fn requests(&self) -> &RequestTracker {
        &self.requests
    }

    /// Point the view at another coin and start a fetch for it.
    pub fn navigate(&mut self, id: impl Into<String>) -> Ticket {
        self.id = id.into();
        self.begin_load()
    }

    pub fn begin_load(&mut self) -> Ticket {
        self.state = ViewState::Loading;
        self.requests.begin()
    }

    pub async fn load(&mut self, service: &MarketService) {
        let ticket = self.begin_load();
        let result = service.market_chart(&self.id).await;
        self.finish_load(ticket, result);
    }

    /// Apply a response. Returns `false` if it was stale and discarded.
    pub fn finish_load(&mut self, ticket: Ticket, result: Result<MarketChart, CoreError>) -> bool {
        let requests = self.requests.clone();
        requests.apply_if_current(ticket, || {
            self.state = match result {
                Ok(chart) => ViewState::Ready(ChartService::new().crypto_chart(
                    &self.id,
                    &chart,
                    &self.vs_currency,
                )),
                Err(e) => {
                    log::error!("Market chart for {} failed: {e}", self.id);
                    ViewState::Failed(format!("Error fetching crypto data: {e}"))
                }
            };
        })
    }

    pub fn unmount(&self) {
        self.requests.invalidate();
    }
}
