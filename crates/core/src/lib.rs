pub mod errors;
pub mod models;
pub mod providers;
pub mod routing;
pub mod services;
pub mod views;

use models::settings::Settings;
use providers::coingecko::CoinGeckoProvider;
use providers::traits::{MarketDataProvider, StockDataProvider};
use routing::Route;
use services::{market_service::MarketService, stock_service::StockService};
use views::{
    assets::AssetsView,
    crypto_detail::CryptoDetailView,
    crypto_list::CryptoListView,
    navbar::Navbar,
    static_pages::{ContactView, NotFoundView},
    stock_list::StockListView,
};

use errors::CoreError;

/// The view state of the page currently mounted.
#[derive(Debug)]
pub enum Page {
    Home {
        stocks: StockListView,
        crypto: CryptoListView,
    },
    Assets(AssetsView),
    Contact(ContactView),
    CryptoDetail(CryptoDetailView),
    NotFound(NotFoundView),
}

impl Page {
    /// Abandon every fetch the page still has in flight.
    fn unmount(&self) {
        match self {
            Page::Home { stocks, crypto } => {
                stocks.unmount();
                crypto.unmount();
            }
            Page::CryptoDetail(detail) => detail.unmount(),
            Page::Assets(_) | Page::Contact(_) | Page::NotFound(_) => {}
        }
    }
}

/// Main entry point for the Teleskop core library.
/// Holds the settings, the data services and the mounted page.
#[must_use]
pub struct Dashboard {
    settings: Settings,
    market_service: MarketService,
    stock_service: StockService,
    route: Route,
    page: Page,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("route", &self.route)
            .field("market_provider", &self.market_service.provider_name())
            .field("stock_data", &self.stock_service.is_available())
            .finish()
    }
}

impl Dashboard {
    /// Build a dashboard backed by CoinGecko and (if a key is configured)
    /// Alpha Vantage.
    pub fn new(settings: Settings) -> Result<Self, CoreError> {
        let market: Box<dyn MarketDataProvider> = match &settings.coingecko_base_url {
            Some(url) => Box::new(CoinGeckoProvider::with_base_url(url.clone())),
            None => Box::new(CoinGeckoProvider::new()),
        };
        let stock_service = StockService::from_settings(&settings);
        Self::build(settings, market, stock_service)
    }

    /// Build a dashboard around caller-supplied providers.
    pub fn with_providers(
        settings: Settings,
        market: Box<dyn MarketDataProvider>,
        stock: Option<Box<dyn StockDataProvider>>,
    ) -> Result<Self, CoreError> {
        let stock_service = match stock {
            Some(provider) => StockService::new(provider),
            None => StockService::unavailable(),
        };
        Self::build(settings, market, stock_service)
    }

    fn build(
        settings: Settings,
        market: Box<dyn MarketDataProvider>,
        stock_service: StockService,
    ) -> Result<Self, CoreError> {
        settings.validate()?;
        let market_service = MarketService::new(market, &settings);
        let route = Route::Home;
        let page = Self::page_for(&settings, &route);
        Ok(Self {
            settings,
            market_service,
            stock_service,
            route,
            page,
        })
    }

    fn page_for(settings: &Settings, route: &Route) -> Page {
        match route {
            Route::Home => Page::Home {
                stocks: StockListView::new(&settings.stock_symbol, settings.page_size),
                crypto: CryptoListView::new(settings.page_size),
            },
            Route::Assets => Page::Assets(AssetsView::new()),
            Route::Contact => Page::Contact(ContactView::new()),
            Route::CryptoDetail { id } => {
                Page::CryptoDetail(CryptoDetailView::new(id.clone(), &settings.vs_currency))
            }
            Route::NotFound { path } => Page::NotFound(NotFoundView::new(path.clone())),
        }
    }

    // ── Navigation ──────────────────────────────────────────────────

    /// Resolve `path`, mount its page and run the page's fetches.
    pub async fn navigate(&mut self, path: &str) -> &Page {
        let route = Route::parse(path);
        log::info!("Navigating to {route}");
        self.mount(route);
        self.refresh().await;
        &self.page
    }

    /// Swap in the page for `route` without fetching anything.
    ///
    /// Moving between two coins keeps the detail view and only retargets
    /// it, so the older coin's response is discarded if it lands late.
    pub fn mount(&mut self, route: Route) {
        match &route {
            Route::CryptoDetail { id } if matches!(self.page, Page::CryptoDetail(_)) => {
                if let Page::CryptoDetail(detail) = &mut self.page {
                    detail.navigate(id.clone());
                }
            }
            _ => {
                self.page.unmount();
                self.page = Self::page_for(&self.settings, &route);
            }
        }
        self.route = route;
    }

    /// Re-run the fetches of the mounted page.
    pub async fn refresh(&mut self) {
        match &mut self.page {
            Page::Home { stocks, crypto } => {
                stocks.load(&self.stock_service).await;
                crypto.load(&self.market_service).await;
            }
            Page::CryptoDetail(detail) => detail.load(&self.market_service).await,
            Page::Assets(_) | Page::Contact(_) | Page::NotFound(_) => {}
        }
    }

    /// Show another ticker on the landing page, refetching if it changed.
    pub async fn set_stock_symbol(&mut self, symbol: &str) -> Result<(), CoreError> {
        if symbol.trim().is_empty() {
            return Err(CoreError::ValidationError("Stock symbol must not be empty".into()));
        }
        self.settings.stock_symbol = symbol.trim().to_uppercase();
        if let Page::Home { stocks, .. } = &mut self.page {
            if stocks.set_symbol(symbol) {
                stocks.load(&self.stock_service).await;
            }
        }
        Ok(())
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    #[must_use]
    pub fn navbar(&self) -> Navbar {
        Navbar::new()
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn market_service(&self) -> &MarketService {
        &self.market_service
    }

    pub fn stock_service(&self) -> &StockService {
        &self.stock_service
    }
}
