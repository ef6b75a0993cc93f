// ═══════════════════════════════════════════════════════════════════
// Model Tests — MarketQuote, MarketChart, PriceBar, Asset, Settings,
// LineChart, Route
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;

use teleskop_core::errors::CoreError;
use teleskop_core::models::asset::{AssetBook, AssetDraft, DraftField};
use teleskop_core::models::chart::{ChartDataset, LineChart, Rgba};
use teleskop_core::models::market_chart::{ChartSample, MarketChart};
use teleskop_core::models::price_bar::{parse_number, PriceBar};
use teleskop_core::models::quote::MarketQuote;
use teleskop_core::models::settings::{Settings, StockSeriesFunction};
use teleskop_core::routing::Route;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn bar(open: f64, close: f64) -> PriceBar {
    PriceBar {
        date: date(2024, 3, 5),
        open,
        high: open.max(close),
        low: open.min(close),
        close,
        adjusted_close: close,
        volume: 1000.0,
    }
}

// ═══════════════════════════════════════════════════════════════════
//  MarketQuote
// ═══════════════════════════════════════════════════════════════════

mod market_quote {
    use super::*;

    #[test]
    fn deserializes_coingecko_fields() {
        let json = r#"{
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": "https://example.invalid/btc.png",
            "current_price": 64123.5,
            "market_cap": 1262000000000,
            "total_volume": 35000000000.5,
            "price_change_percentage_24h": -1.27
        }"#;
        let quote: MarketQuote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.id, "bitcoin");
        assert_eq!(quote.current_price, Some(64123.5));
        assert_eq!(quote.market_cap, Some(1_262_000_000_000.0));
        assert_eq!(quote.price_change_percentage_24h, Some(-1.27));
    }

    #[test]
    fn null_numbers_become_none() {
        let json = r#"{"id":"x","symbol":"x","name":"X","current_price":null,"price_change_percentage_24h":null}"#;
        let quote: MarketQuote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.current_price, None);
        assert_eq!(quote.price_change_percentage_24h, None);
        assert_eq!(quote.market_cap, None);
        assert_eq!(quote.total_volume, None);
    }

    #[test]
    fn missing_id_is_rejected() {
        let json = r#"{"symbol":"x","name":"X"}"#;
        assert!(serde_json::from_str::<MarketQuote>(json).is_err());
    }

    #[test]
    fn display_symbol_and_detail_path() {
        let quote: MarketQuote =
            serde_json::from_str(r#"{"id":"usd-coin","symbol":"usdc","name":"USDC"}"#).unwrap();
        assert_eq!(quote.display_symbol(), "USDC");
        assert_eq!(quote.detail_path(), "/crypto/usd-coin");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  MarketChart
// ═══════════════════════════════════════════════════════════════════

mod market_chart {
    use super::*;

    #[test]
    fn samples_deserialize_from_pairs() {
        let chart: MarketChart =
            serde_json::from_str(r#"{"prices":[[1709596800000,68000.5],[1709683200000,63500]]}"#)
                .unwrap();
        assert_eq!(chart.prices.len(), 2);
        assert_eq!(chart.prices[0].timestamp_ms(), 1_709_596_800_000);
        assert_eq!(chart.prices[1].value(), 63500.0);
        assert!(chart.market_caps.is_empty());
    }

    #[test]
    fn sample_time_converts_to_utc() {
        let sample = ChartSample(1_709_596_800_000, 1.0);
        assert_eq!(sample.time().unwrap().date_naive(), date(2024, 3, 5));
    }

    #[test]
    fn price_bounds() {
        let chart = MarketChart {
            prices: vec![ChartSample(0, 3.0), ChartSample(1, 1.0), ChartSample(2, 5.0)],
            ..Default::default()
        };
        assert_eq!(chart.price_bounds(), Some((1.0, 5.0)));
        assert_eq!(MarketChart::default().price_bounds(), None);
        assert!(MarketChart::default().is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  PriceBar
// ═══════════════════════════════════════════════════════════════════

mod price_bar {
    use super::*;

    #[test]
    fn parse_number_accepts_decimal_strings() {
        assert_eq!(parse_number(Some("170.7600")), 170.76);
        assert_eq!(parse_number(Some(" 42 ")), 42.0);
    }

    #[test]
    fn parse_number_coerces_garbage_to_zero() {
        assert_eq!(parse_number(Some("abc")), 0.0);
        assert_eq!(parse_number(Some("")), 0.0);
        assert_eq!(parse_number(Some("NaN")), 0.0);
        assert_eq!(parse_number(None), 0.0);
    }

    #[test]
    fn change_percent() {
        let pct = bar(100.0, 105.0).change_percent().unwrap();
        assert!((pct - 5.0).abs() < 1e-9);
        let pct = bar(200.0, 190.0).change_percent().unwrap();
        assert!((pct + 5.0).abs() < 1e-9);
    }

    #[test]
    fn change_percent_with_zero_open_is_none() {
        assert_eq!(bar(0.0, 10.0).change_percent(), None);
    }

    #[test]
    fn flat_bar_counts_as_up() {
        assert!(bar(10.0, 10.0).is_up());
        assert!(!bar(10.0, 9.99).is_up());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  AssetDraft / AssetBook
// ═══════════════════════════════════════════════════════════════════

mod asset {
    use super::*;

    #[test]
    fn draft_new_uppercases_name() {
        let draft = AssetDraft::new("msft", 1.0, 2.0, 3.0);
        assert_eq!(draft.name, "MSFT");
    }

    #[test]
    fn set_field_uppercases_and_parses() {
        let mut draft = AssetDraft::default();
        draft.set_field(DraftField::Name, "nvda");
        draft.set_field(DraftField::Quantity, "3");
        draft.set_field(DraftField::Value, "880.5");
        draft.set_field(DraftField::Change, "-2.1");
        assert_eq!(draft.name, "NVDA");
        assert_eq!(draft.quantity, Some(3.0));
        assert_eq!(draft.value, Some(880.5));
        assert_eq!(draft.change, Some(-2.1));
    }

    #[test]
    fn set_field_clears_unparseable_numbers() {
        let mut draft = AssetDraft::new("NVDA", 1.0, 1.0, 1.0);
        draft.set_field(DraftField::Quantity, "three");
        assert_eq!(draft.quantity, None);
        draft.set_field(DraftField::Value, "inf");
        assert_eq!(draft.value, None);
    }

    #[test]
    fn incomplete_draft_is_rejected() {
        let mut draft = AssetDraft::new("NVDA", 1.0, 1.0, 1.0);
        draft.change = None;
        let err = draft.into_asset(1).unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
        assert_eq!(err.to_string(), "Please fill out all fields.");
    }

    #[test]
    fn blank_name_is_rejected() {
        let draft = AssetDraft::new("   ", 1.0, 1.0, 1.0);
        assert!(draft.into_asset(1).is_err());
    }

    #[test]
    fn zero_fields_are_rejected() {
        for draft in [
            AssetDraft::new("NVDA", 0.0, 1.0, 1.0),
            AssetDraft::new("NVDA", 1.0, 0.0, 1.0),
            AssetDraft::new("NVDA", 1.0, 1.0, 0.0),
            AssetDraft::new("NVDA", 1.0, 1.0, -0.0),
        ] {
            let err = draft.into_asset(7).unwrap_err();
            assert_eq!(err.to_string(), "Please fill out all fields.");
        }
    }

    #[test]
    fn negative_change_is_accepted() {
        let asset = AssetDraft::new("NVDA", 1.0, 1.0, -0.5).into_asset(7).unwrap();
        assert_eq!(asset.id, 7);
        assert_eq!(asset.change, -0.5);
    }

    #[test]
    fn seeded_book_has_three_assets() {
        let book = AssetBook::seeded();
        let names: Vec<&str> = book.assets().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["AAPL", "GOOGL", "TSLA"]);
        let ids: Vec<u64> = book.assets().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn push_assigns_next_id() {
        let mut book = AssetBook::seeded();
        let id = book.push(AssetDraft::new("NVDA", 2.0, 880.0, 1.5)).unwrap();
        assert_eq!(id, 4);
        assert_eq!(book.len(), 4);
        assert_eq!(book.get(4).unwrap().name, "NVDA");
    }

    #[test]
    fn empty_book_starts_at_one() {
        let mut book = AssetBook::new();
        assert!(book.is_empty());
        assert_eq!(book.push(AssetDraft::new("A", 1.0, 1.0, 1.0)).unwrap(), 1);

        let mut book = AssetBook::default();
        assert_eq!(book.push(AssetDraft::new("A", 1.0, 1.0, 1.0)).unwrap(), 1);
    }

    #[test]
    fn ids_are_not_reused_after_deleting_the_newest() {
        let mut book = AssetBook::seeded();
        book.remove(3).unwrap();
        let id = book.push(AssetDraft::new("NVDA", 1.0, 1.0, 1.0)).unwrap();
        assert_eq!(id, 4);
    }

    #[test]
    fn failed_push_does_not_consume_an_id() {
        let mut book = AssetBook::seeded();
        assert!(book.push(AssetDraft::default()).is_err());
        assert_eq!(book.len(), 3);
        assert_eq!(book.push(AssetDraft::new("A", 1.0, 1.0, 1.0)).unwrap(), 4);
    }

    #[test]
    fn remove_takes_exactly_that_id() {
        let mut book = AssetBook::seeded();
        let removed = book.remove(2).unwrap();
        assert_eq!(removed.name, "GOOGL");
        let ids: Vec<u64> = book.assets().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn remove_unknown_id() {
        let mut book = AssetBook::seeded();
        let err = book.remove(99).unwrap_err();
        assert!(matches!(err, CoreError::AssetNotFound(99)));
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn total_value() {
        let book = AssetBook::seeded();
        // 10*150 + 5*2500 + 8*700
        assert_eq!(book.total_value(), 19_600.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.vs_currency, "usd");
        assert_eq!(s.market_list_size, 100);
        assert_eq!(s.chart_days, 30);
        assert_eq!(s.page_size, 10);
        assert_eq!(s.stock_symbol, "AAPL");
        assert_eq!(s.stock_function, StockSeriesFunction::Daily);
        assert!(s.api_keys.is_empty());
        assert!(s.validate().is_ok());
    }

    #[test]
    fn api_key_lookup_ignores_blank_keys() {
        let s = Settings::default().with_api_key("alphavantage", "  ");
        assert_eq!(s.api_key("alphavantage"), None);
        let s = Settings::default().with_api_key("alphavantage", "KEY");
        assert_eq!(s.api_key("alphavantage"), Some("KEY"));
    }

    #[test]
    fn validate_rejects_zero_page_size() {
        let s = Settings {
            page_size: 0,
            ..Default::default()
        };
        assert!(matches!(s.validate(), Err(CoreError::InvalidSettings(_))));
    }

    #[test]
    fn validate_rejects_out_of_range_list_size() {
        for size in [0, 251] {
            let s = Settings {
                market_list_size: size,
                ..Default::default()
            };
            assert!(s.validate().is_err(), "size {size} should be rejected");
        }
    }

    #[test]
    fn validate_rejects_empty_strings() {
        let s = Settings {
            vs_currency: String::new(),
            ..Default::default()
        };
        assert!(s.validate().is_err());
        let s = Settings {
            stock_symbol: " ".into(),
            ..Default::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn series_function_query_names() {
        assert_eq!(StockSeriesFunction::Daily.as_query(), "TIME_SERIES_DAILY");
        assert_eq!(
            StockSeriesFunction::DailyAdjusted.as_query(),
            "TIME_SERIES_DAILY_ADJUSTED"
        );
    }

    #[test]
    fn settings_roundtrip_through_json() {
        let s = Settings::default().with_api_key("alphavantage", "KEY");
        let json = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.api_key("alphavantage"), Some("KEY"));
        assert_eq!(back.page_size, 10);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  LineChart
// ═══════════════════════════════════════════════════════════════════

mod line_chart {
    use super::*;

    fn chart() -> LineChart {
        LineChart {
            title: None,
            labels: vec!["a".into(), "b".into()],
            datasets: vec![ChartDataset {
                label: "Close Price".into(),
                values: vec![187.2, 190.0],
                border_color: Rgba::new(255, 99, 132, 1.0),
                background_color: Rgba::new(255, 99, 132, 0.2),
                border_width: 1,
                fill: true,
                tooltip_label: None,
            }],
            x_axis_title: "Date".into(),
            y_axis_title: "Price".into(),
            begin_at_zero: false,
        }
    }

    #[test]
    fn tooltip_formats_two_decimals() {
        assert_eq!(chart().tooltip(0, 0).as_deref(), Some("Close Price: $187.20"));
    }

    #[test]
    fn tooltip_prefers_its_own_label() {
        let mut chart = chart();
        chart.datasets[0].tooltip_label = Some("Price".into());
        assert_eq!(chart.tooltip(0, 1).as_deref(), Some("Price: $190.00"));
        assert_eq!(chart.datasets[0].label, "Close Price");
    }

    #[test]
    fn tooltip_label_is_optional_in_json() {
        let json = r#"{"label":"Close Price","values":[1.0],
            "border_color":{"r":1,"g":2,"b":3,"a":1.0},
            "background_color":{"r":1,"g":2,"b":3,"a":0.2},
            "border_width":1,"fill":true}"#;
        let ds: ChartDataset = serde_json::from_str(json).unwrap();
        assert_eq!(ds.tooltip_label, None);
    }

    #[test]
    fn tooltip_out_of_range() {
        assert_eq!(chart().tooltip(1, 0), None);
        assert_eq!(chart().tooltip(0, 5), None);
    }

    #[test]
    fn rgba_display_and_alpha() {
        let c = Rgba::new(248, 165, 33, 1.0);
        assert_eq!(c.to_string(), "rgba(248, 165, 33, 1)");
        assert_eq!(c.with_alpha(0.2).to_string(), "rgba(248, 165, 33, 0.2)");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Route
// ═══════════════════════════════════════════════════════════════════

mod route {
    use super::*;

    #[test]
    fn root_is_home() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/?tab=1"), Route::Home);
    }

    #[test]
    fn static_pages() {
        assert_eq!(Route::parse("/assets"), Route::Assets);
        assert_eq!(Route::parse("/assets/"), Route::Assets);
        assert_eq!(Route::parse("/contact#form"), Route::Contact);
    }

    #[test]
    fn page_segment_ignores_case() {
        assert_eq!(Route::parse("/ASSETS"), Route::Assets);
        assert_eq!(Route::parse("/Contact"), Route::Contact);
        assert_eq!(
            Route::parse("/CRYPTO/Bitcoin"),
            Route::CryptoDetail { id: "Bitcoin".into() }
        );
        assert!(Route::parse("/ASSETSX").is_not_found());
    }

    #[test]
    fn prefix_match_respects_segments() {
        assert_eq!(Route::parse("/assets/123"), Route::Assets);
        assert!(Route::parse("/assetsx").is_not_found());
    }

    #[test]
    fn crypto_detail_takes_id() {
        assert_eq!(
            Route::parse("/crypto/bitcoin"),
            Route::CryptoDetail { id: "bitcoin".into() }
        );
        assert_eq!(
            Route::parse("/crypto/usd-coin?days=7"),
            Route::CryptoDetail { id: "usd-coin".into() }
        );
    }

    #[test]
    fn crypto_without_id_is_not_found() {
        assert_eq!(
            Route::parse("/crypto"),
            Route::NotFound { path: "/crypto".into() }
        );
    }

    #[test]
    fn unknown_path_is_not_found() {
        let route = Route::parse("/nope/deeper");
        assert_eq!(route, Route::NotFound { path: "/nope/deeper".into() });
        assert_eq!(route.path(), "/nope/deeper");
    }

    #[test]
    fn canonical_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Assets.to_string(), "/assets");
        assert_eq!(Route::Contact.path(), "/contact");
        assert_eq!(
            Route::CryptoDetail { id: "ethereum".into() }.path(),
            "/crypto/ethereum"
        );
    }
}
