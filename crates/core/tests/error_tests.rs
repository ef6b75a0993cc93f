// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use teleskop_core::errors::{redact_query, CoreError};

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn api_error() {
        let err = CoreError::Api {
            provider: "CoinGecko".into(),
            message: "rate limited".into(),
        };
        assert_eq!(err.to_string(), "API error (CoinGecko): rate limited");
    }

    #[test]
    fn api_shorthand_matches_struct_variant() {
        let err = CoreError::api("Alpha Vantage", "no data");
        assert_eq!(err.to_string(), "API error (Alpha Vantage): no data");
    }

    #[test]
    fn network() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }

    #[test]
    fn missing_api_key() {
        let err = CoreError::MissingApiKey("Alpha Vantage".into());
        assert_eq!(err.to_string(), "No API key configured for Alpha Vantage");
    }

    #[test]
    fn validation_error_is_the_bare_message() {
        let err = CoreError::ValidationError("Please fill out all fields.".into());
        assert_eq!(err.to_string(), "Please fill out all fields.");
    }

    #[test]
    fn asset_not_found() {
        let err = CoreError::AssetNotFound(42);
        assert_eq!(err.to_string(), "Asset not found: 42");
    }

    #[test]
    fn invalid_settings() {
        let err = CoreError::InvalidSettings("page size must be at least 1".into());
        assert_eq!(err.to_string(), "Invalid settings: page size must be at least 1");
    }
}

// ── Conversions ─────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn errors_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CoreError>();
    }

    #[test]
    fn implements_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(CoreError::AssetNotFound(1));
        assert_eq!(err.to_string(), "Asset not found: 1");
    }
}

// ── Query redaction ─────────────────────────────────────────────────

mod redaction {
    use super::*;

    #[test]
    fn strips_api_key_from_url() {
        let msg = "error sending request for url (https://www.alphavantage.co/query?function=TIME_SERIES_DAILY&symbol=AAPL&apikey=SECRET)";
        let redacted = redact_query(msg);
        assert!(!redacted.contains("SECRET"));
        assert_eq!(
            redacted,
            "error sending request for url (https://www.alphavantage.co/query?<query redacted>"
        );
    }

    #[test]
    fn leaves_messages_without_query_alone() {
        assert_eq!(redact_query("connection reset"), "connection reset");
    }
}
