use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open a dashboard page: "/", "/assets", "/contact" or "/crypto/<id>".
    Open {
        #[arg(default_value = "/")]
        path: String,

        /// Filter the crypto table by name or symbol.
        #[arg(long)]
        search: Option<String>,

        /// Page of the crypto table.
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Page of the stock table.
        #[arg(long, default_value_t = 1)]
        stock_page: usize,

        /// Ticker for the stock table (overrides TELESKOP_STOCK_SYMBOL).
        #[arg(long)]
        symbol: Option<String>,

        /// Alpha Vantage key (overrides ALPHAVANTAGE_API_KEY).
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Work with the session's asset list.
    Assets {
        /// Add an asset, as NAME:QUANTITY:VALUE:CHANGE.
        #[arg(long, value_parser = parse_asset_input)]
        add: Vec<AssetInput>,

        /// Delete the asset with this id.
        #[arg(long)]
        delete: Vec<u64>,

        /// Only list assets matching this text.
        #[arg(long)]
        search: Option<String>,
    },

    /// List the navigation links.
    Routes,
}

/// Raw text of the four add-asset form inputs.
#[derive(Debug, Clone)]
pub struct AssetInput {
    pub name: String,
    pub quantity: String,
    pub value: String,
    pub change: String,
}

/// `AAPL:10:150:0.5` → form inputs. Field validation happens on submit.
fn parse_asset_input(raw: &str) -> Result<AssetInput, String> {
    match raw.split(':').collect::<Vec<_>>().as_slice() {
        [name, quantity, value, change] => Ok(AssetInput {
            name: name.to_string(),
            quantity: quantity.to_string(),
            value: value.to_string(),
            change: change.to_string(),
        }),
        _ => Err(format!("expected NAME:QUANTITY:VALUE:CHANGE, got '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_input_keeps_raw_fields() {
        let input = parse_asset_input("nvda:2:880.5:-1.2").unwrap();
        assert_eq!(input.name, "nvda");
        assert_eq!(input.quantity, "2");
        assert_eq!(input.value, "880.5");
        assert_eq!(input.change, "-1.2");
    }

    #[test]
    fn blank_fields_are_left_for_submit() {
        let input = parse_asset_input("nvda::880:").unwrap();
        assert_eq!(input.quantity, "");
        assert_eq!(input.change, "");
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        for raw in ["nvda", "nvda:2:880", "nvda:2:880:1:extra", ""] {
            let err = parse_asset_input(raw).unwrap_err();
            assert_eq!(err, format!("expected NAME:QUANTITY:VALUE:CHANGE, got '{raw}'"));
        }
    }

    #[test]
    fn assets_command_parses_repeated_adds() {
        let cli = Cli::try_parse_from([
            "teleskop", "assets", "--add", "nvda:2:880:1", "--add", "amd:1:150:-2", "--delete", "1",
        ])
        .unwrap();
        match cli.command {
            Commands::Assets { add, delete, search } => {
                assert_eq!(add.len(), 2);
                assert_eq!(add[1].name, "amd");
                assert_eq!(delete, vec![1]);
                assert_eq!(search, None);
            }
            other => panic!("expected assets command, got {other:?}"),
        }
    }

    #[test]
    fn assets_command_rejects_bad_add() {
        assert!(Cli::try_parse_from(["teleskop", "assets", "--add", "bad"]).is_err());
    }

    #[test]
    fn open_defaults_to_home() {
        let cli = Cli::try_parse_from(["teleskop", "open"]).unwrap();
        match cli.command {
            Commands::Open { path, page, stock_page, .. } => {
                assert_eq!(path, "/");
                assert_eq!(page, 1);
                assert_eq!(stock_page, 1);
            }
            other => panic!("expected open command, got {other:?}"),
        }
    }
}
