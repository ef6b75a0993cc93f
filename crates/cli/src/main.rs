use anyhow::Result;
use clap::Parser;
use teleskop_core::models::asset::DraftField;
use teleskop_core::routing::Route;
use teleskop_core::views::assets::AssetsView;
use teleskop_core::views::navbar::Navbar;
use teleskop_core::{Dashboard, Page};

mod cli;
mod config;
mod render;

fn preprocess() {
    // grant access to .env
    dotenv::dotenv().ok();

    // initialise logger
    env_logger::init();
}

#[tokio::main]
async fn main() -> Result<()> {
    preprocess();
    let cli = cli::Cli::parse();

    match cli.command {
        // "> teleskop open [PATH]"
        cli::Commands::Open {
            path,
            search,
            page,
            stock_page,
            symbol,
            api_key,
        } => {
            let settings = config::load(api_key, symbol)?;
            let mut dashboard = Dashboard::new(settings)?;
            dashboard.navigate(&path).await;

            if let Page::Home { stocks, crypto } = dashboard.page_mut() {
                if let Some(query) = search {
                    crypto.set_search(query);
                }
                if page > 1 && !crypto.go_to_page(page) {
                    log::warn!("Crypto page {page} does not exist; showing page 1");
                }
                if stock_page > 1 && !stocks.go_to_page(stock_page) {
                    log::warn!("Stock page {stock_page} does not exist; showing page 1");
                }
            }

            render::navbar(&dashboard.navbar(), dashboard.route());
            render::page(dashboard.page());
        }

        // "> teleskop assets [--add ..] [--delete ..] [--search ..]"
        // the list starts from the demo holdings on every run
        cli::Commands::Assets { add, delete, search } => {
            let mut view = AssetsView::new();

            for input in add {
                if !view.is_form_open() {
                    view.toggle_form();
                }
                view.set_field(DraftField::Name, &input.name);
                view.set_field(DraftField::Quantity, &input.quantity);
                view.set_field(DraftField::Value, &input.value);
                view.set_field(DraftField::Change, &input.change);
                match view.submit() {
                    Ok(id) => log::info!("Added asset {id} ({})", input.name.to_uppercase()),
                    Err(e) => eprintln!("{}: {e}", input.name),
                }
            }

            for id in delete {
                match view.delete(id) {
                    Ok(asset) => log::info!("Deleted asset {id} ({})", asset.name),
                    Err(e) => eprintln!("{e}"),
                }
            }

            if let Some(query) = search {
                view.set_search(query);
            }

            render::navbar(&Navbar::new(), &Route::Assets);
            render::assets(&view);
        }

        // "> teleskop routes"
        cli::Commands::Routes => {
            let navbar = Navbar::new();
            for link in &navbar.links {
                println!("{:<8} {}", link.label, link.route);
            }
            println!("{:<8} /crypto/<id>", "Detail");
        }
    }

    Ok(())
}
