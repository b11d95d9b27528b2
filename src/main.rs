use std::sync::Arc;

use clap::Parser;

use crate::{
    cli::{Cli, Command},
    geocoding::NominatimClient,
    notify::ConsoleNotifier,
    prelude::*,
    search::fetch_suggestions,
    widget::{OpenMode, SearchWidget},
};

mod cli;
mod client;
mod geocoding;
mod logging;
mod notify;
mod prelude;
mod search;
mod widget;

#[tokio::main]
async fn main() -> Result {
    let cli = Cli::parse();
    let _guards = logging::init(cli.sentry_dsn.as_deref())?;

    let geocoder = Arc::new(NominatimClient(client::build_client()?));
    let open_mode = if cli.no_open { OpenMode::Print } else { OpenMode::Browser };

    match cli.command {
        None => {
            info!("Starting the interactive session…");
            SearchWidget::new(geocoder, ConsoleNotifier, open_mode).run().await
        }
        Some(Command::Geocode { location }) => {
            let mut widget = SearchWidget::new(geocoder, ConsoleNotifier, open_mode);
            widget.edit_location(&location);
            widget.geocode().await;
            Ok(())
        }
        Some(Command::Suggest { location }) => {
            for suggestion in fetch_suggestions(geocoder.as_ref(), &location).await {
                println!("{suggestion}");
            }
            Ok(())
        }
        Some(Command::QuickSearch { location, query }) => {
            let mut widget = SearchWidget::new(geocoder, ConsoleNotifier, open_mode);
            widget.edit_location(&location);
            widget.edit_query(&query);
            widget.geocode().await;
            widget.search();
            Ok(())
        }
    }
}
