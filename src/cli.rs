use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about, propagate_version = true)]
pub struct Cli {
    #[clap(long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Print search URLs instead of opening a browser.
    #[clap(long)]
    pub no_open: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve a location to geographic coordinates.
    Geocode {
        /// Free-text location: a city, suburb, or address.
        location: String,
    },

    /// Fetch place-name completions for a partial location.
    Suggest {
        /// Partial location text.
        location: String,
    },

    /// Geocode a location, then open a web search biased towards it.
    #[clap(alias = "search")]
    QuickSearch {
        /// Location to search near.
        location: String,

        /// Search query, passed through verbatim.
        query: String,
    },
}
