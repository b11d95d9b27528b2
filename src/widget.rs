//! The interactive location-search widget.

use std::sync::Arc;

use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};

use crate::{
    geocoding::{Geocode, GeocodingError},
    notify::{NotificationKind, Notifier},
    prelude::*,
    search::{LocationEdit, SearchState, SuggestionBatch, SuggestionFetcher, build_search_url},
};

/// What to do with a built search URL.
#[derive(Clone, Copy)]
pub enum OpenMode {
    /// Open it in a new browsing context.
    Browser,
    /// Print it to standard output.
    Print,
}

enum Event {
    Input(Option<String>),
    Suggestions(SuggestionBatch),
}

pub struct SearchWidget<G, N> {
    state: SearchState,
    fetcher: SuggestionFetcher<G>,
    batches: mpsc::UnboundedReceiver<SuggestionBatch>,
    geocoder: Arc<G>,
    notifier: N,
    open_mode: OpenMode,
}

impl<G, N> SearchWidget<G, N>
where
    G: Geocode + Send + Sync + 'static,
    N: Notifier,
{
    pub fn new(geocoder: Arc<G>, notifier: N, open_mode: OpenMode) -> Self {
        let (batches_tx, batches) = mpsc::unbounded_channel();
        Self {
            state: SearchState::new(),
            fetcher: SuggestionFetcher::new(Arc::clone(&geocoder), batches_tx),
            batches,
            geocoder,
            notifier,
            open_mode,
        }
    }

    /// Run the interactive session until end of input.
    ///
    /// A single `select!` loop owns all state: commands and completed
    /// suggestion batches are interleaved on one logical thread.
    pub async fn run(mut self) -> Result {
        println!(
            "Commands: location <text> | query <text> | pick <n> | geocode | search | show | quit"
        );
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            let event = tokio::select! {
                line = lines.next_line() => Event::Input(line?),
                Some(batch) = self.batches.recv() => Event::Suggestions(batch),
            };
            match event {
                Event::Input(None) => break,
                Event::Input(Some(line)) => {
                    if !self.handle(line.trim()).await {
                        break;
                    }
                }
                Event::Suggestions(batch) => self.apply_batch(batch),
            }
        }
        Ok(())
    }

    /// Handle one command line. Returns `false` on `quit`.
    async fn handle(&mut self, line: &str) -> bool {
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        match command {
            "location" | "l" => self.edit_location(rest),
            "query" | "q" => self.edit_query(rest),
            "pick" | "p" => self.pick(rest),
            "geocode" | "g" => self.geocode().await,
            "search" | "s" => self.search(),
            "show" => self.show(),
            "quit" | "exit" => return false,
            "" => {}
            _ => println!("Unknown command: `{command}`"),
        }
        true
    }

    /// Track a location edit and keep the suggestion pipeline in step.
    pub fn edit_location(&mut self, text: &str) {
        match self.state.set_location_text(text) {
            LocationEdit::FetchSuggestions => self.fetcher.request(text),
            LocationEdit::ClearSuggestions => self.fetcher.cancel(),
        }
    }

    pub fn edit_query(&mut self, text: &str) {
        self.state.set_query_text(text);
    }

    fn pick(&mut self, rest: &str) {
        let Ok(index) = rest.trim().parse::<usize>() else {
            println!("Usage: pick <number>");
            return;
        };
        match self.state.select_suggestion(index.wrapping_sub(1)) {
            Some(location) => {
                let location = location.to_string();
                self.fetcher.cancel();
                println!("Location set to `{location}`");
            }
            None => println!("No such suggestion"),
        }
    }

    fn apply_batch(&mut self, batch: SuggestionBatch) {
        if !self.fetcher.is_current(&batch) {
            debug!(batch.sequence, "Dropped an out-of-date suggestion batch");
            return;
        }
        self.state.apply_suggestions(batch.suggestions);
        for (index, suggestion) in self.state.suggestions.iter().enumerate() {
            println!("  {}. {suggestion}", index + 1);
        }
    }

    /// Resolve the current location text to a place.
    ///
    /// On failure the previously resolved place is left untouched.
    pub async fn geocode(&mut self) {
        if self.state.is_geocoding {
            return;
        }
        let text = self.state.location_text.clone();
        if text.trim().is_empty() {
            self.notifier.notify(NotificationKind::Error, "Please enter a location");
            return;
        }
        self.state.is_geocoding = true;
        let result = self.geocoder.resolve(&text).await;
        self.state.is_geocoding = false;
        match result {
            Ok(place) => {
                println!("{place}");
                self.notifier
                    .notify(NotificationKind::Success, &format!("Location found: {}", place.name));
                self.state.apply_place(place, &text);
            }
            Err(GeocodingError::NotFound) => {
                self.notifier.notify(
                    NotificationKind::Error,
                    "No matching place was found, try a different spelling",
                );
            }
            Err(error) => {
                error!("‼️ Geocoding failed: {error:#}");
                self.notifier.notify(NotificationKind::Error, "Failed to geocode the location");
            }
        }
    }

    /// Build the location-biased search and open it.
    pub fn search(&self) {
        let query = self.state.query_text.trim().to_string();
        if query.is_empty() {
            self.notifier.notify(NotificationKind::Error, "Please enter a search query");
            return;
        }
        let Some(place) = &self.state.resolved_place else {
            self.notifier.notify(NotificationKind::Error, "Please geocode a location first");
            return;
        };
        if self.state.is_stale() {
            self.notifier
                .notify(NotificationKind::Error, "The location has changed, geocode it again");
            return;
        }
        let url = build_search_url(place, &query);
        match self.open_mode {
            OpenMode::Print => println!("{url}"),
            OpenMode::Browser => {
                if let Err(error) = open::that(url.as_str()) {
                    warn!("Failed to open the browser: {error:#}");
                    self.notifier.notify(NotificationKind::Error, "Failed to open the browser");
                    return;
                }
            }
        }
        self.notifier.notify(NotificationKind::Success, &format!("Searching near {}", place.name));
    }

    fn show(&self) {
        let staleness = if self.state.is_stale() { " (stale)" } else { "" };
        println!("Location: `{}`{staleness}", self.state.location_text);
        println!("Query: `{}`", self.state.query_text);
        match &self.state.resolved_place {
            Some(place) => println!("Resolved: {place}"),
            None => println!("Resolved: none"),
        }
    }
}
