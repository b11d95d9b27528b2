use std::{sync::Arc, time::Duration};

use tokio::{sync::mpsc, task::JoinHandle, time::sleep};

use crate::{geocoding::Geocode, prelude::*, search::session::MAX_SUGGESTIONS};

/// Input inactivity window before a lookup is issued.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// How many candidates to request per lookup.
const LOOKUP_LIMIT: u32 = 5;

/// Placeholder regions for the degraded fallback path.
const FALLBACK_REGIONS: &[&str] = &["NSW, Australia", "VIC, Australia", "QLD, Australia"];

/// Completed suggestion lookup.
///
/// Carries the sequence number of the request that produced it, so that an
/// out-of-order response can be told apart from the current one.
pub struct SuggestionBatch {
    pub sequence: u64,
    pub suggestions: Vec<String>,
}

/// Debounced, single-slot suggestion lookup.
pub struct SuggestionFetcher<G> {
    geocoder: Arc<G>,
    batches: mpsc::UnboundedSender<SuggestionBatch>,
    debounce: Duration,
    sequence: u64,
    pending: Option<JoinHandle<()>>,
}

impl<G: Geocode + Send + Sync + 'static> SuggestionFetcher<G> {
    pub fn new(geocoder: Arc<G>, batches: mpsc::UnboundedSender<SuggestionBatch>) -> Self {
        Self { geocoder, batches, debounce: DEBOUNCE, sequence: 0, pending: None }
    }

    /// Schedule a lookup for the text, superseding any pending one.
    ///
    /// Only the most recent request per input session ever reaches the
    /// network: a request superseded within the debounce window is aborted
    /// before it issues anything.
    pub fn request(&mut self, text: &str) {
        self.supersede();
        let sequence = self.sequence;
        let text = text.to_string();
        let geocoder = Arc::clone(&self.geocoder);
        let batches = self.batches.clone();
        let debounce = self.debounce;
        self.pending = Some(tokio::spawn(async move {
            sleep(debounce).await;
            let suggestions = fetch_suggestions(geocoder.as_ref(), &text).await;
            let _ = batches.send(SuggestionBatch { sequence, suggestions });
        }));
    }

    /// Cancel the pending lookup, if any.
    ///
    /// Also invalidates a batch that is already on its way: nothing produced
    /// before this point can be applied afterwards.
    pub fn cancel(&mut self) {
        self.supersede();
    }

    /// Whether the batch belongs to the most recent request.
    #[must_use]
    pub fn is_current(&self, batch: &SuggestionBatch) -> bool {
        batch.sequence == self.sequence
    }

    fn supersede(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        self.sequence += 1;
    }
}

/// Fetch up to 3 display names for the text.
///
/// Suggestions are a convenience: when the service fails, this degrades to
/// deterministic placeholders derived from the text instead of an error.
pub async fn fetch_suggestions<G: Geocode + ?Sized>(geocoder: &G, text: &str) -> Vec<String> {
    match geocoder.lookup(text, LOOKUP_LIMIT).await {
        Ok(candidates) => candidates
            .into_iter()
            .map(|candidate| candidate.display_name)
            .take(MAX_SUGGESTIONS)
            .collect(),
        Err(error) => {
            warn!("Falling back to placeholder suggestions: {error:#}");
            FALLBACK_REGIONS.iter().map(|region| format!("{text}, {region}")).collect()
        }
    }
}
