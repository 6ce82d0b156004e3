//! Search-as-you-type client lookup used when adding a product.
//!
//! DESIGN
//! ======
//! Two counters keep the lookup consistent without cancelling requests:
//! - `generation` counts edits. A debounce timer remembers the generation it
//!   was started for and does nothing if another edit happened since.
//! - `issued`/`applied` number the requests. A response is applied only when
//!   its number is above the last applied one, so a slow early response
//!   cannot overwrite a faster later one.

#[cfg(test)]
#[path = "client_search_test.rs"]
mod client_search_test;

use crate::net::types::Client;

/// Input must be stable this long before a request is issued.
pub const SEARCH_QUIESCENCE_MS: u32 = 300;

/// A request the caller should send now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientSearchState {
    /// Text currently in the search box.
    pub text: String,
    /// Latest applied result list.
    pub results: Vec<Client>,
    /// Client picked from the results, if any.
    pub selected: Option<Client>,
    generation: u64,
    issued: u64,
    applied: u64,
}

impl ClientSearchState {
    /// Record a keystroke. Clears any selection and returns the generation a
    /// debounce timer should carry.
    pub fn input(&mut self, text: String) -> u64 {
        self.text = text;
        self.selected = None;
        self.generation += 1;
        self.generation
    }

    /// True while no edit has happened since `generation` was issued.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Called when the quiescence window elapses for `generation`.
    ///
    /// Returns the request to send, or `None` when the timer is stale or the
    /// text is blank. Blank text clears the results and invalidates every
    /// request still in flight.
    pub fn settle(&mut self, generation: u64) -> Option<SearchRequest> {
        if !self.is_current(generation) {
            return None;
        }
        let query = self.text.trim();
        if query.is_empty() {
            self.results.clear();
            self.applied = self.issued;
            return None;
        }
        self.issued += 1;
        Some(SearchRequest { seq: self.issued, query: query.to_owned() })
    }

    /// Apply the response for request `seq`. Returns false if it was stale.
    pub fn apply(&mut self, seq: u64, results: Vec<Client>) -> bool {
        if seq <= self.applied {
            return false;
        }
        self.applied = seq;
        self.results = results;
        true
    }

    /// Mark request `seq` as finished without results (it failed).
    ///
    /// Keeps the ordering rule intact so an even older success cannot land
    /// afterwards.
    pub fn fail(&mut self, seq: u64) -> bool {
        if seq <= self.applied {
            return false;
        }
        self.applied = seq;
        true
    }

    /// Pick a client from the results.
    ///
    /// The box shows the chosen name and the list closes; pending timers and
    /// responses still in flight are dropped.
    pub fn select(&mut self, client: Client) {
        self.generation += 1;
        self.text.clone_from(&client.full_name);
        self.selected = Some(client);
        self.results.clear();
        self.applied = self.issued;
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected.as_ref().map(|c| c.id)
    }
}
