//! The state store behind the track-list screen: state shape, the action
//! vocabulary the screen dispatches, and the pure reducer applying them.

pub mod actions;
pub mod reducer;

pub use actions::Action;

use crate::track::Track;

#[derive(Debug, Default, Clone)]
pub struct State {
    /// The browse catalog, replaced wholesale by each completed fetch.
    pub track_list: Vec<Track>,
    /// Client-side narrowed view of the catalog; empty means no narrowing.
    pub track_searched: Vec<Track>,
    pub searched_term: String,
    pub spinner: bool,
    pub fetch_error: Option<String>,
    pub track_id: Option<u64>,
}

#[derive(Debug, Default)]
pub struct Store {
    state: State,
}

impl Store {
    pub fn new() -> Self {
        Store {
            state: State::default(),
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        reducer::reduce(&mut self.state, action);
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Rows the table renders: the narrowed search view when one is active,
    /// otherwise the browse catalog.
    pub fn visible_tracks(&self) -> &[Track] {
        if self.state.track_searched.is_empty() {
            &self.state.track_list
        } else {
            &self.state.track_searched
        }
    }
}
