use crate::store::{Action, State};
use crate::track::Track;

/// Pure state transition. No I/O happens here; fetch results and failures
/// arrive as actions of their own.
pub fn reduce(state: &mut State, action: Action) {
    match action {
        Action::UpdateSearchedTrack(term) => {
            state.searched_term = term;
            state.track_searched = narrow(&state.track_list, &state.searched_term);
        }
        Action::ChangeSpinnerState => {
            state.spinner = !state.spinner;
        }
        Action::TracksLoaded(tracks) => {
            state.track_list = tracks;
            state.fetch_error = None;
            // Re-narrow against the fresh list so a stale narrowed view
            // never outlives the data it was cut from.
            state.track_searched = narrow(&state.track_list, &state.searched_term);
        }
        Action::TracksFailed(message) => {
            state.fetch_error = Some(message);
        }
        Action::CleanSearch => {
            state.track_searched.clear();
            state.searched_term.clear();
            state.fetch_error = None;
        }
        Action::UpdateTrackId(id) => {
            state.track_id = Some(id);
        }
    }
}

fn narrow(tracks: &[Track], term: &str) -> Vec<Track> {
    if term.is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();
    tracks
        .iter()
        .filter(|track| {
            track.track_name.to_lowercase().contains(&needle)
                || track.artist_name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
