use crate::track::Track;

/// Everything the track-list screen dispatches into the store.
#[derive(Debug, Clone)]
pub enum Action {
    /// Record the search term and narrow the current catalog against it.
    UpdateSearchedTrack(String),
    /// Toggle the loading spinner. Dispatched once before the catalog fetch
    /// and once when it completes.
    ChangeSpinnerState,
    /// Resolution of the catalog fetch: a fresh track list.
    TracksLoaded(Vec<Track>),
    /// The catalog fetch failed; the message feeds the notification banner.
    TracksFailed(String),
    /// Drop the narrowed view and any pending error, back to the catalog.
    CleanSearch,
    /// Record the track the detail screen is being opened for.
    UpdateTrackId(u64),
}
