//! Table columns and the client-side sort state the header row tracks.

use std::cmp::Ordering;

use crate::track::Track;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Cover,
    Title,
    Artist,
    Album,
    ReleaseDate,
    Length,
    Genre,
    Price,
    Actions,
}

impl Column {
    pub const ALL: [Column; 9] = [
        Column::Cover,
        Column::Title,
        Column::Artist,
        Column::Album,
        Column::ReleaseDate,
        Column::Length,
        Column::Genre,
        Column::Price,
        Column::Actions,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Column::Cover => "Cover",
            Column::Title => "Title",
            Column::Artist => "Artist",
            Column::Album => "Album title",
            Column::ReleaseDate => "Release date",
            Column::Length => "Song length",
            Column::Genre => "Genre",
            Column::Price => "Price",
            Column::Actions => "",
        }
    }

    /// Only length, genre and price are sortable; the rest of the headers
    /// take no sort interaction at all.
    pub fn sort_key(self) -> Option<SortKey> {
        match self {
            Column::Length => Some(SortKey::Length),
            Column::Genre => Some(SortKey::Genre),
            Column::Price => Some(SortKey::Price),
            _ => None,
        }
    }

    pub fn sortable(self) -> bool {
        self.sort_key().is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Length,
    Genre,
    Price,
}

impl SortKey {
    /// Catalog field the key sorts on, in the API's own naming.
    pub fn field(self) -> &'static str {
        match self {
            SortKey::Length => "trackTimeMillis",
            SortKey::Genre => "primaryGenreName",
            SortKey::Price => "trackPrice",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn inverse(self) -> SortOrder {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            SortOrder::Asc => "↑",
            SortOrder::Desc => "↓",
        }
    }
}

/// What a header cell shows next to its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Not a sortable column, no icon.
    None,
    /// Sortable, but no sort has been applied yet.
    Neutral,
    /// Direction icon; the flag marks the column the sort was applied on,
    /// which the header renders highlighted.
    Order(SortOrder, bool),
}

/// Sort state of the header row. One "click" flips the direction and moves
/// it onto the clicked column; the remaining sortable headers keep showing
/// the direction that was active before.
#[derive(Debug, Clone, Copy)]
pub struct SortState {
    unsorted: bool,
    clicked: Option<SortKey>,
    clicked_order: SortOrder,
    rest_order: SortOrder,
}

impl Default for SortState {
    fn default() -> Self {
        SortState {
            unsorted: true,
            clicked: None,
            clicked_order: SortOrder::Desc,
            rest_order: SortOrder::Desc,
        }
    }
}

impl SortState {
    pub fn toggle(&mut self, key: SortKey) {
        self.rest_order = self.clicked_order;
        self.clicked_order = self.clicked_order.inverse();
        self.clicked = Some(key);
        self.unsorted = false;
    }

    /// The sort to apply to the catalog, once one has been chosen.
    pub fn applied(&self) -> Option<(SortKey, SortOrder)> {
        if self.unsorted {
            return None;
        }
        self.clicked.map(|key| (key, self.clicked_order))
    }

    pub fn indicator(&self, column: Column) -> Indicator {
        let Some(key) = column.sort_key() else {
            return Indicator::None;
        };
        if self.unsorted {
            return Indicator::Neutral;
        }
        if self.clicked == Some(key) {
            Indicator::Order(self.clicked_order, true)
        } else {
            Indicator::Order(self.rest_order, false)
        }
    }
}

/// Stable comparator sort over the catalog rows.
pub fn sort_tracks(tracks: &mut [Track], key: SortKey, order: SortOrder) {
    tracks.sort_by(|a, b| compare(a, b, key, order));
}

fn compare(a: &Track, b: &Track, key: SortKey, order: SortOrder) -> Ordering {
    match key {
        SortKey::Length => ranked(a.track_time_millis, b.track_time_millis, order, |x, y| {
            x.cmp(y)
        }),
        SortKey::Genre => ranked(
            a.primary_genre_name.as_deref(),
            b.primary_genre_name.as_deref(),
            order,
            |x, y| x.to_lowercase().cmp(&y.to_lowercase()),
        ),
        SortKey::Price => ranked(a.track_price, b.track_price, order, |x, y| {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }),
    }
}

fn ranked<T>(
    a: Option<T>,
    b: Option<T>,
    order: SortOrder,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (&a, &b) {
        (Some(x), Some(y)) => {
            let ordering = cmp(x, y);
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        }
        // Rows without the field sink to the bottom in either direction.
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: u64, millis: Option<u64>, genre: Option<&str>, price: Option<f64>) -> Track {
        Track {
            track_id: id,
            track_name: format!("track {id}"),
            artist_name: "artist".to_string(),
            collection_name: None,
            release_date: None,
            track_time_millis: millis,
            primary_genre_name: genre.map(str::to_string),
            track_price: price,
            currency: None,
            artwork_url_100: None,
            preview_url: None,
            track_view_url: None,
        }
    }

    fn ids(tracks: &[Track]) -> Vec<u64> {
        tracks.iter().map(|t| t.track_id).collect()
    }

    #[test]
    fn test_only_length_genre_price_are_sortable() {
        let sortable: Vec<Column> = Column::ALL.into_iter().filter(|c| c.sortable()).collect();
        assert_eq!(sortable, vec![Column::Length, Column::Genre, Column::Price]);
    }

    #[test]
    fn test_sort_key_field_mapping() {
        assert_eq!(SortKey::Length.field(), "trackTimeMillis");
        assert_eq!(SortKey::Genre.field(), "primaryGenreName");
        assert_eq!(SortKey::Price.field(), "trackPrice");
    }

    #[test]
    fn test_initial_state_applies_nothing() {
        let state = SortState::default();
        assert_eq!(state.applied(), None);
        assert_eq!(state.indicator(Column::Length), Indicator::Neutral);
        assert_eq!(state.indicator(Column::Title), Indicator::None);
    }

    #[test]
    fn test_first_toggle_inverts_the_default_direction() {
        let mut state = SortState::default();
        state.toggle(SortKey::Price);
        assert_eq!(state.applied(), Some((SortKey::Price, SortOrder::Asc)));
    }

    #[test]
    fn test_retoggling_a_column_flips_direction() {
        let mut state = SortState::default();
        state.toggle(SortKey::Length);
        state.toggle(SortKey::Length);
        assert_eq!(state.applied(), Some((SortKey::Length, SortOrder::Desc)));
        state.toggle(SortKey::Length);
        assert_eq!(state.applied(), Some((SortKey::Length, SortOrder::Asc)));
    }

    #[test]
    fn test_switching_columns_hands_the_old_direction_to_the_rest() {
        let mut state = SortState::default();
        state.toggle(SortKey::Length);
        state.toggle(SortKey::Price);

        assert_eq!(state.applied(), Some((SortKey::Price, SortOrder::Desc)));
        assert_eq!(
            state.indicator(Column::Price),
            Indicator::Order(SortOrder::Desc, true)
        );
        // Length and Genre now display what Length was sorted by before.
        assert_eq!(
            state.indicator(Column::Length),
            Indicator::Order(SortOrder::Asc, false)
        );
        assert_eq!(
            state.indicator(Column::Genre),
            Indicator::Order(SortOrder::Asc, false)
        );
        assert_eq!(state.indicator(Column::Artist), Indicator::None);
    }

    #[test]
    fn test_sort_by_length_both_directions() {
        let mut tracks = vec![
            track(1, Some(200_000), None, None),
            track(2, Some(100_000), None, None),
            track(3, Some(300_000), None, None),
        ];
        sort_tracks(&mut tracks, SortKey::Length, SortOrder::Asc);
        assert_eq!(ids(&tracks), vec![2, 1, 3]);
        sort_tracks(&mut tracks, SortKey::Length, SortOrder::Desc);
        assert_eq!(ids(&tracks), vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_by_genre_is_case_insensitive() {
        let mut tracks = vec![
            track(1, None, Some("rock"), None),
            track(2, None, Some("Electronic"), None),
            track(3, None, Some("Alternative"), None),
        ];
        sort_tracks(&mut tracks, SortKey::Genre, SortOrder::Asc);
        assert_eq!(ids(&tracks), vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_by_price_numeric() {
        let mut tracks = vec![
            track(1, None, None, Some(1.29)),
            track(2, None, None, Some(0.99)),
            track(3, None, None, Some(12.00)),
        ];
        sort_tracks(&mut tracks, SortKey::Price, SortOrder::Asc);
        assert_eq!(ids(&tracks), vec![2, 1, 3]);
    }

    #[test]
    fn test_missing_fields_sink_in_both_directions() {
        let mut tracks = vec![
            track(1, None, None, None),
            track(2, None, None, Some(0.99)),
            track(3, None, None, Some(1.29)),
        ];
        sort_tracks(&mut tracks, SortKey::Price, SortOrder::Asc);
        assert_eq!(ids(&tracks), vec![2, 3, 1]);
        sort_tracks(&mut tracks, SortKey::Price, SortOrder::Desc);
        assert_eq!(ids(&tracks), vec![3, 2, 1]);
    }

    #[test]
    fn test_equal_keys_keep_their_relative_order() {
        let mut tracks = vec![
            track(1, None, Some("Pop"), None),
            track(2, None, Some("pop"), None),
            track(3, None, Some("Ambient"), None),
        ];
        sort_tracks(&mut tracks, SortKey::Genre, SortOrder::Asc);
        assert_eq!(ids(&tracks), vec![3, 1, 2]);
    }

    #[test]
    fn test_sorting_degenerate_lists_is_safe() {
        let mut empty: Vec<Track> = Vec::new();
        sort_tracks(&mut empty, SortKey::Length, SortOrder::Asc);
        assert!(empty.is_empty());

        let mut single = vec![track(1, Some(1000), None, None)];
        sort_tracks(&mut single, SortKey::Length, SortOrder::Desc);
        assert_eq!(ids(&single), vec![1]);
    }
}
