//! Catalog track model, one row of the iTunes Search API song payload.

use chrono::DateTime;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub track_id: u64,
    pub track_name: String,
    pub artist_name: String,
    pub collection_name: Option<String>,
    pub release_date: Option<String>,
    pub track_time_millis: Option<u64>,
    pub primary_genre_name: Option<String>,
    pub track_price: Option<f64>,
    pub currency: Option<String>,
    pub artwork_url_100: Option<String>,
    pub preview_url: Option<String>,
    pub track_view_url: Option<String>,
}

impl Track {
    pub fn cover_glyph(&self) -> &'static str {
        if self.artwork_url_100.is_some() { "♪" } else { "·" }
    }

    pub fn album(&self) -> &str {
        self.collection_name.as_deref().unwrap_or("-")
    }

    pub fn genre(&self) -> &str {
        self.primary_genre_name.as_deref().unwrap_or("-")
    }

    /// Song length as `m:ss`; tracks without a length render as `--:--`.
    pub fn duration_label(&self) -> String {
        match self.track_time_millis {
            Some(millis) => {
                let seconds = millis / 1000;
                format!("{}:{:02}", seconds / 60, seconds % 60)
            }
            None => "--:--".to_string(),
        }
    }

    /// Price with its currency. Tracks sold only with the album report a
    /// negative price; those render as `-`, same as a missing price.
    pub fn price_label(&self) -> String {
        match self.track_price {
            Some(price) if price >= 0.0 => match &self.currency {
                Some(currency) => format!("{price:.2} {currency}"),
                None => format!("{price:.2}"),
            },
            _ => "-".to_string(),
        }
    }

    /// Release day as `YYYY-MM-DD`. The API delivers RFC 3339 timestamps;
    /// anything undecodable falls back to the raw string.
    pub fn release_day(&self) -> String {
        match &self.release_date {
            Some(raw) => DateTime::parse_from_rfc3339(raw)
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|_| raw.clone()),
            None => "-".to_string(),
        }
    }
}
