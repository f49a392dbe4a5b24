use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::{config::Config, fetch::FetchError, track::Track};

#[derive(Debug)]
pub struct SearchResponse {
    pub result_count: u64,
    pub results: Vec<Track>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResponse {
    result_count: u64,
    #[serde(default)]
    results: Vec<serde_json::Value>,
}

fn search_params(config: &Config, term: &str) -> Vec<(&'static str, String)> {
    vec![
        ("term", term.to_string()),
        ("media", "music".to_string()),
        ("entity", "song".to_string()),
        ("limit", config.limit.to_string()),
        ("country", config.country.clone()),
    ]
}

/// Pure decode step for catalog payloads. Lookup responses may interleave
/// non-track wrapper objects; rows that do not decode as tracks are skipped
/// rather than failing the batch.
pub fn parse_search_response(body: &str) -> Result<SearchResponse, FetchError> {
    let raw: RawResponse = serde_json::from_str(body)?;
    let results = raw
        .results
        .into_iter()
        .filter_map(|value| serde_json::from_value::<Track>(value).ok())
        .collect();
    Ok(SearchResponse {
        result_count: raw.result_count,
        results,
    })
}

async fn request(
    client: &Client,
    url: &str,
    params: &[(&str, String)],
) -> Result<SearchResponse, FetchError> {
    let response = client.get(url).query(params).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    let body = response.text().await?;
    parse_search_response(&body)
}

/// Full-text song search, results in the API's relevance order.
pub async fn search_tracks(
    client: &Client,
    config: &Config,
    term: &str,
) -> Result<Vec<Track>, FetchError> {
    let url = format!("{}/search", config.base_url);
    let params = search_params(config, term);
    let response = request(client, &url, &params).await?;
    debug!(
        "search '{}' returned {} of {} reported results",
        term,
        response.results.len(),
        response.result_count
    );
    Ok(response.results)
}

/// Single-track lookup by id, backing the detail screen.
pub async fn lookup_track(
    client: &Client,
    config: &Config,
    id: u64,
) -> Result<Option<Track>, FetchError> {
    let url = format!("{}/lookup", config.base_url);
    let params = [("id", id.to_string()), ("country", config.country.clone())];
    let response = request(client, &url, &params).await?;
    Ok(response.results.into_iter().find(|track| track.track_id == id))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "resultCount": 3,
        "results": [
            {
                "wrapperType": "track",
                "trackId": 275569600,
                "trackName": "Harder, Better, Faster, Stronger",
                "artistName": "Daft Punk",
                "collectionName": "Discovery",
                "releaseDate": "2001-03-12T08:00:00Z",
                "trackTimeMillis": 224693,
                "primaryGenreName": "Electronic",
                "trackPrice": 1.29,
                "currency": "USD",
                "artworkUrl100": "https://example.com/discovery.jpg"
            },
            {
                "wrapperType": "artist",
                "artistName": "Daft Punk",
                "artistId": 5468295
            },
            {
                "trackId": 1440766343,
                "trackName": "Instant Crush",
                "artistName": "Daft Punk"
            }
        ]
    }"#;

    #[test]
    fn test_parse_skips_non_track_rows() {
        let parsed = parse_search_response(PAYLOAD).unwrap();
        assert_eq!(parsed.result_count, 3);
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.results[0].track_id, 275569600);
        assert_eq!(parsed.results[1].track_name, "Instant Crush");
    }

    #[test]
    fn test_parse_fills_optional_fields() {
        let parsed = parse_search_response(PAYLOAD).unwrap();
        let full = &parsed.results[0];
        assert_eq!(full.collection_name.as_deref(), Some("Discovery"));
        assert_eq!(full.track_time_millis, Some(224693));
        assert_eq!(full.track_price, Some(1.29));

        let sparse = &parsed.results[1];
        assert!(sparse.collection_name.is_none());
        assert!(sparse.track_time_millis.is_none());
        assert!(sparse.track_price.is_none());
    }

    #[test]
    fn test_parse_empty_result_set() {
        let parsed = parse_search_response(r#"{"resultCount": 0, "results": []}"#).unwrap();
        assert_eq!(parsed.result_count, 0);
        assert!(parsed.results.is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_body() {
        assert!(matches!(
            parse_search_response("not json"),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn test_search_params_carry_catalog_settings() {
        let config = Config {
            base_url: "https://itunes.apple.com".to_string(),
            country: "DE".to_string(),
            limit: 25,
            initial_query: "x".to_string(),
        };
        let params = search_params(&config, "daft punk");
        assert!(params.contains(&("term", "daft punk".to_string())));
        assert!(params.contains(&("entity", "song".to_string())));
        assert!(params.contains(&("limit", "25".to_string())));
        assert!(params.contains(&("country", "DE".to_string())));
    }
}
