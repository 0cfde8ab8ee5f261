use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{config, types::Artist, warning};

/// Retrieves a single artist from the Spotify Web API.
///
/// Fetches the artist's metadata including the genre tag list that drives
/// classification. Genre resolution fetches each distinct artist exactly
/// once, so this endpoint dominates a run's wall-clock time; the caller
/// shows a progress bar over the whole artist set.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `artist_id` - Spotify ID of the artist to fetch
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Artist)` - Artist with id, name, and genre tags (possibly empty)
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
///
/// # Rate Limiting
///
/// Handles 429 Too Many Requests by honoring the `Retry-After` header:
/// delays up to 120 seconds are waited out and the request is retried,
/// larger delays produce a warning and the request is retried without
/// waiting the full period. 502 Bad Gateway retries after 10 seconds.
///
/// # Example
///
/// ```
/// let artist = get_artist(token, "4NHQUGzhtTLFvgF5SZesLK").await?;
/// println!("{} has {} genre tags", artist.name, artist.genres.len());
/// ```
pub async fn get_artist(token: &str, artist_id: &str) -> Result<Artist, reqwest::Error> {
    let api_url = format!(
        "{uri}/artists/{id}",
        uri = &config::spotify_apiurl(),
        id = artist_id
    );

    loop {
        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(token).send().await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(1);
            if retry_after > 120 {
                warning!(
                    "Retry after has reached an abnormal high of {} seconds. Try your best tomorrow again.",
                    retry_after
                );
            }
            sleep(Duration::from_secs(retry_after.min(120))).await;
            continue; // retry
        }

        let response = match response.error_for_status() {
            Ok(valid_response) => valid_response,
            Err(err) => {
                if let Some(status) = err.status() {
                    if status == StatusCode::BAD_GATEWAY {
                        sleep(Duration::from_secs(10)).await;
                        continue; // retry
                    }
                }
                return Err(err); // propagate other errors
            }
        };

        let artist = response.json::<Artist>().await?;
        return Ok(artist);
    }
}
