use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{PlaylistTrackItem, PlaylistTracksResponse},
};

/// Retrieves a page of a playlist's tracks from the Spotify Web API.
///
/// Fetches one page of playlist items using the API's `next`-URL
/// pagination. The first page is requested with the maximum page size;
/// subsequent pages follow the exact URL the previous response handed
/// back, so the caller only threads `next` through until it is `None`.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `playlist_id` - ID of the playlist whose tracks are being collected
/// * `next_url` - `next` URL from the previous page, or `None` for the
///   first page
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok((Vec<PlaylistTrackItem>, Option<String>))` - Page items and the
///   next page URL, if any
/// - `Err(reqwest::Error)` - Network error, API error, or other
///   HTTP-related error
///
/// # Retry Logic
///
/// Implements automatic retry for 502 Bad Gateway errors with a
/// 10-second delay between attempts. Other errors are propagated
/// immediately.
///
/// # Example
///
/// ```
/// let token = "BQC..."; // Valid access token
/// let (items, next) = get_playlist_tracks_page(token, "37i9dQ...", None).await?;
///
/// if let Some(next_url) = next {
///     let (more, _) = get_playlist_tracks_page(token, "37i9dQ...", Some(next_url)).await?;
/// }
/// ```
pub async fn get_playlist_tracks_page(
    token: &str,
    playlist_id: &str,
    next_url: Option<String>,
) -> Result<(Vec<PlaylistTrackItem>, Option<String>), reqwest::Error> {
    let api_url = match next_url {
        Some(url) => url,
        None => format!(
            "{uri}/playlists/{id}/tracks?limit=100",
            uri = &config::spotify_apiurl(),
            id = playlist_id
        ),
    };

    loop {
        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(token).send().await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
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
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let res = response.json::<PlaylistTracksResponse>().await?;
        return Ok((res.items, res.next));
    }
}
