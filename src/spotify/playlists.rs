use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config, error,
    management::TokenManager,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse, GetUserPlaylistsResponse, Playlist,
    },
    utils,
};

/// Maximum number of track URIs the add-tracks endpoint accepts per call.
pub const MAX_TRACKS_PER_REQUEST: usize = 100;

/// Retrieves a page of the current user's playlists.
///
/// Fetches one page of the user's playlist inventory using the API's
/// `next`-URL pagination, same contract as the playlist-tracks page
/// fetch: pass `None` for the first page, then the returned `next` URL
/// until it is `None`.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok((Vec<Playlist>, Option<String>))` - Page of playlists and the
///   next page URL, if any
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
///
/// # Retry Logic
///
/// 502 Bad Gateway retries after a 10-second delay; other errors are
/// propagated immediately.
pub async fn get_user_playlists_page(
    token: &str,
    next_url: Option<String>,
) -> Result<(Vec<Playlist>, Option<String>), reqwest::Error> {
    let api_url = match next_url {
        Some(url) => url,
        None => format!("{uri}/me/playlists?limit=50", uri = &config::spotify_apiurl()),
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

        let res = response.json::<GetUserPlaylistsResponse>().await?;
        return Ok((res.items, res.next));
    }
}

/// Creates a private playlist named after a genre.
///
/// Issues the playlist-creation call for the configured user with an
/// automatic description. The returned playlist carries the ID assigned
/// by the API; the publisher nevertheless re-resolves IDs from the
/// playlist inventory afterwards so the upload step only trusts what the
/// server lists.
///
/// # Authentication
///
/// Loads the token from the token manager. If no valid token is found,
/// the function terminates the program with an error message directing
/// the user to run `genrecli auth`.
///
/// # Retry Logic
///
/// 502 Bad Gateway retries after a 10-second delay; other errors are
/// propagated immediately.
pub async fn create(name: String) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/users/{user}/playlists",
        uri = &config::spotify_apiurl(),
        user = &config::spotify_user()
    );

    let body = CreatePlaylistRequest {
        description: format!("Tracks in genre {name}, divided out by genrecli."),
        name,
        public: false,
        collaborative: false,
    };

    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run genrecli auth\n Error: {}",
                e
            );
        }
    };

    loop {
        let client = Client::new();
        let token = token_mgr.get_valid_token().await;
        let response = client
            .post(&api_url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await;

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

        let json = response.json::<CreatePlaylistResponse>().await?;
        return Ok(json);
    }
}

/// Adds a chunk of tracks to a playlist.
///
/// Converts the track IDs to `spotify:track:` URIs and issues a single
/// add-tracks call. The caller is responsible for deduplicating IDs and
/// keeping each chunk within [`MAX_TRACKS_PER_REQUEST`]; chunks are
/// uploaded in order so the playlist reproduces the deduplicated list.
///
/// # Authentication
///
/// Loads the token from the token manager. If no valid token is found,
/// the function terminates the program with an error message directing
/// the user to run `genrecli auth`.
///
/// # Retry Logic
///
/// 502 Bad Gateway retries after a 10-second delay; other errors are
/// propagated immediately.
pub async fn add_tracks(
    playlist_id: String,
    track_ids: Vec<String>,
) -> Result<AddTrackToPlaylistResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let body = AddTrackToPlaylistRequest {
        uris: track_ids.iter().map(|id| utils::track_uri(id)).collect(),
    };

    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run genrecli auth\n Error: {}",
                e
            );
        }
    };

    loop {
        let client = Client::new();
        let token = token_mgr.get_valid_token().await;
        let response = client
            .post(&api_url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await;

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

        let json = response.json::<AddTrackToPlaylistResponse>().await?;
        return Ok(json);
    }
}
