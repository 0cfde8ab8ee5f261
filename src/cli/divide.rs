use std::collections::HashMap;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error, genre, info,
    management::TokenManager,
    spotify, success,
    types::{Artist, EnrichedTrack, Playlist, TrackRef},
    utils, warning,
};

pub async fn divide(playlist_id: String, top: Option<u32>) {
    let tracks = collect_tracks(&playlist_id).await;
    if tracks.is_empty() {
        warning!("Source playlist contains no usable tracks.");
        return;
    }
    success!("Collected {} tracks from source playlist", tracks.len());

    let artist_ids = genre::distinct_artist_ids(&tracks);
    let artists = fetch_artists(&artist_ids).await;

    let resolved = genre::resolve_genres(&artists);
    let (enriched, unclassified) = genre::enrich_tracks(&tracks, &resolved);
    report_unclassified(&unclassified);

    if enriched.is_empty() {
        warning!("No track could be classified. Nothing to divide.");
        return;
    }

    let counts = genre::count_genres(&enriched);
    let selected = match top {
        Some(n) => genre::top_genres(&counts, n as usize),
        None => genre::all_genres(&counts),
    };

    if selected.is_empty() {
        warning!("No genres selected. Nothing to divide.");
        return;
    }

    info!(
        "Dividing {} classified tracks into {} genre playlists",
        enriched.len(),
        selected.len()
    );

    let groups = genre::partition_by_genre(&enriched, &selected);
    publish(&selected, &groups).await;
}

pub(super) fn report_unclassified(unclassified: &[TrackRef]) {
    if unclassified.is_empty() {
        return;
    }

    let mut artist_ids: Vec<String> = unclassified.iter().map(|t| t.artist_id.clone()).collect();
    utils::remove_duplicate_ids(&mut artist_ids);
    warning!(
        "Leaving out {} tracks: {} artists carry no genre tags",
        unclassified.len(),
        artist_ids.len()
    );
}

pub(super) async fn collect_tracks(playlist_id: &str) -> Vec<TrackRef> {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run genrecli auth\n Error: {}",
                e
            );
        }
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Collecting playlist tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut tracks: Vec<TrackRef> = Vec::new();
    let mut next: Option<String> = None;

    loop {
        let token = token_mgr.get_valid_token().await;
        let result = spotify::tracks::get_playlist_tracks_page(&token, playlist_id, next).await;

        match result {
            Ok((items, next_url)) => {
                tracks.extend(genre::track_refs(&items));
                pb.set_message(format!("Collected {} tracks...", tracks.len()));
                next = next_url;

                if next.is_none() {
                    break;
                }
            }
            Err(e) => {
                pb.finish_and_clear();
                error!("Failed to collect playlist tracks: {}", e);
            }
        }
    }

    pb.finish_and_clear();
    tracks
}

pub(super) async fn fetch_artists(artist_ids: &[String]) -> Vec<Artist> {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run genrecli auth\n Error: {}",
                e
            );
        }
    };

    let pb = ProgressBar::new(artist_ids.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40.blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );
    pb.set_message("Fetching artist genres...");

    let mut artists: Vec<Artist> = Vec::new();

    // one lookup per distinct artist, strictly sequential
    for artist_id in artist_ids {
        let token = token_mgr.get_valid_token().await;
        match spotify::artists::get_artist(&token, artist_id).await {
            Ok(artist) => {
                artists.push(artist);
                pb.inc(1);
            }
            Err(e) => {
                pb.finish_and_clear();
                error!("Failed to fetch artist {}: {}", artist_id, e);
            }
        }
    }

    pb.finish_and_clear();
    success!("Fetched genres for {} artists", artists.len());

    artists
}

pub(super) async fn fetch_all_playlists() -> Vec<Playlist> {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run genrecli auth\n Error: {}",
                e
            );
        }
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching current playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut playlists: Vec<Playlist> = Vec::new();
    let mut next: Option<String> = None;

    loop {
        let token = token_mgr.get_valid_token().await;
        let result = spotify::playlists::get_user_playlists_page(&token, next).await;

        match result {
            Ok((items, next_url)) => {
                playlists.extend(items);
                next = next_url;

                if next.is_none() {
                    break;
                }
            }
            Err(e) => {
                pb.finish_and_clear();
                error!("Failed to fetch current playlists: {}", e);
            }
        }
    }

    pb.finish_and_clear();
    playlists
}

async fn publish(genres: &[String], groups: &HashMap<String, Vec<EnrichedTrack>>) {
    let existing = fetch_all_playlists().await;

    for genre_name in genres {
        if existing.iter().any(|p| p.name == *genre_name) {
            info!("Playlist {} already exists", genre_name);
            continue;
        }

        match spotify::playlists::create(genre_name.clone()).await {
            Ok(_) => success!("Playlist {} successfully created!", genre_name),
            Err(e) => warning!("Failed to create playlist {}: {}", genre_name, e),
        }
    }

    // resolve IDs from the server's inventory, by exact name; on duplicate
    // names the first listed playlist wins
    let current = fetch_all_playlists().await;
    let mut playlist_ids: HashMap<&String, &String> = HashMap::new();
    for playlist in &current {
        playlist_ids.entry(&playlist.name).or_insert(&playlist.id);
    }

    for genre_name in genres {
        let Some(playlist_id) = playlist_ids.get(genre_name) else {
            warning!("No playlist named {} found. Skipping upload.", genre_name);
            continue;
        };
        let Some(group) = groups.get(genre_name) else {
            continue;
        };

        let mut track_ids: Vec<String> = group.iter().map(|t| t.track_id.clone()).collect();
        utils::remove_duplicate_ids(&mut track_ids);

        let mut uploaded = 0;
        for chunk in track_ids.chunks(spotify::playlists::MAX_TRACKS_PER_REQUEST) {
            match spotify::playlists::add_tracks((*playlist_id).clone(), chunk.to_vec()).await {
                Ok(_) => uploaded += chunk.len(),
                Err(e) => warning!("Failed to add tracks to playlist {}: {}", genre_name, e),
            }
        }

        success!("Added {} tracks to playlist {}", uploaded, genre_name);
    }

    success!("Tracks successfully added to playlists!");
}
