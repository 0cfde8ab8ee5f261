//! The genre-aggregation pipeline: pure functions that turn collected
//! playlist tracks and fetched artists into ranked, partitioned genre
//! groups. Every stage operates on plain data so the whole pipeline is
//! testable without a live API session.

use std::collections::{HashMap, HashSet};

use crate::types::{Artist, EnrichedTrack, GenreCount, PlaylistTrackItem, TrackRef};

/// Extracts (artist, track) pairs from raw playlist items, in item order.
///
/// The artist is the first listed artist of the track's album. Items
/// without a track object, without a track ID (local files), without an
/// album (episodes), or without any album artist are skipped.
pub fn track_refs(items: &[PlaylistTrackItem]) -> Vec<TrackRef> {
    items
        .iter()
        .filter_map(|item| {
            let track = item.track.as_ref()?;
            let track_id = track.id.as_ref()?;
            let artist = track.album.as_ref()?.artists.first()?;
            Some(TrackRef {
                artist_id: artist.id.clone(),
                track_id: track_id.clone(),
            })
        })
        .collect()
}

/// Returns every artist ID appearing in the tracks exactly once,
/// preserving first-seen order.
pub fn distinct_artist_ids(tracks: &[TrackRef]) -> Vec<String> {
    let mut seen = HashSet::new();
    tracks
        .iter()
        .filter(|t| seen.insert(t.artist_id.clone()))
        .map(|t| t.artist_id.clone())
        .collect()
}

/// Reduces an artist's genre tags to a single representative genre.
///
/// The shortest tag wins, on the assumption that shorter tags name the
/// broader parent genre ("rock" over "album rock"). Ties resolve to the
/// first minimum. Empty tag lists yield `None`; empty tag strings are
/// never representative.
pub fn representative_genre(genres: &[String]) -> Option<&String> {
    genres
        .iter()
        .filter(|g| !g.is_empty())
        .min_by_key(|g| g.len())
}

/// Builds the artist ID → representative genre mapping.
///
/// Artists without any genre tags are excluded; their tracks surface in
/// the unclassified remainder of [`enrich_tracks`] instead.
pub fn resolve_genres(artists: &[Artist]) -> HashMap<String, String> {
    artists
        .iter()
        .filter_map(|artist| {
            representative_genre(&artist.genres).map(|genre| (artist.id.clone(), genre.clone()))
        })
        .collect()
}

/// Inner-joins tracks with resolved artist genres.
///
/// Returns the enriched tracks and the unclassified remainder (tracks
/// whose artist has no resolved genre), both in input order. The two
/// together cover the input exactly.
pub fn enrich_tracks(
    tracks: &[TrackRef],
    genres: &HashMap<String, String>,
) -> (Vec<EnrichedTrack>, Vec<TrackRef>) {
    let mut enriched = Vec::new();
    let mut unclassified = Vec::new();

    for track in tracks {
        match genres.get(&track.artist_id) {
            Some(genre) => enriched.push(EnrichedTrack {
                track_id: track.track_id.clone(),
                artist_id: track.artist_id.clone(),
                genre: genre.clone(),
            }),
            None => unclassified.push(track.clone()),
        }
    }

    (enriched, unclassified)
}

/// Counts enriched tracks per genre, ordered by count descending and
/// genre name ascending on ties.
pub fn count_genres(tracks: &[EnrichedTrack]) -> Vec<GenreCount> {
    let mut counts: HashMap<&String, usize> = HashMap::new();
    for track in tracks {
        *counts.entry(&track.genre).or_insert(0) += 1;
    }

    let mut ranked: Vec<GenreCount> = counts
        .into_iter()
        .map(|(genre, count)| GenreCount {
            genre: genre.clone(),
            count,
        })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.genre.cmp(&b.genre)));
    ranked
}

/// Selects at most `n` genre names from ranked counts.
pub fn top_genres(counts: &[GenreCount], n: usize) -> Vec<String> {
    counts.iter().take(n).map(|c| c.genre.clone()).collect()
}

/// Selects every ranked genre name; each has at least one track.
pub fn all_genres(counts: &[GenreCount]) -> Vec<String> {
    counts.iter().map(|c| c.genre.clone()).collect()
}

/// Restricts tracks to the selected genres and groups them per genre.
///
/// The buckets form a disjoint, total cover of the filtered input: every
/// selected track lands in exactly one bucket, and no empty bucket is
/// ever created.
pub fn partition_by_genre(
    tracks: &[EnrichedTrack],
    selected: &[String],
) -> HashMap<String, Vec<EnrichedTrack>> {
    let wanted: HashSet<&String> = selected.iter().collect();
    let mut groups: HashMap<String, Vec<EnrichedTrack>> = HashMap::new();

    for track in tracks {
        if wanted.contains(&track.genre) {
            groups
                .entry(track.genre.clone())
                .or_default()
                .push(track.clone());
        }
    }

    groups
}
