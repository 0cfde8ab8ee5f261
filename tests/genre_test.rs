use std::collections::HashMap;

use genrecli::genre::*;
use genrecli::spotify::playlists::MAX_TRACKS_PER_REQUEST;
use genrecli::types::{
    AlbumArtist, Artist, EnrichedTrack, PlaylistTrack, PlaylistTrackItem, TrackAlbum, TrackRef,
};
use genrecli::utils::remove_duplicate_ids;

// Helper function to create a test artist with genre tags
fn create_test_artist(id: &str, genres: &[&str]) -> Artist {
    Artist {
        id: id.to_string(),
        name: format!("{}_name", id),
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

// Helper function to create a collected track
fn create_test_track(artist_id: &str, track_id: &str) -> TrackRef {
    TrackRef {
        artist_id: artist_id.to_string(),
        track_id: track_id.to_string(),
    }
}

// Helper function to create a raw playlist item as the API returns it
fn create_test_item(artist_id: Option<&str>, track_id: Option<&str>) -> PlaylistTrackItem {
    PlaylistTrackItem {
        track: Some(PlaylistTrack {
            id: track_id.map(|id| id.to_string()),
            name: "track".to_string(),
            album: Some(TrackAlbum {
                artists: artist_id
                    .map(|id| {
                        vec![AlbumArtist {
                            id: id.to_string(),
                            name: format!("{}_name", id),
                        }]
                    })
                    .unwrap_or_default(),
            }),
        }),
    }
}

#[test]
fn test_track_refs_extracts_in_item_order() {
    let items = vec![
        create_test_item(Some("a1"), Some("t1")),
        create_test_item(Some("a2"), Some("t2")),
        create_test_item(Some("a1"), Some("t3")),
    ];

    let tracks = track_refs(&items);

    assert_eq!(
        tracks,
        vec![
            create_test_track("a1", "t1"),
            create_test_track("a2", "t2"),
            create_test_track("a1", "t3"),
        ]
    );
}

#[test]
fn test_track_refs_skips_unusable_items() {
    let items = vec![
        // ghost entry without a track object
        PlaylistTrackItem { track: None },
        // local file without a track ID
        create_test_item(Some("a1"), None),
        // track without any album artist
        create_test_item(None, Some("t1")),
        // episode item without an album
        PlaylistTrackItem {
            track: Some(PlaylistTrack {
                id: Some("e1".to_string()),
                name: "episode".to_string(),
                album: None,
            }),
        },
        create_test_item(Some("a2"), Some("t2")),
    ];

    let tracks = track_refs(&items);

    assert_eq!(tracks, vec![create_test_track("a2", "t2")]);
}

#[test]
fn test_distinct_artist_ids_first_seen_order() {
    let tracks = vec![
        create_test_track("a2", "t1"),
        create_test_track("a1", "t2"),
        create_test_track("a2", "t3"),
        create_test_track("a3", "t4"),
        create_test_track("a1", "t5"),
    ];

    let ids = distinct_artist_ids(&tracks);

    assert_eq!(ids, vec!["a2", "a1", "a3"]);
}

#[test]
fn test_representative_genre_picks_shortest() {
    let genres = vec![
        "album rock".to_string(),
        "rock".to_string(),
        "classic rock".to_string(),
    ];

    let genre = representative_genre(&genres).unwrap();

    // shortest tag wins, and it is a member of the input
    assert_eq!(genre, "rock");
    assert!(genres.contains(genre));
    assert!(genres.iter().all(|g| genre.len() <= g.len()));
}

#[test]
fn test_representative_genre_tie_prefers_first() {
    let genres = vec!["soul".to_string(), "funk".to_string()];
    assert_eq!(representative_genre(&genres).unwrap(), "soul");

    let genres = vec!["funk".to_string(), "soul".to_string()];
    assert_eq!(representative_genre(&genres).unwrap(), "funk");
}

#[test]
fn test_representative_genre_empty_cases() {
    // no tags at all
    assert_eq!(representative_genre(&[]), None);

    // empty tag strings are never representative
    let genres = vec!["".to_string(), "pop".to_string()];
    assert_eq!(representative_genre(&genres).unwrap(), "pop");
    assert_eq!(representative_genre(&["".to_string()]), None);
}

#[test]
fn test_resolve_genres_drops_artists_without_tags() {
    let artists = vec![
        create_test_artist("a1", &["pop", "dance pop"]),
        create_test_artist("a2", &[]),
        create_test_artist("a3", &["hip hop"]),
    ];

    let resolved = resolve_genres(&artists);

    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved.get("a1").unwrap(), "pop");
    assert_eq!(resolved.get("a3").unwrap(), "hip hop");
    assert!(!resolved.contains_key("a2"));
    assert!(resolved.values().all(|g| !g.is_empty()));
}

#[test]
fn test_enrich_tracks_is_inner_join() {
    let tracks = vec![
        create_test_track("a1", "t1"),
        create_test_track("a2", "t2"),
        create_test_track("a1", "t3"),
    ];
    let mut genres = HashMap::new();
    genres.insert("a1".to_string(), "pop".to_string());

    let (enriched, unclassified) = enrich_tracks(&tracks, &genres);

    // enriched set covers exactly the tracks whose artist resolved
    assert_eq!(enriched.len(), 2);
    assert!(enriched.iter().all(|t| t.artist_id == "a1"));
    assert!(enriched.iter().all(|t| t.genre == "pop"));

    // the remainder is the complement, in input order
    assert_eq!(unclassified, vec![create_test_track("a2", "t2")]);
    assert_eq!(enriched.len() + unclassified.len(), tracks.len());
}

#[test]
fn test_enrich_tracks_full_when_every_artist_resolves() {
    let tracks = vec![
        create_test_track("a1", "t1"),
        create_test_track("a2", "t2"),
    ];
    let mut genres = HashMap::new();
    genres.insert("a1".to_string(), "pop".to_string());
    genres.insert("a2".to_string(), "rock".to_string());

    let (enriched, unclassified) = enrich_tracks(&tracks, &genres);

    assert_eq!(enriched.len(), tracks.len());
    assert!(unclassified.is_empty());
}

#[test]
fn test_count_genres_ranks_by_count_then_name() {
    let mut genres = HashMap::new();
    genres.insert("a1".to_string(), "pop".to_string());
    genres.insert("a2".to_string(), "rock".to_string());
    genres.insert("a3".to_string(), "jazz".to_string());

    let tracks = vec![
        create_test_track("a2", "t1"),
        create_test_track("a1", "t2"),
        create_test_track("a2", "t3"),
        create_test_track("a3", "t4"),
        create_test_track("a1", "t5"),
    ];
    let (enriched, _) = enrich_tracks(&tracks, &genres);

    let counts = count_genres(&enriched);

    // "pop" and "rock" tie at 2, name ascending breaks the tie
    assert_eq!(counts.len(), 3);
    assert_eq!(counts[0].genre, "pop");
    assert_eq!(counts[0].count, 2);
    assert_eq!(counts[1].genre, "rock");
    assert_eq!(counts[1].count, 2);
    assert_eq!(counts[2].genre, "jazz");
    assert_eq!(counts[2].count, 1);
}

#[test]
fn test_top_genres_returns_at_most_n() {
    let enriched = vec![
        EnrichedTrack {
            track_id: "t1".to_string(),
            artist_id: "a1".to_string(),
            genre: "pop".to_string(),
        },
        EnrichedTrack {
            track_id: "t2".to_string(),
            artist_id: "a1".to_string(),
            genre: "pop".to_string(),
        },
        EnrichedTrack {
            track_id: "t3".to_string(),
            artist_id: "a2".to_string(),
            genre: "rock".to_string(),
        },
    ];
    let counts = count_genres(&enriched);

    assert_eq!(top_genres(&counts, 1), vec!["pop"]);
    assert_eq!(top_genres(&counts, 2), vec!["pop", "rock"]);

    // asking for more genres than exist returns them all
    assert_eq!(top_genres(&counts, 10), vec!["pop", "rock"]);
    assert!(top_genres(&counts, 0).is_empty());
}

#[test]
fn test_all_genres_every_genre_once() {
    let mut genres = HashMap::new();
    genres.insert("a1".to_string(), "pop".to_string());
    genres.insert("a2".to_string(), "rock".to_string());

    let tracks = vec![
        create_test_track("a1", "t1"),
        create_test_track("a2", "t2"),
        create_test_track("a1", "t3"),
    ];
    let (enriched, _) = enrich_tracks(&tracks, &genres);

    let all = all_genres(&count_genres(&enriched));

    assert_eq!(all.len(), 2);
    assert!(all.contains(&"pop".to_string()));
    assert!(all.contains(&"rock".to_string()));
}

#[test]
fn test_partition_is_disjoint_total_cover() {
    let mut genres = HashMap::new();
    genres.insert("a1".to_string(), "pop".to_string());
    genres.insert("a2".to_string(), "rock".to_string());
    genres.insert("a3".to_string(), "jazz".to_string());

    let tracks = vec![
        create_test_track("a1", "t1"),
        create_test_track("a2", "t2"),
        create_test_track("a1", "t3"),
        create_test_track("a3", "t4"),
    ];
    let (enriched, _) = enrich_tracks(&tracks, &genres);

    let selected = vec!["pop".to_string(), "rock".to_string()];
    let groups = partition_by_genre(&enriched, &selected);

    // only selected genres appear, and every bucket is non-empty
    assert_eq!(groups.len(), 2);
    assert!(groups.values().all(|g| !g.is_empty()));

    // the union of the buckets is exactly the filtered input
    let mut covered: Vec<&EnrichedTrack> = groups.values().flatten().collect();
    covered.sort_by(|a, b| a.track_id.cmp(&b.track_id));
    let expected: Vec<&EnrichedTrack> = enriched
        .iter()
        .filter(|t| selected.contains(&t.genre))
        .collect();
    assert_eq!(covered.len(), expected.len());

    // no track appears in two buckets
    for track in covered.windows(2) {
        assert_ne!(track[0].track_id, track[1].track_id);
    }

    // each bucket holds only its own genre
    for (genre, bucket) in &groups {
        assert!(bucket.iter().all(|t| t.genre == *genre));
    }
}

#[test]
fn test_upload_chunking_reproduces_deduplicated_list() {
    let mut track_ids: Vec<String> = (0..250).map(|i| format!("t{}", i)).collect();
    // duplicate a prefix, dedup keeps the first 250 in order
    track_ids.extend((0..10).map(|i| format!("t{}", i)));
    remove_duplicate_ids(&mut track_ids);
    assert_eq!(track_ids.len(), 250);

    let chunks: Vec<&[String]> = track_ids.chunks(MAX_TRACKS_PER_REQUEST).collect();

    // ceil(250 / 100) calls, none above the limit
    assert_eq!(chunks.len(), 3);
    assert!(chunks.iter().all(|c| c.len() <= MAX_TRACKS_PER_REQUEST));
    assert_eq!(chunks[2].len(), 50);

    let reassembled: Vec<String> = chunks.concat();
    assert_eq!(reassembled, track_ids);
}

#[test]
fn test_divide_pipeline_end_to_end() {
    // 3 tracks by 2 artists; artist B has no genre tags
    let items = vec![
        create_test_item(Some("artist_a"), Some("t1")),
        create_test_item(Some("artist_b"), Some("t2")),
        create_test_item(Some("artist_a"), Some("t3")),
    ];
    let artists = vec![
        create_test_artist("artist_a", &["pop", "dance pop"]),
        create_test_artist("artist_b", &[]),
    ];

    let tracks = track_refs(&items);
    assert_eq!(distinct_artist_ids(&tracks), vec!["artist_a", "artist_b"]);

    let resolved = resolve_genres(&artists);
    assert_eq!(resolved.get("artist_a").unwrap(), "pop");

    let (enriched, unclassified) = enrich_tracks(&tracks, &resolved);
    assert_eq!(enriched.len(), 2);
    assert_eq!(unclassified, vec![create_test_track("artist_b", "t2")]);

    let counts = count_genres(&enriched);
    let selected = top_genres(&counts, 1);
    assert_eq!(selected, vec!["pop"]);

    let groups = partition_by_genre(&enriched, &selected);
    let mut track_ids: Vec<String> = groups
        .get("pop")
        .unwrap()
        .iter()
        .map(|t| t.track_id.clone())
        .collect();
    remove_duplicate_ids(&mut track_ids);

    // one playlist named "pop" holding artist A's deduplicated tracks
    assert_eq!(track_ids, vec!["t1", "t3"]);
}
