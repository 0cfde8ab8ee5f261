use tabled::Table;

use crate::{genre, info, types::GenreTableRow, warning};

use super::divide::{collect_tracks, fetch_artists, report_unclassified};

pub async fn genres(playlist_id: String) {
    let tracks = collect_tracks(&playlist_id).await;
    if tracks.is_empty() {
        warning!("Playlist contains no usable tracks.");
        return;
    }

    let artist_ids = genre::distinct_artist_ids(&tracks);
    let artists = fetch_artists(&artist_ids).await;

    let resolved = genre::resolve_genres(&artists);
    let (enriched, unclassified) = genre::enrich_tracks(&tracks, &resolved);

    if enriched.is_empty() {
        warning!("No track could be classified.");
        return;
    }

    let counts = genre::count_genres(&enriched);

    // convert ranked counts to table rows
    let table_rows: Vec<GenreTableRow> = counts
        .into_iter()
        .map(|c| GenreTableRow {
            genre: c.genre,
            tracks: c.count,
        })
        .collect();

    let genre_count = table_rows.len();
    let table = Table::new(table_rows);
    println!("{}", table);

    info!(
        "{} classified tracks across {} genres",
        enriched.len(),
        genre_count
    );
    report_unclassified(&unclassified);
}
