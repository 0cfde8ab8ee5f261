//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! playlist divider. It handles authentication, data retrieval, and
//! playlist management, abstracting HTTP communication, OAuth flows, and
//! API quirks behind a small set of async functions.
//!
//! ## Architecture
//!
//! Each submodule covers one domain of the API surface:
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── Track Collection (playlist pages)
//!     ├── Artist Lookup (genre tags)
//!     └── Playlist Operations (list, create, fill)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow: verifier/challenge generation, local
//!   callback server hand-off, browser launch, token exchange, and token
//!   persistence. No client secret is stored or transmitted.
//! - [`tracks`] - Paginated retrieval of a playlist's track items via the
//!   API-provided `next` URL.
//! - [`artists`] - Single-artist lookup carrying the genre tag list that
//!   drives classification.
//! - [`playlists`] - The user's playlist inventory (paginated), playlist
//!   creation, and chunked track upload.
//!
//! ## Error Handling
//!
//! All wrappers return `Result` with `reqwest::Error`; HTTP-status
//! failures surface through `error_for_status`. Transient conditions are
//! handled in place: 502 Bad Gateway retries after a 10-second delay, and
//! 429 Too Many Requests honors the `Retry-After` header. Everything else
//! propagates to the CLI layer, which decides between warning and abort.
//!
//! ## API Coverage
//!
//! - `GET /playlists/{id}/tracks` - source playlist items with pagination
//! - `GET /artists/{id}` - artist metadata including genre tags
//! - `GET /me/playlists` - the user's playlists for exact-name resolution
//! - `POST /users/{user_id}/playlists` - create destination playlists
//! - `POST /playlists/{playlist_id}/tracks` - add tracks in chunks
//! - `POST /api/token` - token exchange and refresh
//!
//! ## Thread Safety
//!
//! The module is designed for async single-threaded use: every remote
//! call is awaited in sequence, and the only shared state is the PKCE
//! hand-off behind `Arc<Mutex<>>` during authentication.

pub mod artists;
pub mod auth;
pub mod playlists;
pub mod tracks;
