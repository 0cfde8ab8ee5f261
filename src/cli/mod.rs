//! # CLI Module
//!
//! This module provides the command-line interface layer for genrecli, a
//! Spotify API client that divides a playlist into per-genre playlists.
//! It implements all user-facing commands and coordinates between the
//! Spotify API wrappers, the pure genre pipeline, and user interaction.
//!
//! ## Commands
//!
//! - [`auth`] - Initiates the Spotify OAuth authentication flow with PKCE
//!   security
//! - [`divide`] - Collects a playlist's tracks, classifies them by their
//!   artists' genres, and redistributes them into per-genre playlists
//!   (all genres, or only the top-N by track count)
//! - [`genres`] - Shows a playlist's genre distribution as a table
//!   without creating or modifying anything
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Genre Pipeline (pure functions) / Management Layer (token)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! The `divide` command runs the full pipeline in stages: collect the
//! source playlist's tracks (paginated), resolve each distinct artist's
//! representative genre, join and rank, then publish. Every stage between
//! the API calls is a pure function from [`crate::genre`], so the
//! interesting logic is testable without a network.
//!
//! ## Error Handling Philosophy
//!
//! Fatal setup failures (missing token, unreadable source playlist)
//! terminate with `error!`. Per-genre publish failures are reported with
//! `warning!` and the remaining genres proceed; nothing is rolled back.
//! Long-running fetch loops show progress bars or spinners, and completed
//! operations are confirmed with `success!`.

mod auth;
mod divide;
mod genres;

pub use auth::auth;
pub use divide::divide;
pub use genres::genres;
