//! # API Module
//!
//! HTTP endpoints for the temporary local server that backs the OAuth
//! authentication flow.
//!
//! ## Endpoints
//!
//! - [`callback`] - Handles OAuth callback requests from Spotify's
//!   authorization server. This endpoint completes the PKCE flow by
//!   exchanging the authorization code for an access token.
//! - [`health`] - Health check endpoint returning application status and
//!   version, useful when verifying the callback server came up before
//!   walking through the browser authorization.
//!
//! The module is built on [Axum](https://docs.rs/axum); each endpoint is an
//! async handler wired up by [`crate::server::start_api_server`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
