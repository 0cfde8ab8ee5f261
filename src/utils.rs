use std::collections::HashSet;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

pub fn remove_duplicate_ids(ids: &mut Vec<String>) {
    let mut seen_ids = HashSet::new();
    ids.retain(|id| seen_ids.insert(id.clone()));
}

pub fn track_uri(track_id: &str) -> String {
    format!("spotify:track:{}", track_id)
}
