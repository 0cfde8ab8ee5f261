use genrecli::utils::*;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_remove_duplicate_ids() {
    let mut ids = vec![
        "id1".to_string(),
        "id2".to_string(),
        "id1".to_string(),
        "id3".to_string(),
        "id2".to_string(),
    ];

    remove_duplicate_ids(&mut ids);

    // Should keep the first occurrence of each unique ID, in order
    assert_eq!(ids, vec!["id1", "id2", "id3"]);
}

#[test]
fn test_remove_duplicate_ids_no_duplicates() {
    let mut ids = vec!["id1".to_string(), "id2".to_string()];

    remove_duplicate_ids(&mut ids);

    assert_eq!(ids, vec!["id1", "id2"]);

    let mut empty: Vec<String> = Vec::new();
    remove_duplicate_ids(&mut empty);
    assert!(empty.is_empty());
}

#[test]
fn test_track_uri() {
    assert_eq!(
        track_uri("4iV5W9uYEdYUVa79Axb7Rh"),
        "spotify:track:4iV5W9uYEdYUVa79Axb7Rh"
    );
}
