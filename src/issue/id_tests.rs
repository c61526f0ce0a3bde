use super::*;
use std::collections::HashSet;

#[test]
fn test_generated_id_has_expected_shape() {
    let id = generate_issue_id();
    assert_eq!(id.len(), 32);
    assert!(is_issue_id(&id), "generated id should be 32 hex chars: {id}");
}

#[test]
fn test_generated_ids_are_unique() {
    let ids: HashSet<String> = (0..1000).map(|_| generate_issue_id()).collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn test_is_issue_id_invalid() {
    assert!(!is_issue_id(""));
    assert!(!is_issue_id("invalidid123"));
    assert!(!is_issue_id("550e8400-e29b-41d4-a716-446655440000")); // hyphenated
    assert!(!is_issue_id("550E8400E29B41D4A716446655440000")); // uppercase
}
