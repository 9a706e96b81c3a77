use letter_stats_shared_kernel::{LetterCount, LetterKey};

#[test]
fn key_serializes_as_plain_string() {
    let json = serde_json::to_string(&LetterKey::pair('o')).expect("serialize key");
    assert_eq!(json, "\"OO\"");
}

#[test]
fn count_serializes_transparently() {
    let json = serde_json::to_string(&LetterCount::new(42)).expect("serialize count");
    assert_eq!(json, "42");
}

#[test]
fn malformed_key_fails_to_deserialize() {
    let err = serde_json::from_str::<LetterKey>("\"xy\"").expect_err("mismatched pair rejected");
    assert!(err.to_string().contains("pair keys must repeat"));
}
