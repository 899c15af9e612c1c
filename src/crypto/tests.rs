//! Tests for token generation

use super::{generate_token, sign_fields};
use proptest::prelude::*;
use std::collections::HashMap;

fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_golden_token() {
    // Byte-wise key order is OrderId, Password, TerminalKey -> "ORD42pwTK1"
    let token = generate_token(&fields(&[
        ("TerminalKey", "TK1"),
        ("Password", "pw"),
        ("OrderId", "ORD42"),
    ]));
    assert_eq!(
        token,
        "5705c92d0b3a838dd8f14b9b152025db1707c30c9dc094b3e30ea207f6531604"
    );
}

#[test]
fn test_empty_map_hashes_empty_input() {
    assert_eq!(
        generate_token(&HashMap::new()),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_token_is_lowercase_hex() {
    let token = generate_token(&fields(&[("A", "1")]));
    assert_eq!(token.len(), 64);
    assert!(token
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}

#[test]
fn test_sign_fields_matches_manual_map() {
    let signed = sign_fields(fields(&[("OrderId", "ORD42")]), "TK1", "pw");
    let manual = generate_token(&fields(&[
        ("OrderId", "ORD42"),
        ("TerminalKey", "TK1"),
        ("Password", "pw"),
    ]));
    assert_eq!(signed, manual);
}

#[test]
fn test_password_sensitivity() {
    let a = sign_fields(fields(&[("OrderId", "ORD42")]), "TK1", "secret-a");
    let b = sign_fields(fields(&[("OrderId", "ORD42")]), "TK1", "secret-b");
    assert_ne!(a, b);
}

#[test]
fn test_uppercase_keys_sort_before_lowercase() {
    // "Zeta" < "alpha" byte-wise
    let token = generate_token(&fields(&[("alpha", "1"), ("Zeta", "2")]));
    let expected = generate_token(&fields(&[("k", "21")]));
    assert_eq!(token, expected);
}

#[test]
fn test_separator_free_concatenation_collides() {
    let a = generate_token(&fields(&[("a", "xy"), ("b", "z")]));
    let b = generate_token(&fields(&[("a", "x"), ("b", "yz")]));
    assert_eq!(a, b);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_token_order_independent(
        pairs in prop::collection::hash_map("[A-Za-z]{1,12}", "[ -~]{0,16}", 1..12)
            .prop_flat_map(|map| {
                let entries: Vec<(String, String)> = map.into_iter().collect();
                (Just(entries.clone()), Just(entries).prop_shuffle())
            })
    ) {
        let (original, shuffled) = pairs;
        let first: HashMap<String, String> = original.into_iter().collect();
        let mut second = HashMap::with_capacity(shuffled.len() * 4);
        for (k, v) in shuffled {
            second.insert(k, v);
        }
        prop_assert_eq!(generate_token(&first), generate_token(&second));
    }

    #[test]
    fn test_token_value_sensitivity(
        map in prop::collection::hash_map("[A-Za-z]{1,12}", "[a-z0-9]{0,16}", 1..8),
        pick in any::<prop::sample::Index>(),
        suffix in "[A-Z]{1,4}",
    ) {
        let keys: Vec<String> = map.keys().cloned().collect();
        let key = pick.get(&keys[..]).clone();

        let mut changed = map.clone();
        if let Some(value) = changed.get_mut(&key) {
            value.push_str(&suffix);
        }

        prop_assert_ne!(generate_token(&map), generate_token(&changed));
    }

    #[test]
    fn test_token_password_sensitivity(
        order_id in "[A-Za-z0-9]{1,20}",
        first in "[a-z0-9]{1,16}",
        second in "[a-z0-9]{1,16}",
    ) {
        prop_assume!(first != second);
        let mut signable = HashMap::new();
        signable.insert("OrderId".to_string(), order_id);

        prop_assert_ne!(
            sign_fields(signable.clone(), "TK1", &first),
            sign_fields(signable, "TK1", &second)
        );
    }
}
