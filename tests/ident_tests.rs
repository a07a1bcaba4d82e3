use std::collections::HashSet;

use notification_gateway::utils::{Alphabet, random_token, random_token_with};
use rand::{SeedableRng, rngs::StdRng};

/// Test: Tokens have the requested length plus the prefix
#[test]
fn test_token_length_includes_prefix() {
    for alphabet in [
        Alphabet::All,
        Alphabet::Digits,
        Alphabet::LowerAlnum,
        Alphabet::UpperAlnum,
    ] {
        let token = random_token(10, alphabet, "msg_");

        assert_eq!(token.len(), 14);
        assert!(token.starts_with("msg_"));
    }
}

/// Test: Every generated symbol belongs to the selected alphabet
#[test]
fn test_token_symbols_belong_to_alphabet() {
    let cases = [
        (Alphabet::Digits, "0123456789"),
        (Alphabet::LowerAlnum, "abcdefghijklmnopqrstuvwxyz0123456789"),
        (Alphabet::UpperAlnum, "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789"),
        (
            Alphabet::All,
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        ),
    ];

    for (alphabet, allowed) in cases {
        let token = random_token(64, alphabet, "");

        assert!(token.chars().all(|c| allowed.contains(c)));
    }
}

/// Test: Consecutive generations do not collide at realistic lengths
#[test]
fn test_tokens_are_distinct() {
    let tokens: HashSet<String> = (0..1000)
        .map(|_| random_token(16, Alphabet::LowerAlnum, ""))
        .collect();

    assert_eq!(tokens.len(), 1000);
}

/// Test: Zero length yields the prefix alone
#[test]
fn test_zero_length_yields_prefix_only() {
    assert_eq!(random_token(0, Alphabet::All, "pre"), "pre");
    assert_eq!(random_token(0, Alphabet::Digits, ""), "");
}

/// Test: A seeded generator reproduces the same token
#[test]
fn test_seeded_generator_is_reproducible() {
    let mut first_rng = StdRng::seed_from_u64(42);
    let mut second_rng = StdRng::seed_from_u64(42);

    let first = random_token_with(&mut first_rng, 32, Alphabet::LowerAlnum, "");
    let second = random_token_with(&mut second_rng, 32, Alphabet::LowerAlnum, "");

    assert_eq!(first, second);

    let next = random_token_with(&mut first_rng, 32, Alphabet::LowerAlnum, "");

    assert_ne!(first, next);
}
