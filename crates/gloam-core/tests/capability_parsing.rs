use std::sync::Arc;

use gloam_core::{
    Bootstrap, CapabilityRegistry, OverflowPolicy, ParseOptions, Result, TokenOverflow,
};
use parking_lot::Mutex;

static FEATURES: CapabilityRegistry =
    CapabilityRegistry::new(&["FEATURE_A", "FEATURE_B", "FEATURE_C"]);

fn parse(s: &str) -> gloam_core::CapabilitySet {
    FEATURES.parse_with(s, &ParseOptions::default())
}

#[test]
fn known_tokens_set_only_their_flags() {
    let caps = parse("FEATURE_A FEATURE_B");

    assert!(caps.contains("FEATURE_A"));
    assert!(caps.contains("FEATURE_B"));
    assert!(
        !caps.contains("FEATURE_C"),
        "a flag absent from the string must stay cleared"
    );
}

#[test]
fn unknown_tokens_are_ignored_without_stopping_the_scan() {
    let caps = parse("FEATURE_A UNKNOWN_TOKEN FEATURE_B");

    assert_eq!(
        caps.enabled().collect::<Vec<_>>(),
        vec!["FEATURE_A", "FEATURE_B"]
    );
    assert!(caps.overflow().is_none());
}

#[test]
fn empty_string_clears_everything() {
    let caps = parse("");
    assert!(caps.iter().all(|(_, on)| !on));
}

#[test]
fn bootstrapping_twice_reflects_only_the_second_string() {
    let current = Arc::new(Mutex::new("FEATURE_A FEATURE_C".to_string()));
    let feed = Arc::clone(&current);
    let boot = Bootstrap::with_options(
        &FEATURES,
        move || -> Result<String> { Ok(feed.lock().clone()) },
        ParseOptions::default(),
    );

    let first = boot.run().unwrap();
    assert!(first.contains("FEATURE_A") && first.contains("FEATURE_C"));

    *current.lock() = "FEATURE_B".to_string();
    let second = boot.run().unwrap();

    assert_eq!(second.enabled().collect::<Vec<_>>(), vec!["FEATURE_B"]);
    assert_eq!(*boot.current(), *second);
    // Snapshots already handed out are never rewritten
    assert!(first.contains("FEATURE_A"));
}

#[test]
fn oversized_token_halts_processing_of_later_tokens() {
    let long = "X".repeat(256);
    let input = format!("FEATURE_A {long} FEATURE_B");

    let caps = parse(&input);

    assert!(caps.contains("FEATURE_A"));
    assert!(
        !caps.contains("FEATURE_B"),
        "tokens after an oversized one are not processed"
    );
    assert_eq!(
        caps.overflow(),
        Some(&TokenOverflow {
            offset: 10,
            len: 256,
            limit: 255,
        })
    );
}

#[test]
fn token_of_exactly_the_limit_is_still_compared() {
    let edge = "Y".repeat(255);
    let caps = parse(&format!("{edge} FEATURE_C"));

    assert!(caps.contains("FEATURE_C"));
    assert!(caps.overflow().is_none());
}

#[test]
fn skip_policy_keeps_scanning_past_oversized_tokens() {
    let options = ParseOptions {
        token_limit: 8,
        overflow: OverflowPolicy::Skip,
    };
    let caps = FEATURES.parse_with("FEATURE_A_BUT_LONG FEATURE_B", &options);

    // "FEATURE_B" is nine bytes, also over the limit
    assert!(!caps.any());

    let options = ParseOptions {
        token_limit: 9,
        overflow: OverflowPolicy::Skip,
    };
    let caps = FEATURES.parse_with("FEATURE_A_BUT_LONG FEATURE_B", &options);
    assert_eq!(caps.enabled().collect::<Vec<_>>(), vec!["FEATURE_B"]);
    assert!(caps.overflow().is_none());
}

#[test]
fn unbounded_policy_accepts_any_length() {
    let options = ParseOptions {
        token_limit: 1,
        overflow: OverflowPolicy::Unbounded,
    };
    let caps = FEATURES.parse_with("FEATURE_A FEATURE_B", &options);
    assert_eq!(caps.enabled().count(), 2);
}
