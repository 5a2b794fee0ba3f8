// crates/signal-forge-core/tests/hashing.rs
// ============================================================================
// Module: Hashing Tests
// Description: Tests for canonical JSON hashing.
// ============================================================================
//! ## Overview
//! Validates deterministic hashing using RFC 8785 canonicalization.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use signal_forge_core::hashing::canonical_json_string;
use signal_forge_core::hashing::hash_canonical_json;
use signal_forge_core::hashing::sha256_hex;
use serde_json::json;

// ============================================================================
// SECTION: Canonical Hashing
// ============================================================================

/// Tests canonical json hash ignores key order.
#[test]
fn test_canonical_json_hash_ignores_key_order() {
    let value_a = json!({"b": 1, "a": 2});
    let value_b = json!({"a": 2, "b": 1});

    let hash_a = hash_canonical_json(&value_a).unwrap();
    let hash_b = hash_canonical_json(&value_b).unwrap();

    assert_eq!(hash_a, hash_b);
}

/// Tests canonical form carries no extraneous whitespace.
#[test]
fn test_canonical_form_is_compact() {
    let value = json!({"rating": 4.5, "sources": ["api", "snapshot"]});

    let canonical = canonical_json_string(&value).unwrap();

    assert!(!canonical.contains(' '));
    assert!(canonical.starts_with('{'));
}

/// Tests the hex digest has the expected shape.
#[test]
fn test_sha256_hex_shape() {
    let digest = sha256_hex(b"signal-forge");

    assert_eq!(digest.len(), 64);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}
