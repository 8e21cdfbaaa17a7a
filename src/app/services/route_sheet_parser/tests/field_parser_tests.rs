//! Tests for address, status and notes normalization

use super::super::field_parsers::{
    StatusTable, normalize_address, normalize_notes, normalize_status_lenient,
};
use crate::app::models::CanonicalStatus;

#[test]
fn test_normalize_address() {
    assert_eq!(normalize_address("  123   MAIN\tSt  "), "123 main st");
    assert_eq!(normalize_address("Apt 2,\n Oak Dr"), "apt 2, oak dr");
    assert_eq!(normalize_address("   "), "");
}

#[test]
fn test_normalize_address_is_idempotent() {
    for raw in ["123 Main St", "  456 OAK   dr, apt 2 ", "Straße 5", ""] {
        let once = normalize_address(raw);
        assert_eq!(normalize_address(&once), once);
    }
}

#[test]
fn test_normalize_status_lenient() {
    assert_eq!(normalize_status_lenient("Delivered"), "delivered");
    assert_eq!(normalize_status_lenient(""), "");
}

#[test]
fn test_normalize_notes() {
    assert_eq!(normalize_notes("  Leave at door "), "Leave at door");
    assert_eq!(normalize_notes(""), "");
}

#[test]
fn test_status_table_builtin_synonyms() {
    let table = StatusTable::default();

    assert_eq!(table.resolve("Cancelled"), CanonicalStatus::Canceled);
    assert_eq!(table.resolve("cancel"), CanonicalStatus::Canceled);
    assert_eq!(table.resolve("CANC"), CanonicalStatus::Canceled);
    assert_eq!(table.resolve("canceled"), CanonicalStatus::Canceled);
    assert_eq!(table.resolve("Active"), CanonicalStatus::Active);
    assert_eq!(table.resolve("SUSPENDED"), CanonicalStatus::Suspended);
}

#[test]
fn test_status_table_unknown_tokens() {
    let table = StatusTable::default();

    assert_eq!(table.resolve("foo"), CanonicalStatus::Unknown);
    assert_eq!(table.resolve(""), CanonicalStatus::Unknown);
    assert_eq!(table.resolve("unknown"), CanonicalStatus::Unknown);
    assert_eq!(table.resolve("act ive"), CanonicalStatus::Unknown);
}

#[test]
fn test_status_table_extension() {
    let table = StatusTable::default()
        .with_synonym(" Paused ", CanonicalStatus::Suspended)
        .with_synonym("cancel", CanonicalStatus::Active);

    assert_eq!(table.resolve("paused"), CanonicalStatus::Suspended);
    // Configured synonyms replace built-ins with the same token
    assert_eq!(table.resolve("cancel"), CanonicalStatus::Active);
    assert_eq!(table.len(), StatusTable::default().len() + 1);
}

#[test]
fn test_status_table_empty() {
    let table = StatusTable::empty();
    assert!(table.is_empty());
    assert_eq!(table.resolve("active"), CanonicalStatus::Unknown);
}

#[test]
fn test_status_table_entries_sorted() {
    let table = StatusTable::default();
    let tokens: Vec<&str> = table.entries().into_iter().map(|(token, _)| token).collect();

    assert_eq!(
        tokens,
        vec!["active", "canc", "cancel", "canceled", "cancelled", "suspended"]
    );
}
