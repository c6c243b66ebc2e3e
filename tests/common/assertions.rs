//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating catalog-navigator screens, error
//! messages and numbered entries.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the error prefix and message
pub fn has_error(message: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("✕ Error: {message}"))
}

/// Creates a predicate that checks for a rendered breadcrumb trail
pub fn has_breadcrumb(names: &[&str]) -> impl Predicate<str> {
    let mut trail = "[0] Products".to_string();
    for (i, name) in names.iter().enumerate() {
        trail.push_str(&format!(" › [{}] {}", i + 1, name));
    }
    predicates::str::contains(trail)
}

/// Creates a predicate that checks for a numbered column header
pub fn has_column(index: usize, title: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("➤ [{index}] {title}:"))
}

/// Creates a predicate that checks for a numbered entry
pub fn has_item(index: usize, name: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("[{index}] {name}"))
}

/// Creates a predicate that checks for a kind badge
pub fn has_kind(kind: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("({kind})"))
}

/// Creates a predicate that checks for the empty search state
pub fn has_empty_level() -> impl Predicate<str> {
    predicates::str::contains("No products found matching your search.")
}
