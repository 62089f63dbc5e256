//! # Default Service Catalog
//!
//! The fixed catalog a fresh shop starts with, and the catalog that
//! `restore_default_services` resets to.
//!
//! ## Catalog Contents
//! ```text
//! ┌───────────────────────────────┐
//! │  id │ name      │ price (MRU) │
//! │ ────┼───────────┼──────────── │
//! │  1  │ BOUBOU    │     50      │
//! │  2  │ CHEMISE   │     30      │
//! │  3  │ PANTALON  │     30      │
//! │  4  │ VOILE     │     30      │
//! │  5  │ ROBE      │     20      │
//! │  6  │ GOMME     │     10      │
//! └───────────────────────────────┘
//! ```
//!
//! Ids "1".."6" are stable so existing orders keep referencing the same
//! services after a restore.

use crate::types::Service;

/// The entries of the default catalog: (id, name, price).
const DEFAULT_CATALOG: &[(&str, &str, i64)] = &[
    ("1", "BOUBOU", 50),
    ("2", "CHEMISE", 30),
    ("3", "PANTALON", 30),
    ("4", "VOILE", 30),
    ("5", "ROBE", 20),
    ("6", "GOMME", 10),
];

/// Builds the fixed default service catalog, in display order.
pub fn default_services() -> Vec<Service> {
    DEFAULT_CATALOG
        .iter()
        .map(|&(id, name, price)| Service {
            id: id.to_string(),
            name: name.to_string(),
            price,
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_services_in_order() {
        let services = default_services();
        assert_eq!(services.len(), 6);
        assert_eq!(services[0].name, "BOUBOU");
        assert_eq!(services[0].price, 50);
        assert_eq!(services[5].name, "GOMME");
        assert_eq!(services[5].price, 10);
    }

    #[test]
    fn test_catalog_ids_are_stable() {
        let ids: Vec<&str> = DEFAULT_CATALOG.iter().map(|&(id, _, _)| id).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
    }
}
