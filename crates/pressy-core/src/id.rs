//! # Id Generation
//!
//! Tagged unique ids for every entity the store creates.
//!
//! ## Id Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ORD-3f2c9a1e8b4d4f6a9c0e1d2b3a4f5e6d                                  │
//! │  ─┬─ ──────────────────┬───────────────                                │
//! │   │                    │                                                │
//! │   │                    └── UUID v4, simple form (no hyphens)            │
//! │   └── Entity tag: ORD / SVC / EMP / EXP / MGR                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why UUID v4 and Not a Timestamp?
//! Earlier releases derived ids from the wall-clock millisecond, which
//! collides on rapid calls within the same millisecond. UUID v4 keeps the
//! human-readable tag prefix while closing that window.

use uuid::Uuid;

// =============================================================================
// Id Tag
// =============================================================================

/// Entity-type tag prefixed to every generated id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdTag {
    Order,
    Service,
    Employee,
    Expense,
    Manager,
}

impl IdTag {
    /// Returns the three-letter prefix for this tag.
    #[inline]
    pub const fn prefix(self) -> &'static str {
        match self {
            IdTag::Order => "ORD",
            IdTag::Service => "SVC",
            IdTag::Employee => "EMP",
            IdTag::Expense => "EXP",
            IdTag::Manager => "MGR",
        }
    }
}

// =============================================================================
// Generation
// =============================================================================

/// Generates a fresh unique id for the given entity type.
pub fn new_id(tag: IdTag) -> String {
    format!("{}-{}", tag.prefix(), Uuid::new_v4().simple())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_has_tag_prefix() {
        assert!(new_id(IdTag::Order).starts_with("ORD-"));
        assert!(new_id(IdTag::Service).starts_with("SVC-"));
        assert!(new_id(IdTag::Employee).starts_with("EMP-"));
        assert!(new_id(IdTag::Expense).starts_with("EXP-"));
        assert!(new_id(IdTag::Manager).starts_with("MGR-"));
    }

    #[test]
    fn test_ids_are_unique_under_rapid_generation() {
        // The failure mode of the old millisecond-based scheme.
        let ids: HashSet<String> = (0..1000).map(|_| new_id(IdTag::Order)).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_id_shape() {
        let id = new_id(IdTag::Expense);
        // "EXP-" + 32 hex chars
        assert_eq!(id.len(), 4 + 32);
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}
