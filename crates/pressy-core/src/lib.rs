//! # pressy-core: Pure Domain Logic for the Pressy Dashboard
//!
//! This crate is the **heart** of the Pressy laundry-shop dashboard. It
//! contains the domain model and all pure logic, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pressy Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Dashboard Frontend (TypeScript)                 │   │
//! │  │    Orders UI ──► Finance UI ──► Employees UI ──► Settings UI   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pressy-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │    id     │  │  reports  │  │ validation│  │   │
//! │  │   │  Order    │  │  IdTag    │  │  income   │  │   rules   │  │   │
//! │  │   │  Service  │  │  new_id   │  │  profit   │  │   checks  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 pressy-store (Persistence Layer)                │   │
//! │  │          JSON key/value files, application state store          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (User, Service, Order, Expense, etc.)
//! - [`catalog`] - The fixed default service catalog
//! - [`id`] - Tagged unique id generation
//! - [`error`] - Validation error types
//! - [`validation`] - Input validation rules
//! - [`reports`] - Pure aggregation over orders and expenses
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic except id generation
//! 2. **No I/O**: Persistence, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole MRU (i64), never floats
//! 4. **Explicit Errors**: Validation failures are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod id;
pub mod reports;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use pressy_core::Order` instead of
// `use pressy_core::types::Order`

pub use error::ValidationError;
pub use id::{new_id, IdTag};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The order number assigned to the very first order.
///
/// ## Why 1001?
/// Customer-facing numbers start above 1000 so receipts never show tiny
/// numbers like "#3". Every subsequent order is max(existing) + 1.
pub const FIRST_ORDER_NUMBER: u32 = 1001;

/// Payment methods offered by the dashboard.
///
/// The store treats `payment_method` as a free-form string and does NOT
/// validate it against this list; the form layer offers these choices.
pub const PAYMENT_METHODS: &[&str] = &[
    "Cash",
    "Click",
    "Moov Money",
    "BCI Pay",
    "Amanety",
    "Bankily",
    "Sedad",
    "Masrivi",
    "Bim Bank",
];
