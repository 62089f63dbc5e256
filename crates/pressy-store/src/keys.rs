//! # Persistence Keys
//!
//! The fixed keys of the persisted state layout, one per state slice.
//!
//! ## Persisted Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Key              │ Value (JSON)                                        │
//! │ ──────────────────┼──────────────────────────────────────────────────── │
//! │  theme            │ "light" | "dark" | "system"                        │
//! │  language         │ "fr" | "ar"                                         │
//! │  user             │ User object (absent when logged out)               │
//! │  services         │ [Service, ...]                                      │
//! │  orders           │ [Order, ...]       (most-recent-first)             │
//! │  expenses         │ [Expense, ...]     (most-recent-first)             │
//! │  employees        │ [Employee, ...]                                     │
//! │  notifications    │ [Notification, ...] (most-recent-first)            │
//! │  schema_version   │ integer (layout marker for future migrations)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every key is namespaced by the KV layer with the `pressy_` prefix, so
//! the on-disk files are `pressy_theme.json`, `pressy_orders.json`, etc.

pub const THEME: &str = "theme";
pub const LANGUAGE: &str = "language";
pub const USER: &str = "user";
pub const SERVICES: &str = "services";
pub const ORDERS: &str = "orders";
pub const EXPENSES: &str = "expenses";
pub const EMPLOYEES: &str = "employees";
pub const NOTIFICATIONS: &str = "notifications";

/// Layout version marker. The original layout had none; this is written so
/// a future layout change has something to migrate from.
pub const SCHEMA_VERSION: &str = "schema_version";

/// Current persisted layout version.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;
