//! # pressy-store: Persistence + Application State for the Pressy Dashboard
//!
//! This crate provides the persisted state of the dashboard: a thin
//! namespaced JSON key/value layer and, on top of it, the application
//! state store every screen talks to.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pressy Data Flow                                 │
//! │                                                                         │
//! │  Dashboard screen (orders page, finance page, settings ...)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    pressy-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   AppStore    │    │    KvStore    │    │    keys      │  │   │
//! │  │   │   (app.rs)    │    │   (kv.rs)     │    │  (keys.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ one slice per │───►│ namespaced    │    │ theme, user, │  │   │
//! │  │   │ domain list,  │    │ JSON files,   │    │ orders, ...  │  │   │
//! │  │   │ write-through │    │ self-healing  │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Data directory (one file per key)               │   │
//! │  │   pressy_theme.json  pressy_user.json  pressy_orders.json ...  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`kv`] - Namespaced JSON key/value store with corruption self-healing
//! - [`keys`] - The fixed persistence keys, one per state slice
//! - [`app`] - The application state store and its operation set
//! - [`seed`] - Demo data fixtures and seeding
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pressy_store::{AppStore, KvStore};
//!
//! let kv = KvStore::open("./data")?;
//! let mut store = AppStore::open(kv);
//!
//! assert!(store.login("22334455", "secret"));
//! let services = store.services().to_vec();
//! # Ok::<(), pressy_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod app;
pub mod error;
pub mod keys;
pub mod kv;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use app::{AppStore, NewOrder};
pub use error::{StoreError, StoreResult};
pub use kv::KvStore;
