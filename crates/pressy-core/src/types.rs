//! # Domain Types
//!
//! Core domain types used throughout the Pressy dashboard.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Service      │   │      Order      │   │    Employee     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name           │   │  order_number   │   │  name, phone    │       │
//! │  │  price          │   │  items[]        │   │  status         │       │
//! │  └─────────────────┘   │  status         │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     User        │   │    Expense      │   │  Notification   │       │
//! │  │  role: manager  │   │  title, amount  │   │  title, message │       │
//! │  │      | employee │   │  date           │   │  kind, seen     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialized Shape
//! Every type serializes to the exact JSON layout the dashboard persists
//! (camelCase fields, lowercase enum tags), so records written by earlier
//! releases of the app deserialize unchanged.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// UI Preferences
// =============================================================================

/// Color theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the operating system preference.
    System,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::System
    }
}

/// Dashboard language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// French (default).
    Fr,
    /// Arabic.
    Ar,
}

impl Default for Language {
    fn default() -> Self {
        Language::Fr
    }
}

impl Language {
    /// Returns the text direction for this language.
    ///
    /// Direction is a pure derivation: it is never persisted and never
    /// set directly.
    #[inline]
    pub const fn direction(self) -> Direction {
        match self {
            Language::Ar => Direction::Rtl,
            Language::Fr => Direction::Ltr,
        }
    }
}

/// Text direction, derived from [`Language`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

// =============================================================================
// User
// =============================================================================

/// Role of the logged-in actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Shop owner; sees finance and settings screens.
    Manager,
    /// Staff member; order entry only.
    Employee,
}

/// The logged-in actor.
///
/// Exactly one user exists at a time, or none. Login and signup fabricate
/// this record locally; there is no credential verification or server
/// round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: UserRole,
    /// Display name of the laundry shop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laundry_name: Option<String>,
    /// Data-URL of the shop logo, if one was uploaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

// =============================================================================
// Service
// =============================================================================

/// A priced offering (a garment type: BOUBOU, CHEMISE, ...).
///
/// Display order is insertion order; the collection is keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    /// Price in whole MRU. Mutable; orders snapshot it at creation time.
    pub price: i64,
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of a customer order.
///
/// The intended lifecycle is `pending → processing → ready → completed`,
/// with `cancelled` reachable from any non-terminal state. The store does
/// NOT enforce this graph: `update_order_status` accepts any target status
/// unconditionally, matching the behavior callers rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order received, work not started.
    Pending,
    /// Garments being washed/pressed.
    Processing,
    /// Ready for pickup (typically unpaid).
    Ready,
    /// Picked up and paid.
    Completed,
    /// Cancelled by the client or the shop.
    Cancelled,
}

impl OrderStatus {
    /// Whether this status ends the intended lifecycle.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

// =============================================================================
// Order
// =============================================================================

/// A line item in an order.
///
/// Uses the snapshot pattern: `service_name` and `price` are frozen at
/// order time and unaffected by later catalog edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub service_id: String,
    /// Service name at time of order (frozen).
    pub service_name: String,
    pub quantity: u32,
    /// Unit price in whole MRU at time of order (frozen).
    pub price: i64,
}

/// A customer transaction.
///
/// ## Lifecycle
/// Created once via `add_order` (`id`, `order_number`, `created_at` are
/// assigned there and immutable from then on). The only field mutated
/// afterwards is `status`. Orders are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Customer-facing number: strictly increasing, unique, starting at 1001.
    pub order_number: u32,
    pub client_name: String,
    pub client_phone: String,
    pub items: Vec<OrderItem>,
    /// Caller-computed total in whole MRU; the store does not recompute it.
    pub total_price: i64,
    /// Free-form payment method label (see `PAYMENT_METHODS`); not validated.
    pub payment_method: String,
    pub status: OrderStatus,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    /// Employee who registered the order, if entered by staff.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// =============================================================================
// Expense
// =============================================================================

/// A cost record (detergent, rent, electricity, ...).
///
/// Create-only: the store exposes no update or delete for expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub title: String,
    /// Amount in whole MRU. Callers validate positivity before submitting.
    pub amount: i64,
    #[ts(as = "String")]
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// =============================================================================
// Employee
// =============================================================================

/// Whether an employee may currently log order entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Active,
    Disabled,
}

/// A staff record. Full lifecycle: create, full-replace update, delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub status: EmployeeStatus,
    /// Set only on creation/reset; the dashboard never displays it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

// =============================================================================
// Notification
// =============================================================================

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Warning,
    Success,
}

/// An informational event shown in the dashboard bell menu.
///
/// Created automatically when a non-manager registers an order. The store
/// never mutates `seen`; the view layer reads it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    #[ts(rename = "type")]
    pub kind: NotificationKind,
    pub seen: bool,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================
