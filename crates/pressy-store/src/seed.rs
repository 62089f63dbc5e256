//! # Demo Data Seeding
//!
//! Fixtures for development and demos: a recognizable day-in-the-life of
//! the shop (four orders, three expenses, three employees, two
//! notifications) written straight into the persistence layer.
//!
//! ## Usage
//! ```bash
//! # Seed ./data (default)
//! cargo run -p pressy-store --bin seed
//!
//! # Seed a specific directory
//! cargo run -p pressy-store --bin seed -- --dir /tmp/pressy
//! ```
//!
//! Seeding writes the slices directly through [`KvStore`]; the next
//! `AppStore::open` on the same directory adopts them like any other
//! persisted state.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use pressy_core::catalog::default_services;
use pressy_core::{
    Employee, EmployeeStatus, Expense, Notification, NotificationKind, Order, OrderItem,
    OrderStatus,
};

use crate::keys;
use crate::kv::KvStore;

fn ts(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 10, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 10, day).unwrap_or_default()
}

fn item(service_id: &str, service_name: &str, quantity: u32, price: i64) -> OrderItem {
    OrderItem {
        service_id: service_id.to_string(),
        service_name: service_name.to_string(),
        quantity,
        price,
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// Demo orders, most-recent-first, numbered 1001..=1004.
pub fn demo_orders() -> Vec<Order> {
    let mut orders = vec![
        Order {
            id: "1".to_string(),
            order_number: 1001,
            client_name: "Moussa Ali".to_string(),
            client_phone: "22334455".to_string(),
            items: vec![item("1", "BOUBOU", 2, 50), item("2", "CHEMISE", 3, 30)],
            total_price: 190,
            payment_method: "Bankily".to_string(),
            status: OrderStatus::Completed,
            created_at: ts(27, 10, 0),
            employee_id: None,
            notes: None,
        },
        Order {
            id: "2".to_string(),
            order_number: 1002,
            client_name: "Fatima Ahmed".to_string(),
            client_phone: "44556677".to_string(),
            items: vec![item("3", "PANTALON", 5, 30)],
            total_price: 150,
            payment_method: "Cash".to_string(),
            status: OrderStatus::Ready,
            created_at: ts(27, 11, 30),
            employee_id: None,
            notes: None,
        },
        Order {
            id: "3".to_string(),
            order_number: 1003,
            client_name: "Yacoub Sidi".to_string(),
            client_phone: "33445566".to_string(),
            items: vec![item("4", "VOILE", 10, 30)],
            total_price: 300,
            payment_method: "Click".to_string(),
            status: OrderStatus::Processing,
            created_at: ts(28, 9, 0),
            employee_id: None,
            notes: None,
        },
        Order {
            id: "4".to_string(),
            order_number: 1004,
            client_name: "Mariam Mint".to_string(),
            client_phone: "20304050".to_string(),
            items: vec![item("5", "ROBE", 4, 20), item("6", "GOMME", 1, 10)],
            total_price: 90,
            payment_method: "Cash".to_string(),
            status: OrderStatus::Pending,
            created_at: ts(28, 14, 0),
            employee_id: None,
            notes: None,
        },
    ];
    orders.reverse();
    orders
}

/// Demo expenses.
pub fn demo_expenses() -> Vec<Expense> {
    vec![
        Expense {
            id: "1".to_string(),
            title: "Detergent".to_string(),
            amount: 1500,
            date: date(25),
            notes: None,
        },
        Expense {
            id: "2".to_string(),
            title: "Electricity Bill".to_string(),
            amount: 3500,
            date: date(28),
            notes: None,
        },
        Expense {
            id: "3".to_string(),
            title: "Rent".to_string(),
            amount: 10000,
            date: date(1),
            notes: None,
        },
    ]
}

/// Demo staff roster.
pub fn demo_employees() -> Vec<Employee> {
    vec![
        Employee {
            id: "1".to_string(),
            name: "Brahim Salem".to_string(),
            phone: "41424344".to_string(),
            status: EmployeeStatus::Active,
            password: None,
        },
        Employee {
            id: "2".to_string(),
            name: "Aicha Fall".to_string(),
            phone: "36373839".to_string(),
            status: EmployeeStatus::Active,
            password: None,
        },
        Employee {
            id: "3".to_string(),
            name: "Sidi Mohamed".to_string(),
            phone: "28292021".to_string(),
            status: EmployeeStatus::Disabled,
            password: None,
        },
    ]
}

/// Demo notifications, most-recent-first.
pub fn demo_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 2,
            title: "New Employee Order".to_string(),
            message: "Employee Brahim Salem has added a new order #1004.".to_string(),
            kind: NotificationKind::Info,
            seen: true,
            created_at: ts(28, 14, 5),
        },
        Notification {
            id: 1,
            title: "Unpaid Order".to_string(),
            message: "Order #1002 for Fatima Ahmed is ready but remains unpaid.".to_string(),
            kind: NotificationKind::Warning,
            seen: false,
            created_at: ts(27, 12, 0),
        },
    ]
}

// =============================================================================
// Seeding
// =============================================================================

/// Writes the demo fixtures (plus the default catalog) into the store.
///
/// Overwrites any existing slices under the same keys.
pub fn seed_demo(kv: &KvStore) {
    kv.set(keys::SERVICES, &default_services());
    kv.set(keys::ORDERS, &demo_orders());
    kv.set(keys::EXPENSES, &demo_expenses());
    kv.set(keys::EMPLOYEES, &demo_employees());
    kv.set(keys::NOTIFICATIONS, &demo_notifications());
    kv.set(keys::SCHEMA_VERSION, &keys::CURRENT_SCHEMA_VERSION);
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppStore;

    #[test]
    fn test_seeded_store_opens_with_fixtures() {
        let dir = tempfile::tempdir().unwrap();
        let kv = KvStore::open(dir.path()).unwrap();
        seed_demo(&kv);

        let store = AppStore::open(kv);
        assert_eq!(store.orders().len(), 4);
        assert_eq!(store.expenses().len(), 3);
        assert_eq!(store.employees().len(), 3);
        assert_eq!(store.notifications().len(), 2);
        assert_eq!(store.services().len(), 6);
    }

    #[test]
    fn test_next_order_number_after_seed_is_1005() {
        let dir = tempfile::tempdir().unwrap();
        let kv = KvStore::open(dir.path()).unwrap();
        seed_demo(&kv);

        let mut store = AppStore::open(kv);
        let order = store.add_order(crate::app::NewOrder {
            client_name: "A".to_string(),
            client_phone: "123".to_string(),
            items: vec![],
            total_price: 0,
            payment_method: "Cash".to_string(),
            status: OrderStatus::Pending,
            employee_id: None,
            notes: None,
        });
        assert_eq!(order.order_number, 1005);
    }

    #[test]
    fn test_demo_orders_are_most_recent_first() {
        let orders = demo_orders();
        assert_eq!(orders[0].order_number, 1004);
        assert_eq!(orders[3].order_number, 1001);
        assert!(orders[0].created_at > orders[3].created_at);
    }
}
