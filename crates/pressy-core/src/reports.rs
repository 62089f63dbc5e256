//! # Report Aggregation
//!
//! Pure aggregation over the order and expense slices, backing the
//! dashboard and finance screens.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Report Aggregation                                   │
//! │                                                                         │
//! │  AppStore.orders() ──┬──► income()          ──► Finance: Income card   │
//! │                      ├──► status_counts()   ──► Dashboard: badges      │
//! │                      └──► income_on(date)   ──► Dashboard: 7-day chart │
//! │                                                                         │
//! │  AppStore.expenses() ───► expense_total()   ──► Finance: Expenses card │
//! │                                                                         │
//! │  income() - expense_total() = profit()      ──► Finance: Profit card   │
//! │                                                                         │
//! │  Everything here is a pure fold over slices the caller already owns.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only `completed` orders count as income; `ready` orders are delivered
//! work that remains unpaid.

use chrono::NaiveDate;

use crate::types::{Expense, Order, OrderStatus};

// =============================================================================
// Status Counts
// =============================================================================

/// Per-status order counts for the dashboard badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub processing: usize,
    pub ready: usize,
    pub completed: usize,
    pub cancelled: usize,
}

/// Counts orders per status.
pub fn status_counts(orders: &[Order]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for order in orders {
        match order.status {
            OrderStatus::Pending => counts.pending += 1,
            OrderStatus::Processing => counts.processing += 1,
            OrderStatus::Ready => counts.ready += 1,
            OrderStatus::Completed => counts.completed += 1,
            OrderStatus::Cancelled => counts.cancelled += 1,
        }
    }
    counts
}

// =============================================================================
// Income & Profit
// =============================================================================

/// Total income in whole MRU: the sum over completed orders.
pub fn income(orders: &[Order]) -> i64 {
    orders
        .iter()
        .filter(|o| o.status == OrderStatus::Completed)
        .map(|o| o.total_price)
        .sum()
}

/// Income from orders completed and created on the given date.
pub fn income_on(orders: &[Order], date: NaiveDate) -> i64 {
    orders
        .iter()
        .filter(|o| o.status == OrderStatus::Completed && o.created_at.date_naive() == date)
        .map(|o| o.total_price)
        .sum()
}

/// Number of orders created on the given date, regardless of status.
pub fn orders_on(orders: &[Order], date: NaiveDate) -> usize {
    orders
        .iter()
        .filter(|o| o.created_at.date_naive() == date)
        .count()
}

/// Total recorded expenses in whole MRU.
pub fn expense_total(expenses: &[Expense]) -> i64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Profit: income minus expenses. Negative when the shop ran at a loss.
pub fn profit(orders: &[Order], expenses: &[Expense]) -> i64 {
    income(orders) - expense_total(expenses)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn order(number: u32, status: OrderStatus, total: i64, day: u32) -> Order {
        Order {
            id: number.to_string(),
            order_number: number,
            client_name: "Client".to_string(),
            client_phone: "22334455".to_string(),
            items: vec![],
            total_price: total,
            payment_method: "Cash".to_string(),
            status,
            created_at: Utc.with_ymd_and_hms(2023, 10, day, 10, 0, 0).unwrap(),
            employee_id: None,
            notes: None,
        }
    }

    fn expense(amount: i64) -> Expense {
        Expense {
            id: "1".to_string(),
            title: "Detergent".to_string(),
            amount,
            date: NaiveDate::from_ymd_opt(2023, 10, 25).unwrap(),
            notes: None,
        }
    }

    #[test]
    fn test_income_counts_only_completed() {
        let orders = vec![
            order(1001, OrderStatus::Completed, 190, 27),
            order(1002, OrderStatus::Ready, 150, 27),
            order(1003, OrderStatus::Cancelled, 300, 28),
        ];
        assert_eq!(income(&orders), 190);
    }

    #[test]
    fn test_income_on_filters_by_date() {
        let orders = vec![
            order(1001, OrderStatus::Completed, 190, 27),
            order(1002, OrderStatus::Completed, 150, 28),
            order(1003, OrderStatus::Pending, 300, 28),
        ];
        let day = NaiveDate::from_ymd_opt(2023, 10, 28).unwrap();
        assert_eq!(income_on(&orders, day), 150);
        assert_eq!(orders_on(&orders, day), 2);
    }

    #[test]
    fn test_status_counts() {
        let orders = vec![
            order(1001, OrderStatus::Pending, 10, 27),
            order(1002, OrderStatus::Pending, 10, 27),
            order(1003, OrderStatus::Ready, 10, 27),
        ];
        let counts = status_counts(&orders);
        assert_eq!(counts.pending, 2);
        assert_eq!(counts.ready, 1);
        assert_eq!(counts.completed, 0);
    }

    #[test]
    fn test_profit_can_be_negative() {
        let orders = vec![order(1001, OrderStatus::Completed, 190, 27)];
        let expenses = vec![expense(1500)];
        assert_eq!(profit(&orders, &expenses), 190 - 1500);
    }

    #[test]
    fn test_empty_slices() {
        assert_eq!(income(&[]), 0);
        assert_eq!(expense_total(&[]), 0);
        assert_eq!(status_counts(&[]), StatusCounts::default());
    }
}
