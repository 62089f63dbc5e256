//! # Application State Store
//!
//! The single source of truth for the dashboard session: every piece of
//! mutable domain and UI-preference state lives here, mirrored to the
//! key/value layer on every change.
//!
//! ## Store Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    AppStore Lifecycle                                   │
//! │                                                                         │
//! │  AppStore::open(kv)                                                    │
//! │       │                                                                 │
//! │       ▼  per slice:                                                     │
//! │  kv.get(key) ──┬── present ──► adopt persisted value                   │
//! │                └── absent  ──► adopt default AND write it back         │
//! │                                (disk and memory never disagree about   │
//! │                                 "no prior value" vs "default value")   │
//! │       │                                                                 │
//! │       ▼  during the session:                                            │
//! │  mutation ──► update in-memory slice ──► kv.set(slice key, new value)  │
//! │              (write-through: same logical step, affected slice only,   │
//! │               no batching, no debouncing)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! Single actor, fully synchronous: the store is owned by the one running
//! session and driven by foreground calls. No operation suspends, blocks,
//! or can be cancelled mid-way.

use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use pressy_core::catalog::default_services;
use pressy_core::validation::validate_required;
use pressy_core::{
    new_id, Direction, Employee, EmployeeStatus, Expense, IdTag, Language, Notification,
    NotificationKind, Order, OrderItem, OrderStatus, Service, Theme, User, UserRole,
    FIRST_ORDER_NUMBER,
};

use crate::keys;
use crate::kv::KvStore;

// =============================================================================
// New-Order Input
// =============================================================================

/// Input to [`AppStore::add_order`]: everything the caller decides.
///
/// `id`, `order_number`, and `created_at` are assigned by the store.
/// `total_price` is caller-computed and not recomputed here.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub client_name: String,
    pub client_phone: String,
    pub items: Vec<OrderItem>,
    pub total_price: i64,
    pub payment_method: String,
    pub status: OrderStatus,
    pub employee_id: Option<String>,
    pub notes: Option<String>,
}

// =============================================================================
// AppStore
// =============================================================================

/// The application state store.
///
/// Owns the in-memory copy of every slice; the [`KvStore`] owns only the
/// serialized representation. The view layer never touches the KV layer
/// directly — it goes through this operation set.
///
/// Constructed once and passed by reference to every consumer.
#[derive(Debug)]
pub struct AppStore {
    kv: KvStore,

    // UI preferences
    theme: Theme,
    language: Language,

    // Session
    user: Option<User>,

    // Domain collections
    services: Vec<Service>,
    orders: Vec<Order>,
    expenses: Vec<Expense>,
    employees: Vec<Employee>,
    notifications: Vec<Notification>,
}

/// Initializes one slice: adopt the persisted value, or fall back to the
/// default and persist it back so disk and memory agree from the first read.
fn init_slice<T: Serialize + DeserializeOwned>(kv: &KvStore, key: &str, default: T) -> T {
    match kv.get(key) {
        Some(value) => value,
        None => {
            kv.set(key, &default);
            default
        }
    }
}

impl AppStore {
    /// Opens the store, running the initialization protocol for every slice.
    ///
    /// Infallible by design: the KV layer absorbs all read fallibility, so
    /// startup needs no error handling.
    pub fn open(kv: KvStore) -> Self {
        match kv.get::<u32>(keys::SCHEMA_VERSION) {
            None => kv.set(keys::SCHEMA_VERSION, &keys::CURRENT_SCHEMA_VERSION),
            Some(v) if v != keys::CURRENT_SCHEMA_VERSION => {
                // No migrations exist yet; the marker is here so a future
                // layout change has something to dispatch on.
                warn!(found = v, current = keys::CURRENT_SCHEMA_VERSION, "unexpected schema version");
            }
            Some(_) => {}
        }

        let theme = init_slice(&kv, keys::THEME, Theme::default());
        let language = init_slice(&kv, keys::LANGUAGE, Language::default());
        // Absent user means logged out; nothing to write back.
        let user = kv.get(keys::USER);
        let services = init_slice(&kv, keys::SERVICES, default_services());
        let orders = init_slice(&kv, keys::ORDERS, Vec::new());
        let expenses = init_slice(&kv, keys::EXPENSES, Vec::new());
        let employees = init_slice(&kv, keys::EMPLOYEES, Vec::new());
        let notifications = init_slice(&kv, keys::NOTIFICATIONS, Vec::new());

        AppStore {
            kv,
            theme,
            language,
            user,
            services,
            orders,
            expenses,
            employees,
            notifications,
        }
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Text direction, derived from the language. Never persisted.
    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Orders, most-recent-first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Expenses, most-recent-first.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Notifications, most-recent-first. The store never marks them seen.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    // =========================================================================
    // UI Preferences
    // =========================================================================

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.kv.set(keys::THEME, &self.theme);
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.kv.set(keys::LANGUAGE, &self.language);
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Logs in with the shop's manager account.
    ///
    /// There is no credential verification: any non-empty phone/password
    /// pair fabricates the manager record. Returns `false` (and mutates
    /// nothing) when either field is empty.
    pub fn login(&mut self, phone: &str, password: &str) -> bool {
        if validate_required("phone", phone).is_err()
            || validate_required("password", password).is_err()
        {
            return false;
        }

        let user = User {
            id: "manager1".to_string(),
            name: "Ahmed Fall".to_string(),
            phone: phone.to_string(),
            email: Some("manager@pressy.com".to_string()),
            role: UserRole::Manager,
            laundry_name: Some("Pressy Laundry".to_string()),
            logo: None,
        };

        debug!(phone, "login");
        self.user = Some(user);
        self.kv.set(keys::USER, &self.user);
        true
    }

    /// Registers a new shop and logs its manager in.
    ///
    /// All four required fields must be non-empty; otherwise returns
    /// `false` with no state change. Like `login`, nothing is verified —
    /// the record is fabricated locally.
    pub fn signup(
        &mut self,
        phone: &str,
        password: &str,
        laundry_name: &str,
        manager_name: &str,
        email: Option<&str>,
    ) -> bool {
        if validate_required("phone", phone).is_err()
            || validate_required("password", password).is_err()
            || validate_required("laundryName", laundry_name).is_err()
            || validate_required("managerName", manager_name).is_err()
        {
            return false;
        }

        let user = User {
            id: new_id(IdTag::Manager),
            name: manager_name.to_string(),
            phone: phone.to_string(),
            email: email.map(str::to_string),
            role: UserRole::Manager,
            laundry_name: Some(laundry_name.to_string()),
            logo: None,
        };

        debug!(phone, laundry_name, "signup");
        self.user = Some(user);
        self.kv.set(keys::USER, &self.user);
        true
    }

    /// Clears the session. Idempotent.
    pub fn logout(&mut self) {
        self.user = None;
        // Serializes as null, which the KV layer treats as deletion.
        self.kv.set(keys::USER, &self.user);
    }

    // =========================================================================
    // Services
    // =========================================================================

    /// Replaces the price of the matching service. No-op if `id` is
    /// unknown. The price is not validated here; callers validate.
    pub fn update_service_price(&mut self, id: &str, new_price: i64) {
        if let Some(service) = self.services.iter_mut().find(|s| s.id == id) {
            service.price = new_price;
            self.kv.set(keys::SERVICES, &self.services);
        }
    }

    /// Appends a new service with a fresh id and returns it.
    pub fn add_service(&mut self, name: &str, price: i64) -> Service {
        let service = Service {
            id: new_id(IdTag::Service),
            name: name.to_string(),
            price,
        };

        self.services.push(service.clone());
        self.kv.set(keys::SERVICES, &self.services);
        service
    }

    /// Replaces the entire catalog with the fixed default one, destroying
    /// custom services and price edits.
    pub fn restore_default_services(&mut self) {
        self.services = default_services();
        self.kv.set(keys::SERVICES, &self.services);
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Creates an order and prepends it to the list (most-recent-first).
    ///
    /// Assigns `order_number` = max(existing) + 1 (1001 for an empty list),
    /// a fresh id, and the current timestamp. When the acting user is an
    /// employee, additionally emits an `info` notification announcing the
    /// order.
    pub fn add_order(&mut self, new: NewOrder) -> Order {
        let order_number = self
            .orders
            .iter()
            .map(|o| o.order_number)
            .max()
            .map_or(FIRST_ORDER_NUMBER, |max| max + 1);

        let order = Order {
            id: new_id(IdTag::Order),
            order_number,
            client_name: new.client_name,
            client_phone: new.client_phone,
            items: new.items,
            total_price: new.total_price,
            payment_method: new.payment_method,
            status: new.status,
            created_at: Utc::now(),
            employee_id: new.employee_id,
            notes: new.notes,
        };

        debug!(order_number, client = %order.client_name, "order added");
        self.orders.insert(0, order.clone());
        self.kv.set(keys::ORDERS, &self.orders);

        if let Some(user) = self.user.as_ref().filter(|u| u.role == UserRole::Employee) {
            let notification = Notification {
                id: self.notifications.iter().map(|n| n.id).max().unwrap_or(0) + 1,
                title: "New Order Added".to_string(),
                message: format!("Employee {} added order #{}", user.name, order_number),
                kind: NotificationKind::Info,
                seen: false,
                created_at: Utc::now(),
            };
            self.notifications.insert(0, notification);
            self.kv.set(keys::NOTIFICATIONS, &self.notifications);
        }

        order
    }

    /// Replaces the status of the matching order, leaving every other
    /// field untouched. No-op if `order_id` is unknown.
    ///
    /// Any target status is accepted, including terminal → non-terminal;
    /// the lifecycle graph on [`OrderStatus`] is advisory only.
    pub fn update_order_status(&mut self, order_id: &str, status: OrderStatus) {
        if let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) {
            order.status = status;
            self.kv.set(keys::ORDERS, &self.orders);
        }
    }

    // =========================================================================
    // Expenses
    // =========================================================================

    /// Records an expense, prepending it (most-recent-first), and returns
    /// it. Positivity is the caller's responsibility.
    pub fn add_expense(
        &mut self,
        title: &str,
        amount: i64,
        date: NaiveDate,
        notes: Option<String>,
    ) -> Expense {
        let expense = Expense {
            id: new_id(IdTag::Expense),
            title: title.to_string(),
            amount,
            date,
            notes,
        };

        self.expenses.insert(0, expense.clone());
        self.kv.set(keys::EXPENSES, &self.expenses);
        expense
    }

    // =========================================================================
    // Employees
    // =========================================================================

    /// Appends a new employee with a fresh id and returns it.
    pub fn add_employee(
        &mut self,
        name: &str,
        phone: &str,
        status: EmployeeStatus,
        password: Option<String>,
    ) -> Employee {
        let employee = Employee {
            id: new_id(IdTag::Employee),
            name: name.to_string(),
            phone: phone.to_string(),
            status,
            password,
        };

        self.employees.push(employee.clone());
        self.kv.set(keys::EMPLOYEES, &self.employees);
        employee
    }

    /// Replaces the matching employee record entirely (full replace by
    /// id). No-op if the id is unknown.
    pub fn update_employee(&mut self, employee: Employee) {
        if let Some(existing) = self.employees.iter_mut().find(|e| e.id == employee.id) {
            *existing = employee;
            self.kv.set(keys::EMPLOYEES, &self.employees);
        }
    }

    /// Removes the matching employee. No-op if the id is unknown.
    pub fn delete_employee(&mut self, employee_id: &str) {
        let before = self.employees.len();
        self.employees.retain(|e| e.id != employee_id);
        if self.employees.len() != before {
            self.kv.set(keys::EMPLOYEES, &self.employees);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn open_temp() -> (tempfile::TempDir, AppStore) {
        let dir = tempfile::tempdir().unwrap();
        let kv = KvStore::open(dir.path()).unwrap();
        (dir, AppStore::open(kv))
    }

    fn new_order(client: &str) -> NewOrder {
        NewOrder {
            client_name: client.to_string(),
            client_phone: "22334455".to_string(),
            items: vec![],
            total_price: 100,
            payment_method: "Cash".to_string(),
            status: OrderStatus::Pending,
            employee_id: None,
            notes: None,
        }
    }

    #[test]
    fn test_open_seeds_default_catalog_and_writes_it_back() {
        let dir = tempfile::tempdir().unwrap();
        let kv = KvStore::open(dir.path()).unwrap();
        let store = AppStore::open(kv.clone());

        assert_eq!(store.services(), default_services());
        // The default was written back, not just adopted in memory.
        assert_eq!(kv.get::<Vec<Service>>(keys::SERVICES), Some(default_services()));
        assert_eq!(kv.get::<u32>(keys::SCHEMA_VERSION), Some(keys::CURRENT_SCHEMA_VERSION));
    }

    #[test]
    fn test_defaults_for_fresh_store() {
        let (_dir, store) = open_temp();
        assert_eq!(store.theme(), Theme::System);
        assert_eq!(store.language(), Language::Fr);
        assert_eq!(store.direction(), Direction::Ltr);
        assert!(!store.is_authenticated());
        assert!(store.orders().is_empty());
        assert!(store.expenses().is_empty());
        assert!(store.employees().is_empty());
        assert!(store.notifications().is_empty());
    }

    #[test]
    fn test_login_requires_both_fields() {
        let (_dir, mut store) = open_temp();
        assert!(!store.login("", ""));
        assert!(!store.login("22334455", ""));
        assert!(!store.login("", "secret"));
        assert!(!store.is_authenticated());

        assert!(store.login("22334455", "secret"));
        assert!(store.is_authenticated());
        let user = store.user().unwrap();
        assert_eq!(user.role, UserRole::Manager);
        assert_eq!(user.phone, "22334455");
    }

    #[test]
    fn test_signup_requires_all_four_fields() {
        let (_dir, mut store) = open_temp();
        assert!(!store.signup("22334455", "secret", "", "Ahmed Fall", None));
        assert!(!store.is_authenticated());

        assert!(store.signup("22334455", "secret", "Pressy Laundry", "Ahmed Fall", None));
        let user = store.user().unwrap();
        assert!(user.id.starts_with("MGR-"));
        assert_eq!(user.laundry_name.as_deref(), Some("Pressy Laundry"));
    }

    #[test]
    fn test_logout_is_idempotent_and_removes_persisted_user() {
        let dir = tempfile::tempdir().unwrap();
        let kv = KvStore::open(dir.path()).unwrap();
        let mut store = AppStore::open(kv.clone());

        assert!(store.login("22334455", "secret"));
        assert!(kv.get::<User>(keys::USER).is_some());

        store.logout();
        store.logout();
        assert!(!store.is_authenticated());
        assert_eq!(kv.get::<User>(keys::USER), None);
    }

    #[test]
    fn test_set_theme_and_language_write_through() {
        let dir = tempfile::tempdir().unwrap();
        let kv = KvStore::open(dir.path()).unwrap();
        let mut store = AppStore::open(kv.clone());

        store.set_theme(Theme::Dark);
        store.set_language(Language::Ar);

        assert_eq!(kv.get::<Theme>(keys::THEME), Some(Theme::Dark));
        assert_eq!(kv.get::<Language>(keys::LANGUAGE), Some(Language::Ar));
        assert_eq!(store.direction(), Direction::Rtl);
    }

    #[test]
    fn test_order_numbers_start_at_1001_and_increase() {
        let (_dir, mut store) = open_temp();
        let a = store.add_order(new_order("A"));
        let b = store.add_order(new_order("B"));
        let c = store.add_order(new_order("C"));

        assert_eq!(a.order_number, 1001);
        assert_eq!(b.order_number, 1002);
        assert_eq!(c.order_number, 1003);
        // Most-recent-first.
        assert_eq!(store.orders()[0].order_number, 1003);
    }

    #[test]
    fn test_order_number_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        {
            let kv = KvStore::open(dir.path()).unwrap();
            let mut store = AppStore::open(kv);
            store.add_order(new_order("A"));
        }

        let kv = KvStore::open(dir.path()).unwrap();
        let mut store = AppStore::open(kv);
        assert_eq!(store.orders().len(), 1);
        let next = store.add_order(new_order("B"));
        assert_eq!(next.order_number, 1002);
    }

    #[test]
    fn test_update_order_status_unknown_id_is_noop() {
        let (_dir, mut store) = open_temp();
        store.add_order(new_order("A"));
        let before = store.orders().to_vec();

        store.update_order_status("ORD-does-not-exist", OrderStatus::Completed);
        assert_eq!(store.orders(), before.as_slice());
    }

    #[test]
    fn test_update_order_status_accepts_any_transition() {
        let (_dir, mut store) = open_temp();
        let order = store.add_order(new_order("A"));

        store.update_order_status(&order.id, OrderStatus::Completed);
        // Terminal back to non-terminal is allowed by contract.
        store.update_order_status(&order.id, OrderStatus::Pending);
        assert_eq!(store.orders()[0].status, OrderStatus::Pending);
    }

    #[test]
    fn test_employee_order_emits_info_notification() {
        let (_dir, mut store) = open_temp();
        store.user = Some(User {
            id: "1".to_string(),
            name: "Brahim Salem".to_string(),
            phone: "41424344".to_string(),
            email: None,
            role: UserRole::Employee,
            laundry_name: None,
            logo: None,
        });

        let order = store.add_order(new_order("A"));

        assert_eq!(store.notifications().len(), 1);
        let n = &store.notifications()[0];
        assert_eq!(n.kind, NotificationKind::Info);
        assert!(!n.seen);
        assert!(n.message.contains("Brahim Salem"));
        assert!(n.message.contains(&format!("#{}", order.order_number)));
    }

    #[test]
    fn test_manager_order_emits_no_notification() {
        let (_dir, mut store) = open_temp();
        assert!(store.login("22334455", "secret"));
        store.add_order(new_order("A"));
        assert!(store.notifications().is_empty());
    }

    #[test]
    fn test_notification_ids_increase() {
        let (_dir, mut store) = open_temp();
        store.user = Some(User {
            id: "1".to_string(),
            name: "Aicha Fall".to_string(),
            phone: "36373839".to_string(),
            email: None,
            role: UserRole::Employee,
            laundry_name: None,
            logo: None,
        });

        store.add_order(new_order("A"));
        store.add_order(new_order("B"));

        let ids: Vec<i64> = store.notifications().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_update_service_price_and_not_found_noop() {
        let (_dir, mut store) = open_temp();
        store.update_service_price("1", 75);
        assert_eq!(store.services()[0].price, 75);

        let before = store.services().to_vec();
        store.update_service_price("SVC-unknown", 999);
        assert_eq!(store.services(), before.as_slice());
    }

    #[test]
    fn test_restore_default_services_discards_edits() {
        let (_dir, mut store) = open_temp();
        store.update_service_price("1", 75);
        store.add_service("SCARF", 15);
        assert_eq!(store.services().len(), 7);

        store.restore_default_services();
        assert_eq!(store.services(), default_services());
    }

    #[test]
    fn test_expenses_are_prepended() {
        let (_dir, mut store) = open_temp();
        let date = NaiveDate::from_ymd_opt(2023, 10, 25).unwrap();
        store.add_expense("Detergent", 1500, date, None);
        store.add_expense("Rent", 10000, date, None);

        assert_eq!(store.expenses()[0].title, "Rent");
        assert_eq!(store.expenses()[1].title, "Detergent");
    }

    #[test]
    fn test_employee_lifecycle() {
        let (_dir, mut store) = open_temp();
        let employee = store.add_employee("Brahim Salem", "41424344", EmployeeStatus::Active, None);
        assert_eq!(store.employees().len(), 1);

        let mut updated = employee.clone();
        updated.status = EmployeeStatus::Disabled;
        store.update_employee(updated);
        assert_eq!(store.employees()[0].status, EmployeeStatus::Disabled);

        // Unknown id: no-op for both update and delete.
        store.update_employee(Employee {
            id: "EMP-unknown".to_string(),
            name: "Ghost".to_string(),
            phone: "0".to_string(),
            status: EmployeeStatus::Active,
            password: None,
        });
        store.delete_employee("EMP-unknown");
        assert_eq!(store.employees().len(), 1);

        store.delete_employee(&employee.id);
        assert!(store.employees().is_empty());
    }
}
