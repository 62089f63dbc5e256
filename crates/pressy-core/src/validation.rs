//! # Validation Module
//!
//! Input validation rules for the Pressy dashboard.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Dashboard forms (TypeScript)                                 │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required-field checks backing login/signup                        │
//! │  └── Amount/quantity rules for forms compiled against the core         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: The state store                                              │
//! │  └── Deliberately permissive: trusts validated input, degrades to      │
//! │      no-ops rather than erroring on unknown ids                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};

/// Maximum quantity of a single service line in an order.
///
/// ## Business Reason
/// Prevents accidental over-entry (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: u32 = 999;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a required text field is non-empty after trimming.
///
/// ## Example
/// ```rust
/// use pressy_core::validation::validate_required;
///
/// assert!(validate_required("phone", "22334455").is_ok());
/// assert!(validate_required("phone", "   ").is_err());
/// ```
pub fn validate_required(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

/// Validates a phone number.
///
/// ## Rules
/// - Must not be empty
/// - Digits only, optionally prefixed with `+`
/// - Between 6 and 15 digits
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(ValidationError::Required { field: "phone" });
    }

    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "phone",
            reason: "must contain only digits",
        });
    }

    if !(6..=15).contains(&digits.len()) {
        return Err(ValidationError::OutOfRange {
            field: "phone",
            min: 6,
            max: 15,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a monetary amount (expense amount, service price).
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_amount(field: &'static str, amount: i64) -> ValidationResult<()> {
    if amount <= 0 {
        return Err(ValidationError::MustBePositive { field });
    }
    Ok(())
}

/// Validates an order line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_ITEM_QUANTITY`]
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive { field: "quantity" });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity",
            min: 1,
            max: MAX_ITEM_QUANTITY as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("name", "Ahmed Fall").is_ok());
        assert!(validate_required("name", "").is_err());
        assert!(validate_required("name", "   ").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("22334455").is_ok());
        assert!(validate_phone("+22241424344").is_ok());

        assert!(validate_phone("").is_err());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("call-me").is_err());
        assert!(validate_phone("1234567890123456").is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("amount", 1500).is_ok());
        assert!(validate_amount("amount", 0).is_err());
        assert!(validate_amount("amount", -50).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(1000).is_err());
    }
}
