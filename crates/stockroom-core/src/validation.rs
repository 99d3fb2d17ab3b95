//! # Validation Module
//!
//! Field validation rules for Stockroom records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Caller (HTTP / CLI, out of scope)                         │
//! │  ├── Type validation (deserialization)                              │
//! │  └── THIS MODULE: domain field validation                           │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Database (SQLite)                                         │
//! │  ├── NOT NULL constraints                                           │
//! │  └── Foreign key constraints                                        │
//! │                                                                     │
//! │  Defense in depth: the repository never re-validates - it is a      │
//! │  pass-through to storage                                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{validate_new_product, validate_price};
//! use stockroom_core::NewProduct;
//!
//! validate_price(3.99).unwrap();
//!
//! let new = NewProduct {
//!     name: "batata".to_string(),
//!     category: "vegetais".to_string(),
//!     count: 20,
//!     price: 3.99,
//! };
//! validate_new_product(&new).unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::NewProduct;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of a product or warehouse name.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length of a product category.
pub const MAX_CATEGORY_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_product_name;
///
/// assert!(validate_product_name("batata").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a product category.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 100 characters
pub fn validate_category(category: &str) -> ValidationResult<()> {
    let category = category.trim();

    if category.is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    if category.len() > MAX_CATEGORY_LEN {
        return Err(ValidationError::TooLong {
            field: "category".to_string(),
            max: MAX_CATEGORY_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stock count.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (out-of-stock product)
pub fn validate_count(count: i64) -> ValidationResult<()> {
    if count < 0 {
        return Err(ValidationError::Negative {
            field: "count".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be a finite number (NaN and infinities carry no meaning)
/// - Must be non-negative (>= 0); zero is allowed (free item)
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_price;
///
/// assert!(validate_price(3.99).is_ok());
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(-1.0).is_err());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates every field of an insert payload.
///
/// Callers run this before handing the payload to a repository store
/// operation; a record that passes here can still be rejected by storage
/// constraints.
pub fn validate_new_product(new: &NewProduct) -> ValidationResult<()> {
    validate_product_name(&new.name)?;
    validate_category(&new.category)?;
    validate_count(new.count)?;
    validate_price(new.price)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("batata").is_ok());
        assert!(validate_product_name("bolo de cenoura").is_ok());

        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"a".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_category() {
        assert!(validate_category("vegetais").is_ok());
        assert!(validate_category("").is_err());
        assert!(validate_category(&"a".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_count() {
        assert!(validate_count(0).is_ok());
        assert!(validate_count(20).is_ok());
        assert!(validate_count(-1).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(3.99).is_ok());
        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_new_product() {
        let mut new = NewProduct {
            name: "batata".to_string(),
            category: "vegetais".to_string(),
            count: 20,
            price: 3.99,
        };
        assert!(validate_new_product(&new).is_ok());

        new.count = -5;
        assert_eq!(
            validate_new_product(&new),
            Err(ValidationError::Negative {
                field: "count".to_string()
            })
        );
    }
}
