//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌──────────────────┐  │
//! │  │    Product      │   │   NewProduct    │   │    Warehouse     │  │
//! │  │  ─────────────  │   │  ─────────────  │   │  ──────────────  │  │
//! │  │  id (i64)       │   │  name           │   │  id (i64)        │  │
//! │  │  name           │   │  category       │   │  name            │  │
//! │  │  category       │   │  count          │   │  address         │  │
//! │  │  count          │   │  price          │   └──────────────────┘  │
//! │  │  price          │   └─────────────────┘                         │
//! │  └─────────────────┘                                               │
//! │                                                                     │
//! │  ┌────────────────────────────────────────┐                        │
//! │  │          ProductFullData               │                        │
//! │  │  ────────────────────────────────────  │                        │
//! │  │  Product fields + warehouse name and   │                        │
//! │  │  address (read-only join projection)   │                        │
//! │  └────────────────────────────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Pattern
//! Storage assigns every `Product` and `Warehouse` an integer identity on
//! insert. `NewProduct` deliberately has no identity field: a record that
//! has not been stored yet has no meaningful id.

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A product held in a warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier, assigned by storage on insert.
    pub id: i64,

    /// Display name of the product.
    pub name: String,

    /// Product category. Stored in the `type` column; the relational
    /// schema predates the domain vocabulary and keeps the old name.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "type"))]
    pub category: String,

    /// Units on hand. Non-negative by validation.
    pub count: i64,

    /// Unit price. Non-negative by validation.
    pub price: f64,
}

impl Product {
    /// Checks whether any units are on hand.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.count > 0
    }
}

// =============================================================================
// New Product
// =============================================================================

/// Insert payload for a product that has not been stored yet.
///
/// Identity is assigned by the storage engine, so there is no `id` field
/// here - the repository returns a full [`Product`] once one exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub count: i64,
    pub price: f64,
}

impl NewProduct {
    /// Builds the stored [`Product`] once storage has assigned `id`.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            count: self.count,
            price: self.price,
        }
    }
}

// =============================================================================
// Enriched Read Projection
// =============================================================================

/// A product joined with its owning warehouse.
///
/// Read-only projection: constructed only as a query result, never
/// persisted. Products not yet assigned to a warehouse have no enriched
/// row at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ProductFullData {
    pub id: i64,
    pub name: String,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "type"))]
    pub category: String,
    pub count: i64,
    pub price: f64,

    /// Name of the owning warehouse.
    pub warehouse: String,

    /// Street address of the owning warehouse.
    pub warehouse_address: String,
}

// =============================================================================
// Warehouse
// =============================================================================

/// A warehouse owning zero or more products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Warehouse {
    /// Unique identifier, assigned by storage on insert.
    pub id: i64,
    pub name: String,
    pub address: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_product_preserves_fields() {
        let new = NewProduct {
            name: "batata".to_string(),
            category: "vegetais".to_string(),
            count: 20,
            price: 3.99,
        };

        let product = new.clone().into_product(7);
        assert_eq!(product.id, 7);
        assert_eq!(product.name, new.name);
        assert_eq!(product.category, new.category);
        assert_eq!(product.count, new.count);
        assert_eq!(product.price, new.price);
    }

    #[test]
    fn test_in_stock() {
        let mut product = NewProduct {
            name: "bolo de cenoura".to_string(),
            category: "doces".to_string(),
            count: 1,
            price: 25.0,
        }
        .into_product(1);

        assert!(product.in_stock());
        product.count = 0;
        assert!(!product.in_stock());
    }
}
