//! # Repository Module
//!
//! Product repository trait and its implementations.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                     │
//! │                                                                     │
//! │  Callers depend on the trait, never on a storage engine:            │
//! │                                                                     │
//! │  Caller                                                             │
//! │       │                                                             │
//! │       │  repo.get_one(1).await                                      │
//! │       ▼                                                             │
//! │  dyn ProductRepository                                              │
//! │       │                                                             │
//! │       ├────────────────────────────┐                                │
//! │       ▼                            ▼                                │
//! │  SqliteProductRepository     MemoryProductRepository                │
//! │  (SqlitePool, production)    (HashMap, tests/dev)                   │
//! │                                                                     │
//! │  Benefits:                                                          │
//! │  • Clean separation of concerns                                     │
//! │  • Swap backends without touching callers                           │
//! │  • SQL is isolated in one place                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Implementations
//!
//! - [`product::SqliteProductRepository`] - SQLite-backed CRUD over a shared pool
//! - [`memory::MemoryProductRepository`] - In-memory variant for tests and development

pub mod memory;
pub mod product;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::DbResult;
use stockroom_core::{NewProduct, Product, ProductFullData};

/// Storage-agnostic interface for product persistence.
///
/// One implementor holds one long-lived storage handle, injected at
/// construction; every method is a single request/response exchange
/// against that handle. Implementations add no locking or transactions
/// of their own - concurrent writes on the same identity race at the
/// engine's isolation level.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Looks up the product whose identity equals `id`.
    ///
    /// Returns `Ok(None)` when no such record exists - absence is
    /// signaled explicitly, never as a default-valued record.
    async fn get_one(&self, id: i64) -> DbResult<Option<Product>>;

    /// Same contract as [`get_one`](Self::get_one), with blocking time
    /// bounded by `timeout`.
    ///
    /// Returns [`DbError::Canceled`](crate::DbError::Canceled) when the
    /// deadline elapses before the engine responds, or when the deadline
    /// is already expired on entry (the query is then never issued).
    async fn get_one_with_timeout(&self, id: i64, timeout: Duration) -> DbResult<Option<Product>>;

    /// Returns every product, in the storage engine's natural return
    /// order. Callers must not assume any sort order.
    ///
    /// Returns an empty vector, not an error, for an empty table. A row
    /// that fails to decode mid-iteration fails the whole call.
    async fn get_all(&self) -> DbResult<Vec<Product>>;

    /// Looks up a product joined with its owning warehouse.
    ///
    /// Returns `Ok(None)` when the product does not exist **or** is not
    /// assigned to a warehouse (the join is inner).
    async fn get_full_data(&self, id: i64) -> DbResult<Option<ProductFullData>>;

    /// Inserts a new product and returns it with the storage-assigned
    /// identity; every other field equals the input.
    ///
    /// No retry is attempted: a rejected insert (constraint violation,
    /// connection failure) surfaces as the storage error.
    async fn store(&self, product: NewProduct) -> DbResult<Product>;

    /// Overwrites every non-identity field of the product with the given
    /// identity, returning the input unchanged on success.
    ///
    /// Updating a non-existent identity is a successful no-op - zero
    /// rows affected is not surfaced as an error. The record is not
    /// re-read to confirm the write.
    async fn update(&self, product: &Product) -> DbResult<Product>;

    /// Updates only the name of the product with the given identity.
    ///
    /// Returns the updated record, or `Ok(None)` when the identity does
    /// not exist.
    async fn update_name(&self, id: i64, name: &str) -> DbResult<Option<Product>>;

    /// Deletes the product with the given identity.
    ///
    /// Idempotent: deleting a non-existent identity is a success.
    async fn delete(&self, id: i64) -> DbResult<()>;
}
