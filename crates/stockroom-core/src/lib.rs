//! # stockroom-core: Pure Domain Model for Stockroom
//!
//! This crate is the **heart** of Stockroom. It contains the domain types and
//! field validation as pure code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Stockroom Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │            Caller layer (HTTP / CLI, out of scope)            │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │              ★ stockroom-core (THIS CRATE) ★                  │ │
//! │  │                                                               │ │
//! │  │   ┌───────────┐        ┌───────────┐       ┌────────────┐    │ │
//! │  │   │   types   │        │   error   │       │ validation │    │ │
//! │  │   │  Product  │        │ Validation│       │   rules    │    │ │
//! │  │   │ Warehouse │        │   Error   │       │   checks   │    │ │
//! │  │   └───────────┘        └───────────┘       └────────────┘    │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS         │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │               stockroom-db (Repository Layer)                 │ │
//! │  │           SQLite queries, migrations, repositories            │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, NewProduct, ProductFullData, Warehouse)
//! - [`error`] - Validation error types
//! - [`validation`] - Field validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockroom_core::Product` instead of
// `use stockroom_core::types::Product`

pub use error::ValidationError;
pub use types::{NewProduct, Product, ProductFullData, Warehouse};
