//! # stockroom-db: Repository Layer for Stockroom
//!
//! This crate provides storage access for the Stockroom system.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Stockroom Data Flow                            │
//! │                                                                     │
//! │  Caller (HTTP / CLI layer, out of scope)                            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  stockroom-db (THIS CRATE)                    │  │
//! │  │                                                               │  │
//! │  │   ┌───────────────┐   ┌────────────────┐   ┌──────────────┐  │  │
//! │  │   │   Database    │   │  Repositories  │   │  Migrations  │  │  │
//! │  │   │   (pool.rs)   │   │ (repository/)  │   │  (embedded)  │  │  │
//! │  │   │               │   │                │   │              │  │  │
//! │  │   │ SqlitePool    │◄──│ trait +        │   │ 001_init.sql │  │  │
//! │  │   │ Connection    │   │ Sqlite/Memory  │   │              │  │  │
//! │  │   │ Management    │   │ variants       │   │              │  │  │
//! │  │   └───────────────┘   └────────────────┘   └──────────────┘  │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite Database (products, warehouses)                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Storage error types
//! - [`repository`] - Repository trait and implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_db::{Database, DbConfig, ProductRepository};
//!
//! // Create database with default config (runs migrations)
//! let db = Database::new(DbConfig::new("path/to/stockroom.db")).await?;
//!
//! // Use the repository
//! let product = db.products().get_one(1).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::memory::MemoryProductRepository;
pub use repository::product::SqliteProductRepository;
pub use repository::ProductRepository;
