//! # SQLite Product Repository
//!
//! SQLite-backed implementation of the [`ProductRepository`] trait.
//!
//! ## Statement Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Operation      │ Statement                          │ Parameters   │
//! │  ───────────────┼────────────────────────────────────┼────────────  │
//! │  get_one        │ SELECT by id                       │ id           │
//! │  get_all        │ SELECT, no filter                  │ -            │
//! │  get_full_data  │ SELECT + INNER JOIN warehouses     │ id           │
//! │  store          │ INSERT                             │ name, type,  │
//! │                 │                                    │ count, price │
//! │  update         │ UPDATE all fields                  │ ... , id     │
//! │  update_name    │ UPDATE name only, RETURNING row    │ name, id     │
//! │  delete         │ DELETE by id                       │ id           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every statement is parameterized with positional placeholders; values
//! never land in SQL text. Per-call statement and result-set handles are
//! scoped to the operation and released on every exit path, error paths
//! included (sqlx ties them to the borrowed pool connection).

use std::time::Duration;

use sqlx::SqlitePool;
use tokio::time;
use tracing::debug;

use async_trait::async_trait;

use crate::error::{DbError, DbResult};
use crate::repository::ProductRepository;
use stockroom_core::{NewProduct, Product, ProductFullData};

// Column list matches the field order of `Product`; the `type` column
// decodes into the `category` field.
const GET_ONE_PRODUCT: &str = "SELECT id, name, type, count, price FROM products WHERE id = ?1";

const GET_ALL_PRODUCTS: &str = "SELECT id, name, type, count, price FROM products";

const GET_FULL_DATA: &str = "SELECT p.id, p.name, p.type, p.count, p.price, \
     w.name AS warehouse, w.address AS warehouse_address \
     FROM products p \
     INNER JOIN warehouses w ON p.id_warehouse = w.id \
     WHERE p.id = ?1";

const STORE_PRODUCT: &str =
    "INSERT INTO products (name, type, count, price) VALUES (?1, ?2, ?3, ?4)";

const UPDATE_PRODUCT: &str =
    "UPDATE products SET name = ?1, type = ?2, count = ?3, price = ?4 WHERE id = ?5";

const UPDATE_PRODUCT_NAME: &str =
    "UPDATE products SET name = ?1 WHERE id = ?2 RETURNING id, name, type, count, price";

const DELETE_PRODUCT: &str = "DELETE FROM products WHERE id = ?1";

/// SQLite implementation of the [`ProductRepository`] trait.
///
/// Holds one clone of the shared connection pool, injected at
/// construction. The pool is safe for concurrent use; the repository
/// adds no locking of its own.
///
/// ## Usage
/// ```rust,ignore
/// let repo = SqliteProductRepository::new(pool);
/// let product = repo.get_one(1).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    /// Creates a new SqliteProductRepository over a shared pool.
    pub fn new(pool: SqlitePool) -> Self {
        SqliteProductRepository { pool }
    }

    /// Counts total products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn get_one(&self, id: i64) -> DbResult<Option<Product>> {
        debug!(id, "Fetching product");

        let product = sqlx::query_as::<_, Product>(GET_ONE_PRODUCT)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    async fn get_one_with_timeout(&self, id: i64, timeout: Duration) -> DbResult<Option<Product>> {
        debug!(id, ?timeout, "Fetching product with deadline");

        // An already-expired deadline fails without issuing the query,
        // mirroring how a canceled context is checked before dispatch.
        if timeout.is_zero() {
            return Err(DbError::Canceled(timeout));
        }

        match time::timeout(timeout, self.get_one(id)).await {
            Ok(result) => result,
            Err(_elapsed) => Err(DbError::Canceled(timeout)),
        }
    }

    async fn get_all(&self) -> DbResult<Vec<Product>> {
        // No ORDER BY: rows come back in the engine's natural order and
        // callers must not assume one.
        let products = sqlx::query_as::<_, Product>(GET_ALL_PRODUCTS)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Fetched all products");
        Ok(products)
    }

    async fn get_full_data(&self, id: i64) -> DbResult<Option<ProductFullData>> {
        debug!(id, "Fetching product with warehouse data");

        let full_data = sqlx::query_as::<_, ProductFullData>(GET_FULL_DATA)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(full_data)
    }

    async fn store(&self, product: NewProduct) -> DbResult<Product> {
        debug!(name = %product.name, category = %product.category, "Inserting product");

        let result = sqlx::query(STORE_PRODUCT)
            .bind(&product.name)
            .bind(&product.category)
            .bind(product.count)
            .bind(product.price)
            .execute(&self.pool)
            .await?;

        // The engine assigns the identity; read it back into the record
        let id = result.last_insert_rowid();

        Ok(product.into_product(id))
    }

    async fn update(&self, product: &Product) -> DbResult<Product> {
        debug!(id = product.id, "Updating product");

        // Zero rows affected is a successful no-op, not an error; the
        // row is not re-read to confirm the write.
        sqlx::query(UPDATE_PRODUCT)
            .bind(&product.name)
            .bind(&product.category)
            .bind(product.count)
            .bind(product.price)
            .bind(product.id)
            .execute(&self.pool)
            .await?;

        Ok(product.clone())
    }

    async fn update_name(&self, id: i64, name: &str) -> DbResult<Option<Product>> {
        debug!(id, name = %name, "Updating product name");

        // RETURNING hands back the updated row in the same round trip;
        // no row means no such identity.
        let product = sqlx::query_as::<_, Product>(UPDATE_PRODUCT_NAME)
            .bind(name)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting product");

        // Idempotent: zero rows matched is still a success
        sqlx::query(DELETE_PRODUCT)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn sample_product() -> NewProduct {
        NewProduct {
            name: "batata".to_string(),
            category: "vegetais".to_string(),
            count: 20,
            price: 3.99,
        }
    }

    #[tokio::test]
    async fn test_store_assigns_identity_and_preserves_fields() {
        let db = test_db().await;
        let repo = db.products();

        let stored = repo.store(sample_product()).await.unwrap();

        assert!(stored.id > 0);
        assert_eq!(stored.name, "batata");
        assert_eq!(stored.category, "vegetais");
        assert_eq!(stored.count, 20);
        assert_eq!(stored.price, 3.99);
    }

    #[tokio::test]
    async fn test_store_then_get_one_round_trip() {
        let db = test_db().await;
        let repo = db.products();

        let stored = repo.store(sample_product()).await.unwrap();
        let fetched = repo.get_one(stored.id).await.unwrap();

        assert_eq!(fetched, Some(stored));
    }

    #[tokio::test]
    async fn test_get_one_missing_returns_none() {
        let db = test_db().await;
        let repo = db.products();

        // Store exactly one product; its id will be 1
        let stored = repo.store(sample_product()).await.unwrap();
        assert_eq!(stored.id, 1);

        assert_eq!(repo.get_one(2).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_all_empty_table() {
        let db = test_db().await;

        let products = db.products().get_all().await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_get_all_returns_every_row() {
        let db = test_db().await;
        let repo = db.products();

        let mut stored = Vec::new();
        for name in ["batata", "cenoura", "alface"] {
            let new = NewProduct {
                name: name.to_string(),
                ..sample_product()
            };
            stored.push(repo.store(new).await.unwrap());
        }

        let products = repo.get_all().await.unwrap();
        assert_eq!(products.len(), 3);
        // No order assumption: just membership
        for product in stored {
            assert!(products.contains(&product));
        }
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let db = test_db().await;
        let repo = db.products();

        let stored = repo.store(sample_product()).await.unwrap();
        let changed = Product {
            name: "batata doce".to_string(),
            category: "legumes".to_string(),
            count: 5,
            price: 4.50,
            ..stored
        };

        // The input comes back unchanged
        let returned = repo.update(&changed).await.unwrap();
        assert_eq!(returned, changed);

        // And the write is visible on re-read
        let fetched = repo.get_one(stored.id).await.unwrap();
        assert_eq!(fetched, Some(changed));
    }

    #[tokio::test]
    async fn test_update_missing_identity_is_noop_success() {
        let db = test_db().await;
        let repo = db.products();

        let phantom = sample_product().into_product(999);
        let returned = repo.update(&phantom).await.unwrap();
        assert_eq!(returned, phantom);

        // Nothing was created by the no-op
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_name_touches_only_the_name() {
        let db = test_db().await;
        let repo = db.products();

        let stored = repo.store(sample_product()).await.unwrap();
        let updated = repo
            .update_name(stored.id, "batata inglesa")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.name, "batata inglesa");
        assert_eq!(updated.category, stored.category);
        assert_eq!(updated.count, stored.count);
        assert_eq!(updated.price, stored.price);

        let fetched = repo.get_one(stored.id).await.unwrap();
        assert_eq!(fetched, Some(updated));
    }

    #[tokio::test]
    async fn test_update_name_missing_returns_none() {
        let db = test_db().await;

        let updated = db.products().update_name(42, "fantasma").await.unwrap();
        assert_eq!(updated, None);
    }

    #[tokio::test]
    async fn test_delete_removes_the_row() {
        let db = test_db().await;
        let repo = db.products();

        let stored = repo.store(sample_product()).await.unwrap();
        repo.delete(stored.id).await.unwrap();

        assert_eq!(repo.get_one(stored.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_missing_identity_is_idempotent() {
        let db = test_db().await;
        let repo = db.products();

        // Never stored: still a success
        repo.delete(7).await.unwrap();

        // Deleting twice is also a success
        let stored = repo.store(sample_product()).await.unwrap();
        repo.delete(stored.id).await.unwrap();
        repo.delete(stored.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_get_one_with_expired_deadline_is_canceled() {
        let db = test_db().await;
        let repo = db.products();

        let stored = repo.store(sample_product()).await.unwrap();

        let err = repo
            .get_one_with_timeout(stored.id, Duration::ZERO)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Canceled(_)));
    }

    #[tokio::test]
    async fn test_get_one_with_live_deadline_returns_row() {
        let db = test_db().await;
        let repo = db.products();

        let stored = repo.store(sample_product()).await.unwrap();
        let fetched = repo
            .get_one_with_timeout(stored.id, Duration::from_secs(5))
            .await
            .unwrap();

        assert_eq!(fetched, Some(stored));
    }

    #[tokio::test]
    async fn test_get_full_data_joins_owning_warehouse() {
        let db = test_db().await;
        let repo = db.products();

        sqlx::query("INSERT INTO warehouses (name, address) VALUES (?1, ?2)")
            .bind("central")
            .bind("rua principal 100")
            .execute(db.pool())
            .await
            .unwrap();

        let stored = repo.store(sample_product()).await.unwrap();
        sqlx::query("UPDATE products SET id_warehouse = ?1 WHERE id = ?2")
            .bind(1_i64)
            .bind(stored.id)
            .execute(db.pool())
            .await
            .unwrap();

        let full = repo.get_full_data(stored.id).await.unwrap().unwrap();
        assert_eq!(full.id, stored.id);
        assert_eq!(full.name, stored.name);
        assert_eq!(full.category, stored.category);
        assert_eq!(full.count, stored.count);
        assert_eq!(full.price, stored.price);
        assert_eq!(full.warehouse, "central");
        assert_eq!(full.warehouse_address, "rua principal 100");
    }

    #[tokio::test]
    async fn test_get_full_data_unassigned_product_is_none() {
        let db = test_db().await;
        let repo = db.products();

        // No warehouse assigned: the inner join filters the row out
        let stored = repo.store(sample_product()).await.unwrap();
        assert_eq!(repo.get_full_data(stored.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_null_decode_maps_to_scan_error() {
        let db = test_db().await;
        let repo = db.products();

        let stored = repo.store(sample_product()).await.unwrap();

        // A NULL in a non-nullable position of the result shape cannot
        // decode into the record; the failure must categorize as a scan
        // error, not a query error
        let err = sqlx::query_as::<_, Product>(
            "SELECT id, NULL AS name, type, count, price FROM products WHERE id = ?1",
        )
        .bind(stored.id)
        .fetch_optional(db.pool())
        .await
        .map_err(DbError::from)
        .unwrap_err();

        assert!(matches!(err, DbError::ScanFailed(_)));
    }

    #[tokio::test]
    async fn test_count_diagnostics() {
        let db = test_db().await;
        let repo = db.products();

        assert_eq!(repo.count().await.unwrap(), 0);
        repo.store(sample_product()).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
