//! # In-Memory Product Repository
//!
//! HashMap-backed implementation of the [`ProductRepository`] trait.
//!
//! Proves the trait supports a non-relational backend without touching
//! callers, and doubles as the test/development stand-in where a real
//! database would only slow things down. Identity assignment mimics the
//! engine contract: a monotonically increasing integer handed out on
//! store, starting at 1.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::ProductRepository;
use stockroom_core::{NewProduct, Product, ProductFullData, Warehouse};

/// Mutable state behind the repository's lock.
#[derive(Debug, Default)]
struct MemoryState {
    products: HashMap<i64, Product>,
    warehouses: HashMap<i64, Warehouse>,
    /// product id → owning warehouse id (the `id_warehouse` column)
    assignments: HashMap<i64, i64>,
    next_product_id: i64,
    next_warehouse_id: i64,
}

/// In-memory implementation of the [`ProductRepository`] trait.
///
/// Cloning shares the underlying store, matching the pool-backed
/// variant's behavior of many handles over one storage engine.
#[derive(Debug, Default, Clone)]
pub struct MemoryProductRepository {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryProductRepository {
    /// Creates an empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warehouse and returns it with its assigned identity.
    ///
    /// Not part of the repository trait: warehouses are written by an
    /// out-of-scope collaborator in production, but the enriched read
    /// needs them to exist here too.
    pub async fn add_warehouse(&self, name: &str, address: &str) -> Warehouse {
        let mut state = self.state.write().await;

        state.next_warehouse_id += 1;
        let warehouse = Warehouse {
            id: state.next_warehouse_id,
            name: name.to_string(),
            address: address.to_string(),
        };
        state.warehouses.insert(warehouse.id, warehouse.clone());

        warehouse
    }

    /// Assigns a product to a warehouse, returning whether both exist.
    pub async fn assign_warehouse(&self, product_id: i64, warehouse_id: i64) -> bool {
        let mut state = self.state.write().await;

        if !state.products.contains_key(&product_id)
            || !state.warehouses.contains_key(&warehouse_id)
        {
            return false;
        }

        state.assignments.insert(product_id, warehouse_id);
        true
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn get_one(&self, id: i64) -> DbResult<Option<Product>> {
        let state = self.state.read().await;
        Ok(state.products.get(&id).cloned())
    }

    async fn get_one_with_timeout(&self, id: i64, timeout: Duration) -> DbResult<Option<Product>> {
        // Map lookups complete within any live deadline; only an
        // already-expired one can cancel the call.
        if timeout.is_zero() {
            return Err(DbError::Canceled(timeout));
        }

        self.get_one(id).await
    }

    async fn get_all(&self) -> DbResult<Vec<Product>> {
        let state = self.state.read().await;
        // Map iteration order stands in for the engine's natural order
        Ok(state.products.values().cloned().collect())
    }

    async fn get_full_data(&self, id: i64) -> DbResult<Option<ProductFullData>> {
        let state = self.state.read().await;

        let product = match state.products.get(&id) {
            Some(product) => product,
            None => return Ok(None),
        };

        // Inner-join semantics: unassigned products have no enriched row
        let warehouse = state
            .assignments
            .get(&id)
            .and_then(|warehouse_id| state.warehouses.get(warehouse_id));

        Ok(warehouse.map(|warehouse| ProductFullData {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            count: product.count,
            price: product.price,
            warehouse: warehouse.name.clone(),
            warehouse_address: warehouse.address.clone(),
        }))
    }

    async fn store(&self, product: NewProduct) -> DbResult<Product> {
        let mut state = self.state.write().await;

        state.next_product_id += 1;
        let stored = product.into_product(state.next_product_id);
        state.products.insert(stored.id, stored.clone());

        debug!(id = stored.id, "Stored product in memory");
        Ok(stored)
    }

    async fn update(&self, product: &Product) -> DbResult<Product> {
        let mut state = self.state.write().await;

        // Zero rows affected is a successful no-op, same as the SQL
        // variant: only overwrite when the identity exists
        if state.products.contains_key(&product.id) {
            state.products.insert(product.id, product.clone());
        }

        Ok(product.clone())
    }

    async fn update_name(&self, id: i64, name: &str) -> DbResult<Option<Product>> {
        let mut state = self.state.write().await;

        Ok(state.products.get_mut(&id).map(|product| {
            product.name = name.to_string();
            product.clone()
        }))
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        let mut state = self.state.write().await;

        // Idempotent: removing an absent identity is still a success
        state.products.remove(&id);
        state.assignments.remove(&id);

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> NewProduct {
        NewProduct {
            name: "batata".to_string(),
            category: "vegetais".to_string(),
            count: 20,
            price: 3.99,
        }
    }

    #[tokio::test]
    async fn test_store_then_get_one_round_trip() {
        let repo = MemoryProductRepository::new();

        let stored = repo.store(sample_product()).await.unwrap();
        assert!(stored.id > 0);

        let fetched = repo.get_one(stored.id).await.unwrap();
        assert_eq!(fetched, Some(stored));
    }

    #[tokio::test]
    async fn test_get_one_missing_returns_none() {
        let repo = MemoryProductRepository::new();

        let stored = repo.store(sample_product()).await.unwrap();
        assert_eq!(stored.id, 1);
        assert_eq!(repo.get_one(2).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_all_empty_store() {
        let repo = MemoryProductRepository::new();
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_identities_are_not_reused_after_delete() {
        let repo = MemoryProductRepository::new();

        let first = repo.store(sample_product()).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.store(sample_product()).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_update_missing_identity_is_noop_success() {
        let repo = MemoryProductRepository::new();

        let phantom = sample_product().into_product(40);
        let returned = repo.update(&phantom).await.unwrap();
        assert_eq!(returned, phantom);

        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_name_touches_only_the_name() {
        let repo = MemoryProductRepository::new();

        let stored = repo.store(sample_product()).await.unwrap();
        let updated = repo
            .update_name(stored.id, "batata inglesa")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "batata inglesa");
        assert_eq!(updated.category, stored.category);
        assert_eq!(updated.count, stored.count);

        assert_eq!(repo.update_name(99, "nada").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = MemoryProductRepository::new();

        repo.delete(3).await.unwrap();

        let stored = repo.store(sample_product()).await.unwrap();
        repo.delete(stored.id).await.unwrap();
        repo.delete(stored.id).await.unwrap();
        assert_eq!(repo.get_one(stored.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_expired_deadline_is_canceled() {
        let repo = MemoryProductRepository::new();

        let err = repo
            .get_one_with_timeout(1, Duration::ZERO)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Canceled(_)));

        let fetched = repo
            .get_one_with_timeout(1, Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(fetched, None);
    }

    #[tokio::test]
    async fn test_get_full_data_requires_assignment() {
        let repo = MemoryProductRepository::new();

        let stored = repo.store(sample_product()).await.unwrap();
        assert_eq!(repo.get_full_data(stored.id).await.unwrap(), None);

        let warehouse = repo.add_warehouse("central", "rua principal 100").await;
        assert!(repo.assign_warehouse(stored.id, warehouse.id).await);

        let full = repo.get_full_data(stored.id).await.unwrap().unwrap();
        assert_eq!(full.id, stored.id);
        assert_eq!(full.warehouse, "central");
        assert_eq!(full.warehouse_address, "rua principal 100");
    }

    #[tokio::test]
    async fn test_clones_share_the_store() {
        let repo = MemoryProductRepository::new();
        let handle = repo.clone();

        let stored = repo.store(sample_product()).await.unwrap();
        assert_eq!(handle.get_one(stored.id).await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let repo: Arc<dyn ProductRepository> = Arc::new(MemoryProductRepository::new());

        let stored = repo.store(sample_product()).await.unwrap();
        assert_eq!(repo.get_one(stored.id).await.unwrap(), Some(stored));
    }
}
