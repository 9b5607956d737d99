use std::collections::{HashMap, HashSet};
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use storefront_core::{ProductId, RepositoryError, RepositoryResult};
use storefront_products::{NewProduct, Product, ProductQuantity, ProductsRepository};

/// In-memory product catalog for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryProductsRepository {
    inner: RwLock<HashMap<ProductId, Product>>,
    unavailable: AtomicBool,
    writes_unavailable: AtomicBool,
}

impl InMemoryProductsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a product under its own id.
    pub fn insert(&self, product: Product) {
        match self.inner.write() {
            Ok(mut map) => {
                map.insert(product.id.clone(), product);
            }
            Err(_) => tracing::warn!(id = %product.id, "product dropped: lock poisoned"),
        }
    }

    pub fn get(&self, id: &ProductId) -> Option<Product> {
        self.inner.read().ok()?.get(id).cloned()
    }

    /// Make every subsequent call fail with `RepositoryError::Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Make subsequent writes fail while reads keep working.
    pub fn set_writes_unavailable(&self, unavailable: bool) {
        self.writes_unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> RepositoryResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::unavailable("product catalog is offline"));
        }
        Ok(())
    }

    fn ensure_writable(&self) -> RepositoryResult<()> {
        self.ensure_available()?;
        if self.writes_unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::unavailable("product catalog is read-only"));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductsRepository for InMemoryProductsRepository {
    /// Entries come back in request order, once per distinct id.
    async fn find_all_by_id(&self, ids: &[ProductId]) -> RepositoryResult<Vec<Product>> {
        self.ensure_available()?;
        let map = self
            .inner
            .read()
            .map_err(|_| RepositoryError::unavailable("lock poisoned"))?;

        let mut seen = HashSet::new();
        Ok(ids
            .iter()
            .filter(|id| seen.insert(*id))
            .filter_map(|id| map.get(id).cloned())
            .collect())
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Product>> {
        self.ensure_available()?;
        let map = self
            .inner
            .read()
            .map_err(|_| RepositoryError::unavailable("lock poisoned"))?;

        Ok(map.values().find(|p| p.name == name).cloned())
    }

    async fn create(&self, product: NewProduct) -> RepositoryResult<Product> {
        self.ensure_writable()?;
        let created = Product {
            id: ProductId::generate(),
            name: product.name,
            price: product.price,
            quantity: product.quantity,
        };

        let mut map = self
            .inner
            .write()
            .map_err(|_| RepositoryError::unavailable("lock poisoned"))?;
        map.insert(created.id.clone(), created.clone());
        Ok(created)
    }

    /// All-or-nothing: stock is only written if every decrement fits.
    async fn update_quantity(&self, items: &[ProductQuantity]) -> RepositoryResult<()> {
        self.ensure_writable()?;
        let mut map = self
            .inner
            .write()
            .map_err(|_| RepositoryError::unavailable("lock poisoned"))?;

        let mut remaining: HashMap<&ProductId, u64> = HashMap::new();
        for item in items {
            let current = match remaining.get(&item.id) {
                Some(left) => *left,
                None => map
                    .get(&item.id)
                    .map(|p| p.quantity)
                    .ok_or_else(|| RepositoryError::not_found(format!("product {}", item.id)))?,
            };
            let left = current.checked_sub(item.quantity).ok_or_else(|| {
                RepositoryError::conflict(format!(
                    "product {} has {} in stock, cannot remove {}",
                    item.id, current, item.quantity
                ))
            })?;
            remaining.insert(&item.id, left);
        }

        for (id, left) in remaining {
            if let Some(product) = map.get_mut(id) {
                product.quantity = left;
            }
        }
        tracing::debug!("stock updated for {} product(s)", items.len());
        Ok(())
    }
}
