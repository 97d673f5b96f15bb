use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use shelf_types::{Item, ItemDraft, ItemId, ItemPatch};

use crate::error::StoreResult;
use crate::traits::ItemStore;

/// In-memory item store.
///
/// Intended for tests and single-process deployments. Items are held in a
/// `Vec` behind a `RwLock`, so listing returns insertion order and each
/// call is atomic with respect to every other call. Items are cloned on
/// the way in and out.
pub struct MemoryItemStore {
    items: RwLock<Vec<Item>>,
}

impl MemoryItemStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.items.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.read().expect("lock poisoned").is_empty()
    }

    /// Remove all items.
    pub fn clear(&self) {
        self.items.write().expect("lock poisoned").clear();
    }
}

impl Default for MemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn insert(&self, draft: ItemDraft) -> StoreResult<Item> {
        let draft = draft.validated()?;
        let now = Utc::now();
        let item = Item {
            id: ItemId::generate(),
            name: draft.name,
            price: draft.price,
            created_at: now,
            updated_at: now,
        };
        let mut items = self.items.write().expect("lock poisoned");
        items.push(item.clone());
        tracing::debug!(id = %item.id, "item inserted");
        Ok(item)
    }

    async fn list(&self) -> StoreResult<Vec<Item>> {
        let items = self.items.read().expect("lock poisoned");
        Ok(items.clone())
    }

    async fn find(&self, id: &ItemId) -> StoreResult<Option<Item>> {
        let items = self.items.read().expect("lock poisoned");
        Ok(items.iter().find(|item| item.id == *id).cloned())
    }

    async fn replace(&self, id: &ItemId, draft: ItemDraft) -> StoreResult<Option<Item>> {
        let draft = draft.validated()?;
        let mut items = self.items.write().expect("lock poisoned");
        match items.iter_mut().find(|item| item.id == *id) {
            Some(item) => {
                item.name = draft.name;
                item.price = draft.price;
                item.updated_at = Utc::now();
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }

    async fn merge(&self, id: &ItemId, patch: ItemPatch) -> StoreResult<Option<Item>> {
        let patch = patch.validated()?;
        let mut items = self.items.write().expect("lock poisoned");
        match items.iter_mut().find(|item| item.id == *id) {
            Some(item) => {
                if let Some(name) = patch.name {
                    item.name = name;
                }
                if let Some(price) = patch.price {
                    item.price = price;
                }
                item.updated_at = Utc::now();
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &ItemId) -> StoreResult<bool> {
        let mut items = self.items.write().expect("lock poisoned");
        match items.iter().position(|item| item.id == *id) {
            Some(index) => {
                items.remove(index);
                tracing::debug!(%id, "item deleted");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl std::fmt::Debug for MemoryItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryItemStore")
            .field("item_count", &self.len())
            .finish()
    }
}
