use async_trait::async_trait;
use shelf_types::{Item, ItemDraft, ItemId, ItemPatch};

use crate::error::StoreResult;

/// Persistent collection of items with single-document CRUD primitives.
///
/// All implementations must satisfy these invariants:
/// - Every operation is a single atomic step against one document; no
///   operation may partially apply.
/// - Domain constraints (trimmed non-empty name, non-negative price) are
///   enforced here at write time and surfaced as
///   [`StoreError::Constraint`](crate::StoreError::Constraint). Request-shape
///   checks are the caller's job.
/// - Ids are generated by the store at insert and never reused after
///   deletion.
/// - `find`, `replace`, and `merge` return `Ok(None)` for a well-formed id
///   with no matching document; `delete` returns `Ok(false)`. Missing
///   documents are never an `Err`.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Check backend connectivity. Called once at startup; a failing ping
    /// means the process should not accept traffic.
    async fn ping(&self) -> StoreResult<()>;

    /// Insert a new item, assigning a fresh id and equal
    /// `created_at`/`updated_at` timestamps.
    async fn insert(&self, draft: ItemDraft) -> StoreResult<Item>;

    /// All items, in insertion order.
    async fn list(&self) -> StoreResult<Vec<Item>>;

    /// Look up a single item by id.
    async fn find(&self, id: &ItemId) -> StoreResult<Option<Item>>;

    /// Replace every mutable field of the item, refreshing `updated_at`
    /// and preserving `created_at`.
    async fn replace(&self, id: &ItemId, draft: ItemDraft) -> StoreResult<Option<Item>>;

    /// Merge only the fields present in the patch, refreshing `updated_at`.
    async fn merge(&self, id: &ItemId, patch: ItemPatch) -> StoreResult<Option<Item>>;

    /// Delete an item permanently. Returns `true` if the item existed;
    /// deleting an absent id is a no-op, never an error.
    async fn delete(&self, id: &ItemId) -> StoreResult<bool>;
}
