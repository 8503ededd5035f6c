use crate::{
    error::Result,
    models::{Item, ItemPage, NewItem, UpdateItem},
};
use async_trait::async_trait;
use uuid::Uuid;

/// Repository trait for item persistence and retrieval operations
///
/// This trait defines the interface for all item data operations.
/// Implementations must be thread-safe and support concurrent access.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Count all items
    ///
    /// # Returns
    /// * `Ok(i64)` - Total number of stored items, used for pagination metadata
    /// * `Err(ItemError::Database)` - If the database operation fails
    async fn count(&self) -> Result<i64>;

    /// List items for one pagination window
    ///
    /// Returns up to `page.page_size` items ordered newest-first
    /// (`created_at` descending, id as tie-breaker).
    ///
    /// # Arguments
    /// * `page` - The clamped pagination window to return
    ///
    /// # Returns
    /// * `Ok(Vec<Item>)` - The matching items (may be empty)
    /// * `Err(ItemError::Database)` - If the database operation fails
    async fn list(&self, page: ItemPage) -> Result<Vec<Item>>;

    /// Get an item by its id
    ///
    /// # Arguments
    /// * `id` - The item id to find
    ///
    /// # Returns
    /// * `Ok(Some(Item))` - The item if found
    /// * `Ok(None)` - If no item exists with that id
    /// * `Err(ItemError::Database)` - If the database operation fails
    async fn get(&self, id: Uuid) -> Result<Option<Item>>;

    /// Create a new item
    ///
    /// The repository assigns a fresh UUID and the creation timestamp;
    /// `updated_at` starts empty.
    ///
    /// # Arguments
    /// * `item` - The new item data to persist
    ///
    /// # Returns
    /// * `Ok(Item)` - The created item including all server-assigned fields
    /// * `Err(ItemError::Validation)` - If the item data is invalid
    /// * `Err(ItemError::Database)` - If the database operation fails
    async fn create(&self, item: NewItem) -> Result<Item>;

    /// Apply a partial update to an existing item
    ///
    /// Only supplied fields change; `updated_at` is stamped on every
    /// successful update. The mutation is a single conditional statement,
    /// so a concurrent delete surfaces as `NotFound` rather than a lost
    /// write. An empty update returns the current row unchanged.
    ///
    /// # Arguments
    /// * `id` - The item id to update
    /// * `updates` - The fields to change
    ///
    /// # Returns
    /// * `Ok(Item)` - The updated item
    /// * `Err(ItemError::NotFound)` - If the item doesn't exist
    /// * `Err(ItemError::Validation)` - If the update data is invalid
    /// * `Err(ItemError::Database)` - If the database operation fails
    async fn update(&self, id: Uuid, updates: UpdateItem) -> Result<Item>;

    /// Delete an item permanently
    ///
    /// A single conditional statement; zero affected rows maps to
    /// `NotFound`. There is no soft-delete.
    ///
    /// # Arguments
    /// * `id` - The item id to delete
    ///
    /// # Returns
    /// * `Ok(())` - The item was removed
    /// * `Err(ItemError::NotFound)` - If the item doesn't exist
    /// * `Err(ItemError::Database)` - If the database operation fails
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Get repository health status for monitoring
    ///
    /// # Returns
    /// * `Ok(())` - Repository is healthy and connected
    /// * `Err(ItemError::Database)` - Repository is unhealthy
    async fn health_check(&self) -> Result<()>;
}
