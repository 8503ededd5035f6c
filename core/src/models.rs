use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Core item representation in the Todo API.
///
/// An item is a single task tracked from creation through partial updates to
/// deletion. The id is a UUID v4 assigned by the server at creation time and
/// never reassigned; `created_at` is set once at insertion, while
/// `updated_at` stays empty until the first mutation.
///
/// # Examples
///
/// ```rust
/// use todo_core::models::Item;
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let item = Item {
///     id: Uuid::new_v4(),
///     title: "Buy groceries".to_string(),
///     description: Some("Milk, Bread, Cheese".to_string()),
///     is_completed: false,
///     created_at: Utc::now(),
///     updated_at: None,
/// };
///
/// assert!(item.updated_at.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Primary key, UUID v4, immutable once assigned
    pub id: Uuid,
    /// Short title, 1-255 characters, never empty
    pub title: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Completion flag, defaults to false
    pub is_completed: bool,
    /// Server-assigned creation timestamp
    pub created_at: DateTime<Utc>,
    /// Stamped on every mutation, empty until the first update
    pub updated_at: Option<DateTime<Utc>>,
}

/// Data transfer object for creating new items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewItem {
    /// Short title, 1-255 characters
    pub title: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Completion flag
    #[serde(default)]
    pub is_completed: bool,
}

impl NewItem {
    /// Create a NewItem with only a title set
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            is_completed: false,
        }
    }
}

/// Data transfer object for partially updating existing items.
///
/// The nullable `description` column uses a double option so that a field
/// omitted from the request (`None`) stays untouched while an explicit null
/// (`Some(None)`) clears the stored value. `title` and `is_completed` are
/// not nullable in storage, so a single option is enough for them.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UpdateItem {
    /// Optional new title
    pub title: Option<String>,
    /// Optional description change: `Some(None)` clears the value
    pub description: Option<Option<String>>,
    /// Optional new completion flag
    pub is_completed: Option<bool>,
}

impl UpdateItem {
    /// True when no field was supplied at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.is_completed.is_none()
    }
}

/// Pagination window for item listings.
///
/// Out-of-range values are clamped instead of rejected: `page` is at least 1
/// and `page_size` lies in `1..=MAX_PAGE_SIZE`. The row offset is
/// `(page - 1) * page_size`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemPage {
    /// 1-based page number
    pub page: u32,
    /// Maximum number of rows returned for this page
    pub page_size: u32,
}

impl ItemPage {
    /// Page size used when the request does not specify one
    pub const DEFAULT_PAGE_SIZE: u32 = 10;
    /// Upper bound on rows per page
    pub const MAX_PAGE_SIZE: u32 = 100;

    /// Build a window from untrusted inputs, clamping out-of-range values
    pub fn clamped(page: i64, page_size: i64) -> Self {
        Self {
            page: page.clamp(1, i64::from(u32::MAX)) as u32,
            page_size: page_size.clamp(1, i64::from(Self::MAX_PAGE_SIZE)) as u32,
        }
    }

    /// Number of rows skipped before this page starts
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.page_size)
    }

    /// Maximum number of rows returned
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

impl Default for ItemPage {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_item_is_empty() {
        assert!(UpdateItem::default().is_empty());

        let update = UpdateItem {
            is_completed: Some(true),
            ..Default::default()
        };
        assert!(!update.is_empty());

        // An explicit clear counts as a supplied field
        let update = UpdateItem {
            description: Some(None),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_page_clamping() {
        let page = ItemPage::clamped(0, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 1);

        let page = ItemPage::clamped(-7, -1);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 1);

        let page = ItemPage::clamped(3, 1_000_000);
        assert_eq!(page.page, 3);
        assert_eq!(page.page_size, ItemPage::MAX_PAGE_SIZE);

        let page = ItemPage::clamped(2, 25);
        assert_eq!(page.page, 2);
        assert_eq!(page.page_size, 25);
    }

    #[test]
    fn test_page_offset_and_limit() {
        let page = ItemPage::clamped(1, 10);
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 10);

        let page = ItemPage::clamped(3, 20);
        assert_eq!(page.offset(), 40);
        assert_eq!(page.limit(), 20);
    }

    #[test]
    fn test_default_page() {
        let page = ItemPage::default();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, ItemPage::DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_new_item_defaults() {
        let item = NewItem::new("Buy milk");
        assert_eq!(item.title, "Buy milk");
        assert!(item.description.is_none());
        assert!(!item.is_completed);
    }
}
