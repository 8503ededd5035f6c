//! Request and response shapes for the item resource
//!
//! Each schema is a pure data-constraint contract: deserialization accepts
//! the wire shape (ignoring unknown fields), and `validate()` turns it into
//! the corresponding domain DTO or a list of field violations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use todo_core::{
    models::{Item, ItemPage, NewItem, UpdateItem},
    validation::TITLE_MAX_LEN,
};
use uuid::Uuid;

use crate::error::FieldViolation;

/// Deserialize helper distinguishing an explicit `null` from an omitted
/// field: omission leaves the outer option `None`, `null` yields
/// `Some(None)`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn check_title(title: &str) -> Result<(), FieldViolation> {
    if title.is_empty() {
        return Err(FieldViolation::new(
            "title",
            "title must contain at least 1 character",
        ));
    }
    if title.chars().count() > TITLE_MAX_LEN {
        return Err(FieldViolation::new(
            "title",
            format!("title must be at most {TITLE_MAX_LEN} characters"),
        ));
    }
    Ok(())
}

/// Creation input (client to API)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItemRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_completed: Option<bool>,
}

impl CreateItemRequest {
    /// Check field constraints, producing the domain DTO or the violations
    pub fn validate(self) -> Result<NewItem, Vec<FieldViolation>> {
        let title = match self.title {
            Some(title) => title,
            None => return Err(vec![FieldViolation::new("title", "field required")]),
        };

        if let Err(violation) = check_title(&title) {
            return Err(vec![violation]);
        }

        Ok(NewItem {
            title,
            description: self.description,
            is_completed: self.is_completed.unwrap_or(false),
        })
    }
}

/// Partial-update input (client to API)
///
/// All fields optional. `description` distinguishes "omitted" from an
/// explicit `null`; `title` cannot be cleared, so `null` and omission
/// both leave it untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub is_completed: Option<bool>,
}

impl UpdateItemRequest {
    /// Check field constraints, producing the domain DTO or the violations
    pub fn validate(self) -> Result<UpdateItem, Vec<FieldViolation>> {
        if let Some(title) = &self.title {
            if let Err(violation) = check_title(title) {
                return Err(vec![violation]);
            }
        }

        Ok(UpdateItem {
            title: self.title,
            description: self.description,
            is_completed: self.is_completed,
        })
    }
}

/// Response output (API to client), constructed directly from the stored
/// record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            is_completed: item.is_completed,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// Wrapper response for paginated item listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemListResponse {
    /// Total items in the store
    pub total: i64,
    /// Number of items in this page
    pub count: usize,
    /// 1-based page number after clamping
    pub page: u32,
    /// Page size after clamping
    pub page_size: u32,
    pub data: Vec<ItemResponse>,
}

/// Pagination query parameters for the list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    ItemPage::DEFAULT_PAGE_SIZE as i64
}

impl ListQuery {
    /// The clamped pagination window for this request
    pub fn window(&self) -> ItemPage {
        ItemPage::clamped(self.page, self.page_size)
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}
