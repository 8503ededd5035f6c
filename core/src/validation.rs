use crate::{
    error::{ItemError, Result},
    models::{NewItem, UpdateItem},
};

/// Minimum title length in characters
pub const TITLE_MIN_LEN: usize = 1;
/// Maximum title length in characters
pub const TITLE_MAX_LEN: usize = 255;

/// Validation utilities for item operations.
///
/// The HTTP layer performs its own schema validation with field-level
/// reporting; the repository runs these checks again before every write.
pub struct ItemValidator;

impl ItemValidator {
    /// Validate an item title
    ///
    /// Titles must be 1-255 characters long. Length is counted in
    /// characters, not bytes.
    ///
    /// # Arguments
    /// * `title` - The title to validate
    ///
    /// # Returns
    /// * `Ok(())` - If the title is valid
    /// * `Err(ItemError::Validation)` - If the title is empty or too long
    pub fn validate_title(title: &str) -> Result<()> {
        if title.is_empty() {
            return Err(ItemError::empty_field("title"));
        }

        if title.chars().count() > TITLE_MAX_LEN {
            return Err(ItemError::field_too_long("title", TITLE_MAX_LEN));
        }

        Ok(())
    }

    /// Validate a creation payload
    pub fn validate_new_item(item: &NewItem) -> Result<()> {
        Self::validate_title(&item.title)
    }

    /// Validate a partial-update payload
    ///
    /// Only supplied fields are checked; an empty update is valid.
    pub fn validate_update(updates: &UpdateItem) -> Result<()> {
        if let Some(title) = &updates.title {
            Self::validate_title(title)?;
        }
        Ok(())
    }
}
