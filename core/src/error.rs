use thiserror::Error;
use uuid::Uuid;

/// Result type alias for item operations
pub type Result<T> = std::result::Result<T, ItemError>;

/// Error types for the Todo API.
///
/// These errors cover all failure modes of item operations, from validation
/// failures to database errors. Each error type maps to the HTTP status code
/// surfaced by the API layer.
///
/// # Examples
///
/// ```rust
/// use todo_core::error::ItemError;
/// use uuid::Uuid;
///
/// let not_found = ItemError::not_found_id(Uuid::nil());
/// assert!(not_found.is_not_found());
/// assert_eq!(not_found.status_code(), 404);
///
/// let empty = ItemError::empty_field("title");
/// assert!(empty.is_validation());
/// assert_eq!(empty.status_code(), 422);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    /// Item not found by the given identifier
    #[error("Item not found: {0}")]
    NotFound(String),

    /// A field value failed its constraints
    #[error("Validation error on '{field}': {message}")]
    Validation { field: String, message: String },

    /// Database operation error
    #[error("Database error: {0}")]
    Database(String),

    /// Internal system error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ItemError {
    /// Create a not found error for an item id
    pub fn not_found_id(id: Uuid) -> Self {
        Self::NotFound(format!("Item with id {id} not found"))
    }

    /// Create a validation error for an empty field
    pub fn empty_field(field: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: format!("Field '{field}' cannot be empty"),
        }
    }

    /// Create a validation error for a field exceeding its length bound
    pub fn field_too_long(field: &str, max: usize) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: format!("Field '{field}' must be at most {max} characters"),
        }
    }

    /// Check if this error indicates a not found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, ItemError::NotFound(_))
    }

    /// Check if this error indicates a validation problem
    pub fn is_validation(&self) -> bool {
        matches!(self, ItemError::Validation { .. })
    }

    /// Check if this error indicates a database problem
    pub fn is_database(&self) -> bool {
        matches!(self, ItemError::Database(_))
    }

    /// Convert to the HTTP status code surfaced by the API layer
    pub fn status_code(&self) -> u16 {
        match self {
            ItemError::NotFound(_) => 404,
            ItemError::Validation { .. } => 422,
            ItemError::Database(_) => 500,
            ItemError::Internal(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let id = Uuid::new_v4();
        let error = ItemError::not_found_id(id);
        assert_eq!(error, ItemError::NotFound(format!("Item with id {id} not found")));
        assert!(error.is_not_found());
        assert_eq!(error.status_code(), 404);

        let error = ItemError::empty_field("title");
        assert!(error.is_validation());
        assert_eq!(error.status_code(), 422);

        let error = ItemError::field_too_long("title", 255);
        assert!(error.is_validation());
        assert_eq!(
            format!("{error}"),
            "Validation error on 'title': Field 'title' must be at most 255 characters"
        );
    }

    #[test]
    fn test_error_display() {
        let error = ItemError::NotFound("Item not found".to_string());
        assert_eq!(format!("{error}"), "Item not found: Item not found");

        let error = ItemError::Database("connection lost".to_string());
        assert_eq!(format!("{error}"), "Database error: connection lost");
    }

    #[test]
    fn test_error_predicates() {
        assert!(ItemError::NotFound("test".to_string()).is_not_found());
        assert!(!ItemError::Database("test".to_string()).is_not_found());

        assert!(ItemError::empty_field("title").is_validation());
        assert!(!ItemError::Database("test".to_string()).is_validation());

        assert!(ItemError::Database("test".to_string()).is_database());
        assert!(!ItemError::Internal("test".to_string()).is_database());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ItemError::NotFound("x".to_string()).status_code(), 404);
        assert_eq!(ItemError::empty_field("title").status_code(), 422);
        assert_eq!(ItemError::Database("x".to_string()).status_code(), 500);
        assert_eq!(ItemError::Internal("x".to_string()).status_code(), 500);
    }
}
