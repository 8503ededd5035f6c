use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row};
use todo_core::{
    error::{ItemError, Result},
    models::Item,
};
use uuid::Uuid;

/// Column list shared by every statement that returns full rows
pub const ITEM_COLUMNS: &str = "id, title, description, is_completed, created_at, updated_at";

/// Convert a SQLite row to an Item model
///
/// Ids are stored as hyphenated TEXT and converted explicitly; a value that
/// does not parse as a UUID means the table was written by something else
/// and is reported as a database error.
pub fn row_to_item(row: &SqliteRow) -> Result<Item> {
    let id_text: String = row.get("id");
    let id = Uuid::parse_str(&id_text)
        .map_err(|e| ItemError::Database(format!("Invalid item id '{id_text}' in database: {e}")))?;

    let created_at: DateTime<Utc> = row.get("created_at");
    let updated_at: Option<DateTime<Utc>> = row.get("updated_at");

    Ok(Item {
        id,
        title: row.get("title"),
        description: row.get("description"),
        is_completed: row.get("is_completed"),
        created_at,
        updated_at,
    })
}

/// Convert a SQLx error to an ItemError
pub fn sqlx_error_to_item_error(err: sqlx::Error) -> ItemError {
    match &err {
        sqlx::Error::Database(db_err) => {
            ItemError::Database(format!("Database constraint error: {}", db_err.message()))
        }
        sqlx::Error::RowNotFound => {
            // Absence is handled at the application level, never via this error
            ItemError::Database("Unexpected RowNotFound error".to_string())
        }
        sqlx::Error::PoolTimedOut => ItemError::Database("Connection pool timeout".to_string()),
        sqlx::Error::Io(io_err) => ItemError::Database(format!("Database I/O error: {io_err}")),
        _ => ItemError::Database(format!("Database operation failed: {err}")),
    }
}
