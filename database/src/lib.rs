//! Database crate for the Todo API
//!
//! This crate provides the SQLite implementation of the ItemRepository
//! trait, offering item persistence with connection pooling, embedded
//! migrations, and error mapping into the core taxonomy.
//!
//! # Features
//!
//! - SQLite database support with WAL mode for better concurrency
//! - Database migrations with proper schema management
//! - Connection pooling with pre-acquire health checks and idle recycling
//! - Comprehensive error handling and mapping
//! - In-memory database support for tests
//!
//! # Usage
//!
//! ```rust
//! use database::SqliteItemRepository;
//! use todo_core::repository::ItemRepository;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create repository (in-memory, already migrated)
//!     let repo = SqliteItemRepository::in_memory().await?;
//!
//!     // Repository is ready to use
//!     repo.health_check().await?;
//!
//!     Ok(())
//! }
//! ```

mod common;
mod sqlite;

pub use sqlite::{PoolSettings, SqliteItemRepository};

// Re-export commonly used types from todo-core for convenience
pub use todo_core::{
    error::{ItemError, Result},
    models::{Item, ItemPage, NewItem, UpdateItem},
    repository::ItemRepository,
};
