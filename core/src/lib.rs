//! Todo Core Library
//!
//! This crate provides the foundational domain models, error taxonomy, and
//! trait interfaces for the Todo API. All other crates depend on the types
//! and interfaces defined here.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`models`] - Core domain models (Item, NewItem, UpdateItem, ItemPage)
//! - [`error`] - Error types and result handling
//! - [`repository`] - Repository trait for data persistence
//! - [`validation`] - Field constraint validation utilities
//!
//! # Example
//!
//! ```rust
//! use todo_core::{models::NewItem, validation::ItemValidator};
//!
//! let new_item = NewItem::new("Buy groceries");
//!
//! // Validate the item before creation
//! ItemValidator::validate_new_item(&new_item).unwrap();
//! ```

pub mod error;
pub mod models;
pub mod repository;
pub mod validation;

// Re-export commonly used types at the crate root for convenience
pub use error::{ItemError, Result};
pub use models::{Item, ItemPage, NewItem, UpdateItem};
pub use repository::ItemRepository;
pub use validation::{ItemValidator, TITLE_MAX_LEN, TITLE_MIN_LEN};
