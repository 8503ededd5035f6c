use crate::common::{row_to_item, sqlx_error_to_item_error, ITEM_COLUMNS};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{
    migrate::MigrateDatabase,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Row, Sqlite, SqlitePool,
};
use std::time::Duration;
use todo_core::{
    error::{ItemError, Result},
    models::{Item, ItemPage, NewItem, UpdateItem},
    repository::ItemRepository,
    validation::ItemValidator,
};
use uuid::Uuid;

/// Connection pool parameters, fixed at startup.
///
/// Connections are tested before every acquisition and idle connections are
/// recycled after `idle_timeout`, so broken connections never reach a
/// request handler.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// How long to wait for a free connection
    pub acquire_timeout: Duration,
    /// Idle lifetime before a connection is closed and replaced
    pub idle_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(1800),
        }
    }
}

/// SQLite implementation of the ItemRepository trait
///
/// Provides item persistence using SQLite with connection pooling, embedded
/// migrations, and error mapping into the core taxonomy.
#[derive(Debug, Clone)]
pub struct SqliteItemRepository {
    pool: SqlitePool,
}

impl SqliteItemRepository {
    /// Create a new SQLite repository with the given database URL
    ///
    /// # Arguments
    /// * `database_url` - SQLite database URL (file path or `:memory:`)
    /// * `settings` - Pool construction parameters
    ///
    /// # Returns
    /// * `Ok(SqliteItemRepository)` - Successfully connected repository
    /// * `Err(ItemError::Database)` - If connection fails
    ///
    /// # Examples
    /// ```rust,no_run
    /// use database::{PoolSettings, SqliteItemRepository};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let repo =
    ///     SqliteItemRepository::new("sqlite:///tmp/items.db", PoolSettings::default()).await?;
    /// repo.migrate().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new(database_url: &str, settings: PoolSettings) -> Result<Self> {
        // Handle different database URL formats
        let db_url = if database_url.starts_with(":memory:") || database_url.starts_with("sqlite://")
        {
            database_url.to_string()
        } else {
            format!("sqlite://{database_url}")
        };

        // Create database if it doesn't exist (for file-based databases)
        if !db_url.contains(":memory:") && !Sqlite::database_exists(&db_url).await.unwrap_or(false)
        {
            match Sqlite::create_database(&db_url).await {
                Ok(_) => tracing::info!("Database created successfully"),
                Err(error) => {
                    tracing::error!("Error creating database: {}", error);
                    return Err(ItemError::Database(format!(
                        "Failed to create database: {error}"
                    )));
                }
            }
        }

        let connect_options = Self::connect_options(&db_url);

        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .idle_timeout(settings.idle_timeout)
            .test_before_acquire(true)
            .connect_with(connect_options)
            .await
            .map_err(sqlx_error_to_item_error)?;

        Ok(Self { pool })
    }

    /// In-memory repository with migrations applied, for tests.
    ///
    /// A single-connection pool keeps the in-memory database alive for the
    /// repository's whole lifetime.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(Self::connect_options(":memory:"))
            .await
            .map_err(sqlx_error_to_item_error)?;

        let repo = Self { pool };
        repo.migrate().await?;
        Ok(repo)
    }

    fn connect_options(db_url: &str) -> SqliteConnectOptions {
        if db_url.contains(":memory:") {
            SqliteConnectOptions::new()
                .filename(db_url)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Memory)
                .busy_timeout(Duration::from_secs(5))
                .foreign_keys(true)
        } else {
            SqliteConnectOptions::new()
                .filename(db_url.replace("sqlite://", ""))
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .busy_timeout(Duration::from_secs(5))
                .foreign_keys(true)
        }
    }

    /// Run database migrations
    ///
    /// Applies all pending migrations to bring the schema up to date. Call
    /// once after creating a repository instance.
    ///
    /// # Returns
    /// * `Ok(())` - Migrations completed successfully
    /// * `Err(ItemError::Database)` - If migration fails
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations/sqlite")
            .run(&self.pool)
            .await
            .map_err(|e| ItemError::Database(format!("Migration failed: {e}")))?;

        tracing::info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get access to the underlying database pool for custom operations
    ///
    /// Primarily intended for testing scenarios where direct SQL execution
    /// is needed.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ItemRepository for SqliteItemRepository {
    async fn count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM items")
            .fetch_one(&self.pool)
            .await
            .map_err(sqlx_error_to_item_error)?;

        Ok(row.get("total"))
    }

    async fn list(&self, page: ItemPage) -> Result<Vec<Item>> {
        let sql = format!(
            "SELECT {ITEM_COLUMNS} FROM items ORDER BY created_at DESC, id LIMIT ? OFFSET ?"
        );

        let rows = sqlx::query(&sql)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(sqlx_error_to_item_error)?;

        let mut items = Vec::with_capacity(rows.len());
        for row in &rows {
            items.push(row_to_item(row)?);
        }

        Ok(items)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Item>> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = ?");

        let result = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(sqlx_error_to_item_error)?;

        match result {
            Some(row) => Ok(Some(row_to_item(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, item: NewItem) -> Result<Item> {
        ItemValidator::validate_new_item(&item)?;

        let id = Uuid::new_v4();
        let now = Utc::now();

        let sql = format!(
            "INSERT INTO items (id, title, description, is_completed, created_at) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING {ITEM_COLUMNS}"
        );

        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .bind(&item.title)
            .bind(&item.description)
            .bind(item.is_completed)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(sqlx_error_to_item_error)?;

        row_to_item(&row)
    }

    async fn update(&self, id: Uuid, updates: UpdateItem) -> Result<Item> {
        ItemValidator::validate_update(&updates)?;

        // Nothing to change: report the current row, still NotFound when absent
        if updates.is_empty() {
            return self.get(id).await?.ok_or_else(|| ItemError::not_found_id(id));
        }

        // Single conditional statement; a concurrently deleted row surfaces
        // as zero returned rows instead of a lost write
        let mut query_builder: sqlx::QueryBuilder<sqlx::Sqlite> =
            sqlx::QueryBuilder::new("UPDATE items SET ");

        let mut has_updates = false;

        if let Some(title) = &updates.title {
            query_builder.push("title = ");
            query_builder.push_bind(title);
            has_updates = true;
        }

        if let Some(description) = &updates.description {
            if has_updates {
                query_builder.push(", ");
            }
            query_builder.push("description = ");
            query_builder.push_bind(description.clone());
            has_updates = true;
        }

        if let Some(is_completed) = updates.is_completed {
            if has_updates {
                query_builder.push(", ");
            }
            query_builder.push("is_completed = ");
            query_builder.push_bind(is_completed);
        }

        query_builder.push(", updated_at = ");
        query_builder.push_bind(Utc::now());
        query_builder.push(" WHERE id = ");
        query_builder.push_bind(id.to_string());
        query_builder.push(" RETURNING ");
        query_builder.push(ITEM_COLUMNS);

        let row = query_builder
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(sqlx_error_to_item_error)?;

        match row {
            Some(row) => row_to_item(&row),
            None => Err(ItemError::not_found_id(id)),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(sqlx_error_to_item_error)?;

        if result.rows_affected() == 0 {
            return Err(ItemError::not_found_id(id));
        }

        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        // Simple query to verify database connectivity
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(sqlx_error_to_item_error)?;

        Ok(())
    }
}
