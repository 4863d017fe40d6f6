/// Todo item model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE items (
///     id SERIAL PRIMARY KEY,
///     name VARCHAR(100),
///     is_complete BOOLEAN NOT NULL DEFAULT FALSE
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use todo_shared::models::item::{Item, ItemInput};
/// # use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
/// let item = Item::create(
///     &pool,
///     ItemInput {
///         name: Some("Buy milk".to_string()),
///         is_complete: false,
///     },
/// )
/// .await?;
///
/// let all = Item::list(&pool).await?;
/// assert!(all.iter().any(|i| i.id == item.id));
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// A row of the `items` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Assigned by the database on insert
    pub id: i32,

    /// Up to 100 characters, may be null
    pub name: Option<String>,

    pub is_complete: bool,
}

/// Writable fields of an item
///
/// This is also the request body for create and update. Any `id` the client
/// sends is ignored during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub is_complete: bool,
}

impl Item {
    /// Returns every item in storage order
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Item>("SELECT id, name, is_complete FROM items")
            .fetch_all(pool)
            .await
    }

    /// Finds an item by primary key
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Item>("SELECT id, name, is_complete FROM items WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Inserts a new item and returns it with its generated id
    ///
    /// # Errors
    ///
    /// Fails if `name` exceeds 100 characters or the database is unreachable.
    pub async fn create(pool: &PgPool, data: ItemInput) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (name, is_complete)
            VALUES ($1, $2)
            RETURNING id, name, is_complete
            "#,
        )
        .bind(data.name)
        .bind(data.is_complete)
        .fetch_one(pool)
        .await
    }

    /// Writes this item's fields back to its row
    ///
    /// Returns `None` if the row no longer exists.
    pub async fn save(&self, pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET name = $2, is_complete = $3
            WHERE id = $1
            RETURNING id, name, is_complete
            "#,
        )
        .bind(self.id)
        .bind(&self.name)
        .bind(self.is_complete)
        .fetch_optional(pool)
        .await
    }

    /// Deletes an item by primary key
    ///
    /// Returns true if a row was removed.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
