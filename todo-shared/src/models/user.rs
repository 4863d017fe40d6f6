/// User model and database operations
///
/// Users are independent of items; there is no foreign key between the two
/// tables. The stored `password_hash` is an Argon2id PHC string produced by
/// [`crate::auth::password::hash_password`].
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id SERIAL PRIMARY KEY,
///     username VARCHAR(50) NOT NULL CHECK (username <> ''),
///     password_hash VARCHAR(255) NOT NULL CHECK (password_hash <> '')
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use todo_shared::auth::password::hash_password;
/// use todo_shared::models::user::{NewUser, User};
/// # use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// let user = User::create(
///     &pool,
///     NewUser {
///         username: "dana".to_string(),
///         password_hash: hash_password("secret")?,
///     },
/// )
/// .await?;
/// println!("Created user {}", user.id);
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// A row of the `users` table
///
/// Serialized as-is, hash included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Assigned by the database on insert
    pub id: i32,

    /// Up to 50 characters, non-empty, not unique
    pub username: String,

    /// Argon2id PHC string, never plaintext
    pub password_hash: String,
}

/// Request body for creating or updating a user
///
/// Despite its name, `passwordHash` carries the caller's plaintext password;
/// it is hashed before it reaches storage. Any `id` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password_hash: Option<String>,
}

impl UserInput {
    /// The supplied password, or `None` when it is absent or empty
    pub fn new_password(&self) -> Option<&str> {
        self.password_hash.as_deref().filter(|p| !p.is_empty())
    }
}

/// Values for a user insert; `password_hash` must already be hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

impl User {
    /// Returns every user in storage order
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, username, password_hash FROM users")
            .fetch_all(pool)
            .await
    }

    /// Finds a user by primary key
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, username, password_hash FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Inserts a new user and returns it with its generated id
    ///
    /// # Errors
    ///
    /// Fails on an empty or over-long `username`, an empty or over-long
    /// `password_hash`, or a connection error.
    pub async fn create(pool: &PgPool, data: NewUser) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, password_hash
            "#,
        )
        .bind(data.username)
        .bind(data.password_hash)
        .fetch_one(pool)
        .await
    }

    /// Writes this user's fields back to its row
    ///
    /// Returns `None` if the row no longer exists.
    pub async fn save(&self, pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET username = $2, password_hash = $3
            WHERE id = $1
            RETURNING id, username, password_hash
            "#,
        )
        .bind(self.id)
        .bind(&self.username)
        .bind(&self.password_hash)
        .fetch_optional(pool)
        .await
    }

    /// Deletes a user by primary key
    ///
    /// Returns true if a row was removed.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_serializes_hash_field() {
        let user = User {
            id: 1,
            username: "dana".to_string(),
            password_hash: "$argon2id$v=19$...".to_string(),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["username"], "dana");
        assert_eq!(value["passwordHash"], "$argon2id$v=19$...");
        assert!(value.get("password_hash").is_none());
    }

    #[test]
    fn test_new_password_treats_empty_as_absent() {
        let empty: UserInput =
            serde_json::from_value(json!({ "username": "a", "passwordHash": "" })).unwrap();
        assert_eq!(empty.new_password(), None);

        let missing: UserInput = serde_json::from_value(json!({ "username": "a" })).unwrap();
        assert_eq!(missing.new_password(), None);

        let null: UserInput =
            serde_json::from_value(json!({ "username": "a", "passwordHash": null })).unwrap();
        assert_eq!(null.new_password(), None);

        let set: UserInput =
            serde_json::from_value(json!({ "id": 5, "username": "a", "passwordHash": "pw" }))
                .unwrap();
        assert_eq!(set.new_password(), Some("pw"));
    }
}
