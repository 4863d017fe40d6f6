/// Database models
///
/// Each model is a plain struct deriving `sqlx::FromRow` plus associated
/// async functions that run one query against a `PgPool`.
///
/// - `item`: Todo items (`items` table)
/// - `user`: User accounts (`users` table)

pub mod item;
pub mod user;
