use sqlx::{Pool, Sqlite};

/// A store backed by an SQLite database through `sqlx`.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pub(crate) pool: Pool<Sqlite>,
}
