// Search index database
// Writes the docset's SQLite search index (docSet.dsidx) using sqlx

use std::path::Path;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::debug;

use crate::domain::{BuilderResult, IndexEntry};

pub const DB_FILE: &str = "docSet.dsidx";

const CREATE_INDEX_SQL: &str =
    "CREATE TABLE searchIndex(id INTEGER PRIMARY KEY, name TEXT, type TEXT, path TEXT)";
const INSERT_INDEX_SQL: &str = "INSERT INTO searchIndex(name, type, path) VALUES (?, ?, ?)";

pub struct SearchIndexConnection {
    pool: SqlitePool,
}

impl SearchIndexConnection {
    /// Open (creating if needed) the index database inside `db_dir`.
    ///
    /// `db_dir` itself must already exist.
    pub async fn open(db_dir: &Path) -> BuilderResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(db_dir.join(DB_FILE))
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the `searchIndex` table and insert `entries` in order
    pub async fn write_entries(&self, entries: &[IndexEntry]) -> BuilderResult<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(CREATE_INDEX_SQL).execute(&mut *tx).await?;

        for entry in entries {
            sqlx::query(INSERT_INDEX_SQL)
                .bind(&entry.name)
                .bind(entry.type_name())
                .bind(&entry.path)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}

/// Create `docSet.dsidx` in `db_dir` holding every entry
pub async fn create_index(entries: &[IndexEntry], db_dir: &Path) -> BuilderResult<()> {
    let connection = SearchIndexConnection::open(db_dir).await?;
    let written = connection.write_entries(entries).await;
    connection.close().await;
    written?;

    debug!("Created the SQLite search index with {} entries", entries.len());
    Ok(())
}
