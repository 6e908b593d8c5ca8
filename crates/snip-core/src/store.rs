use crate::config;
use crate::error::{Result, SnipError};
use rusqlite::{params, Connection, ErrorCode};
use std::fs;
use std::path::Path;

/// A stored key/value pair.
///
/// `id` is assigned by the store on creation and never reused; `key` is the
/// unique lookup handle; `value` may contain `$N` placeholder tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub id: i64,
    pub key: String,
    pub value: String,
}

impl Snippet {
    /// A snippet that has not been persisted yet (`id` is 0 until the store
    /// assigns one).
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: 0,
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Durable mapping from `key` to `value`, backed by a single SQLite file.
///
/// The connection is held for the lifetime of the store and closed when the
/// store is dropped, so a CLI invocation opens it, performs one operation and
/// releases it on every exit path.
pub struct SnippetStore {
    conn: Connection,
}

impl SnippetStore {
    /// Open the store at `path`, creating the containing directory, the
    /// database file and the `snippets` table as needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SnipError::StorageUnavailable(format!("{}: {}", parent.display(), e))
            })?;
        }

        let conn = Connection::open(path)
            .map_err(|e| SnipError::StorageUnavailable(format!("{}: {}", path.display(), e)))?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS snippets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                key TEXT NOT NULL UNIQUE,
                value TEXT NOT NULL
            );",
        )?;

        Ok(Self { conn })
    }

    /// Open the store at the default per-application location.
    pub fn open_default() -> Result<Self> {
        Self::open(&config::get_db_file_path())
    }

    /// Insert a new snippet. Fails with `DuplicateKey` if `key` is taken.
    pub fn create(&self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO snippets (key, value) VALUES (?1, ?2)",
                params![key, value],
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _)
                    if err.code == ErrorCode::ConstraintViolation =>
                {
                    SnipError::DuplicateKey(key.to_string())
                }
                other => SnipError::from(other),
            })?;
        Ok(())
    }

    /// Look up a snippet by key.
    pub fn read(&self, key: &str) -> Result<Snippet> {
        self.conn
            .query_row(
                "SELECT id, key, value FROM snippets WHERE key = ?1",
                params![key],
                |row| {
                    Ok(Snippet {
                        id: row.get(0)?,
                        key: row.get(1)?,
                        value: row.get(2)?,
                    })
                },
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => SnipError::NotFound(key.to_string()),
                other => SnipError::from(other),
            })
    }

    /// All snippets in insertion order.
    pub fn read_all(&self) -> Result<Vec<Snippet>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, key, value FROM snippets ORDER BY id")?;
        let snippets = stmt
            .query_map([], |row| {
                Ok(Snippet {
                    id: row.get(0)?,
                    key: row.get(1)?,
                    value: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(snippets)
    }

    /// Replace the value of the row whose key matches `snippet.key`.
    pub fn update(&self, snippet: &Snippet) -> Result<()> {
        let rows = self.conn.execute(
            "UPDATE snippets SET value = ?2 WHERE key = ?1",
            params![snippet.key, snippet.value],
        )?;
        if rows == 0 {
            return Err(SnipError::NotFound(snippet.key.clone()));
        }
        Ok(())
    }

    /// Remove the snippet with `key`. Deleting a missing key is an error.
    pub fn delete(&self, key: &str) -> Result<()> {
        let rows = self
            .conn
            .execute("DELETE FROM snippets WHERE key = ?1", params![key])?;
        if rows == 0 {
            return Err(SnipError::NotFound(key.to_string()));
        }
        Ok(())
    }

    /// Remove all snippets.
    pub fn reset(&self) -> Result<()> {
        self.conn.execute("DELETE FROM snippets", [])?;
        Ok(())
    }

    /// Bulk-insert snippets in one transaction, skipping keys that already
    /// exist. Any failure mid-batch rolls back the whole import.
    pub fn import_many(&mut self, snippets: &[Snippet]) -> Result<()> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt =
                tx.prepare("INSERT OR IGNORE INTO snippets (key, value) VALUES (?1, ?2)")?;
            for snippet in snippets {
                stmt.execute(params![snippet.key, snippet.value])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}
