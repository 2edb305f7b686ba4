//! Fruit repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable list/save APIs over canonical `fruits` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Fruit::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - `save` is an upsert keyed on `uuid`: insert when absent, overwrite when
//!   present, idempotent for unchanged data.

use crate::db::DbError;
use crate::model::fruit::{Fruit, FruitId, FruitValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

const FRUIT_SELECT_SQL: &str = "SELECT uuid, name FROM fruits";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for fruit persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(FruitValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted fruit data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<FruitValidationError> for RepoError {
    fn from(value: FruitValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for fruit persistence.
pub trait FruitRepository {
    /// Returns every persisted fruit in storage-default order.
    fn find_all(&self) -> RepoResult<Vec<Fruit>>;
    /// Returns one fruit by stable ID, or `None` when absent.
    fn find_by_id(&self, id: FruitId) -> RepoResult<Option<Fruit>>;
    /// Inserts or overwrites the row keyed by `fruit.id` and returns the
    /// persisted representation.
    fn save(&self, fruit: &Fruit) -> RepoResult<Fruit>;
}

/// SQLite-backed fruit repository.
///
/// Owns its connection behind a mutex so the repository can be shared as
/// `'static` state across HTTP workers; SQLite statements are serialized by
/// the lock.
pub struct SqliteFruitRepository {
    conn: Mutex<Connection>,
}

impl SqliteFruitRepository {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        // A poisoned lock means a holder panicked between statements; the
        // connection itself is still usable, so recover instead of panicking.
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FruitRepository for SqliteFruitRepository {
    fn find_all(&self) -> RepoResult<Vec<Fruit>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!("{FRUIT_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut fruits = Vec::new();

        while let Some(row) = rows.next()? {
            fruits.push(parse_fruit_row(row)?);
        }

        Ok(fruits)
    }

    fn find_by_id(&self, id: FruitId) -> RepoResult<Option<Fruit>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!("{FRUIT_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query(params![id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_fruit_row(row)?));
        }

        Ok(None)
    }

    fn save(&self, fruit: &Fruit) -> RepoResult<Fruit> {
        fruit.validate()?;

        self.conn().execute(
            "INSERT INTO fruits (uuid, name) VALUES (?1, ?2)
             ON CONFLICT(uuid) DO UPDATE
             SET
                name = excluded.name,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![fruit.id.to_string(), fruit.name.as_str()],
        )?;

        Ok(fruit.clone())
    }
}

fn parse_fruit_row(row: &Row<'_>) -> RepoResult<Fruit> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in fruits.uuid"))
    })?;

    let fruit = Fruit {
        id,
        name: row.get("name")?,
    };
    fruit.validate()?;
    Ok(fruit)
}
