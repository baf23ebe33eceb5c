//! SQLite storage implementation

use std::path::{Path, PathBuf};
use rusqlite::{Connection, OptionalExtension, params};
use crate::{Error, Result};
use crate::teacher::{NewTeacher, Teacher};
use super::schema::{self, CURRENT_SCHEMA_VERSION};

const SELECT_TEACHER: &str = "SELECT id, name, subject, email, age FROM teachers";

/// SQLite-backed store for teacher records.
///
/// The store only holds the database path. Every operation opens its own
/// connection and drops it before returning, on success and error alike.
#[derive(Debug, Clone)]
pub struct TeacherStore {
    path: PathBuf,
}

impl TeacherStore {
    /// Open a database file (creates it if missing) and bring the schema
    /// up to date
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let store = Self { path };
        store.initialize_schema()?;
        Ok(store)
    }

    fn connect(&self) -> Result<Connection> {
        tracing::debug!("Opening connection to {}", self.path.display());
        Ok(Connection::open(&self.path)?)
    }

    // ========== Schema ==========

    /// Apply pending migrations
    fn initialize_schema(&self) -> Result<()> {
        let mut conn = self.connect()?;
        conn.execute(schema::CREATE_SCHEMA_MIGRATIONS_TABLE, [])?;
        Self::adopt_legacy_schema(&mut conn)?;

        let current = Self::current_version(&conn)?;
        if current > CURRENT_SCHEMA_VERSION {
            return Err(Error::UnsupportedSchemaVersion {
                supported: CURRENT_SCHEMA_VERSION,
                found: current,
            });
        }

        for migration in schema::pending_migrations(current) {
            tracing::info!(
                "Applying migration v{}: {}",
                migration.version,
                migration.description
            );
            let tx = conn.transaction()?;
            tx.execute(migration.sql, [])?;
            Self::stamp_version(&tx, migration.version)?;
            tx.commit()?;
        }

        Ok(())
    }

    /// Stamp a `teachers` table that predates the migration marker with the
    /// version its columns correspond to. All markers land in one transaction.
    fn adopt_legacy_schema(conn: &mut Connection) -> Result<()> {
        if Self::current_version(conn)? > 0 || !Self::table_exists(conn, "teachers")? {
            return Ok(());
        }

        let version = if Self::column_exists(conn, "teachers", "age")? { 2 } else { 1 };
        tracing::info!("Adopting existing teachers table as schema v{}", version);
        let tx = conn.transaction()?;
        for v in 1..=version {
            Self::stamp_version(&tx, v)?;
        }
        tx.commit()?;
        Ok(())
    }

    fn stamp_version(conn: &Connection, version: u32) -> Result<()> {
        conn.execute(
            "INSERT INTO schema_migrations (version, applied_at) VALUES (?1, datetime('now'))",
            params![version],
        )?;
        Ok(())
    }

    fn current_version(conn: &Connection) -> Result<u32> {
        let version: u32 = conn.query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )?;
        Ok(version)
    }

    fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
        let found = conn
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1 LIMIT 1",
                [name],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
            [table, column],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Schema version recorded in the database
    pub fn schema_version(&self) -> Result<u32> {
        let conn = self.connect()?;
        Self::current_version(&conn)
    }

    // ========== Teacher Operations ==========

    /// Insert a record; the store assigns the id.
    ///
    /// A second record with the same email is rejected with
    /// [`Error::DuplicateEmail`] and nothing is written.
    pub fn insert(&self, teacher: &NewTeacher) -> Result<Teacher> {
        let conn = self.connect()?;
        let inserted = conn.execute(
            "INSERT INTO teachers (name, subject, email, age) VALUES (?1, ?2, ?3, ?4)",
            params![teacher.name, teacher.subject, teacher.email, teacher.age],
        );

        match inserted {
            Ok(_) => {
                let id = conn.last_insert_rowid();
                tracing::info!("Inserted teacher #{} <{}>", id, teacher.email);
                Ok(teacher.clone().with_id(id))
            }
            Err(err) if is_unique_violation(&err) => {
                tracing::warn!("Rejected duplicate email <{}>", teacher.email);
                Err(Error::DuplicateEmail(teacher.email.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// All records in insertion order
    pub fn list_all(&self) -> Result<Vec<Teacher>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("{SELECT_TEACHER} ORDER BY id"))?;

        let teachers = stmt
            .query_map([], row_to_teacher)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        tracing::debug!("Listed {} teachers", teachers.len());
        Ok(teachers)
    }

    /// Get a record by id
    pub fn get(&self, id: i64) -> Result<Option<Teacher>> {
        let conn = self.connect()?;
        conn.query_row(&format!("{SELECT_TEACHER} WHERE id = ?1"), [id], row_to_teacher)
            .optional()
            .map_err(Into::into)
    }

    /// Delete a record by id. Returns whether a row was removed; a missing
    /// id is not an error.
    pub fn delete_by_id(&self, id: i64) -> Result<bool> {
        let conn = self.connect()?;
        let removed = conn.execute("DELETE FROM teachers WHERE id = ?1", [id])?;
        if removed > 0 {
            tracing::info!("Deleted teacher #{}", id);
        } else {
            tracing::debug!("No teacher #{} to delete", id);
        }
        Ok(removed > 0)
    }

    /// Count all records
    pub fn count(&self) -> Result<usize> {
        let conn = self.connect()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM teachers", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn row_to_teacher(row: &rusqlite::Row) -> rusqlite::Result<Teacher> {
    Ok(Teacher {
        id: row.get(0)?,
        name: row.get(1)?,
        subject: row.get(2)?,
        email: row.get(3)?,
        age: row.get(4)?,
    })
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
