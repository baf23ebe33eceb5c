//! Storage Layer - SQLite-backed persistence
//!
//! System of record is a single SQLite file with tables:
//! - teachers(id, name, subject, email, age)
//! - schema_migrations(version, applied_at)

pub mod schema;
pub mod sqlite;

pub use sqlite::TeacherStore;
