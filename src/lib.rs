//! # Teachers - record form over an embedded SQLite store
//!
//! Maintains a small set of teacher records (name, subject, email, age).
//!
//! Teachers provides:
//! - A versioned SQLite schema with an additive `age` migration
//! - A record store that opens a fresh connection per operation
//! - Form validation ahead of every insert
//! - Command handlers for the add / delete-selected / refresh actions
//! - A terminal form and table front end

pub mod teacher;
pub mod storage;
pub mod form;
pub mod app;
pub mod config;
pub mod session;
pub mod ui;

// Re-exports for convenient access
pub use teacher::{NewTeacher, Teacher};
pub use storage::TeacherStore;
pub use form::{Field, FormInput, ValidationError};
pub use app::{Notice, Outcome, TeacherForm};

/// Result type alias for Teachers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Teachers operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Teacher with email {0} already exists")]
    DuplicateEmail(String),

    #[error("Unsupported schema version {found} (this build supports up to {supported})")]
    UnsupportedSchemaVersion { supported: u32, found: u32 },
}
