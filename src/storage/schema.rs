//! Database schema definitions and versioned migrations

/// Version the code expects after all migrations have run
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

/// SQL to create the migration marker table
pub const CREATE_SCHEMA_MIGRATIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
)
"#;

/// v1: the teachers table as first shipped, without `age`
pub const CREATE_TEACHERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS teachers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    subject TEXT NOT NULL,
    email TEXT UNIQUE NOT NULL
)
"#;

/// v2: additive `age` column, null for existing rows
pub const ADD_AGE_COLUMN: &str = "ALTER TABLE teachers ADD COLUMN age INTEGER";

/// A single schema step
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub version: u32,
    pub description: &'static str,
    pub sql: &'static str,
}

/// All migrations, ascending by version
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        description: "create teachers table",
        sql: CREATE_TEACHERS_TABLE,
    },
    Migration {
        version: 2,
        description: "add teachers.age",
        sql: ADD_AGE_COLUMN,
    },
];

/// Migrations that still have to run on a database at `current`
pub fn pending_migrations(current: u32) -> impl Iterator<Item = &'static Migration> {
    MIGRATIONS.iter().filter(move |m| m.version > current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_ordered_and_end_at_current() {
        let versions: Vec<u32> = MIGRATIONS.iter().map(|m| m.version).collect();
        assert_eq!(versions, vec![1, 2]);
        assert_eq!(versions.last().copied(), Some(CURRENT_SCHEMA_VERSION));
    }

    #[test]
    fn test_pending_migrations() {
        assert_eq!(pending_migrations(0).count(), 2);
        assert_eq!(pending_migrations(1).map(|m| m.version).collect::<Vec<_>>(), vec![2]);
        assert_eq!(pending_migrations(CURRENT_SCHEMA_VERSION).count(), 0);
    }
}
