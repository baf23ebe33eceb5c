//! Teacher records
//!
//! A `Teacher` is a persisted row; a `NewTeacher` is a validated record
//! that has not been assigned an id yet.

use serde::{Deserialize, Serialize};

/// A teacher row as stored in the `teachers` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Store-assigned identifier, never reused or changed
    pub id: i64,
    pub name: String,
    pub subject: String,
    /// Unique across all records
    pub email: String,
    /// Null for rows created before the `age` column existed
    pub age: Option<i64>,
}

/// Validated input for an insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTeacher {
    pub name: String,
    pub subject: String,
    pub email: String,
    pub age: i64,
}

impl NewTeacher {
    pub fn new(
        name: impl Into<String>,
        subject: impl Into<String>,
        email: impl Into<String>,
        age: i64,
    ) -> Self {
        Self {
            name: name.into(),
            subject: subject.into(),
            email: email.into(),
            age,
        }
    }

    /// Attach the id assigned by the store
    pub fn with_id(self, id: i64) -> Teacher {
        Teacher {
            id,
            name: self.name,
            subject: self.subject,
            email: self.email,
            age: Some(self.age),
        }
    }
}

impl Teacher {
    /// Age as shown in the table; blank when unknown
    pub fn age_display(&self) -> String {
        self.age.map(|a| a.to_string()).unwrap_or_default()
    }
}

impl std::fmt::Display for Teacher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} <{}> ({})", self.id, self.name, self.email, self.subject)
    }
}
