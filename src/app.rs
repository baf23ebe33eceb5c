//! Command handlers behind the form's actions
//!
//! `TeacherForm` holds what the screen shows: the four inputs, the table
//! rows, and the selected row. Each action calls into the store and then
//! reloads the rows.

use crate::form::{Field, FormInput, ValidationError};
use crate::storage::TeacherStore;
use crate::teacher::Teacher;
use crate::Error;

/// A user-facing condition, shown as a modal message
#[derive(Debug)]
pub enum Notice {
    MissingField(Field),
    InvalidAge(String),
    DuplicateEmail(String),
    NoSelection,
    /// Storage failed underneath an action; not user-correctable
    Storage(Error),
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::MissingField(_) | Notice::InvalidAge(_) => "Input Error",
            Notice::DuplicateEmail(_) | Notice::Storage(_) => "Database Error",
            Notice::NoSelection => "Selection Error",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::MissingField(_) => "All fields are required!".to_string(),
            Notice::InvalidAge(_) => "Age must be a number!".to_string(),
            Notice::DuplicateEmail(_) => "Teacher with this email already exists!".to_string(),
            Notice::NoSelection => "Please select a teacher to delete!".to_string(),
            Notice::Storage(err) => err.to_string(),
        }
    }

    /// Whether the user can fix this by changing their input
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Notice::Storage(_))
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

impl std::error::Error for Notice {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Notice::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for Notice {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingField(field) => Notice::MissingField(field),
            ValidationError::InvalidAge(raw) => Notice::InvalidAge(raw),
        }
    }
}

impl From<Error> for Notice {
    fn from(err: Error) -> Self {
        match err {
            Error::DuplicateEmail(email) => Notice::DuplicateEmail(email),
            other => Notice::Storage(other),
        }
    }
}

/// What a successful action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(Teacher),
    Deleted { id: i64, removed: bool },
    Refreshed { rows: usize },
}

/// State and actions of the teachers form
pub struct TeacherForm {
    store: TeacherStore,
    input: FormInput,
    rows: Vec<Teacher>,
    /// Id of the selected record, kept across reloads only while it is shown
    selected: Option<i64>,
}

impl TeacherForm {
    /// Build the form and load the initial table contents
    pub fn new(store: TeacherStore) -> crate::Result<Self> {
        let rows = store.list_all()?;
        Ok(Self {
            store,
            input: FormInput::default(),
            rows,
            selected: None,
        })
    }

    pub fn store(&self) -> &TeacherStore {
        &self.store
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut FormInput {
        &mut self.input
    }

    /// Rows currently shown in the table
    pub fn rows(&self) -> &[Teacher] {
        &self.rows
    }

    /// Table row (0-based) of the selected record
    pub fn selected(&self) -> Option<usize> {
        let id = self.selected?;
        self.rows.iter().position(|t| t.id == id)
    }

    pub fn selected_teacher(&self) -> Option<&Teacher> {
        let id = self.selected?;
        self.rows.iter().find(|t| t.id == id)
    }

    /// Select a table row (0-based). Out-of-range clears the selection.
    pub fn select(&mut self, row: usize) -> bool {
        self.selected = self.rows.get(row).map(|t| t.id);
        self.selected.is_some()
    }

    /// Select the row showing the record with `id`. An id that is not shown
    /// leaves the current selection alone.
    pub fn select_id(&mut self, id: i64) -> bool {
        if !self.rows.iter().any(|t| t.id == id) {
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Add action: validate, insert, clear the inputs, reload.
    ///
    /// Invalid input leaves both the inputs and the store untouched. A
    /// duplicate email still clears the inputs and reloads the table.
    pub fn add(&mut self) -> Result<Outcome, Notice> {
        let new_teacher = self.input.validate()?;

        let inserted = self.store.insert(&new_teacher);
        self.input.clear();
        self.reload()?;

        let teacher = inserted?;
        Ok(Outcome::Added(teacher))
    }

    /// Delete-selected action
    pub fn delete_selected(&mut self) -> Result<Outcome, Notice> {
        let id = self.selected_teacher().ok_or(Notice::NoSelection)?.id;

        let removed = self.store.delete_by_id(id)?;
        self.selected = None;
        self.reload()?;

        Ok(Outcome::Deleted { id, removed })
    }

    /// Reload the table from the store
    pub fn refresh(&mut self) -> Result<Outcome, Notice> {
        self.reload()?;
        Ok(Outcome::Refreshed { rows: self.rows.len() })
    }

    fn reload(&mut self) -> crate::Result<()> {
        self.rows = self.store.list_all()?;
        if self.selected_teacher().is_none() {
            self.selected = None;
        }
        Ok(())
    }
}
