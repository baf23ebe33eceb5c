//! Form input and validation
//!
//! Raw field text is checked here before anything touches storage.

use crate::teacher::NewTeacher;

/// A form field, in the order the form shows them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
    Email,
    Subject,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Age, Field::Email, Field::Subject];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Age => "Age",
            Field::Email => "Email",
            Field::Subject => "Subject",
        }
    }
}

/// Validation failures, reported before any storage call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    MissingField(Field),

    #[error("age must be a number, got {0:?}")]
    InvalidAge(String),
}

/// The four text inputs of the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub age: String,
    pub email: String,
    pub subject: String,
}

impl FormInput {
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            email: email.into(),
            subject: subject.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Age => &self.age,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Age => &mut self.age,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Trim every field, require all four, and parse the age
    pub fn validate(&self) -> Result<NewTeacher, ValidationError> {
        for field in Field::ALL {
            if self.get(field).trim().is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }

        let age_text = self.age.trim();
        let age = age_text
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidAge(age_text.to_string()))?;

        Ok(NewTeacher::new(
            self.name.trim(),
            self.subject.trim(),
            self.email.trim(),
            age,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_is_trimmed() {
        let input = FormInput::new("  Ada ", " 30", "ada@x.io\t", " Math ");
        assert_eq!(
            input.validate().unwrap(),
            NewTeacher::new("Ada", "Math", "ada@x.io", 30)
        );
    }

    #[test]
    fn test_blank_field_rejected() {
        let input = FormInput::new("Ada", "30", "   ", "Math");
        assert_eq!(
            input.validate(),
            Err(ValidationError::MissingField(Field::Email))
        );

        let empty = FormInput::default();
        assert_eq!(empty.validate(), Err(ValidationError::MissingField(Field::Name)));
    }

    #[test]
    fn test_non_numeric_age_rejected() {
        let input = FormInput::new("Ada", "abc", "ada@x.io", "Math");
        assert_eq!(
            input.validate(),
            Err(ValidationError::InvalidAge("abc".into()))
        );

        let fractional = FormInput::new("Ada", "30.5", "ada@x.io", "Math");
        assert!(matches!(fractional.validate(), Err(ValidationError::InvalidAge(_))));
    }

    #[test]
    fn test_signed_age_accepted() {
        let input = FormInput::new("Ada", "+42", "ada@x.io", "Math");
        assert_eq!(input.validate().unwrap().age, 42);
    }

    #[test]
    fn test_set_get_clear() {
        let mut input = FormInput::default();
        for field in Field::ALL {
            input.set(field, field.label());
        }
        assert_eq!(input.get(Field::Subject), "Subject");
        input.clear();
        assert_eq!(input, FormInput::default());
    }
}
