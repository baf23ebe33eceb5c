use crate::teacher::Teacher;
use crate::ui::Icons;
use tabled::{builder::Builder, settings::Style, Table, Tabled};

/// One table row. Age is shown before Email; storage order is irrelevant here.
#[derive(Tabled)]
pub struct TeacherRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Age")]
    pub age: String,
    #[tabled(rename = "Email")]
    pub email: String,
    #[tabled(rename = "Subject")]
    pub subject: String,
}

impl TeacherRow {
    pub fn new(teacher: &Teacher, selected: bool) -> Self {
        let id = if selected {
            format!("{} {}", Icons::POINTER, teacher.id)
        } else {
            teacher.id.to_string()
        };

        Self {
            id,
            name: teacher.name.clone(),
            age: teacher.age_display(),
            email: teacher.email.clone(),
            subject: teacher.subject.clone(),
        }
    }
}

/// Render the five-column teachers table, marking the selected row
pub fn teachers_table(teachers: &[Teacher], selected: Option<usize>) -> String {
    let rows: Vec<TeacherRow> = teachers
        .iter()
        .enumerate()
        .map(|(i, t)| TeacherRow::new(t, selected == Some(i)))
        .collect();

    Table::new(&rows).with(Style::rounded()).to_string()
}

/// A boxed title + message, the terminal's stand-in for a modal dialog
pub fn message_box(title: &str, message: &str) -> String {
    let mut builder = Builder::default();
    builder.push_record([title.to_string()]);
    builder.push_record([message.to_string()]);

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}
