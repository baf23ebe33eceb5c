//! Interactive form session
//!
//! Draws the form and the table, reads one action per line and dispatches
//! it to the [`TeacherForm`] handlers.

use crate::app::{Notice, Outcome, TeacherForm};
use crate::form::Field;
use crate::ui;
use std::io::{self, BufRead};

/// Where the session reads its input lines from
pub trait LineSource {
    /// Show `prompt` and read one line. `None` means end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Reads from the terminal, or from stdin when it is not a terminal
pub struct TermSource {
    term: console::Term,
}

impl TermSource {
    pub fn new() -> Self {
        Self {
            term: console::Term::stdout(),
        }
    }
}

impl Default for TermSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for TermSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.term.write_str(&format!("{} ", ui::label(prompt)))?;
        if self.term.is_term() {
            return self.term.read_line().map(Some);
        }

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// A single user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add,
    /// Select the row with this id; `None` clears the selection
    Select(Option<i64>),
    /// Delete the selected row, selecting `id` first when given
    Delete(Option<i64>),
    Refresh,
    Help,
    Quit,
    Unknown(String),
}

impl Action {
    pub fn parse(line: &str) -> Self {
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            return Action::Refresh;
        };
        let arg = parts.next();
        let id = arg.and_then(|a| a.parse::<i64>().ok());
        let bad_arg = arg.is_some() && id.is_none();

        match cmd.to_ascii_lowercase().as_str() {
            "a" | "add" => Action::Add,
            "s" | "select" if !bad_arg => Action::Select(id),
            "d" | "delete" if !bad_arg => Action::Delete(id),
            "r" | "refresh" => Action::Refresh,
            "?" | "h" | "help" => Action::Help,
            "q" | "quit" | "exit" => Action::Quit,
            _ => Action::Unknown(line.trim().to_string()),
        }
    }
}

/// Run the form until the user quits or input ends.
///
/// Recoverable notices are shown and the loop continues; a storage failure
/// ends the session with an error.
pub fn run<S: LineSource>(form: &mut TeacherForm, source: &mut S) -> crate::Result<()> {
    print_help();
    loop {
        render(form);

        let Some(line) = source.read_line("Action [a/s/d/r/?/q]:")? else {
            break;
        };

        let action = Action::parse(&line);
        tracing::debug!("Session action: {:?}", action);

        let result = match action {
            Action::Add => {
                if !read_fields(form, source)? {
                    break;
                }
                form.add()
            }
            Action::Select(Some(id)) => {
                if !form.select_id(id) {
                    ui::warn(&format!("No teacher with id {}", id));
                }
                continue;
            }
            Action::Select(None) => {
                form.clear_selection();
                continue;
            }
            Action::Delete(Some(id)) => {
                if !form.select_id(id) {
                    ui::warn(&format!("No teacher with id {}", id));
                    continue;
                }
                form.delete_selected()
            }
            Action::Delete(None) => form.delete_selected(),
            Action::Refresh => form.refresh(),
            Action::Help => {
                print_help();
                continue;
            }
            Action::Quit => break,
            Action::Unknown(text) => {
                ui::warn(&format!("Unknown action: {}", text));
                continue;
            }
        };

        match result {
            Ok(outcome) => report(&outcome),
            Err(Notice::Storage(err)) => return Err(err),
            Err(notice) => ui::notice(&notice),
        }
    }

    Ok(())
}

/// Prompt for the four inputs in form order. Returns false on end of input.
fn read_fields<S: LineSource>(form: &mut TeacherForm, source: &mut S) -> io::Result<bool> {
    for field in Field::ALL {
        let prompt = format!("{}:", field.label());
        let Some(value) = source.read_line(&prompt)? else {
            return Ok(false);
        };
        form.input_mut().set(field, value);
    }
    Ok(true)
}

fn render(form: &TeacherForm) {
    ui::section("Teachers Database");
    println!("{}", ui::teachers_table(form.rows(), form.selected()));
    if let Some(teacher) = form.selected_teacher() {
        ui::selected(teacher);
    }
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Added(teacher) => ui::success(&format!("Added {}", teacher)),
        Outcome::Deleted { id, removed: true } => ui::success(&format!("Deleted teacher #{}", id)),
        Outcome::Deleted { id, removed: false } => {
            ui::info("Nothing deleted", &format!("teacher #{} was already gone", id))
        }
        Outcome::Refreshed { rows } => ui::info("Rows", &rows.to_string()),
    }
}

fn print_help() {
    println!(
        "{}",
        ui::dim("a = add   s <id> = select   d [id] = delete selected   r = refresh   q = quit")
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::TeacherStore;
    use std::collections::VecDeque;
    use tempfile::TempDir;

    struct Scripted(VecDeque<&'static str>);

    impl Scripted {
        fn new(lines: &[&'static str]) -> Self {
            Self(lines.iter().copied().collect())
        }
    }

    impl LineSource for Scripted {
        fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
            Ok(self.0.pop_front().map(str::to_string))
        }
    }

    fn temp_form() -> (TempDir, TeacherForm) {
        let dir = TempDir::new().unwrap();
        let store = TeacherStore::open(dir.path().join("teachers.db")).unwrap();
        (dir, TeacherForm::new(store).unwrap())
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(Action::parse("a"), Action::Add);
        assert_eq!(Action::parse(" ADD "), Action::Add);
        assert_eq!(Action::parse("s 3"), Action::Select(Some(3)));
        assert_eq!(Action::parse("s"), Action::Select(None));
        assert_eq!(Action::parse("d"), Action::Delete(None));
        assert_eq!(Action::parse("delete 7"), Action::Delete(Some(7)));
        assert_eq!(Action::parse(""), Action::Refresh);
        assert_eq!(Action::parse("q"), Action::Quit);
        assert_eq!(Action::parse("d x"), Action::Unknown("d x".into()));
        assert_eq!(Action::parse("zap"), Action::Unknown("zap".into()));
    }

    #[test]
    fn test_add_select_delete_session() {
        let (_dir, mut form) = temp_form();
        let mut script = Scripted::new(&[
            "a", "Ada", "30", "ada@x.io", "Math",
            "a", "Bob", "40", "bob@x.io", "Sci",
            "a", "Eve", "abc", "eve@x.io", "Art",
            "s 1",
            "d",
            "q",
        ]);

        run(&mut form, &mut script).unwrap();

        let names: Vec<&str> = form.rows().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Bob"]);
        // Rejected input stays in the form
        assert_eq!(form.input().age, "abc");
    }

    #[test]
    fn test_delete_without_selection_continues() {
        let (_dir, mut form) = temp_form();
        let mut script = Scripted::new(&["a", "Ada", "30", "ada@x.io", "Math", "d", "r"]);

        run(&mut form, &mut script).unwrap();
        assert_eq!(form.rows().len(), 1);
    }

    #[test]
    fn test_delete_unknown_id_keeps_selection() {
        let (_dir, mut form) = temp_form();
        let mut script = Scripted::new(&[
            "a", "Ada", "30", "ada@x.io", "Math",
            "a", "Bob", "40", "bob@x.io", "Sci",
            "s 2",
            "d 99",
        ]);

        run(&mut form, &mut script).unwrap();
        assert_eq!(form.rows().len(), 2);
        assert_eq!(form.selected_teacher().map(|t| t.name.as_str()), Some("Bob"));
    }

    #[test]
    fn test_end_of_input_mid_add_stops_cleanly() {
        let (_dir, mut form) = temp_form();
        let mut script = Scripted::new(&["a", "Ada", "30"]);

        run(&mut form, &mut script).unwrap();
        assert!(form.rows().is_empty());
        assert_eq!(form.store().count().unwrap(), 0);
    }
}
