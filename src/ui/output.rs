use crate::app::Notice;
use crate::teacher::Teacher;
use crate::ui::{message_box, theme, Icons};
use owo_colors::OwoColorize;

pub fn header(text: &str) {
    println!("{} {}", Icons::BOOK, text.style(theme().header.clone()));
}

pub fn status(icon: &str, label: &str, value: &str) {
    println!("{} {}: {}", icon, label.style(theme().dim.clone()), value);
}

/// The record that Delete would remove
pub fn selected(teacher: &Teacher) {
    println!(
        "{} {} {}",
        Icons::POINTER.style(theme().selected.clone()),
        "Selected:".style(theme().dim.clone()),
        teacher.style(theme().selected.clone())
    );
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

pub fn info(label: &str, value: &str) {
    println!(
        "{} {}: {}",
        Icons::INFO.style(theme().info.clone()),
        label.style(theme().dim.clone()),
        value
    );
}

pub fn section(title: &str) {
    println!();
    println!("━{}━", title.style(theme().header.clone()));
}

pub fn dim(text: &str) -> String {
    text.style(theme().dim.clone()).to_string()
}

pub fn label(text: &str) -> String {
    text.style(theme().label.clone()).to_string()
}

/// Show a notice the way a modal would: boxed, on stderr
pub fn notice(notice: &Notice) {
    let style = if notice.is_recoverable() {
        theme().warn.clone()
    } else {
        theme().error.clone()
    };
    let boxed = message_box(notice.title(), &notice.message());
    eprintln!("{}", boxed.style(style));
}
