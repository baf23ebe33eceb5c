pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{dim, header, info, label, notice, section, selected, status, success, warn};
pub use table::{message_box, teachers_table, TeacherRow};
pub use theme::{theme, Theme};
