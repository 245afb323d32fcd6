// File: ./src/model/display.rs
use crate::model::item::{Task, TaskKind};

pub trait TaskDisplay {
    fn checkbox_symbol(&self) -> &'static str;
    fn display_line(&self) -> String;
}

impl TaskDisplay for Task {
    fn checkbox_symbol(&self) -> &'static str {
        if self.done { "[X]" } else { "[ ]" }
    }

    /// Renders the canonical one-line form, e.g.
    /// `[D][ ] submit report (by: Sunday)`.
    fn display_line(&self) -> String {
        let mut s = format!(
            "[{}]{} {}",
            self.kind.tag(),
            self.checkbox_symbol(),
            self.description
        );
        match &self.kind {
            TaskKind::Todo => {}
            TaskKind::Deadline { by } => {
                s.push_str(&format!(" (by: {})", by));
            }
            TaskKind::Event { start, end } => {
                s.push_str(&format!(" (from: {} to: {})", start, end));
            }
        }
        s
    }
}
