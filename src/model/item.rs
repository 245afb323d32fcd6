// File: ./src/model/item.rs

/// The closed set of task kinds. Date/time fields are free text by design;
/// no calendar semantics are attached to them.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TaskKind {
    Todo,
    Deadline { by: String },
    Event { start: String, end: String },
}

impl TaskKind {
    /// Single-letter tag used in both the display string and the
    /// persisted encoding.
    pub fn tag(&self) -> &'static str {
        match self {
            TaskKind::Todo => "T",
            TaskKind::Deadline { .. } => "D",
            TaskKind::Event { .. } => "E",
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Task {
    pub description: String,
    pub done: bool,
    pub kind: TaskKind,
}

impl Task {
    /// Builds a task, trimming all text fields. Callers are expected to have
    /// rejected empty fields already; construction itself is infallible.
    pub fn new(description: &str, done: bool, kind: TaskKind) -> Self {
        let kind = match kind {
            TaskKind::Todo => TaskKind::Todo,
            TaskKind::Deadline { by } => TaskKind::Deadline {
                by: by.trim().to_string(),
            },
            TaskKind::Event { start, end } => TaskKind::Event {
                start: start.trim().to_string(),
                end: end.trim().to_string(),
            },
        };
        Self {
            description: description.trim().to_string(),
            done,
            kind,
        }
    }

    pub fn todo(description: &str) -> Self {
        Self::new(description, false, TaskKind::Todo)
    }

    pub fn deadline(description: &str, by: &str) -> Self {
        Self::new(
            description,
            false,
            TaskKind::Deadline { by: by.to_string() },
        )
    }

    pub fn event(description: &str, start: &str, end: &str) -> Self {
        Self::new(
            description,
            false,
            TaskKind::Event {
                start: start.to_string(),
                end: end.to_string(),
            },
        )
    }

    /// Idempotent: marking a done task done again is a no-op.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Idempotent: unmarking a pending task is a no-op.
    pub fn mark_not_done(&mut self) {
        self.done = false;
    }
}
