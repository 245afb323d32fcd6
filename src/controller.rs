// File: src/controller.rs
//! Central logic controller for task operations.
//! This is the single source of truth for command handling: any front-end
//! feeds one line of input to [`TaskController::handle_line`] and renders
//! the returned response text.
use crate::config::Config;
use crate::context::AppContext;
use crate::model::{Command, Task, TaskDisplay, parse_command};
use crate::storage::TaskFile;
use crate::store::TaskStore;
use anyhow::Result;

/// Response to one line of input. `exit` is only set by the exit command.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Response {
    pub text: String,
    pub exit: bool,
}

impl Response {
    fn message(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: false,
        }
    }
}

pub struct TaskController {
    store: TaskStore,
    file: TaskFile,
    autosave: bool,
}

impl TaskController {
    /// Acquires the backing store (taking its exclusive lock for the life
    /// of the controller) and loads the persisted task list into memory.
    pub fn new(ctx: &dyn AppContext, config: &Config) -> Result<Self> {
        let file = TaskFile::acquire(ctx)?;
        let store = TaskStore::with_tasks(file.load());
        Ok(Self {
            store,
            file,
            autosave: config.autosave,
        })
    }

    pub fn greeting() -> String {
        "Hello! I'm Afaire\nWhat can I do for you?".to_string()
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Processes one command line and returns the response text. Parse,
    /// bounds, and save failures all surface as user-facing messages; none
    /// of them terminates the session.
    pub fn handle_line(&mut self, line: &str) -> Response {
        match parse_command(line) {
            Ok(command) => self.apply(command),
            Err(e) => Response::message(format!("Oh no! {}", e)),
        }
    }

    /// Renders the current task list with 1-based numbering.
    pub fn render_list(&self) -> String {
        let mut text = String::from("Here are the tasks in your list:");
        for (i, task) in self.store.tasks().iter().enumerate() {
            text.push_str(&format!("\n{}.{}", i + 1, task.display_line()));
        }
        text
    }

    fn apply(&mut self, command: Command) -> Response {
        match command {
            Command::Exit => Response {
                text: "Bye. Hope to see you again soon!".to_string(),
                exit: true,
            },
            Command::List => Response::message(self.render_list()),
            Command::AddTodo { description } => self.add_task(Task::todo(&description)),
            Command::AddDeadline { description, by } => {
                self.add_task(Task::deadline(&description, &by))
            }
            Command::AddEvent {
                description,
                start,
                end,
            } => self.add_task(Task::event(&description, &start, &end)),
            Command::Mark(number) => match self.store.mark_done(number) {
                Ok(task) => {
                    let text = format!(
                        "Nice! I've marked this task as done:\n  {}",
                        task.display_line()
                    );
                    self.finish_mutation(text)
                }
                Err(e) => Response::message(format!("Oh no! {}", e)),
            },
            Command::Unmark(number) => match self.store.mark_not_done(number) {
                Ok(task) => {
                    let text = format!(
                        "OK, I've marked this task as not done yet:\n  {}",
                        task.display_line()
                    );
                    self.finish_mutation(text)
                }
                Err(e) => Response::message(format!("Oh no! {}", e)),
            },
            Command::Delete(number) => match self.store.remove(number) {
                Ok(task) => {
                    let text = format!(
                        "Noted. I've removed this task:\n  {}\nNow you have {} tasks in the list.",
                        task.display_line(),
                        self.store.len()
                    );
                    self.finish_mutation(text)
                }
                Err(e) => Response::message(format!("Oh no! {}", e)),
            },
        }
    }

    fn add_task(&mut self, task: Task) -> Response {
        let line = task.display_line();
        let count = self.store.add(task);
        let text = format!(
            "Got it. I've added this task:\n  {}\nNow you have {} tasks in the list.",
            line, count
        );
        self.finish_mutation(text)
    }

    /// Persists after a successful mutation. A failed save is logged and
    /// appended to the response, never fatal.
    fn finish_mutation(&mut self, text: String) -> Response {
        if !self.autosave {
            return Response::message(text);
        }
        match self.file.save(self.store.tasks()) {
            Ok(()) => Response::message(text),
            Err(e) => {
                log::error!("{:#}", e);
                Response::message(format!("{}\nWarning: could not save tasks: {}", text, e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestContext;

    fn controller(ctx: &TestContext) -> TaskController {
        TaskController::new(ctx, &Config::default()).unwrap()
    }

    #[test]
    fn test_worked_example_session() {
        let ctx = TestContext::new();
        let mut c = controller(&ctx);

        c.handle_line("todo read book");
        assert_eq!(
            c.render_list(),
            "Here are the tasks in your list:\n1.[T][ ] read book"
        );

        c.handle_line("deadline submit report /by Sunday");
        assert_eq!(
            c.render_list(),
            "Here are the tasks in your list:\n\
             1.[T][ ] read book\n\
             2.[D][ ] submit report (by: Sunday)"
        );

        c.handle_line("mark 1");
        assert!(c.render_list().contains("1.[T][X] read book"));

        c.handle_line("delete 1");
        assert_eq!(
            c.render_list(),
            "Here are the tasks in your list:\n1.[D][ ] submit report (by: Sunday)"
        );
    }

    #[test]
    fn test_add_message_reports_count() {
        let ctx = TestContext::new();
        let mut c = controller(&ctx);

        let response = c.handle_line("todo read book");
        assert!(!response.exit);
        assert_eq!(
            response.text,
            "Got it. I've added this task:\n  [T][ ] read book\nNow you have 1 tasks in the list."
        );
    }

    #[test]
    fn test_malformed_command_adds_nothing() {
        let ctx = TestContext::new();
        let mut c = controller(&ctx);

        let response = c.handle_line("deadline /by tomorrow");
        assert!(response.text.contains("Deadline"));
        assert!(c.store().is_empty());
    }

    #[test]
    fn test_out_of_range_is_reported_and_loop_continues() {
        let ctx = TestContext::new();
        let mut c = controller(&ctx);
        c.handle_line("todo only");

        for line in ["mark 0", "mark 2", "unmark 5", "delete 9"] {
            let response = c.handle_line(line);
            assert!(!response.exit);
            assert!(response.text.contains("out of bounds"), "line: {}", line);
        }
        assert_eq!(c.store().len(), 1);
    }

    #[test]
    fn test_exit_response() {
        let ctx = TestContext::new();
        let mut c = controller(&ctx);

        let response = c.handle_line("bye");
        assert!(response.exit);
        assert_eq!(response.text, "Bye. Hope to see you again soon!");
    }

    #[test]
    fn test_unrecognized_command() {
        let ctx = TestContext::new();
        let mut c = controller(&ctx);

        let response = c.handle_line("sing me a song");
        assert!(!response.exit);
        assert!(response.text.starts_with("Oh no!"));
    }
}
