// File: src/store.rs
//! In-memory ordered task list. Task numbers are 1-based at the API
//! boundary, matching what the user sees, and 0-based internally.
use crate::model::Task;
use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum StoreError {
    #[error("Task number {number} is out of bounds! Please try again")]
    OutOfRange { number: usize },
}

#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a task and returns the updated count.
    pub fn add(&mut self, task: Task) -> usize {
        self.tasks.push(task);
        self.tasks.len()
    }

    /// Maps a 1-based task number to a valid internal index. `0` and
    /// anything past the end fail the same way.
    fn resolve(&self, number: usize) -> Result<usize, StoreError> {
        number
            .checked_sub(1)
            .filter(|i| *i < self.tasks.len())
            .ok_or(StoreError::OutOfRange { number })
    }

    pub fn mark_done(&mut self, number: usize) -> Result<&Task, StoreError> {
        let i = self.resolve(number)?;
        self.tasks[i].mark_done();
        Ok(&self.tasks[i])
    }

    pub fn mark_not_done(&mut self, number: usize) -> Result<&Task, StoreError> {
        let i = self.resolve(number)?;
        self.tasks[i].mark_not_done();
        Ok(&self.tasks[i])
    }

    /// Removes the task and returns it for confirmation messaging.
    pub fn remove(&mut self, number: usize) -> Result<Task, StoreError> {
        let i = self.resolve(number)?;
        Ok(self.tasks.remove(i))
    }
}
