// Manages the flat-file backing store for the task list.
//
// Format: one task per line, fields joined by " | ".
//   T | {0/1} | {description}
//   D | {0/1} | {description} | {by}
//   E | {0/1} | {description} | {start} | {end}
use crate::context::AppContext;
use crate::model::{Task, TaskKind};
use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs;
use std::path::{Path, PathBuf};

const FIELD_DELIMITER: &str = " | ";

/// Atomic write: Write to .tmp file then rename.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
    let path = path.as_ref();
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

/// Encodes a task as its persisted line (no trailing newline).
pub fn encode_line(task: &Task) -> String {
    let done = if task.done { "1" } else { "0" };
    match &task.kind {
        TaskKind::Todo => format!("T | {} | {}", done, task.description),
        TaskKind::Deadline { by } => {
            format!("D | {} | {} | {}", done, task.description, by)
        }
        TaskKind::Event { start, end } => {
            format!("E | {} | {} | {} | {}", done, task.description, start, end)
        }
    }
}

/// Decodes one persisted line. The kind tag decides the expected arity
/// (3 for T, 4 for D, 5 for E); any mismatch or unknown tag is a corrupt
/// record.
pub fn decode_line(line: &str) -> Result<Task> {
    let corrupt = || anyhow::anyhow!("Corrupt data entry: {}", line);

    let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if parts.len() < 3 {
        return Err(corrupt());
    }

    let tag = parts[0].trim();
    let done = parts[1].trim() == "1";
    let description = parts[2].trim();
    if description.is_empty() {
        return Err(corrupt());
    }

    let task = match tag {
        "T" => {
            if parts.len() != 3 {
                return Err(corrupt());
            }
            Task::new(description, done, TaskKind::Todo)
        }
        "D" => {
            if parts.len() != 4 {
                return Err(corrupt());
            }
            let by = parts[3].trim();
            if by.is_empty() {
                return Err(corrupt());
            }
            Task::new(
                description,
                done,
                TaskKind::Deadline { by: by.to_string() },
            )
        }
        "E" => {
            if parts.len() != 5 {
                return Err(corrupt());
            }
            let start = parts[3].trim();
            let end = parts[4].trim();
            if start.is_empty() || end.is_empty() {
                return Err(corrupt());
            }
            Task::new(
                description,
                done,
                TaskKind::Event {
                    start: start.to_string(),
                    end: end.to_string(),
                },
            )
        }
        _ => return Err(corrupt()),
    };
    Ok(task)
}

/// Exclusively-owned handle to the backing store.
///
/// Acquisition takes an exclusive sidecar lock which is held until the
/// handle is dropped, so a second process (or a second handle in the same
/// process) cannot open the same store and corrupt it. This replaces the
/// original design's runtime single-instance counter with a structural
/// constraint.
#[derive(Debug)]
pub struct TaskFile {
    path: PathBuf,
    lock: fs::File,
}

impl TaskFile {
    /// Opens the backing store under the context's data directory,
    /// bootstrapping the file if absent, and takes the exclusive lock.
    pub fn acquire(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_task_file_path()?;
        if !path.exists() {
            fs::File::create(&path)
                .with_context(|| format!("Failed to create task file: {}", path.display()))?;
        }

        let lock_path = Self::lock_path(&path);
        let lock = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("Failed to open lock file: {}", lock_path.display()))?;
        lock.try_lock_exclusive().with_context(|| {
            format!(
                "Task file '{}' is in use by another instance",
                path.display()
            )
        })?;

        Ok(Self { path, lock })
    }

    fn lock_path(file_path: &Path) -> PathBuf {
        let mut lock_path = file_path.to_path_buf();
        if let Some(ext) = lock_path.extension() {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".lock");
            lock_path.set_extension(new_ext);
        } else {
            lock_path.set_extension("lock");
        }
        lock_path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all tasks. Blank lines are ignored; corrupt lines are logged
    /// and skipped without aborting the load. A read failure is logged and
    /// yields an empty list; it is never fatal to the caller.
    pub fn load(&self) -> Vec<Task> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                log::error!("Failed to read task file '{}': {}", self.path.display(), e);
                return Vec::new();
            }
        };

        let mut tasks = Vec::new();
        for line in contents.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match decode_line(line) {
                Ok(task) => tasks.push(task),
                Err(e) => log::warn!("{}", e),
            }
        }
        tasks
    }

    /// Writes every task's encoding, one per line, replacing prior content.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let mut contents = String::new();
        for task in tasks {
            contents.push_str(&encode_line(task));
            contents.push('\n');
        }
        atomic_write(&self.path, contents)
            .with_context(|| format!("Failed to save task file: {}", self.path.display()))
    }
}

impl Drop for TaskFile {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.lock);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_all_kinds() {
        assert_eq!(encode_line(&Task::todo("read book")), "T | 0 | read book");

        let mut deadline = Task::deadline("submit report", "Sunday");
        deadline.mark_done();
        assert_eq!(encode_line(&deadline), "D | 1 | submit report | Sunday");

        assert_eq!(
            encode_line(&Task::event("team sync", "Mon 2pm", "Mon 3pm")),
            "E | 0 | team sync | Mon 2pm | Mon 3pm"
        );
    }

    #[test]
    fn test_decode_roundtrip() {
        let mut original = vec![
            Task::todo("read book"),
            Task::deadline("submit report", "Sunday"),
            Task::event("team sync", "Mon 2pm", "Mon 3pm"),
        ];
        original[1].mark_done();

        for task in &original {
            let decoded = decode_line(&encode_line(task)).unwrap();
            assert_eq!(&decoded, task);
        }
    }

    #[test]
    fn test_decode_rejects_wrong_arity() {
        // T with a stray fourth field
        assert!(decode_line("T | 0 | read book | extra").is_err());
        // D missing its date field
        assert!(decode_line("D | 1 | submit report").is_err());
        // E with only a start
        assert!(decode_line("E | 0 | sync | Mon 2pm").is_err());
    }

    #[test]
    fn test_decode_rejects_unknown_tag_and_garbage() {
        assert!(decode_line("X | 0 | mystery").is_err());
        assert!(decode_line("not a task line").is_err());
        assert!(decode_line("").is_err());
    }

    #[test]
    fn test_decode_done_flag() {
        assert!(decode_line("T | 1 | done task").unwrap().done);
        assert!(!decode_line("T | 0 | pending task").unwrap().done);
    }
}
