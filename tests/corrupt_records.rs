// Load-time tolerance for corrupt persisted records: bad lines are skipped
// with a warning and never abort the load or poison later lines.
use afaire::context::{AppContext, TestContext};
use afaire::storage::TaskFile;
use std::fs;

fn write_store(ctx: &TestContext, contents: &str) {
    let path = ctx.get_task_file_path().unwrap();
    fs::write(&path, contents).unwrap();
}

#[test]
fn test_corrupt_lines_are_skipped_and_load_continues() {
    let ctx = TestContext::new();
    write_store(
        &ctx,
        "T | 0 | read book\n\
         D | 1 | wrong arity\n\
         X | 0 | unknown tag\n\
         garbage line\n\
         E | 0 | team sync | Mon 2pm | Mon 3pm\n",
    );

    let file = TaskFile::acquire(&ctx).unwrap();
    let tasks = file.load();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].description, "read book");
    assert_eq!(tasks[1].description, "team sync");
}

#[test]
fn test_blank_lines_are_ignored() {
    let ctx = TestContext::new();
    write_store(&ctx, "\nT | 0 | a\n\n\nT | 1 | b\n");

    let file = TaskFile::acquire(&ctx).unwrap();
    let tasks = file.load();

    assert_eq!(tasks.len(), 2);
    assert!(!tasks[0].done);
    assert!(tasks[1].done);
}

#[test]
fn test_missing_store_is_bootstrapped_empty() {
    let ctx = TestContext::new();
    let path = ctx.get_task_file_path().unwrap();
    assert!(!path.exists());

    let file = TaskFile::acquire(&ctx).unwrap();
    assert!(path.exists(), "acquire bootstraps a missing store");
    assert!(file.load().is_empty());
}

#[test]
fn test_save_rewrites_whole_file() {
    let ctx = TestContext::new();
    write_store(&ctx, "T | 0 | stale entry\n");

    let file = TaskFile::acquire(&ctx).unwrap();
    let mut tasks = file.load();
    tasks.remove(0);
    file.save(&tasks).unwrap();

    let contents = fs::read_to_string(ctx.get_task_file_path().unwrap()).unwrap();
    assert!(contents.is_empty(), "save must overwrite prior content");
}
