// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.

pub fn print_help(binary_name: &str) {
    println!(
        "Afaire v{} - a small line-oriented task tracker",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("INTERACTIVE COMMANDS (one per line):");
    println!("    list                                    Show all tasks");
    println!("    todo <description>                      Add a plain to-do");
    println!("    deadline <description> /by <when>       Add a deadline-bound task");
    println!("    event <description> /from <start> /to <end>");
    println!("                                            Add a time-ranged event");
    println!("    mark <n>                                Mark task n as done");
    println!("    unmark <n>                              Mark task n as not done");
    println!("    delete <n>                              Remove task n");
    println!("    bye                                     Save state and quit");
    println!();
    println!("EXAMPLES:");
    println!("    todo read book");
    println!("    deadline submit report /by Sunday");
    println!("    event team sync /from Mon 2pm /to Mon 3pm");
    println!();
    println!("Tasks are stored one per line in tasks.txt under the data directory.");
}
