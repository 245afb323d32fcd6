use afaire::cli;
use afaire::context::StandardContext;
use afaire::repl;
use anyhow::Result;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h" || a == "help") {
        cli::print_help("afaire");
        return Ok(());
    }

    // Optional --root <path> override for config and data directories.
    let mut root: Option<PathBuf> = None;
    let mut i = 1;
    while i < args.len() {
        if (args[i] == "--root" || args[i] == "-r") && i + 1 < args.len() {
            root = Some(PathBuf::from(&args[i + 1]));
            i += 2;
        } else {
            i += 1;
        }
    }

    // Warnings and errors (corrupt records, IO failures) go to stderr so
    // they never interleave with the response blocks on stdout.
    let _ = TermLogger::init(
        LevelFilter::Warn,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let ctx = StandardContext::new(root);
    repl::run(&ctx)
}
