// File: src/repl.rs
//! Console front-end: reads one command per line from stdin and prints
//! separator-delimited, indented response blocks. All task logic lives in
//! the controller; this layer only moves text.
use crate::config::Config;
use crate::context::AppContext;
use crate::controller::TaskController;
use anyhow::Result;
use std::io::{self, BufRead, Write};

pub fn separator(width: usize) -> String {
    "_".repeat(width)
}

/// Prefixes every line of `msg` with `width` spaces.
pub fn indent_message(msg: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    msg.lines()
        .map(|line| format!("{}{}", pad, line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn print_block(out: &mut impl Write, msg: &str, config: &Config) -> io::Result<()> {
    writeln!(out, "{}", separator(config.separator_width))?;
    writeln!(out, "{}", indent_message(msg, config.indent_width))?;
    writeln!(out, "{}", separator(config.separator_width))?;
    Ok(())
}

/// Runs the interactive loop until the exit command or EOF.
pub fn run(ctx: &dyn AppContext) -> Result<()> {
    let config = Config::load_or_default(ctx);
    let mut controller = TaskController::new(ctx, &config)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_block(&mut stdout, &TaskController::greeting(), &config)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let response = controller.handle_line(&line);
        print_block(&mut stdout, &response.text, &config)?;
        if response.exit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_message_multiline() {
        assert_eq!(indent_message("a\nb", 2), "  a\n  b");
        assert_eq!(indent_message("single", 4), "    single");
    }

    #[test]
    fn test_separator_width() {
        assert_eq!(separator(5), "_____");
    }
}
