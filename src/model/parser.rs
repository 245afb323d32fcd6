// File: ./src/model/parser.rs
//! Turns one line of user input into a typed [`Command`].
//!
//! Dispatch is on the first whitespace-delimited token only, via an
//! exhaustive keyword match. A `todo` whose description happens to contain
//! the word `mark` can therefore never be mistaken for a `mark` command.
use thiserror::Error;

/// A fully validated command. Index-bearing variants carry the 1-based
/// number exactly as the user typed it; bounds checking happens in the
/// task store.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    Exit,
    List,
    Mark(usize),
    Unmark(usize),
    Delete(usize),
    AddTodo {
        description: String,
    },
    AddDeadline {
        description: String,
        by: String,
    },
    AddEvent {
        description: String,
        start: String,
        end: String,
    },
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ParseError {
    #[error("I don't know what to do with this command! Please try again")]
    UnknownCommand,
    #[error("Unexpected number of parameters for '{0}'! Please try again")]
    WrongArgCount(&'static str),
    #[error("'{0}' is not a valid task number! Please try again")]
    InvalidIndex(String),
    #[error("Invalid format for your {0} task! Please try again")]
    InvalidTaskFormat(&'static str),
}

/// Parses a single line of input. Leading/trailing whitespace is ignored;
/// an empty line is an unknown command.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Err(ParseError::UnknownCommand);
    };
    let rest: Vec<&str> = tokens.collect();

    match keyword {
        "bye" => expect_no_args("bye", &rest, Command::Exit),
        "list" => expect_no_args("list", &rest, Command::List),
        "mark" => parse_index("mark", &rest).map(Command::Mark),
        "unmark" => parse_index("unmark", &rest).map(Command::Unmark),
        "delete" => parse_index("delete", &rest).map(Command::Delete),
        "todo" => parse_todo(&rest),
        "deadline" => parse_deadline(&rest),
        "event" => parse_event(&rest),
        _ => Err(ParseError::UnknownCommand),
    }
}

fn expect_no_args(
    keyword: &'static str,
    rest: &[&str],
    command: Command,
) -> Result<Command, ParseError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(ParseError::WrongArgCount(keyword))
    }
}

/// `mark <n>` / `unmark <n>` / `delete <n>`: exactly one token, a positive
/// integer. Zero parses fine here and is rejected later as out of range,
/// matching the treatment of any other non-existent task number.
fn parse_index(keyword: &'static str, rest: &[&str]) -> Result<usize, ParseError> {
    let [arg] = rest else {
        return Err(ParseError::WrongArgCount(keyword));
    };
    arg.parse::<usize>()
        .map_err(|_| ParseError::InvalidIndex(arg.to_string()))
}

fn parse_todo(rest: &[&str]) -> Result<Command, ParseError> {
    let description = rest.join(" ");
    if description.trim().is_empty() {
        return Err(ParseError::InvalidTaskFormat("ToDo"));
    }
    Ok(Command::AddTodo { description })
}

fn parse_deadline(rest: &[&str]) -> Result<Command, ParseError> {
    let err = || ParseError::InvalidTaskFormat("Deadline");

    let mut description: Vec<&str> = Vec::new();
    let mut by: Vec<&str> = Vec::new();
    let mut seen_by = false;

    for &token in rest {
        if token == "/by" {
            if seen_by {
                return Err(err());
            }
            seen_by = true;
            continue;
        }
        if seen_by {
            by.push(token);
        } else {
            description.push(token);
        }
    }

    if !seen_by {
        return Err(err());
    }
    let description = description.join(" ");
    let by = by.join(" ");
    if description.trim().is_empty() || by.trim().is_empty() {
        return Err(err());
    }
    Ok(Command::AddDeadline { description, by })
}

fn parse_event(rest: &[&str]) -> Result<Command, ParseError> {
    let err = || ParseError::InvalidTaskFormat("Event");

    // Which marker was seen most recently decides where plain tokens go.
    #[derive(Clone, Copy)]
    enum Segment {
        Description,
        Start,
        End,
    }

    let mut description: Vec<&str> = Vec::new();
    let mut start: Vec<&str> = Vec::new();
    let mut end: Vec<&str> = Vec::new();
    let mut segment = Segment::Description;
    let mut seen_from = false;
    let mut seen_to = false;

    for token in rest {
        match *token {
            "/from" => {
                if seen_from {
                    return Err(err());
                }
                seen_from = true;
                segment = Segment::Start;
            }
            "/to" => {
                if seen_to {
                    return Err(err());
                }
                seen_to = true;
                segment = Segment::End;
            }
            word => match segment {
                Segment::Description => description.push(word),
                Segment::Start => start.push(word),
                Segment::End => end.push(word),
            },
        }
    }

    if !seen_from || !seen_to {
        return Err(err());
    }
    let description = description.join(" ");
    let start = start.join(" ");
    let end = end.join(" ");
    if description.trim().is_empty() || start.trim().is_empty() || end.trim().is_empty() {
        return Err(err());
    }
    Ok(Command::AddEvent {
        description,
        start,
        end,
    })
}
