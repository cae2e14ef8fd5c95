//! Interactive shell for solving branching conflicts
//!
//! [`ConflictShell`] parses one line into a [`Command`], dispatches it
//! against the resolver, and renders plain text. It owns no conflict state;
//! every query and mutation goes through [`ConflictResolver`].

mod expand;
mod render;

pub use expand::expand_args;
pub use render::describe;

use crate::error::Result;
use crate::resolver::ConflictResolver;
use std::io::{BufRead, Write};
use tracing::debug;

/// Prompt printed before every input line.
pub const PROMPT: &str = "(exbranch) ";

/// Welcome banner printed when the loop starts.
pub const WELCOME: &str = "Welcome to the experiment branching interactive conflicts solver. \
Type `help` to list commands. You can type `abort` at any moment to quit without saving.";

/// Closing message printed by `abort`.
const CLOSING: &str = "Closing interactive conflicts solver";

/// How the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `commit` was entered; the caller should persist the operations.
    Committed,
    /// `abort` was entered (or input ended); nothing should be persisted.
    Aborted,
}

/// Loop control returned by [`ConflictShell::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading commands.
    Continue,
    /// Stop the loop with the given outcome.
    Stop(Outcome),
}

/// The closed command set of the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show all conflicts, or one dimension's conflict
    Status {
        /// Dimension to show; `None` shows the full partition
        dimension: Option<String>,
    },
    /// Rename the experiment
    Name {
        /// First token of the argument, if any
        value: Option<String>,
    },
    /// Keep dimensions in the branched configuration
    Add {
        /// Raw argument string, expanded at dispatch time
        args: String,
    },
    /// Drop dimensions from the branched configuration
    Remove {
        /// Raw argument string, expanded at dispatch time
        args: String,
    },
    /// Mark dimensions unsolved again
    Reset {
        /// Raw argument string, expanded at dispatch time
        args: String,
    },
    /// Map an old dimension name onto a new one
    Rename {
        /// Whitespace-split tokens; needs at least two
        tokens: Vec<String>,
    },
    /// Print the operation list and stop
    Commit,
    /// Stop without saving
    Abort,
    /// List available commands
    Help,
}

/// Result of parsing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Nothing but whitespace
    Blank,
    /// First token is not a known verb
    Unknown(String),
    /// A recognized command
    Command(Command),
}

impl Command {
    /// Parse one line into a verb plus raw argument string.
    pub fn parse(line: &str) -> ParsedLine {
        let trimmed = line.trim();
        let mut parts = trimmed.splitn(2, char::is_whitespace);
        let Some(verb) = parts.next().filter(|v| !v.is_empty()) else {
            return ParsedLine::Blank;
        };
        let arg = parts.next().unwrap_or("").trim();

        let command = match verb {
            "status" => Self::Status {
                dimension: first_token(arg),
            },
            "name" => Self::Name {
                value: first_token(arg),
            },
            "add" => Self::Add {
                args: arg.to_string(),
            },
            "remove" => Self::Remove {
                args: arg.to_string(),
            },
            "reset" => Self::Reset {
                args: arg.to_string(),
            },
            "rename" => Self::Rename {
                tokens: arg.split_whitespace().map(String::from).collect(),
            },
            "commit" => Self::Commit,
            "abort" => Self::Abort,
            "help" => Self::Help,
            _ => return ParsedLine::Unknown(verb.to_string()),
        };
        ParsedLine::Command(command)
    }

    /// Whether this command stops the loop.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Commit | Self::Abort)
    }
}

fn first_token(arg: &str) -> Option<String> {
    arg.split_whitespace().next().map(String::from)
}

/// Synchronous read-eval-print loop over a [`ConflictResolver`].
pub struct ConflictShell<R> {
    resolver: R,
}

impl<R: ConflictResolver> ConflictShell<R> {
    /// Wrap a resolver in a shell.
    pub const fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Borrow the underlying resolver.
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Unwrap the resolver, e.g. to read its operations after the loop.
    pub fn into_resolver(self) -> R {
        self.resolver
    }

    /// Drive the loop until `commit`, `abort`, or end of input.
    ///
    /// Prints the welcome banner and a prompt before each line. End of input
    /// behaves like `abort`.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<Outcome> {
        writeln!(out, "{WELCOME}")?;
        let mut lines = input.lines();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;
            let Some(line) = lines.next() else { break };
            if let Flow::Stop(outcome) = self.dispatch(&line?, out)? {
                return Ok(outcome);
            }
        }
        writeln!(out)?;
        writeln!(out, "{CLOSING}")?;
        Ok(Outcome::Aborted)
    }

    /// Execute one line and report whether the loop should continue.
    ///
    /// Resolver rejections are converted into one-line messages here; only
    /// I/O failures on `out` propagate.
    pub fn dispatch(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let command = match Command::parse(line) {
            ParsedLine::Blank => return Ok(Flow::Continue),
            ParsedLine::Unknown(verb) => {
                writeln!(out, "Unknown command '{verb}'. Type 'help' for available commands.")?;
                return Ok(Flow::Continue);
            }
            ParsedLine::Command(command) => command,
        };
        debug!(?command, "dispatching");

        match command {
            Command::Status { dimension: None } => self.print_status(out)?,
            Command::Status {
                dimension: Some(name),
            } => self.print_dimension_status(&name, out)?,
            Command::Name { value: None } => writeln!(out, "Invalid experiment name")?,
            Command::Name { value: Some(name) } => {
                if self.resolver.set_experiment_name(&name).is_err() {
                    writeln!(out, "Invalid experiment name")?;
                }
            }
            Command::Add { args } => self.apply_to_all(&args, R::add_dimension, out)?,
            Command::Remove { args } => self.apply_to_all(&args, R::remove_dimension, out)?,
            Command::Reset { args } => self.apply_to_all(&args, R::reset_dimension, out)?,
            Command::Rename { tokens } => {
                if tokens.len() < 2 {
                    writeln!(out, "Missing arguments")?;
                } else if self
                    .resolver
                    .rename_dimension(&tokens[0], &tokens[1])
                    .is_err()
                {
                    writeln!(out, "Invalid dimension(s) name(s)")?;
                }
            }
            Command::Commit => {
                for op in self.resolver.operations() {
                    writeln!(out, "{op}")?;
                }
                return Ok(Flow::Stop(Outcome::Committed));
            }
            Command::Abort => {
                writeln!(out, "{CLOSING}")?;
                return Ok(Flow::Stop(Outcome::Aborted));
            }
            Command::Help => print_help(out)?,
        }
        Ok(Flow::Continue)
    }

    /// `status` with no argument: solved section, then unsolved.
    fn print_status(&self, out: &mut impl Write) -> Result<()> {
        let solved = self.resolver.conflicts_with_solved_state(true);
        let unsolved = self.resolver.conflicts_with_solved_state(false);

        if !solved.is_empty() {
            writeln!(out, "Solved")?;
            for conflict in &solved {
                writeln!(out, "{}", describe(&self.resolver, conflict))?;
            }
        }
        if !unsolved.is_empty() {
            if !solved.is_empty() {
                writeln!(out)?;
            }
            writeln!(out, "Unsolved")?;
            for conflict in &unsolved {
                writeln!(out, "{}", describe(&self.resolver, conflict))?;
            }
        }
        Ok(())
    }

    /// `status <name>`: solved state plus description for one dimension.
    fn print_dimension_status(&self, name: &str, out: &mut impl Write) -> Result<()> {
        match self.resolver.dimension_conflict(name) {
            Ok(conflict) => {
                writeln!(out, "{}", if conflict.is_solved { "Solved" } else { "Unsolved" })?;
                writeln!(out, "{}", describe(&self.resolver, &conflict))?;
            }
            Err(_) => writeln!(out, "Invalid dimension name {name}")?,
        }
        Ok(())
    }

    /// Expand the raw argument and feed each name to `mutate`, reporting
    /// rejected names individually so one bad name does not block the rest.
    fn apply_to_all(
        &mut self,
        raw: &str,
        mutate: fn(&mut R, &str) -> Result<()>,
        out: &mut impl Write,
    ) -> Result<()> {
        if raw.is_empty() {
            writeln!(out, "Missing arguments")?;
            return Ok(());
        }
        for name in expand_args(&self.resolver, raw) {
            if mutate(&mut self.resolver, &name).is_err() {
                writeln!(out, "Invalid dimension name {name}")?;
            }
        }
        Ok(())
    }
}

fn print_help(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Available commands:")?;
    writeln!(out, "  status [name]      show conflicts, or one dimension's conflict")?;
    writeln!(out, "  add <names>        keep new/changed dimensions")?;
    writeln!(out, "  remove <names>     drop missing dimensions")?;
    writeln!(out, "  rename <old> <new> map an old dimension onto a new one")?;
    writeln!(out, "  reset <names>      mark dimensions unsolved again")?;
    writeln!(out, "  name <value>       rename the experiment")?;
    writeln!(out, "  commit             print the operation list and exit")?;
    writeln!(out, "  abort              exit without saving")?;
    writeln!(
        out,
        "Names accept `prefix*` wildcards; `~new`, `~changed` and `~missing` select all unsolved conflicts of that status."
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(Command::parse(""), ParsedLine::Blank);
        assert_eq!(Command::parse("   "), ParsedLine::Blank);
    }

    #[test]
    fn test_parse_unknown_verb() {
        assert_eq!(
            Command::parse("frobnicate lr"),
            ParsedLine::Unknown("frobnicate".to_string())
        );
    }

    #[test]
    fn test_parse_status_takes_first_token() {
        assert_eq!(
            Command::parse("status lr extra"),
            ParsedLine::Command(Command::Status {
                dimension: Some("lr".to_string())
            })
        );
        assert_eq!(
            Command::parse("status"),
            ParsedLine::Command(Command::Status { dimension: None })
        );
    }

    #[test]
    fn test_parse_add_keeps_raw_args() {
        assert_eq!(
            Command::parse("add lr* momentum"),
            ParsedLine::Command(Command::Add {
                args: "lr* momentum".to_string()
            })
        );
    }

    #[test]
    fn test_parse_rename_tokens() {
        assert_eq!(
            Command::parse("rename old new"),
            ParsedLine::Command(Command::Rename {
                tokens: vec!["old".to_string(), "new".to_string()]
            })
        );
    }

    #[test]
    fn test_only_commit_and_abort_are_terminal() {
        assert!(Command::Commit.is_terminal());
        assert!(Command::Abort.is_terminal());
        assert!(!Command::Help.is_terminal());
        assert!(!Command::Status { dimension: None }.is_terminal());
        assert!(
            !Command::Add {
                args: String::new()
            }
            .is_terminal()
        );
    }
}
