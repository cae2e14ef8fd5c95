//! Terminal front end for the conflict shell

mod style;

use crate::cli::style::{Stylize, check};
use anstream::println;
use exbranch::error::{Error, Result};
use exbranch::resolver::snapshot::{load_snapshot, write_operations};
use exbranch::resolver::ConflictResolver;
use exbranch::shell::{ConflictShell, Flow, Outcome, PROMPT, WELCOME};
use std::fs::File;
use std::io::{BufWriter, IsTerminal, Write};
use std::path::Path;

/// Load a snapshot, run the shell, and persist operations on commit.
///
/// When stdin is a terminal the prompt goes through dialoguer; otherwise
/// lines are read straight from stdin so the shell can be scripted.
pub fn run(snapshot_path: &Path, output: Option<&Path>) -> Result<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let resolver = snapshot.into_resolver();

    let conflict_count = resolver.conflicts().len();
    println!(
        "{} {} conflict(s) to solve for experiment {}",
        "Branching:".emphasis(),
        conflict_count.accent(),
        resolver.experiment_name().accent()
    );

    let mut shell = ConflictShell::new(resolver);
    let outcome = if std::io::stdin().is_terminal() {
        run_interactive(&mut shell)?
    } else {
        let mut out = std::io::stdout();
        shell.run(std::io::stdin().lock(), &mut out)?
    };

    match outcome {
        Outcome::Committed => {
            let resolver = shell.into_resolver();
            let operations = resolver.operations();
            persist_operations(output, &operations)?;
            println!(
                "{} Committed {} operation(s)",
                check(),
                operations.len().accent()
            );
        }
        Outcome::Aborted => {
            println!("{}", "Aborted - no operations saved".muted());
        }
    }
    Ok(())
}

/// Prompt loop over dialoguer for interactive sessions.
fn run_interactive<R: ConflictResolver>(shell: &mut ConflictShell<R>) -> Result<Outcome> {
    let mut out = std::io::stdout();
    writeln!(out, "{WELCOME}")?;
    loop {
        let line: String = match dialoguer::Input::new()
            .with_prompt(PROMPT.trim_end())
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            // Closed terminal or interrupt behaves like abort
            Err(dialoguer::Error::IO(e)) => {
                tracing::debug!(error = %e, "prompt input ended");
                return Ok(Outcome::Aborted);
            }
        };
        if let Flow::Stop(outcome) = shell.dispatch(&line, &mut out)? {
            return Ok(outcome);
        }
    }
}

/// Write committed operations to `--output`, or stdout when absent.
fn persist_operations(output: Option<&Path>, operations: &[exbranch::Operation]) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(Error::Io)?;
            let mut writer = BufWriter::new(file);
            write_operations(&mut writer, operations)?;
            writer.flush()?;
        }
        None => {
            let mut out = std::io::stdout();
            write_operations(&mut out, operations)?;
        }
    }
    Ok(())
}
