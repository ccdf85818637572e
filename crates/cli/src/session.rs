//! Reading commands, handing them to the router and showing what happened.

use std::io::{BufRead, Write};

use cake_collate_core::file_handling::Storage;
use cake_collate_core::logic::Logic;
use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute};
use log::debug;

use crate::display::{print_feedback, print_help, print_view, View};
use crate::error::Result;

const PROMPT: &str = "cakecollate> ";

/// How a single command went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
    Exit,
}

/// Runs one line of input and prints its feedback, the help text if asked
/// for, and the list the command affects.
///
/// # Errors
///
/// Only fails if writing to `out` fails. A command that fails is reported
/// to `out` and gives [`Outcome::Failed`].
pub fn run_command<S: Storage>(
    logic: &mut Logic<S>,
    input: &str,
    out: &mut impl Write,
) -> Result<Outcome> {
    match logic.execute(input) {
        Ok(result) => {
            print_feedback(out, &result.feedback, true)?;
            if result.show_help {
                print_help(out)?;
            }
            if result.exit {
                return Ok(Outcome::Exit);
            }
            print_view(out, View::after(input), logic.model())?;
            Ok(Outcome::Succeeded)
        }
        Err(e) => {
            debug!("Command `{input}` failed: {e:?}");
            print_feedback(out, &e.to_string(), false)?;
            Ok(Outcome::Failed)
        }
    }
}

/// Reads commands from `input` until `exit` or end of input.
///
/// # Errors
///
/// Fails if reading `input` or writing `out` fails.
pub fn run_session<S: Storage>(
    logic: &mut Logic<S>,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print("Welcome to CakeCollate! Type `help` to see every command.\n"),
        SetAttribute(Attribute::Reset)
    )?;
    print_view(out, View::Orders, logic.model())?;

    let mut lines = input.lines();
    loop {
        queue!(out, Print(PROMPT))?;
        out.flush()?;

        let Some(line) = lines.next() else {
            queue!(out, Print("\n"))?;
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        if run_command(logic, &line, out)? == Outcome::Exit {
            break;
        }
    }

    out.flush()?;
    Ok(())
}
