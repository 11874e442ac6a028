use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

use plead_core::engine::evaluate;
use plead_core::errors::SubmitError;
use plead_core::session::Session;
use plead_metrics::default_scorer;

use crate::cli::args::RunArgs;
use crate::cli::commands::print_ruling;
use crate::exit_codes;

/// Interactive questionnaire: one question per claim element, re-prompting
/// on blank input, then the ruling once all three are answered.
pub fn execute(args: &RunArgs) -> Result<i32> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut session = Session::new();

    while let Some(element) = session.current_prompt() {
        println!("{}", element.name());
        println!("{}", element.question());
        print!("> ");
        io::stdout().flush().context("failed to flush prompt")?;

        let Some(line) = lines.next() else {
            bail!("input ended before all elements of the claim were answered");
        };
        let line = line.context("failed to read answer")?;
        match session.submit(&line) {
            Ok(()) => println!(),
            Err(SubmitError::EmptyAnswer) => {
                eprintln!("Please provide specific facts for this element of the claim.");
            }
            Err(e @ SubmitError::Complete) => return Err(e.into()),
        }
    }

    let scorer = default_scorer();
    let ruling = evaluate(session.answers(), scorer.as_ref());
    print_ruling(&ruling, args.format)?;
    Ok(exit_codes::SUCCESS)
}
