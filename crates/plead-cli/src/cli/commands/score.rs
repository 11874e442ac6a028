use std::fs;

use anyhow::{bail, Context, Result};

use plead_core::engine::evaluate;
use plead_core::model::{Answer, ClaimElement};
use plead_core::session::Session;
use plead_metrics::default_scorer;

use crate::cli::args::ScoreArgs;
use crate::cli::commands::print_ruling;
use crate::exit_codes;

/// Non-interactive path: load a YAML answers file and drive it through the
/// same session state machine as the interactive questionnaire.
pub fn execute(args: &ScoreArgs) -> Result<i32> {
    let raw = fs::read_to_string(&args.answers)
        .with_context(|| format!("failed to read answers file {}", args.answers.display()))?;
    let entries: Vec<Answer> = serde_yaml::from_str(&raw)
        .with_context(|| format!("failed to parse YAML in {}", args.answers.display()))?;

    let mut session = Session::new();
    for entry in &entries {
        let Some(expected) = session.current_prompt() else {
            bail!(
                "too many answers: expected exactly {}",
                ClaimElement::ALL.len()
            );
        };
        if entry.element != expected {
            bail!(
                "answer {} is for '{}' but '{}' is next (answers must follow the element order)",
                session.answers().len() + 1,
                entry.element,
                expected
            );
        }
        session
            .submit(&entry.text)
            .with_context(|| format!("answer for '{expected}'"))?;
    }
    if !session.is_complete() {
        bail!(
            "missing answers: got {}, expected {}",
            entries.len(),
            ClaimElement::ALL.len()
        );
    }

    let scorer = default_scorer();
    let ruling = evaluate(session.answers(), scorer.as_ref());
    print_ruling(&ruling, args.format)?;
    Ok(exit_codes::SUCCESS)
}
