pub mod prompts;
pub mod run;
pub mod score;

use anyhow::Result;

use plead_core::engine::Ruling;
use plead_core::report::{console, json};

use super::args::{Cli, Command, OutputFormat};

pub fn dispatch(cli: Cli) -> Result<i32> {
    match cli.cmd {
        Command::Run(args) => run::execute(&args),
        Command::Score(args) => score::execute(&args),
        Command::Prompts => prompts::execute(),
    }
}

pub(crate) fn print_ruling(ruling: &Ruling, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", console::render_ruling(ruling)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json::ruling_to_json(ruling))?
        ),
    }
    Ok(())
}
