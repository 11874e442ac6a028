use anyhow::Result;

use plead_core::model::ClaimElement;

use crate::exit_codes;

pub fn execute() -> Result<i32> {
    for element in ClaimElement::ALL {
        println!("{}", element.name());
        println!("  {}", element.question());
        println!();
    }
    Ok(exit_codes::SUCCESS)
}
