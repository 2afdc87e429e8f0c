//! Prompt output.

use crate::app::api::{self, FormatsOutcome, GenerateOutcome, PromptFormat};
use crate::domain::AppError;

pub fn run_generate(offline: bool) -> Result<(), AppError> {
    let outcome = api::generate(offline)?;
    print_generate(&outcome);
    Ok(())
}

pub(super) fn print_generate(outcome: &GenerateOutcome) {
    println!("{}", outcome.prompt);
    eprintln!("{}", outcome.status);
}

pub fn run_formats(offline: bool, only: Option<PromptFormat>) -> Result<(), AppError> {
    let outcome = api::formats(offline)?;
    print_formats(&outcome, only);
    Ok(())
}

pub(super) fn print_formats(outcome: &FormatsOutcome, only: Option<PromptFormat>) {
    let formats = match outcome {
        FormatsOutcome::Formats(formats) => formats,
        FormatsOutcome::Unavailable(status) => {
            println!("{}", status);
            return;
        }
    };

    if let Some(format) = only {
        println!("{}", format.pick(formats));
        return;
    }

    for (index, format) in PromptFormat::ALL.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("── {} ──", format.title());
        println!("{}", format.pick(formats));
    }
}
