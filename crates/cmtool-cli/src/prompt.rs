use std::io::{self, IsTerminal, StdinLock, Stdout};

use cmtool_core::{Confirm, LinePrompt, parse_answer};
use inquire::{CustomType, InquireError};

const RETRY_MESSAGE: &str = "Please respond with 'yes' or 'no' (or 'y' or 'n').";

/// Interactive confirmation on a terminal, plain line reading otherwise.
/// Both accept the same answers.
pub enum TerminalPrompt {
    Interactive,
    Lines(LinePrompt<StdinLock<'static>, Stdout>),
}

impl TerminalPrompt {
    #[must_use]
    pub fn detect() -> Self {
        if io::stdin().is_terminal() && io::stdout().is_terminal() {
            Self::Interactive
        } else {
            Self::Lines(LinePrompt::stdio())
        }
    }
}

fn parse_reply(input: &str) -> Result<bool, ()> {
    parse_answer(input).ok_or(())
}

impl Confirm for TerminalPrompt {
    fn confirm(&self, question: &str) -> bool {
        match self {
            Self::Interactive => {
                let message = format!("{question} [y/n]");
                match CustomType::<bool>::new(&message)
                    .with_parser(&parse_reply)
                    .with_formatter(&|answer: bool| String::from(if answer { "yes" } else { "no" }))
                    .with_error_message(RETRY_MESSAGE)
                    .prompt()
                {
                    Ok(answer) => answer,
                    Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                        false
                    }
                    Err(err) => {
                        cmtool_logger::debug(&format!("Prompt failed: {err}"), false);
                        false
                    }
                }
            }
            Self::Lines(prompt) => prompt.confirm(question),
        }
    }
}
