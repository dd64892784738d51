//! Interactive prompting.
//!
//! All prompting funnels through [`ask`], so every resolver and wizard
//! shares one abort behavior: an interrupted prompt surfaces as
//! [`CliError::Aborted`], which the dispatcher treats as cancellation
//! rather than failure.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::{CliError, CliResult};

/// A single selectable entry: what the user sees and what the caller
/// gets back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// What to ask.
pub enum PromptSpec<'a> {
    /// Free text, optionally pre-filled and validated. Validation
    /// failures re-prompt; they never abort.
    Text {
        message: &'a str,
        initial: Option<String>,
        validate: Option<fn(&str) -> Result<(), String>>,
    },
    /// Pick one of the choices.
    Select {
        message: &'a str,
        choices: Vec<Choice>,
        initial: usize,
    },
    /// Toggle any number of the choices.
    MultiSelect {
        message: &'a str,
        choices: Vec<Choice>,
        selected: Vec<bool>,
    },
    /// Yes/no question.
    Confirm { message: &'a str, default: bool },
}

/// What came back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Picked(String),
    PickedMany(Vec<String>),
    Confirmed(bool),
}

/// Run a prompt to completion.
pub fn ask(spec: PromptSpec<'_>) -> CliResult<Answer> {
    let theme = ColorfulTheme::default();
    match spec {
        PromptSpec::Text {
            message,
            initial,
            validate,
        } => {
            let mut input = Input::<String>::with_theme(&theme)
                .with_prompt(message)
                .allow_empty(true);
            if let Some(initial) = initial {
                input = input.with_initial_text(initial);
            }
            if let Some(validate) = validate {
                input = input.validate_with(move |value: &String| validate(value));
            }
            input
                .interact_text()
                .map(Answer::Text)
                .map_err(abort_or_io)
        }
        PromptSpec::Select {
            message,
            choices,
            initial,
        } => {
            if choices.is_empty() {
                return Err(CliError::user("Nothing to select from"));
            }
            let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
            let index = Select::with_theme(&theme)
                .with_prompt(message)
                .items(&labels)
                .default(initial.min(choices.len() - 1))
                .interact()
                .map_err(abort_or_io)?;
            Ok(Answer::Picked(choices[index].value.clone()))
        }
        PromptSpec::MultiSelect {
            message,
            choices,
            selected,
        } => {
            let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
            let mut defaults = selected;
            defaults.resize(labels.len(), false);
            let picked = MultiSelect::with_theme(&theme)
                .with_prompt(message)
                .items(&labels)
                .defaults(&defaults)
                .interact()
                .map_err(abort_or_io)?;
            Ok(Answer::PickedMany(
                picked
                    .into_iter()
                    .map(|index| choices[index].value.clone())
                    .collect(),
            ))
        }
        PromptSpec::Confirm { message, default } => Confirm::with_theme(&theme)
            .with_prompt(message)
            .default(default)
            .interact()
            .map(Answer::Confirmed)
            .map_err(abort_or_io),
    }
}

/// Prompt for free text.
pub fn text(
    message: &str,
    initial: Option<&str>,
    validate: Option<fn(&str) -> Result<(), String>>,
) -> CliResult<String> {
    match ask(PromptSpec::Text {
        message,
        initial: initial.map(str::to_string),
        validate,
    })? {
        Answer::Text(value) => Ok(value),
        _ => unreachable!("text prompt returned non-text answer"),
    }
}

/// Prompt to pick one choice.
pub fn select(message: &str, choices: Vec<Choice>) -> CliResult<String> {
    select_at(message, choices, 0)
}

/// Prompt to pick one choice, cursor starting at `initial`.
pub fn select_at(message: &str, choices: Vec<Choice>, initial: usize) -> CliResult<String> {
    match ask(PromptSpec::Select {
        message,
        choices,
        initial,
    })? {
        Answer::Picked(value) => Ok(value),
        _ => unreachable!("select prompt returned non-pick answer"),
    }
}

/// Prompt to toggle a subset of choices.
pub fn multi_select(
    message: &str,
    choices: Vec<Choice>,
    selected: Vec<bool>,
) -> CliResult<Vec<String>> {
    match ask(PromptSpec::MultiSelect {
        message,
        choices,
        selected,
    })? {
        Answer::PickedMany(values) => Ok(values),
        _ => unreachable!("multi-select prompt returned non-pick answer"),
    }
}

/// Ask a yes/no question.
pub fn confirm(message: &str, default: bool) -> CliResult<bool> {
    match ask(PromptSpec::Confirm { message, default })? {
        Answer::Confirmed(value) => Ok(value),
        _ => unreachable!("confirm prompt returned non-confirm answer"),
    }
}

fn abort_or_io(err: dialoguer::Error) -> CliError {
    let dialoguer::Error::IO(io) = err;
    if io.kind() == std::io::ErrorKind::Interrupted {
        CliError::Aborted
    } else {
        CliError::Io(io)
    }
}
