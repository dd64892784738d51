//! Input resolution.
//!
//! An action declares its inputs in order. Each input is filled from
//! the first source that provides it: the positional argument at the
//! input's index, a value seeded from a named flag, or the input's
//! resolver (usually interactive). Resolvers run in declaration order
//! and see every value resolved before them, so a later input can
//! depend on an earlier one. An input with no source stays unset.

use crate::actions::Action;
use crate::error::{CliError, CliResult};
use crate::session::Session;

/// Resolved values for an action's declared inputs, in declaration
/// order.
#[derive(Debug, Default)]
pub struct Inputs {
    values: Vec<(&'static str, Option<String>)>,
}

impl Inputs {
    /// Record a value (or its absence) for a named input.
    pub fn set(&mut self, name: &'static str, value: Option<String>) {
        if let Some(slot) = self.values.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.values.push((name, value));
        }
    }

    /// Look up a resolved value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Look up a value that must be present, like `get` but with a
    /// user-facing error naming the input.
    pub fn require(&self, name: &str) -> CliResult<&str> {
        self.get(name)
            .ok_or_else(|| CliError::user(format!("Missing input \"{}\"", name)))
    }
}

/// Fill the action's inputs from positionals, seeded flags and
/// resolvers.
pub fn resolve_inputs(
    action: &Action,
    positional: &[String],
    session: &mut Session,
    mut inputs: Inputs,
) -> CliResult<Inputs> {
    for (index, spec) in action.input.iter().enumerate() {
        if let Some(value) = positional.get(index).filter(|v| !v.is_empty()) {
            inputs.set(spec.name, Some(value.clone()));
            continue;
        }
        if inputs.get(spec.name).is_some() {
            continue;
        }
        match spec.resolve {
            Some(resolve) => {
                let value = resolve(session, &inputs)?;
                inputs.set(spec.name, Some(value));
            }
            None => inputs.set(spec.name, None),
        }
    }
    Ok(inputs)
}
