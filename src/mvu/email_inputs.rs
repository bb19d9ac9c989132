// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Growable email input group in an MVU-friendly shape.

use tracing::{debug, warn};

/// UI model for the email inputs, kept free of side effects.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct EmailInputsModel {
    inputs: Vec<String>,
}

/// Messages emitted by the email inputs view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmailInputsMsg {
    AddInput,
    InputChanged { index: usize, value: String },
    RemoveInput(usize),
}

impl EmailInputsModel {
    /// Group with `count` empty inputs.
    pub fn with_inputs(count: usize) -> Self {
        Self {
            inputs: vec![String::new(); count],
        }
    }

    /// Current input values in display order.
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

/// Apply a message to the model.
pub fn update(model: &mut EmailInputsModel, msg: EmailInputsMsg) {
    match msg {
        EmailInputsMsg::AddInput => {
            model.inputs.push(String::new());
            debug!(count = model.inputs.len(), "email input added");
        }
        EmailInputsMsg::InputChanged { index, value } => match model.inputs.get_mut(index) {
            Some(slot) => *slot = value,
            None => warn!(index, "ignoring edit of missing email input"),
        },
        EmailInputsMsg::RemoveInput(index) => {
            if index < model.inputs.len() {
                model.inputs.remove(index);
                debug!(count = model.inputs.len(), "email input removed");
            } else {
                warn!(index, "ignoring removal of missing email input");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_input_appends_empty_slot() {
        let mut model = EmailInputsModel::with_inputs(1);

        update(&mut model, EmailInputsMsg::AddInput);

        assert_eq!(model.inputs(), ["", ""]);
    }

    #[test]
    fn input_changed_updates_only_that_slot() {
        let mut model = EmailInputsModel::with_inputs(2);

        update(
            &mut model,
            EmailInputsMsg::InputChanged {
                index: 1,
                value: "a@b.com".into(),
            },
        );

        assert_eq!(model.inputs(), ["", "a@b.com"]);
    }

    #[test]
    fn out_of_range_messages_are_ignored() {
        let mut model = EmailInputsModel::with_inputs(1);

        update(
            &mut model,
            EmailInputsMsg::InputChanged {
                index: 5,
                value: "x".into(),
            },
        );
        update(&mut model, EmailInputsMsg::RemoveInput(3));

        assert_eq!(model, EmailInputsModel::with_inputs(1));
    }

    #[test]
    fn remove_input_shifts_following_slots() {
        let mut model = EmailInputsModel {
            inputs: vec!["one@a.com".into(), "two@a.com".into()],
        };

        update(&mut model, EmailInputsMsg::RemoveInput(0));

        assert_eq!(model.inputs(), ["two@a.com"]);
        assert_eq!(model.len(), 1);
        update(&mut model, EmailInputsMsg::RemoveInput(0));
        assert!(model.is_empty());
    }
}
