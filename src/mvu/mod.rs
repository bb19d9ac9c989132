// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring form state and messages.
//!
//! The model doubles as the field reader and indicator writer for
//! [`crate::logic::form::validate_fields`], so a host UI only forwards
//! messages and draws the state it finds here.

pub mod email_inputs;

use tracing::debug;

use crate::config::FormConfig;
use crate::logic::form::{
    FieldId, FieldReader, Indicator, IndicatorWriter, ValidationOutcome, validate_fields,
};
use email_inputs::{EmailInputsModel, EmailInputsMsg};

/// Top-level form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormModel {
    /// Current text of the name input.
    pub name: String,
    /// Growable email input group.
    pub emails: EmailInputsModel,
    /// Error indicator shown under the name input.
    pub name_indicator: Indicator,
    /// Error indicator shown under the email group.
    pub emails_indicator: Indicator,
    /// Messages used when writing indicators.
    pub config: FormConfig,
}

/// Form messages routed through the update function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    NameChanged(String),
    Emails(EmailInputsMsg),
    ValidateRequested,
}

impl FormModel {
    /// Fresh form seeded with the configured number of empty email inputs.
    pub fn with_config(config: FormConfig) -> Self {
        Self {
            emails: EmailInputsModel::with_inputs(config.initial_email_inputs),
            config,
            ..Default::default()
        }
    }

    /// Whether the host should style the name input as invalid.
    pub fn name_invalid(&self) -> bool {
        self.name_indicator.is_error()
    }
}

impl FieldReader for FormModel {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn emails(&self) -> Vec<String> {
        self.emails.inputs().to_vec()
    }
}

impl IndicatorWriter for FormModel {
    fn set_indicator(&mut self, field: FieldId, indicator: Indicator) {
        match field {
            FieldId::Name => self.name_indicator = indicator,
            FieldId::Emails => self.emails_indicator = indicator,
        }
    }
}

/// Update the form model. Returns the outcome when validation ran.
///
/// Edits leave the indicators untouched; they only change on [`Msg::ValidateRequested`].
pub fn update(model: &mut FormModel, msg: Msg) -> Option<ValidationOutcome> {
    match msg {
        Msg::NameChanged(text) => {
            debug!("name input changed");
            model.name = text;
            None
        }
        Msg::Emails(m) => {
            email_inputs::update(&mut model.emails, m);
            None
        }
        Msg::ValidateRequested => {
            // Validation reads from and writes to the same model.
            let config = model.config.clone();
            let snapshot = model.clone();
            Some(validate_fields(&snapshot, model, &config))
        }
    }
}
