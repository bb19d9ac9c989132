// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! "Validate now" contract between the pure rules and whatever owns the fields.
//!
//! Responsibilities:
//! - Read the current name and email values through a [`FieldReader`].
//! - Decide validity with the pure rules from [`crate::models`].
//! - Reflect each verdict into a caller-owned indicator through an [`IndicatorWriter`].

use serde::Serialize;
use tracing::info;

use crate::config::FormConfig;
use crate::models::email::are_all_emails_valid;
use crate::models::name::is_valid_name;

/// Identifies a field (or field group) the caller owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Emails,
}

/// Visible state of an error indicator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Indicator {
    #[default]
    Clear,
    Error(String),
}

impl Indicator {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Text to show next to the field; empty when clear.
    pub fn text(&self) -> &str {
        match self {
            Self::Clear => "",
            Self::Error(message) => message,
        }
    }
}

/// Capability: read the current value of a field.
pub trait FieldReader {
    fn name(&self) -> String;
    fn emails(&self) -> Vec<String>;
}

/// Capability: set the error indicator of a field.
pub trait IndicatorWriter {
    fn set_indicator(&mut self, field: FieldId, indicator: Indicator);
}

/// Independent verdicts for the two fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub name_valid: bool,
    pub emails_valid: bool,
}

impl ValidationOutcome {
    pub fn all_valid(&self) -> bool {
        self.name_valid && self.emails_valid
    }
}

/// Decide validity of a name and an email group without touching any indicator.
pub fn evaluate<S: AsRef<str>>(name: &str, emails: &[S]) -> ValidationOutcome {
    ValidationOutcome {
        name_valid: is_valid_name(name),
        emails_valid: are_all_emails_valid(emails),
    }
}

/// Read both fields, evaluate them, and write one indicator per field.
///
/// Valid fields get [`Indicator::Clear`]; invalid ones get the configured message.
pub fn validate_fields<R, W>(reader: &R, writer: &mut W, config: &FormConfig) -> ValidationOutcome
where
    R: FieldReader + ?Sized,
    W: IndicatorWriter + ?Sized,
{
    let name = reader.name();
    let emails = reader.emails();
    let outcome = evaluate(&name, &emails);

    writer.set_indicator(
        FieldId::Name,
        indicator_for(outcome.name_valid, &config.name_error),
    );
    writer.set_indicator(
        FieldId::Emails,
        indicator_for(outcome.emails_valid, &config.emails_error),
    );

    info!(
        name_valid = outcome.name_valid,
        emails_valid = outcome.emails_valid,
        email_count = emails.len(),
        "form validated"
    );
    outcome
}

fn indicator_for(valid: bool, message: &str) -> Indicator {
    if valid {
        Indicator::Clear
    } else {
        Indicator::Error(message.to_string())
    }
}
