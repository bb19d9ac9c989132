// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Command-line driver feeding values into the form model and printing its indicators.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use formcheck::config::FormConfig;
use formcheck::logic::form::{Indicator, ValidationOutcome};
use formcheck::mvu::email_inputs::EmailInputsMsg;
use formcheck::mvu::{self, FormModel, Msg};
use formcheck::telemetry::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "formcheck")]
#[command(version)]
#[command(about = "Validate a name and a group of email addresses", long_about = None)]
struct Cli {
    /// Value of the name field
    #[arg(long, default_value = "")]
    name: String,
    /// Value of one email field (repeat to add more inputs)
    #[arg(long = "email", value_name = "EMAIL")]
    emails: Vec<String>,
    /// JSON file overriding indicator messages
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print the outcome as JSON instead of indicator lines
    #[arg(long)]
    json: bool,
    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(false, if cli.verbose { Level::DEBUG } else { Level::WARN });

    let config = FormConfig::load_or_default(cli.config.as_deref())?;
    let (model, outcome) = run(config, &cli.name, &cli.emails);

    if cli.json {
        let out = serde_json::to_string_pretty(&outcome).context("Failed to encode outcome")?;
        println!("{out}");
    } else {
        print_indicator("name", &model.name_indicator);
        print_indicator("emails", &model.emails_indicator);
    }

    Ok(if outcome.all_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Drive the form the way a user would: type, add inputs, press validate.
fn run(config: FormConfig, name: &str, emails: &[String]) -> (FormModel, ValidationOutcome) {
    let mut model = FormModel::with_config(config);
    let mut msgs = vec![Msg::NameChanged(name.to_string())];

    if !emails.is_empty() {
        // Explicit values replace the seeded empty inputs.
        msgs.extend((0..model.emails.len()).map(|_| Msg::Emails(EmailInputsMsg::RemoveInput(0))));
        for (index, value) in emails.iter().enumerate() {
            msgs.push(Msg::Emails(EmailInputsMsg::AddInput));
            msgs.push(Msg::Emails(EmailInputsMsg::InputChanged {
                index,
                value: value.clone(),
            }));
        }
    }
    msgs.push(Msg::ValidateRequested);

    let mut outcome = None;
    for msg in msgs {
        if let Some(result) = mvu::update(&mut model, msg) {
            outcome = Some(result);
        }
    }
    // ValidateRequested is always the last message.
    let outcome = outcome.unwrap_or(ValidationOutcome {
        name_valid: false,
        emails_valid: false,
    });
    (model, outcome)
}

fn print_indicator(label: &str, indicator: &Indicator) {
    match indicator {
        Indicator::Clear => println!("{label}: ok"),
        Indicator::Error(message) => println!("{label}: {message}"),
    }
}
