// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Form configuration: indicator messages and the initial email input count.
//! Loaded from an optional JSON file; every key falls back to a default.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_NAME_ERROR: &str = "Please specify a valid name!";
const DEFAULT_EMAILS_ERROR: &str = "Please check your emails!";
const DEFAULT_INITIAL_EMAIL_INPUTS: usize = 1;

/// User-facing messages and layout defaults for the form.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// Shown under the name input when the name is rejected.
    pub name_error: String,
    /// Shown under the email group when any address (or none) is rejected.
    pub emails_error: String,
    /// Number of empty email inputs present before the user adds more.
    pub initial_email_inputs: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            name_error: DEFAULT_NAME_ERROR.to_string(),
            emails_error: DEFAULT_EMAILS_ERROR.to_string(),
            initial_email_inputs: DEFAULT_INITIAL_EMAIL_INPUTS,
        }
    }
}

impl FormConfig {
    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Failed to parse form config JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_form_copy() {
        let config = FormConfig::default();
        assert_eq!(config.name_error, "Please specify a valid name!");
        assert_eq!(config.emails_error, "Please check your emails!");
        assert_eq!(config.initial_email_inputs, 1);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = FormConfig::from_json(r#"{ "emails_error": "Fix emails" }"#).unwrap();
        assert_eq!(config.emails_error, "Fix emails");
        assert_eq!(config.name_error, DEFAULT_NAME_ERROR);
        assert_eq!(config.initial_email_inputs, 1);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FormConfig::from_json(r#"{ "nmae_error": "typo" }"#).is_err());
    }

    #[test]
    fn load_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "name_error": "Name?", "initial_email_inputs": 3 }}"#
        )
        .unwrap();

        let config = FormConfig::load(file.path()).unwrap();

        assert_eq!(config.name_error, "Name?");
        assert_eq!(config.initial_email_inputs, 3);
    }

    #[test]
    fn load_reports_path_on_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = FormConfig::load(file.path()).unwrap_err();

        assert!(format!("{err:#}").contains("Invalid config file"));
    }

    #[test]
    fn load_or_default_without_path() {
        assert_eq!(
            FormConfig::load_or_default(None).unwrap(),
            FormConfig::default()
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FormConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
