// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Form validation core: name and multi-email format rules, the
//! "validate now" contract, and a UI-agnostic MVU form model.

pub mod config;
pub mod logic;
pub mod models;
pub mod mvu;
pub mod telemetry;
