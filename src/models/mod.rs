// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: pure format rules shared by the form logic and any host UI.

pub mod email;
pub mod name;
