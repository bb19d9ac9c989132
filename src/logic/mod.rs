// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic connecting the format rules to caller-owned fields.

pub mod form;
