// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`decoder`] - Upload a QR photo and inspect the decoded level
//! - [`rotator`] - Upload a QR photo and view the rotated code
//!
//! # Shared Infrastructure
//!
//! - [`preview`] - Local image preview with file-type validation
//! - [`disclosure`] - Generic show/hide panels for payload inspection
//! - [`level_panel`] - Level metadata and block-table rendering
//! - [`components`] - Reusable UI components (error panel)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing)
//! - [`navbar`] - Screen tabs and the file picker button

pub mod components;
pub mod decoder;
pub mod design_tokens;
pub mod disclosure;
pub mod level_panel;
pub mod navbar;
pub mod preview;
pub mod rotator;
pub mod styles;
