// SPDX-License-Identifier: MPL-2.0
//! `level_lens` is a desktop client for a QR voxel-level decode
//! service, built with the Iced GUI framework.
//!
//! It previews a selected QR photo, uploads it for decoding, and
//! presents the decoded level as an annotated block table, with a
//! separate image-rotation round trip against the same service.

pub mod app;
pub mod config;
pub mod error;
pub mod level;
pub mod net;
pub mod ui;
