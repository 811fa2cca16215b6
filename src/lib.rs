// SPDX-License-Identifier: MPL-2.0
//! `coursedeck` is a desktop reader for a self-paced valuation course,
//! built with the Iced GUI framework.
//!
//! Course content ships embedded in the binary; reading progress and
//! per-page engagement (likes and comments) persist locally as JSON.
//! The crate demonstrates internationalization with Fluent, user
//! preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/coursedeck/0.1.0")]

pub mod analytics;
pub mod app;
pub mod config;
pub mod course;
pub mod error;
pub mod i18n;
pub mod store;
pub mod ui;
