// SPDX-License-Identifier: MPL-2.0
//! Localization via the Fluent system.
//!
//! Translation catalogs are embedded `.ftl` files, one per locale. The
//! active locale is resolved from the CLI flag, the configuration file
//! and the OS locale, in that order, with `en-US` as the fallback.

pub mod fluent;

pub use fluent::I18n;
