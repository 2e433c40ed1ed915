// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! Localizes the fixed labels of the toast cards (dismiss, undo) and of the
//! demo application using the Fluent localization system.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Embedded `.ftl` translation files
//! - Runtime language switching
//! - Fallback to the default locale when a language is unavailable

pub mod fluent;
