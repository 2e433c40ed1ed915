// SPDX-License-Identifier: MPL-2.0
//! User interface: design tokens and the toast overlay.

pub mod design_tokens;
pub mod notifications;
