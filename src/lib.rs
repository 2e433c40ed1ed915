// SPDX-License-Identifier: MPL-2.0
//! `toast_stack` is a toast notification queue with a stacked-card display
//! for Iced applications.
//!
//! Toasts live in a [`toast::ToastStore`] that owns their dismissal timers;
//! a [`ui::notifications::Surface`] tracks what has been painted and the
//! pointer hover that pauses every countdown; [`toast::layout`] turns both
//! into card placements. [`notify`] is the entry point most code needs.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod notify;
pub mod toast;
pub mod ui;
