// SPDX-License-Identifier: MPL-2.0
//! Toast overlay for iced applications.
//!
//! # Components
//!
//! - [`surface`] - `Surface`, the mount point tracking entrances and hover
//! - [`measure`] - `Measure` trait and the default `TextMetrics` estimate
//! - [`toast`] - Widgets rendering a computed stack layout
//!
//! # Usage
//!
//! ```ignore
//! // Once, or lazily from the first notification:
//! surface.mount(&store, Anchor::BottomRight);
//!
//! // In update:
//! Message::Frame(_) => { surface.on_frame(&store, &TextMetrics::default()); }
//! Message::Toast(toast::Message::Hovered(h)) => { surface.set_hovered(&store, h); }
//!
//! // In view, above the content:
//! stack![content, toast::view_overlay(&surface, &store, &i18n).map(Message::Toast)]
//! ```

pub mod measure;
pub mod surface;
pub mod toast;

pub use measure::{Measure, TextMetrics};
pub use surface::Surface;
pub use toast::{view_overlay, KindStyle, Message as ToastMessage};
