// SPDX-License-Identifier: MPL-2.0
//! Log output setup.
//!
//! The library only emits `tracing` events; binaries decide where they go by
//! calling [`init`] once at startup. `RUST_LOG` directives are honored on top
//! of the defaults below.

use crate::error::{Error, Result};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, EnvFilter};

/// Directives applied on top of `RUST_LOG`.
const DEFAULT_DIRECTIVES: &[&str] = &[
    "toast_stack=debug",
    "iced=error",
    "wgpu_core=error",
    "wgpu_hal=error",
];

/// Builds the filter used by [`init`].
pub fn env_filter() -> Result<EnvFilter> {
    DEFAULT_DIRECTIVES
        .iter()
        .try_fold(EnvFilter::from_default_env(), |filter, directive| {
            let directive: Directive = directive
                .parse()
                .map_err(|err| Error::Logging(format!("{directive}: {err}")))?;
            Ok(filter.add_directive(directive))
        })
}

/// Installs the global `fmt` subscriber.
pub fn init() -> Result<()> {
    fmt()
        .with_env_filter(env_filter()?)
        .try_init()
        .map_err(|err| Error::Logging(err.to_string()))
}
