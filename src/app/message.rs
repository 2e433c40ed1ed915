// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::notifications::ToastMessage;
use std::time::Instant;

/// Buttons of the demo dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoAction {
    Success,
    Warning,
    Error,
    DeleteMonitor,
    Maintenance,
    ClearAll,
}

impl DemoAction {
    pub const ALL: [DemoAction; 6] = [
        DemoAction::Success,
        DemoAction::Warning,
        DemoAction::Error,
        DemoAction::DeleteMonitor,
        DemoAction::Maintenance,
        DemoAction::ClearAll,
    ];

    /// Fluent key of the button label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            DemoAction::Success => "demo-button-success",
            DemoAction::Warning => "demo-button-warning",
            DemoAction::Error => "demo-button-error",
            DemoAction::DeleteMonitor => "demo-button-action",
            DemoAction::Maintenance => "demo-button-preserved",
            DemoAction::ClearAll => "demo-button-clear",
        }
    }
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Demo(DemoAction),
    Toast(ToastMessage),
    /// Host timer tick: fires expired toasts.
    Tick(Instant),
    /// Paint frame: advances card entrances.
    Frame(Instant),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TOAST_STACK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
