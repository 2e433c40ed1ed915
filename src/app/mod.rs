// SPDX-License-Identifier: MPL-2.0
//! Demo application: a small dashboard firing toasts of every kind.
//!
//! The `App` owns the localization and a [`Notifier`], forwards overlay
//! interactions to the store and surface, and drives timers and entrances from
//! subscriptions.

mod message;
mod subscription;
mod view;

pub use message::{DemoAction, Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::notify::{self, MessageOptions, Notifier};
use crate::ui::notifications::{TextMetrics, ToastMessage};
use iced::{window, Element, Subscription, Task};
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Host name used by the failing-check demo toast.
const DEMO_HOST: &str = "api.example.com";

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    notifier: Notifier,
    tick_interval: Duration,
    measure: TextMetrics,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale().to_string())
            .field("notifier", &self.notifier)
            .field("tick_interval", &self.tick_interval)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    config::init_cli_override(flags.config_dir.clone());

    // iced requires a `Fn` boot closure; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let notifier = Notifier::from_config(&config.toasts);
        notify::set_default_notifier(notifier.clone());

        let app = Self::from_parts(i18n, notifier, config.toasts.tick_interval());
        if let Some(error) = config_warning {
            tracing::warn!(%error, "falling back to default settings");
            app.notifier.warning(
                app.i18n
                    .tr_with_args("demo-config-warning", &[("error", error.as_str())]),
            );
        }
        (app, Task::none())
    }

    fn from_parts(i18n: I18n, notifier: Notifier, tick_interval: Duration) -> Self {
        Self {
            i18n,
            notifier,
            tick_interval,
            measure: TextMetrics::default(),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("demo-title")
    }

    fn subscription(&self) -> Subscription<Message> {
        let store = self.notifier.store();
        let tick_sub =
            subscription::create_tick_subscription(self.tick_interval, !store.is_empty());
        let frame_sub =
            subscription::create_frame_subscription(self.notifier.surface().needs_frame(store));

        Subscription::batch([tick_sub, frame_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let store = self.notifier.store();
        let surface = self.notifier.surface();
        match message {
            Message::Demo(action) => {
                self.fire(action);
                surface.sync(store);
            }
            Message::Toast(ToastMessage::Dismiss(id)) => {
                if store.remove(id) {
                    surface.sync(store);
                }
            }
            Message::Toast(ToastMessage::Action(id)) => {
                if store.trigger_action(id) {
                    surface.sync(store);
                }
            }
            Message::Toast(ToastMessage::Undo(id)) => {
                if store.trigger_undo(id) {
                    surface.sync(store);
                }
            }
            Message::Toast(ToastMessage::Hovered(hovered)) => {
                surface.set_hovered(store, hovered);
            }
            Message::Tick(_) => {
                let fired = store.fire_due_timers();
                if fired > 0 {
                    surface.sync(store);
                }
            }
            Message::Frame(_) => {
                surface.on_frame(store, &self.measure);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(&self.i18n, &self.notifier)
    }

    fn fire(&self, action: DemoAction) {
        let i18n = &self.i18n;
        let notifier = &self.notifier;
        match action {
            DemoAction::Success => {
                notifier.success(i18n.tr("demo-monitor-saved"));
            }
            DemoAction::Warning => {
                notifier.warning(i18n.tr("demo-monitor-slow"));
            }
            DemoAction::Error => {
                notifier.error(i18n.tr_with_args("demo-monitor-down", &[("name", DEMO_HOST)]));
            }
            DemoAction::DeleteMonitor => {
                let confirmed = i18n.tr("demo-monitor-delete-confirmed");
                let restored = i18n.tr("demo-monitor-restored");
                notifier.message(
                    MessageOptions::new(i18n.tr("demo-monitor-deleted"))
                        .action(i18n.tr("demo-monitor-delete-action"))
                        .on_action(move || {
                            notify::success(confirmed.clone());
                        })
                        .on_undo(move || {
                            notify::message(restored.clone());
                        }),
                );
            }
            DemoAction::Maintenance => {
                notifier.message(MessageOptions::new(i18n.tr("demo-maintenance")).preserve(true));
            }
            DemoAction::ClearAll => {
                notifier.store().clear();
            }
        }
    }
}
