// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/app.rs
//
// COSMIC application wiring and main app struct.

use std::time::Duration;

use cosmic::app::{Core, context_drawer};
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::Subscription;
use cosmic::iced::keyboard::{self, Key, Modifiers, key::Named};
use cosmic::widget::about::About;
use cosmic::{Action, Element, Task};
use futures_util::{SinkExt, Stream};

use crate::config::AppConfig;
use crate::fl;
use crate::sensors::orientation::{IioCompass, OrientationSource};
use crate::ui::model::AppModel;
use crate::ui::{AppMessage, update, views};
use crate::Args;

/// Flags passed from `main` into the application.
#[derive(Debug, Clone)]
pub enum Flags {
    Args(Args),
}

/// Context page displayed in right drawer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
}

/// Main application type.
pub struct RosaApp {
    core: Core,
    pub model: AppModel,
    context_page: ContextPage,
    pub config: AppConfig,
    config_handler: Option<cosmic_config::Config>,
    about: About,
}

impl cosmic::Application for RosaApp {
    type Executor = cosmic::executor::Default;
    type Flags = Flags;
    type Message = AppMessage;

    const APP_ID: &'static str = "org.codeberg.wfx.Rosa";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        // Load persisted config.
        let (config, config_handler) =
            match cosmic_config::Config::new(Self::APP_ID, AppConfig::VERSION) {
                Ok(handler) => {
                    let config = AppConfig::get_entry(&handler).unwrap_or_default();
                    (config, Some(handler))
                }
                Err(_) => (AppConfig::default(), None),
            };

        let Flags::Args(args) = flags;

        // Seed heading: CLI argument, otherwise north.
        let model = AppModel::new(args.heading.unwrap_or(0.0));

        let about = About::default()
            .name(fl!("app-title"))
            .icon(Self::APP_ID)
            .version(env!("CARGO_PKG_VERSION"))
            .license("GPL-3.0-or-later")
            .links([(fl!("repository"), env!("CARGO_PKG_REPOSITORY"))]);

        let mut app = Self {
            core,
            model,
            context_page: ContextPage::default(),
            config,
            config_handler,
            about,
        };

        // Platforms without a gesture requirement grant right away; the
        // location fix is requested exactly once per grant.
        let init_task = if app.config.require_gesture {
            Task::none()
        } else {
            app.model.permission.grant();
            update::locate(app.config.gpsd_endpoint.clone())
        };

        (app, init_task)
    }

    fn update(&mut self, message: Self::Message) -> Task<Action<Self::Message>> {
        if let AppMessage::ToggleContextPage(page) = &message {
            if self.context_page == *page {
                self.core.window.show_context = !self.core.window.show_context;
            } else {
                self.context_page = *page;
                self.core.window.show_context = true;
            }
            return Task::none();
        }

        match update::update(self, &message) {
            update::UpdateResult::None => Task::none(),
            update::UpdateResult::Task(task) => task,
        }
    }

    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        views::header::end(&self.model)
    }

    fn view(&self) -> Element<'_, Self::Message> {
        views::view(&self.model, &self.config)
    }

    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }
        Some(match self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                AppMessage::LaunchUrl,
                AppMessage::ToggleContextPage(ContextPage::About),
            ),
        })
    }

    fn footer(&self) -> Option<Element<'_, Self::Message>> {
        Some(views::footer::view(&self.model, &self.config))
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        Subscription::batch([
            keyboard::on_key_press(handle_key_press),
            orientation_subscription(self),
        ])
    }
}

impl RosaApp {
    /// Save current config to disk.
    pub(crate) fn save_config(&self) {
        if let Some(ref handler) = self.config_handler {
            let _ = self.config.write_entry(handler);
        }
    }
}

/// Map raw key presses + modifiers into high-level application messages.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<AppMessage> {
    // Ignore key presses when command-style modifiers are pressed.
    if modifiers.command() || modifiers.alt() || modifiers.logo() || modifiers.control() {
        return None;
    }

    match key.as_ref() {
        // Sensor grant (counts as the user gesture).
        Key::Named(Named::Enter) | Key::Named(Named::Space) => Some(AppMessage::EnableSensors),

        // Toggle panels.
        Key::Character(ch) if ch.eq_ignore_ascii_case("i") => {
            Some(AppMessage::ToggleContextPage(ContextPage::About))
        }
        Key::Character(ch) if ch.eq_ignore_ascii_case("l") => {
            Some(AppMessage::ToggleLocationReadout)
        }

        _ => None,
    }
}

// =============================================================================
// Orientation Subscription
// =============================================================================

/// Orientation events only flow after the permission grant.
fn orientation_subscription(app: &RosaApp) -> Subscription<AppMessage> {
    if !app.model.permission.granted() {
        return Subscription::none();
    }

    let interval = Duration::from_millis(app.config.poll_interval_ms.max(1));
    Subscription::run_with_id("orientation", orientation_stream(interval))
}

/// Poll the platform compass and emit one message per sample.
///
/// If no compass channel exists the stream logs once and stays silent;
/// the heading simply keeps its last value.
fn orientation_stream(interval: Duration) -> impl Stream<Item = AppMessage> {
    cosmic::iced::stream::channel(16, move |mut output| async move {
        let mut compass = match IioCompass::discover() {
            Ok(compass) => compass,
            Err(error) => {
                log::warn!("device orientation unavailable: {error:#}");
                return;
            }
        };

        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            match compass.read() {
                Ok(reading) => {
                    if output
                        .send(AppMessage::OrientationChanged(reading))
                        .await
                        .is_err()
                    {
                        break;
                    }
                }
                Err(error) => log::debug!("orientation read failed: {error:#}"),
            }
        }
    })
}
