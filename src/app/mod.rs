// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting the toast surface.
//!
//! The `App` owns one toast [`Manager`] and the [`Timeline`] that schedules
//! its callbacks. Button presses create toasts, overlay events are routed
//! back to the manager, and a periodic tick moves the timeline forward.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, paths, PartialConfig, Position, CONFIG_LOAD_WARNING};
use crate::toast::{Manager, Scheduler, Timeline, Variant};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

/// Root Iced application state.
pub struct App {
    manager: Manager,
    timeline: Timeline,
    /// Tick interval of the timeline subscription.
    tick: Duration,
    /// When set, demo buttons keep the CLI position instead of their own.
    pinned_position: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("live_toasts", &self.manager.live_count())
            .field("tick", &self.tick)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 720;

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
    // iced 0.14 requires a `Fn` boot closure.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Per-button options of the demo page.
fn demo_overrides(variant: Variant) -> PartialConfig {
    match variant {
        Variant::Neutral => PartialConfig::new()
            .with_position(Position::TopLeft)
            .with_close_on_click(true),
        Variant::Info => PartialConfig::new().with_position(Position::BottomCenter),
        Variant::Success => PartialConfig::new().with_position(Position::TopRight),
        Variant::Warning => PartialConfig::new().with_position(Position::BottomLeft),
        Variant::Error => PartialConfig::new().with_position(Position::BottomRight),
    }
}

fn demo_text(variant: Variant) -> &'static str {
    match variant {
        Variant::Neutral => "Request is under review",
        Variant::Info => "Request was added",
        Variant::Success => "Request was sent successfully",
        Variant::Warning => "Attention! Request is being processed",
        Variant::Error => "Too many requests, try again later...",
    }
}

fn warning_text(key: &str) -> String {
    if key == CONFIG_LOAD_WARNING {
        "Settings could not be loaded, defaults are in use".to_string()
    } else {
        key.to_string()
    }
}

impl App {
    /// Loads settings, applies CLI overrides and prepares the surface.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();

        let mut initial = config.toast;
        if let Some(limit) = flags.limit {
            initial = initial.with_limit(limit);
        }
        if let Some(position) = flags.position {
            initial = initial.with_position(position);
        }

        let mut app = App {
            manager: Manager::new(initial),
            timeline: Timeline::new(Instant::now())
                .with_exit_transition(config.animation.exit_transition()),
            tick: config.animation.tick_interval(),
            pinned_position: flags.position.is_some(),
        };

        if let Some(key) = config_warning {
            eprintln!("Failed to load settings: {key}");
            app.manager
                .toaster(&mut app.timeline)
                .warning(warning_text(&key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.manager.live_count() {
            0 => "Iced Toast".to_string(),
            count => format!("Iced Toast ({count})"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(&self.manager, &self.timeline, self.tick)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toast(toast_message) => {
                // Pointer events must see the current time, not the last tick.
                self.manager.pump(&mut self.timeline, Instant::now());
                self.manager
                    .handle_message(toast_message, &mut self.timeline);
            }
            Message::Tick(now) => {
                self.manager.pump(&mut self.timeline, now);
            }
            Message::Show(variant) => {
                // Catch the timeline up so the new countdown starts now.
                self.manager.pump(&mut self.timeline, Instant::now());

                let mut overrides = demo_overrides(variant);
                if self.pinned_position {
                    overrides.position = None;
                }
                self.manager
                    .toaster(&mut self.timeline)
                    .with(overrides)
                    .notify(variant, demo_text(variant));
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(&self.manager, self.timeline.now())
    }
}
