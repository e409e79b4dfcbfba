//! Iced application implementation powering the to-do screen lifecycle.

use std::time::Duration;

use anyhow::{Context, Result};
use iced::event::{self, Event};
use iced::keyboard::{key::Named, Event as KeyboardEvent, Key};
use iced::time;
use iced::Subscription;
use iced::{window, Size, Theme};
use todo_core::{Session, SCREEN_TITLE};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::app::helpers::resolve_theme;
use crate::app::message::{Effect, Message};
use crate::app::options::{DesktopFlags, DesktopOptions};
use crate::app::theme::Palette;
use crate::app::views;
use crate::telemetry::{self, Event as TelemetryEvent};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const TOAST_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run(options: DesktopOptions) -> Result<()> {
    init_tracing(options.log_filter.as_deref())?;

    let boot_flags = DesktopFlags::from(options);
    let window_settings = window::Settings {
        size: Size::new(420.0, 780.0),
        min_size: Some(Size::new(320.0, 480.0)),
        ..window::Settings::default()
    };

    iced::application(
        move || TodoDesktop::bootstrap(boot_flags.clone()),
        TodoDesktop::react,
        views::compose_root,
    )
    .window(window_settings)
    .title(app_title)
    .theme(app_theme)
    .subscription(app_subscription)
    .run()?;

    Ok(())
}

fn init_tracing(filter: Option<&str>) -> Result<()> {
    let env_filter = build_env_filter(filter)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init();
    Ok(())
}

/// `--log` takes a full filter string and replaces `RUST_LOG`; without it `RUST_LOG` applies over `info`.
pub(crate) fn build_env_filter(filter: Option<&str>) -> Result<EnvFilter> {
    let builder = EnvFilter::builder().with_default_directive(LevelFilter::INFO.into());
    match filter {
        Some(filter) => builder
            .parse(filter)
            .with_context(|| format!("invalid --log filter '{filter}'")),
        None => Ok(builder.from_env_lossy()),
    }
}

fn app_title(_state: &TodoDesktop) -> String {
    SCREEN_TITLE.to_string()
}

fn app_theme(state: &TodoDesktop) -> Option<Theme> {
    Some(state.theme.clone())
}

fn app_subscription(state: &TodoDesktop) -> Subscription<Message> {
    state.subscription()
}

pub(crate) struct TodoDesktop {
    pub(crate) session: Session,
    pub(crate) theme: Theme,
    pub(crate) palette: Palette,
    pub(crate) telemetry: telemetry::Handle,
}

impl TodoDesktop {
    pub(crate) fn bootstrap(flags: DesktopFlags) -> (Self, Effect) {
        let theme = resolve_theme(flags.config.theme);
        let palette = Palette::for_theme(&theme);
        let telemetry = telemetry::Handle::new();
        let session = Session::new(&flags.config);

        telemetry.record(TelemetryEvent::AppStarted);
        tracing::info!(
            tasks = session.store().len(),
            theme = flags.config.theme.as_str(),
            "to-do screen started"
        );

        (
            Self {
                session,
                theme,
                palette,
                telemetry,
            },
            Effect::none(),
        )
    }

    pub(crate) fn subscription(&self) -> Subscription<Message> {
        // Frames are only requested while something moves, and iced drops the
        // subscription with the application.
        let frames = if self.session.panel().is_animating() {
            time::every(FRAME_INTERVAL).map(|_| Message::Frame)
        } else if self.session.needs_ticks() {
            time::every(TOAST_POLL_INTERVAL).map(|_| Message::Frame)
        } else {
            Subscription::none()
        };

        let keyboard = event::listen_with(|event, _, _| match event {
            Event::Keyboard(KeyboardEvent::KeyPressed {
                key: Key::Named(Named::Escape),
                ..
            }) => Some(Message::PanelDismissed),
            _ => None,
        });

        Subscription::batch(vec![frames, keyboard])
    }
}
