// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the [`PageController`] and translates its outputs
//! into Iced tasks (scrolling the page, copying links, closing the window).
//! Startup policy (configuration, locale resolution, window size) lives here
//! so it is easy to audit user-facing behavior.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use view::PAGE_SCROLLABLE_ID;

use crate::config;
use crate::controller::PageController;
use crate::locale::{self, Locale};
use crate::ui::theming::{self, ColorScheme, ThemeMode};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    controller: PageController,
    theme_mode: ThemeMode,
    /// `theme_mode` resolved against the OS once, at startup.
    dark: bool,
    colors: ColorScheme,
    window_id: Option<window::Id>,
    /// Time of the last processed message; drives reveal fades in `view`.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.controller.current_locale())
            .field("theme_mode", &self.theme_mode)
            .field("dark", &self.dark)
            .field("window_id", &self.window_id)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Default window size, also used to lay the page out before the window
/// reports its real size.
#[must_use]
pub fn default_window_size() -> Size {
    Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: default_window_size(),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        icon: crate::icon::load_window_icon(),
        // Close requests go through `App::update` so the page is torn down first.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and builds the page for the default window size.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}");
        }

        let locale = locale::resolve_startup_locale(flags.lang.as_deref(), &config.general);
        let app = Self::with_config(locale, &config, default_window_size());
        tracing::info!(locale = %locale, theme = ?app.theme_mode, "page ready");

        (app, Task::none())
    }

    fn with_config(locale: Locale, config: &config::Config, viewport: Size) -> Self {
        let theme_mode = config.general.theme_mode;
        let dark = theme_mode.is_dark();
        Self {
            controller: PageController::new(locale, config.motion.resolved(), viewport),
            theme_mode,
            dark,
            colors: ColorScheme::for_dark(dark),
            window_id: None,
            now: Instant::now(),
        }
    }

    fn title(&self) -> String {
        format!(
            "{} - {}",
            crate::content::OWNER_NAME,
            self.controller.text(locale::TextKey::Role)
        )
    }

    fn theme(&self) -> Theme {
        theming::iced_theme(self.dark)
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_frame_subscription(self.controller.needs_frames(self.now)),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = match message {
            Message::Frame(at) => at,
            _ => Instant::now(),
        };
        self.now = now;

        let mut ctx = update::UpdateContext {
            controller: &mut self.controller,
            window_id: &mut self.window_id,
        };

        match message {
            Message::Page(page_message) => update::handle_page_message(&mut ctx, page_message, now),
            Message::ViewportChanged { bounds, offset } => {
                update::handle_viewport_changed(&mut ctx, bounds, offset, now);
                Task::none()
            }
            Message::WindowOpened(id, size) => {
                update::handle_window_opened(&mut ctx, id, size, now);
                Task::none()
            }
            Message::WindowResized(size) => {
                update::handle_window_resized(&mut ctx, size, now);
                Task::none()
            }
            Message::Frame(_) => update::scroll_frame(&mut ctx, now),
            Message::WindowCloseRequested(id) => update::handle_close_requested(&mut ctx, id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            controller: &self.controller,
            colors: &self.colors,
            now: self.now,
        })
    }
}
