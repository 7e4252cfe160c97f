// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the poster composer.
//!
//! The `App` struct wires together the composer, localization, the poster
//! service client and the toast manager, and translates composer events into
//! side effects (the generation call, the save dialog, the file write).
//! Startup policy (which poster language, platform and endpoint win) lives in
//! [`App::from_config`] so it is easy to audit.

pub mod config;
mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::domain::poster::FormState;
use crate::error::ServiceError;
use crate::i18n::fluent::I18n;
use crate::infrastructure::PosterService;
use crate::ui::composer;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{time, window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    composer: composer::State,
    /// Built once at startup; a construction failure is reported on the
    /// first generation attempt.
    service: Result<PosterService, ServiceError>,
    theme_mode: ThemeMode,
    /// `theme_mode` resolved once at startup; `System` is not re-detected.
    theme: Theme,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("has_poster", &self.composer.poster().is_some())
            .field("pending", &self.composer.pending_generations())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Interval of the toast auto-dismiss tick.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Builds the window settings
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

    // iced requires an `Fn` boot closure; the flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        (Self::from_config(flags, &config, config_warning), Task::none())
    }

    /// Resolves startup state from CLI flags and the loaded config.
    ///
    /// CLI flags win over config values, which win over built-in defaults.
    /// `config_warning` is an i18n key shown as a warning toast.
    pub fn from_config(flags: Flags, config: &Config, config_warning: Option<String>) -> Self {
        let language = flags
            .lang
            .or(config.composer.language)
            .unwrap_or_default();
        let platform = flags
            .platform
            .or(config.composer.platform)
            .unwrap_or_default();
        let endpoint = flags
            .endpoint
            .unwrap_or_else(|| config.service.endpoint_or_default().to_string());

        tracing::info!(%language, %platform, %endpoint, "starting composer");

        let service = PosterService::new(endpoint);
        if let Err(err) = &service {
            tracing::error!(%err, "failed to build poster service client");
        }

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(notifications::Notification::warning(key));
        }

        Self {
            i18n: I18n::new(language),
            composer: composer::State::new(FormState::with_choices(language, platform)),
            service,
            theme_mode: config.general.theme_mode,
            theme: config.general.theme_mode.iced_theme(),
            notifications,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.notifications.has_notifications() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            composer: &mut self.composer,
            service: &self.service,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Composer(composer_message) => {
                update::handle_composer_message(&mut ctx, composer_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::PosterGenerated(result) => update::handle_poster_generated(&mut ctx, result),
            Message::SaveDialogResult { path, bytes } => {
                update::handle_save_dialog_result(path, bytes)
            }
            Message::PosterSaved(result) => update::handle_poster_saved(&mut ctx, result),
            Message::Tick(_instant) => {
                ctx.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            composer: &self.composer,
            notifications: &self.notifications,
        })
    }

    #[must_use]
    pub fn composer(&self) -> &composer::State {
        &self.composer
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    /// Endpoint the generation calls go to, if the client was built.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        self.service.as_ref().ok().map(PosterService::endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::poster::{Platform, PosterLanguage};
    use crate::infrastructure::DEFAULT_ENDPOINT;
    use crate::test_utils::png_bytes;
    use crate::ui::notifications::Severity;
    use std::path::PathBuf;
    use unic_langid::langid;

    fn app() -> App {
        App::from_config(Flags::default(), &Config::default(), None)
    }

    fn last_notification(app: &App) -> &notifications::Notification {
        app.notifications()
            .visible()
            .next()
            .expect("a notification is visible")
    }

    #[test]
    fn defaults_to_arabic_instagram_and_builtin_endpoint() {
        let app = app();
        assert_eq!(app.composer().form().language(), PosterLanguage::Arabic);
        assert_eq!(app.composer().form().platform(), Platform::Instagram);
        assert_eq!(app.endpoint(), Some(DEFAULT_ENDPOINT));
        assert_eq!(app.i18n.current_locale(), &langid!("ar"));
        assert_eq!(app.theme_mode(), ThemeMode::System);
        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn config_values_seed_the_form() {
        let mut config = Config::default();
        config.composer.language = Some(PosterLanguage::Indonesian);
        config.composer.platform = Some(Platform::Facebook);
        config.service.endpoint = Some("http://localhost:8787/generate-poster".into());
        config.general.theme_mode = ThemeMode::Dark;

        let app = App::from_config(Flags::default(), &config, None);

        assert_eq!(app.composer().form().language(), PosterLanguage::Indonesian);
        assert_eq!(app.composer().form().platform(), Platform::Facebook);
        assert_eq!(app.endpoint(), Some("http://localhost:8787/generate-poster"));
        assert_eq!(app.i18n.current_locale(), &langid!("en-US"));
        assert_eq!(app.theme_mode(), ThemeMode::Dark);
    }

    #[test]
    fn theme_is_resolved_once_from_config() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;
        let mut app = App::from_config(Flags::default(), &config, None);
        assert_eq!(app.theme(), Theme::Dark);

        // Later updates keep the stored theme.
        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert_eq!(app.theme(), Theme::Dark);

        config.general.theme_mode = ThemeMode::Light;
        let app = App::from_config(Flags::default(), &config, None);
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn system_theme_resolves_to_a_concrete_theme() {
        let app = app();
        assert!(matches!(app.theme(), Theme::Light | Theme::Dark));
    }

    #[test]
    fn flags_override_config() {
        let mut config = Config::default();
        config.composer.language = Some(PosterLanguage::Indonesian);
        config.composer.platform = Some(Platform::Facebook);
        config.service.endpoint = Some("http://from-config.invalid/".into());

        let flags = Flags {
            lang: Some(PosterLanguage::Arabic),
            platform: Some(Platform::TikTok),
            endpoint: Some("http://from-cli.invalid/".into()),
            config_dir: None,
        };
        let app = App::from_config(flags, &config, None);

        assert_eq!(app.composer().form().language(), PosterLanguage::Arabic);
        assert_eq!(app.composer().form().platform(), Platform::TikTok);
        assert_eq!(app.endpoint(), Some("http://from-cli.invalid/"));
    }

    #[test]
    fn config_warning_is_shown_as_toast() {
        let app = App::from_config(
            Flags::default(),
            &Config::default(),
            Some("notification-config-load-error".into()),
        );

        let toast = last_notification(&app);
        assert_eq!(toast.severity(), Severity::Warning);
        assert_eq!(toast.message_key(), "notification-config-load-error");
    }

    #[test]
    fn title_is_localized() {
        let mut app = app();
        let arabic = app.title();
        let _ = app.update(Message::Composer(composer::Message::LanguageSelected(
            PosterLanguage::Indonesian,
        )));
        assert_ne!(app.title(), arabic);
        assert!(!app.title().starts_with("MISSING"));
    }

    #[test]
    fn language_selection_switches_interface_locale() {
        let mut app = app();
        let _ = app.update(Message::Composer(composer::Message::LanguageSelected(
            PosterLanguage::Indonesian,
        )));
        assert_eq!(app.i18n.current_locale(), &langid!("en-US"));
        assert!(!app.i18n.is_rtl());

        let _ = app.update(Message::Composer(composer::Message::LanguageSelected(
            PosterLanguage::Arabic,
        )));
        assert!(app.i18n.is_rtl());
    }

    #[test]
    fn generate_marks_the_composer_busy() {
        let mut app = app();
        let _ = app.update(Message::Composer(composer::Message::GenerateRequested));
        let _ = app.update(Message::Composer(composer::Message::GenerateRequested));
        assert_eq!(app.composer().pending_generations(), 2);
    }

    #[test]
    fn http_error_keeps_poster_and_shows_error_toast() {
        let mut app = app();
        let _ = app.update(Message::Composer(composer::Message::GenerateRequested));
        let _ = app.update(Message::PosterGenerated(Ok(png_bytes(5, 5))));
        assert!(app.notifications().visible().next().is_none());

        let _ = app.update(Message::Composer(composer::Message::GenerateRequested));
        let _ = app.update(Message::PosterGenerated(Err(ServiceError::Status(500))));

        assert_eq!(app.composer().poster().map(|p| p.dimensions()), Some((5, 5)));
        assert!(!app.composer().is_generating());

        let toast = last_notification(&app);
        assert_eq!(toast.severity(), Severity::Error);
        assert_eq!(toast.message_key(), "notification-generate-error");
        let reason = toast.arg("reason").expect("reason argument");
        assert!(reason.contains("500"), "reason was {reason}");
    }

    #[test]
    fn error_toast_stays_until_dismissed() {
        let mut app = app();
        let _ = app.update(Message::PosterGenerated(Err(ServiceError::Transport(
            "connection refused".into(),
        ))));
        let id = last_notification(&app).id();

        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert_eq!(app.notifications().visible_count(), 1);

        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Dismiss(id),
        ));
        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn successful_generation_shows_preview_without_toast() {
        let mut app = app();
        let _ = app.update(Message::Composer(composer::Message::GenerateRequested));
        let _ = app.update(Message::PosterGenerated(Ok(png_bytes(9, 16))));

        let poster = app.composer().poster().expect("poster set");
        assert_eq!(poster.dimensions(), (9, 16));
        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn cancelled_save_dialog_does_nothing() {
        let mut app = app();
        let _ = app.update(Message::SaveDialogResult {
            path: None,
            bytes: png_bytes(1, 1),
        });
        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn save_outcomes_are_reported() {
        let mut app = app();
        let _ = app.update(Message::PosterSaved(Ok(PathBuf::from(
            "/tmp/posterly-poster.jpg",
        ))));
        assert_eq!(last_notification(&app).severity(), Severity::Success);

        let _ = app.update(Message::PosterSaved(Err(crate::error::Error::Io(
            "permission denied".into(),
        ))));
        let toast = last_notification(&app);
        assert_eq!(toast.severity(), Severity::Error);
        assert_eq!(toast.message_key(), "notification-poster-save-error");
        assert!(toast
            .arg("detail")
            .is_some_and(|detail| detail.contains("permission denied")));
    }
}
