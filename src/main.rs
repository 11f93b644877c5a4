use iced::event::{self, Event};
use iced::keyboard::{self, key, Key};
use iced::widget::{text_input, Space};
use iced::{mouse, touch, window};
use iced::{Element, Length, Size, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod notifications;
mod remote;
mod state;
mod ui;

use config::Config;
use error::Error;
use notifications::{ToastId, Toasts};
use remote::ImageCache;
use state::extension::Extensions;
use state::gallery::{Gallery, GalleryEvent, GalleryMode};
use state::shell::{Route, ShellState};

/// Main application state
struct WallpaperApp {
    config: Config,
    theme: Theme,
    stage: Stage,
}

/// Nothing is built or drawn until the UI font has been dealt with
enum Stage {
    Loading,
    Ready(Box<Session>),
}

/// Everything that exists once the app is past the font gate
struct Session {
    shell: ShellState,
    gallery: Gallery,
    images: ImageCache,
    toasts: Toasts,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Font file read from disk (or failed to)
    FontFileRead(Result<Vec<u8>, Error>),
    /// Font registered with the renderer
    FontRegistered(Result<(), iced::font::Error>),
    /// A remote wallpaper image finished downloading
    ImageFetched(String, Result<Vec<u8>, Error>),
    /// Tile or preview interaction
    Gallery(GalleryEvent),
    /// Drawer entry selected
    Navigate(Route),
    /// Header menu button or drawer backdrop
    ToggleDrawer,
    /// Header search button
    ToggleSearch,
    SearchChanged(String),
    /// The search field lost focus
    SearchBlurred,
    /// A press landed somewhere; focus may have left the search field
    PointerPressed,
    /// Result of asking the widget tree whether the search field is focused
    SearchFocusChecked(bool),
    EscapePressed,
    DismissToast(ToastId),
    /// Periodic check for expired toasts
    Tick,
}

impl WallpaperApp {
    /// Create the app and start loading the UI font
    fn new(config: Config) -> (Self, Task<Message>) {
        tracing::info!("🎨 Wallpaper Gallery starting, font at {}", config.font_path.display());

        let font_path = config.font_path.clone();
        (
            WallpaperApp {
                config,
                theme: ui::theme::app_theme(),
                stage: Stage::Loading,
            },
            Task::perform(read_font(font_path), Message::FontFileRead),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FontFileRead(Ok(bytes)) => {
                return iced::font::load(bytes).map(Message::FontRegistered);
            }
            Message::FontFileRead(Err(err)) => {
                tracing::warn!("⚠️  {}; using the fallback font", err);
                tracing::info!(
                    "🔤 To use {}, copy {}.ttf to {} or set font_path in {}",
                    config::FONT_FAMILY,
                    config::FONT_FAMILY,
                    self.config.font_path.display(),
                    config::settings_path().display()
                );
                return self.open_gate();
            }
            Message::FontRegistered(result) => {
                match result {
                    Ok(()) => tracing::info!("🔤 Font {} loaded", config::FONT_FAMILY),
                    Err(err) => {
                        let err = Error::Font(format!("{:?}", err));
                        tracing::warn!("⚠️  {}; using the fallback font", err);
                    }
                }
                return self.open_gate();
            }
            _ => {}
        }

        let Stage::Ready(session) = &mut self.stage else {
            tracing::debug!(?message, "ignored before startup finished");
            return Task::none();
        };
        session.update(message)
    }

    /// Build the screen tree once, then start fetching wallpaper images
    fn open_gate(&mut self) -> Task<Message> {
        if matches!(self.stage, Stage::Ready(_)) {
            return Task::none();
        }

        let mut session = Session::new(&self.config);
        let fetches = session.fetch_images();
        self.stage = Stage::Ready(Box::new(session));
        fetches
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match &self.stage {
            // Render nothing rather than flash fallback typography
            Stage::Loading => Space::new(Length::Fill, Length::Fill).into(),
            Stage::Ready(session) => ui::shell::view(
                &session.shell,
                &session.gallery,
                &session.images,
                &session.toasts,
            ),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let input = event::listen_with(route_event);

        match &self.stage {
            Stage::Ready(session) if !session.toasts.is_empty() => Subscription::batch([
                input,
                iced::time::every(Duration::from_millis(250)).map(|_| Message::Tick),
            ]),
            _ => input,
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

impl Session {
    fn new(config: &Config) -> Self {
        let catalog = state::data::sample_catalog().unwrap_or_else(|err| {
            tracing::error!("❌ {}", err);
            Vec::new()
        });

        Session {
            shell: ShellState::new(),
            gallery: Gallery::new(catalog, Extensions::default()),
            images: ImageCache::new(Duration::from_secs(config.image_timeout_seconds)),
            toasts: Toasts::new(Duration::from_secs(config.toast_seconds)),
        }
    }

    /// One background download per wallpaper image
    fn fetch_images(&mut self) -> Task<Message> {
        let mut tasks = Vec::new();
        for wallpaper in self.gallery.wallpapers() {
            let url = wallpaper.image_url.clone();
            if !self.images.begin(&url) {
                continue;
            }
            let client = self.images.client().clone();
            tasks.push(Task::perform(
                remote::fetch_image(client, url.clone()),
                move |result| Message::ImageFetched(url.clone(), result),
            ));
        }
        Task::batch(tasks)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(event) => {
                if let Some(ack) = self.gallery.apply(event) {
                    self.toasts.push(ack);
                }
                Task::none()
            }
            Message::ImageFetched(url, result) => {
                self.images.finish(url, result);
                Task::none()
            }
            Message::Navigate(route) => {
                self.shell.navigate(route);
                Task::none()
            }
            Message::ToggleDrawer => {
                self.shell.toggle_drawer();
                Task::none()
            }
            Message::ToggleSearch => {
                self.shell.toggle_search();
                if self.shell.is_searching() {
                    text_input::focus(ui::shell::search_input_id())
                } else {
                    Task::none()
                }
            }
            Message::SearchChanged(query) => {
                self.shell.set_query(query);
                Task::none()
            }
            Message::SearchBlurred | Message::SearchFocusChecked(false) => {
                self.shell.blur_search();
                Task::none()
            }
            Message::SearchFocusChecked(true) => Task::none(),
            Message::PointerPressed => {
                // Widgets have already seen the press, so the field's focus is settled
                if self.shell.is_searching() {
                    iced::advanced::widget::operate(ui::shell::SearchFocus::default())
                        .map(Message::SearchFocusChecked)
                } else {
                    Task::none()
                }
            }
            Message::EscapePressed => {
                // Innermost layer first: preview, then drawer, then search
                if self.gallery.mode() == GalleryMode::Previewing {
                    self.gallery.apply(GalleryEvent::DismissRequested);
                } else if self.shell.drawer_open() {
                    self.shell.toggle_drawer();
                } else {
                    self.shell.blur_search();
                }
                Task::none()
            }
            Message::DismissToast(id) => {
                self.toasts.dismiss(id);
                Task::none()
            }
            Message::Tick => {
                self.toasts.tick();
                Task::none()
            }
            Message::FontFileRead(_) | Message::FontRegistered(_) => Task::none(),
        }
    }
}

/// Window events the app reacts to whether or not a widget captured them.
///
/// A focused text input swallows Escape and drops its own focus, so a
/// captured Escape means the search field was just left.
fn route_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(key::Named::Escape),
            ..
        }) => Some(match status {
            event::Status::Captured => Message::SearchBlurred,
            event::Status::Ignored => Message::EscapePressed,
        }),
        Event::Mouse(mouse::Event::ButtonPressed(_))
        | Event::Touch(touch::Event::FingerPressed { .. }) => Some(Message::PointerPressed),
        _ => None,
    }
}

/// Read the font file in the background
async fn read_font(path: PathBuf) -> Result<Vec<u8>, Error> {
    tokio::fs::read(&path).await.map_err(|e| Error::io(&path, e))
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Only fails if a global subscriber is already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn main() -> iced::Result {
    let (config, warning) = config::load();
    init_logging(&config.log_level);
    if let Some(err) = warning {
        tracing::warn!("⚠️  Using default settings: {}", err);
    }

    iced::application("Wallpapers", WallpaperApp::update, WallpaperApp::view)
        .theme(WallpaperApp::theme)
        .subscription(WallpaperApp::subscription)
        .window_size(Size::new(480.0, 860.0))
        .centered()
        .run_with(move || WallpaperApp::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::advanced::clipboard;
    use iced::advanced::widget::{self, operation};
    use iced::{Font, Pixels, Point};
    use iced_runtime::user_interface::{Cache, UserInterface};
    use crate::remote::Thumbnail;

    const WINDOW: Size = Size::new(480.0, 860.0);

    /// Somewhere inside the first grid tile, clear of its heart button
    const FIRST_TILE: Point = Point::new(120.0, 220.0);

    fn ready_app() -> WallpaperApp {
        let (mut app, _) = WallpaperApp::new(Config::default());
        let _ = app.update(Message::FontRegistered(Ok(())));
        app
    }

    fn session(app: &WallpaperApp) -> &Session {
        match &app.stage {
            Stage::Ready(session) => session,
            Stage::Loading => panic!("app should be past the font gate"),
        }
    }

    fn headless_renderer() -> iced::Renderer {
        iced::Renderer::Secondary(iced_tiny_skia::Renderer::new(Font::DEFAULT, Pixels(16.0)))
    }

    fn search_focused(
        interface: &mut UserInterface<'_, Message, Theme, iced::Renderer>,
        renderer: &iced::Renderer,
    ) -> bool {
        let mut query = ui::shell::SearchFocus::default();
        interface.operate(renderer, &mut operation::black_box::<bool, ()>(&mut query));
        query.is_focused()
    }

    /// Build the shell, focus the search field, then deliver `event` at `cursor`.
    ///
    /// Returns the widget messages, the event status and whether the field is
    /// still focused afterwards.
    fn deliver_with_search_focused(
        session: &Session,
        event: Event,
        cursor: Point,
    ) -> (Vec<Message>, event::Status, bool) {
        let mut renderer = headless_renderer();
        let root = ui::shell::view(&session.shell, &session.gallery, &session.images, &session.toasts);
        let mut interface = UserInterface::build(root, WINDOW, Cache::new(), &mut renderer);

        let mut focus = operation::focusable::focus::<()>(widget::Id::from(ui::shell::search_input_id()));
        interface.operate(&renderer, &mut focus);
        assert!(search_focused(&mut interface, &renderer));

        let mut messages = Vec::new();
        let (_, statuses) = interface.update(
            &[event],
            mouse::Cursor::Available(cursor),
            &mut renderer,
            &mut clipboard::Null,
            &mut messages,
        );
        let focused = search_focused(&mut interface, &renderer);
        (messages, statuses[0], focused)
    }

    fn escape_press() -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(key::Named::Escape),
            modified_key: Key::Named(key::Named::Escape),
            physical_key: key::Physical::Code(key::Code::Escape),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
        })
    }

    fn left_click() -> Event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
    }

    /// Feed widget messages, then whatever the window-event route produced, to the app
    fn dispatch(app: &mut WallpaperApp, messages: Vec<Message>, routed: Option<Message>) {
        for message in messages.into_iter().chain(routed) {
            let _ = app.update(message);
        }
    }

    #[test]
    fn test_gate_stays_closed_until_font_settles() {
        let (mut app, _) = WallpaperApp::new(Config::default());
        assert!(matches!(app.stage, Stage::Loading));

        // UI events before the gate opens are dropped
        let _ = app.update(Message::Gallery(GalleryEvent::TileActivated("1".into())));
        assert!(matches!(app.stage, Stage::Loading));

        let missing = Error::Font("no such file".into());
        let _ = app.update(Message::FontFileRead(Err(missing)));
        assert_eq!(session(&app).gallery.wallpapers().len(), 8);
    }

    #[test]
    fn test_gate_opens_once() {
        let mut app = ready_app();
        let _ = app.update(Message::Gallery(GalleryEvent::FavoriteToggled("2".into(), true)));
        let _ = app.update(Message::FontRegistered(Ok(())));

        assert!(session(&app).gallery.wallpapers()[1].is_favorite);
    }

    #[test]
    fn test_download_shows_toast() {
        let mut app = ready_app();
        let _ = app.update(Message::Gallery(GalleryEvent::TileActivated("3".into())));
        let _ = app.update(Message::Gallery(GalleryEvent::Download));

        let toasts: Vec<_> = session(&app).toasts.visible().collect();
        assert_eq!(toasts.len(), 1);
        assert!(toasts[0].title.contains("Download"));
    }

    #[test]
    fn test_escape_closes_preview_before_search() {
        let mut app = ready_app();
        let _ = app.update(Message::ToggleSearch);
        let _ = app.update(Message::Gallery(GalleryEvent::TileActivated("3".into())));

        let _ = app.update(Message::EscapePressed);
        assert_eq!(session(&app).gallery.mode(), GalleryMode::Browsing);
        assert!(session(&app).shell.is_searching());

        let _ = app.update(Message::EscapePressed);
        assert!(!session(&app).shell.is_searching());
    }

    #[test]
    fn test_search_text_leaves_grid_alone() {
        let mut app = ready_app();
        let before = session(&app).gallery.wallpapers().to_vec();

        let _ = app.update(Message::ToggleSearch);
        let _ = app.update(Message::SearchChanged("forest".into()));

        assert_eq!(session(&app).shell.search_query(), "forest");
        assert_eq!(session(&app).gallery.wallpapers(), before.as_slice());
    }

    #[test]
    fn test_navigate_switches_route() {
        let mut app = ready_app();
        let _ = app.update(Message::ToggleDrawer);
        let _ = app.update(Message::Navigate(Route::RecentlyWatched));

        let shell = &session(&app).shell;
        assert_eq!(shell.active(), Route::RecentlyWatched);
        assert!(!shell.drawer_open());
    }

    #[test]
    fn test_image_fetches_start_when_gate_opens() {
        let mut app = ready_app();
        let urls: Vec<String> = session(&app)
            .gallery
            .wallpapers()
            .iter()
            .map(|w| w.image_url.clone())
            .collect();

        for url in &urls {
            assert!(matches!(session(&app).images.get(url), Some(Thumbnail::Loading)));
        }

        let failure = Error::Http {
            url: urls[0].clone(),
            message: "timed out".into(),
        };
        let _ = app.update(Message::ImageFetched(urls[0].clone(), Err(failure)));
        assert!(matches!(session(&app).images.get(&urls[0]), Some(Thumbnail::Failed)));
    }

    #[test]
    fn test_missing_font_file_still_opens_gate() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            font_path: dir.path().join("Lexend.ttf"),
            ..Config::default()
        };

        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let result = runtime.block_on(read_font(config.font_path.clone()));
        assert!(matches!(result, Err(Error::Io { .. })));

        let (mut app, _) = WallpaperApp::new(config);
        let _ = app.update(Message::FontFileRead(result));
        assert_eq!(session(&app).gallery.wallpapers().len(), 8);
    }

    #[test]
    fn test_clicking_a_tile_blurs_focused_search() {
        let mut app = ready_app();
        let _ = app.update(Message::ToggleSearch);

        let (messages, status, still_focused) =
            deliver_with_search_focused(session(&app), left_click(), FIRST_TILE);
        assert!(matches!(
            messages.as_slice(),
            [Message::Gallery(GalleryEvent::TileActivated(id))] if id == "1"
        ));
        assert!(!still_focused);

        // The tile captured the press, the window route still reports it
        let routed = route_event(left_click(), status, window::Id::unique());
        assert!(matches!(routed, Some(Message::PointerPressed)));
        dispatch(&mut app, messages, routed);

        // The focus query comes back from the runtime with the tree's answer
        let _ = app.update(Message::SearchFocusChecked(still_focused));
        assert!(!session(&app).shell.is_searching());
        assert_eq!(session(&app).gallery.mode(), GalleryMode::Previewing);
    }

    #[test]
    fn test_escape_in_focused_search_blurs_it() {
        let mut app = ready_app();
        let _ = app.update(Message::ToggleSearch);
        let _ = app.update(Message::Gallery(GalleryEvent::TileActivated("2".into())));

        let (messages, status, still_focused) =
            deliver_with_search_focused(session(&app), escape_press(), Point::ORIGIN);
        assert!(messages.is_empty());
        assert_eq!(status, event::Status::Captured);
        assert!(!still_focused);

        let routed = route_event(escape_press(), status, window::Id::unique());
        dispatch(&mut app, messages, routed);

        // Only the field lets go; the preview waits for the next Escape
        assert!(!session(&app).shell.is_searching());
        assert_eq!(session(&app).gallery.mode(), GalleryMode::Previewing);

        let routed = route_event(escape_press(), event::Status::Ignored, window::Id::unique());
        dispatch(&mut app, Vec::new(), routed);
        assert_eq!(session(&app).gallery.mode(), GalleryMode::Browsing);
    }

    #[test]
    fn test_press_inside_focused_search_keeps_it() {
        let mut app = ready_app();
        let _ = app.update(Message::ToggleSearch);

        // Middle of the header, where the search field sits
        let (_, _, still_focused) =
            deliver_with_search_focused(session(&app), left_click(), Point::new(150.0, 24.0));
        assert!(still_focused);

        let _ = app.update(Message::PointerPressed);
        let _ = app.update(Message::SearchFocusChecked(still_focused));
        assert!(session(&app).shell.is_searching());
    }
}
