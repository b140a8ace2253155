// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page, its carousels
//! and the lightbox.
//!
//! The `App` owns the loaded page document, one carousel per gallery, the
//! single lightbox and the navigation bar state. Components report effects
//! upward and `App` turns them into tasks (track and page scrolling, resize
//! debouncing).

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Shortcut};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::page::{self, layout::PageLayout, Page};
use crate::ui::carousel::Carousel;
use crate::ui::lightbox::Lightbox;
use crate::ui::state::Debouncer;
use crate::ui::theming::AppTheme;
use iced::widget::Id;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Widget id of the page's vertical scrollable.
pub const PAGE_SCROLLABLE_ID: &str = "page-scrollable";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    page: Page,
    layout: PageLayout,
    carousels: Vec<Carousel>,
    lightbox: Lightbox,
    /// Whether the compact navigation menu is open.
    menu_open: bool,
    /// Size the layout was computed for.
    window_size: Size,
    /// Latest size reported while a resize is settling.
    pending_size: Option<Size>,
    resize_debouncer: Debouncer,
    theme: AppTheme,
    /// Localized message shown until dismissed.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("page", &self.page.title)
            .field("carousels", &self.carousels.len())
            .field("lightbox_open", &self.lightbox.is_open())
            .field("menu_open", &self.menu_open)
            .field("window_size", &self.window_size)
            .finish_non_exhaustive()
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once.
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

impl Default for App {
    fn default() -> Self {
        Self::with_page(
            page::demo::demo_page(),
            I18n::default(),
            &Config::default(),
            Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        )
    }
}

impl App {
    /// Loads settings and the page document named by `flags`.
    ///
    /// A page that fails to load is replaced by the demo page; a broken
    /// settings file by the defaults. Both leave a notice for the user.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let mut notice_key = config_warning;
        let page = match flags.page_path {
            Some(path) => match page::load_from_path(&path) {
                Ok(page) => page,
                Err(err) => {
                    log::error!("cannot load page {}: {}", path.display(), err);
                    notice_key = Some("notification-page-load-error".to_string());
                    page::demo::demo_page()
                }
            },
            None => page::demo::demo_page(),
        };

        let mut app = Self::with_page(
            page,
            i18n,
            &config,
            Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        );
        app.notice = notice_key.map(|key| app.i18n.tr(&key));

        (app, Task::none())
    }

    /// Builds the state for `page` laid out in a window of `window_size`.
    #[must_use]
    pub fn with_page(page: Page, i18n: I18n, config: &Config, window_size: Size) -> Self {
        let carousels = page
            .galleries()
            .map(|(id, gallery)| Carousel::new(id, gallery.len(), window_size.width))
            .collect();
        let layout = PageLayout::compute(&page, window_size.width);

        Self {
            i18n,
            page,
            layout,
            carousels,
            lightbox: Lightbox::new(),
            menu_open: false,
            window_size,
            pending_size: None,
            resize_debouncer: Debouncer::new(config.resize_debounce()),
            theme: AppTheme::new(config.general.theme_mode),
            notice: None,
        }
    }

    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    #[must_use]
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    #[must_use]
    pub fn carousels(&self) -> &[Carousel] {
        &self.carousels
    }

    #[must_use]
    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn window_size(&self) -> Size {
        self.window_size
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn title(&self) -> String {
        self.i18n
            .tr_with_args("window-title", &[("title", self.page.title.as_str().into())])
    }

    pub fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::handle(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

fn page_scrollable_id() -> Id {
    Id::new(PAGE_SCROLLABLE_ID)
}
