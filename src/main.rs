use iced::widget::{column, scrollable, text_input};
use iced::{keyboard, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::sync::Arc;
use std::time::Duration;

mod config;
mod error;
mod logging;
mod state;
mod ui;

use config::AppConfig;
use error::{AppError, CatalogError};
use state::catalog::Catalog;
use state::data::CourseId;
use state::detail::DetailView;
use state::notify::{ToastId, ToastKind, Toasts};
use state::search::{self, SearchQuery};
use state::seed;
use state::session::{LoginForm, Session};

/// Main application state
///
/// Owns every piece of state; the views only ever borrow it.
struct LearnHub {
    /// The in-memory course store
    catalog: Catalog,
    /// Current text of the search box
    search: SearchQuery,
    session: Session,
    /// Login dialog visibility and draft username
    login: LoginForm,
    /// Course shown in the detail panel, if any
    detail: DetailView,
    toasts: Toasts,
    config: AppConfig,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Search box edited
    SearchChanged(String),
    /// "Clear Search" pressed on the empty state
    ClearSearch,
    /// Course card clicked
    OpenCourse(CourseId),
    CloseDetail,
    /// Completion toggle pressed in the detail panel
    ToggleComplete(CourseId),
    OpenLogin,
    CloseLogin,
    LoginUsernameChanged(String),
    SubmitLogin,
    Logout,
    /// User clicked "Open Catalog…"
    OpenCatalog,
    /// Background catalog load finished
    CatalogLoaded(Result<Catalog, Arc<CatalogError>>),
    /// Load of the configured `catalog_path` at startup finished
    ConfiguredCatalogLoaded(Result<Catalog, Arc<CatalogError>>),
    /// Toast timer expired or toast clicked
    DismissToast(ToastId),
    /// Escape key pressed
    Escape,
}

impl LearnHub {
    fn new(config: AppConfig, catalog: Catalog) -> Self {
        LearnHub {
            catalog,
            search: SearchQuery::default(),
            session: Session::default(),
            login: LoginForm::default(),
            detail: DetailView::default(),
            toasts: Toasts::new(config.max_toasts),
            config,
        }
    }

    /// Create the application with the built-in catalog, then load the
    /// configured catalog file in the background if there is one.
    fn boot(config: AppConfig) -> (Self, Task<Message>) {
        let catalog = seed::builtin().unwrap_or_else(|e| {
            tracing::error!("built-in catalog is invalid: {}", e);
            Catalog::default()
        });
        if catalog.is_empty() {
            tracing::warn!("starting with an empty catalog");
        }
        tracing::info!("📚 LearnHub initialized with {} courses", catalog.len());

        let task = match config.catalog_path.clone() {
            Some(path) => {
                tracing::info!("loading catalog from {}", path.display());
                Task::perform(seed::load_from_path(path), |result| {
                    Message::ConfiguredCatalogLoaded(result.map_err(Arc::new))
                })
            }
            None => Task::none(),
        };

        (LearnHub::new(config, catalog), task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchChanged(query) => {
                self.search.set(query);
                Task::none()
            }
            Message::ClearSearch => {
                self.search.clear();
                Task::none()
            }
            Message::OpenCourse(id) => {
                if self.catalog.contains(id) {
                    self.detail.open(id);
                }
                Task::none()
            }
            Message::CloseDetail => {
                self.detail.close();
                Task::none()
            }
            Message::ToggleComplete(id) => match self.catalog.toggle_completion(id) {
                Ok(completion) => {
                    tracing::info!("course {} toggled: {:?}", id, completion);
                    self.notify(ToastKind::Success, completion.message())
                }
                Err(e) => {
                    tracing::warn!("ignoring completion toggle: {}", e);
                    Task::none()
                }
            },
            Message::OpenLogin => {
                self.login.open();
                text_input::focus(ui::login::username_input_id())
            }
            Message::CloseLogin => {
                self.login.close();
                Task::none()
            }
            Message::LoginUsernameChanged(username) => {
                self.login.username = username;
                Task::none()
            }
            Message::SubmitLogin => match self.session.login(self.login.username.trim()) {
                Ok(()) => {
                    self.login.close();
                    let username = self.session.username().unwrap_or_default().to_string();
                    tracing::info!("signed in as {}", username);
                    self.notify(ToastKind::Success, format!("Welcome, {}!", username))
                }
                Err(e) => {
                    tracing::debug!("login rejected: {}", e);
                    Task::none()
                }
            },
            Message::Logout => {
                if self.session.logout() {
                    tracing::info!("signed out");
                    self.notify(ToastKind::Info, "You've been logged out")
                } else {
                    Task::none()
                }
            }
            Message::OpenCatalog => {
                let file = FileDialog::new()
                    .set_title("Open Course Catalog")
                    .add_filter("Course catalog", &["json"])
                    .pick_file();

                match file {
                    Some(path) => load_catalog(path),
                    None => Task::none(),
                }
            }
            Message::CatalogLoaded(Ok(catalog)) => {
                let count = catalog.len();
                self.replace_catalog(catalog);
                let noun = if count == 1 { "course" } else { "courses" };
                self.notify(ToastKind::Info, format!("Loaded {} {}", count, noun))
            }
            Message::CatalogLoaded(Err(e)) => {
                tracing::error!("catalog load failed: {}", e);
                self.notify(ToastKind::Error, format!("Could not open catalog: {}", e))
            }
            Message::ConfiguredCatalogLoaded(Ok(catalog)) => {
                self.replace_catalog(catalog);
                Task::none()
            }
            Message::ConfiguredCatalogLoaded(Err(e)) => {
                tracing::warn!("configured catalog unavailable, keeping built-in courses: {}", e);
                Task::none()
            }
            Message::DismissToast(id) => {
                self.toasts.dismiss(id);
                Task::none()
            }
            Message::Escape => {
                if self.login.open {
                    self.login.close();
                } else if self.detail.is_open() {
                    self.detail.close();
                }
                Task::none()
            }
        }
    }

    /// Swap in a freshly loaded catalog, closing the detail panel if its
    /// course is gone
    fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;

        if let Some(id) = self.detail.shown() {
            if !self.catalog.contains(id) {
                self.detail.close();
            }
        }

        tracing::info!("✅ catalog replaced with {} courses", self.catalog.len());
    }

    /// Show a toast and schedule its dismissal
    fn notify(&mut self, kind: ToastKind, message: impl Into<String>) -> Task<Message> {
        let id = self.toasts.push(kind, message);
        let ttl = Duration::from_secs(self.config.toast_seconds);

        Task::perform(
            async move { tokio::time::sleep(ttl).await },
            move |_| Message::DismissToast(id),
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let visible = search::filter(self.catalog.courses(), self.search.as_str());

        let page = column![
            ui::header::header(&self.session, self.catalog.completed_count()),
            scrollable(column![
                ui::catalog::hero(&self.search),
                ui::catalog::stats(&self.catalog),
                ui::catalog::course_grid(&visible, &self.search, self.config.card_width),
            ])
            .height(Length::Fill),
        ];

        let mut content: Element<Message> = page.into();

        if let Some(course) = self.detail.shown().and_then(|id| self.catalog.get(id)) {
            content = ui::modal(content, ui::detail::detail_panel(course), Message::CloseDetail);
        }

        if self.login.open {
            content = ui::modal(content, ui::login::login_dialog(&self.login), Message::CloseLogin);
        }

        ui::toast::overlay(content, &self.toasts)
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::Escape),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.config.theme.theme()
    }
}

fn load_catalog(path: std::path::PathBuf) -> Task<Message> {
    Task::perform(seed::load_from_path(path), |result| {
        Message::CatalogLoaded(result.map_err(Arc::new))
    })
}

fn main() -> Result<(), AppError> {
    logging::init_logging();
    let config = config::load_or_default();

    iced::application("LearnHub", LearnHub::update, LearnHub::view)
        .theme(LearnHub::theme)
        .subscription(LearnHub::subscription)
        .window_size((1280.0, 860.0))
        .centered()
        .run_with(move || LearnHub::boot(config))?;

    Ok(())
}
