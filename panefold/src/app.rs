#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Subscription, Task, Theme};
use panefold_ui_regions::SidebarToggle;

use crate::config::{ConfigLoadStatus, LayoutConfig, load_initial_config};
use crate::widgets::Widgets;
use crate::widgets::layout::{LayoutEvent, LayoutWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 640.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 420.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Layout widget
    Layout(LayoutEvent),
    // Direct operations
    Keyboard(iced::keyboard::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) status: Option<String>,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let (config, status) = load_initial_config();
        (Self::from_config(config, status), Task::none())
    }

    /// Build the application from an already loaded configuration.
    pub(crate) fn from_config(
        config: LayoutConfig,
        status: ConfigLoadStatus,
    ) -> Self {
        log::info!(
            "layout regions {:?} toggled with `{}` in {:?} mode",
            config.regions.ordered(),
            config.marker,
            config.mode
        );

        let mut status = match status {
            ConfigLoadStatus::Loaded | ConfigLoadStatus::Missing => None,
            ConfigLoadStatus::Invalid(message) => {
                Some(format!("Layout config ignored: {message}"))
            },
        };

        let toggle = match config.toggle() {
            Ok(toggle) => toggle,
            Err(err) => {
                log::warn!("layout toggle rejected, using defaults: {err}");
                status = Some(format!("Layout config ignored: {err}"));
                SidebarToggle::default()
            },
        };

        Self {
            status,
            widgets: Widgets {
                layout: LayoutWidget::new(toggle, config.rules),
            },
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("Panefold")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
