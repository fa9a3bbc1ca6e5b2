use iced::Task;
use panefold_ui_regions::CollapsedState;

use crate::app::{App, AppEvent};
use crate::widgets::layout::{LayoutEffect, LayoutEvent, LayoutUiEvent};

/// Route a layout event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: LayoutEvent) -> Task<AppEvent> {
    match event {
        LayoutEvent::Ui(event) => route_ui_event(app, event),
        LayoutEvent::Effect(effect) => route_effect_event(app, effect),
    }
}

fn route_ui_event(app: &mut App, event: LayoutUiEvent) -> Task<AppEvent> {
    app.widgets.layout.reduce(event).map(AppEvent::Layout)
}

fn route_effect_event(app: &mut App, effect: LayoutEffect) -> Task<AppEvent> {
    match effect {
        LayoutEffect::Changed(state) => {
            log::info!("layout is now {state:?}");
            app.status = Some(describe(state).to_string());
        },
        LayoutEffect::ToggleFailed(message) => {
            app.status = Some(format!("Toggle failed: {message}"));
        },
    }
    Task::none()
}

fn describe(state: CollapsedState) -> &'static str {
    match state {
        CollapsedState::Expanded => "Sidebar expanded",
        CollapsedState::Collapsed => "Sidebar collapsed",
        CollapsedState::Mixed => "Regions out of sync",
    }
}

#[cfg(test)]
mod tests {
    use panefold_ui_regions::{CollapsedState, RegionIds};

    use super::route;
    use crate::app::App;
    use crate::config::{ConfigLoadStatus, LayoutConfig};
    use crate::widgets::layout::{LayoutEffect, LayoutEvent, LayoutUiEvent};

    fn app() -> App {
        App::from_config(LayoutConfig::default(), ConfigLoadStatus::Missing)
    }

    #[test]
    fn given_toggle_ui_event_when_routed_then_layout_widget_collapses() {
        let mut app = app();
        let _task =
            route(&mut app, LayoutEvent::Ui(LayoutUiEvent::ToggleCollapsed));
        assert_eq!(app.widgets.layout.vm().state, CollapsedState::Collapsed);
    }

    #[test]
    fn given_changed_effect_when_routed_then_status_describes_state() {
        let mut app = app();
        let _task = route(
            &mut app,
            LayoutEvent::Effect(LayoutEffect::Changed(
                CollapsedState::Collapsed,
            )),
        );
        assert_eq!(app.status.as_deref(), Some("Sidebar collapsed"));
    }

    #[test]
    fn given_failed_effect_when_routed_then_status_carries_message() {
        let mut app = app();
        let _task = route(
            &mut app,
            LayoutEvent::Effect(LayoutEffect::ToggleFailed(String::from(
                "region `sidebar` is missing from the layout",
            ))),
        );
        assert!(
            app.status
                .as_deref()
                .is_some_and(|status| status.contains("`sidebar`"))
        );
    }

    #[test]
    fn given_invalid_config_status_when_app_built_then_status_is_shown() {
        let app = App::from_config(
            LayoutConfig::default(),
            ConfigLoadStatus::Invalid(String::from("expected value")),
        );
        assert!(
            app.status
                .as_deref()
                .is_some_and(|status| status.contains("expected value"))
        );
    }

    #[test]
    fn given_duplicate_region_ids_when_app_built_then_default_toggle_is_used() {
        let config = LayoutConfig {
            regions: RegionIds::new("nav", "nav", "body"),
            ..LayoutConfig::default()
        };
        let mut app = App::from_config(config, ConfigLoadStatus::Loaded);
        assert!(
            app.status
                .as_deref()
                .is_some_and(|status| status.contains("`nav`"))
        );

        let _task =
            route(&mut app, LayoutEvent::Ui(LayoutUiEvent::ToggleCollapsed));
        assert_eq!(app.widgets.layout.vm().state, CollapsedState::Collapsed);
    }
}
