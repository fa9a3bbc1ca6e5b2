use iced::Task;

use super::event::{LayoutEffect, LayoutEvent, LayoutUiEvent};
use super::state::LayoutState;

/// Reduce a layout UI event into state updates and effect events.
pub(crate) fn reduce(
    state: &mut LayoutState,
    event: LayoutUiEvent,
) -> Task<LayoutEvent> {
    match event {
        LayoutUiEvent::ToggleCollapsed => match state.toggle() {
            Ok(collapsed) => Task::done(LayoutEvent::Effect(
                LayoutEffect::Changed(collapsed),
            )),
            Err(err) => {
                log::warn!("layout toggle failed: {err}");
                Task::done(LayoutEvent::Effect(LayoutEffect::ToggleFailed(
                    err.to_string(),
                )))
            },
        },
        LayoutUiEvent::SelectSection(section) => {
            state.select_section(section);
            Task::none()
        },
    }
}

#[cfg(test)]
mod tests {
    use panefold_ui_regions::{
        CollapseRules, CollapsedState, Document, Element, SidebarToggle,
        ToggleMode,
    };

    use crate::widgets::layout::model::NavSection;
    use crate::widgets::layout::{LayoutUiEvent, LayoutWidget};

    fn widget_without(id: &str, mode: ToggleMode) -> LayoutWidget {
        let document: Document = ["sidebar", "topbar", "main-content"]
            .into_iter()
            .filter(|candidate| *candidate != id)
            .map(Element::new)
            .collect();
        LayoutWidget::with_document(
            document,
            SidebarToggle::default().with_mode(mode),
            CollapseRules::default(),
        )
    }

    #[test]
    fn given_toggle_intent_when_reduced_then_layout_collapses() {
        let mut widget = LayoutWidget::new(
            SidebarToggle::default(),
            CollapseRules::default(),
        );
        let _task = widget.reduce(LayoutUiEvent::ToggleCollapsed);

        let vm = widget.vm();
        assert_eq!(vm.state, CollapsedState::Collapsed);
        assert!(vm.sidebar_collapsed);
        assert_eq!(vm.geometry.sidebar_width, 56.0);
        assert_eq!(vm.last_error, None);
    }

    #[test]
    fn given_two_toggle_intents_when_reduced_then_layout_is_expanded_again() {
        let mut widget = LayoutWidget::new(
            SidebarToggle::default(),
            CollapseRules::default(),
        );
        let _first = widget.reduce(LayoutUiEvent::ToggleCollapsed);
        let _second = widget.reduce(LayoutUiEvent::ToggleCollapsed);

        let vm = widget.vm();
        assert_eq!(vm.state, CollapsedState::Expanded);
        assert_eq!(vm.geometry.sidebar_width, 240.0);
    }

    #[test]
    fn given_missing_main_content_when_sequential_toggle_then_error_is_kept() {
        let mut widget = widget_without("main-content", ToggleMode::Sequential);
        let _task = widget.reduce(LayoutUiEvent::ToggleCollapsed);

        let vm = widget.vm();
        assert_eq!(vm.state, CollapsedState::Mixed);
        assert!(vm.sidebar_collapsed);
        assert!(
            vm.last_error
                .is_some_and(|message| message.contains("main-content"))
        );
    }

    #[test]
    fn given_missing_main_content_when_lockstep_toggle_then_nothing_changes() {
        let mut widget = widget_without("main-content", ToggleMode::Lockstep);
        let _task = widget.reduce(LayoutUiEvent::ToggleCollapsed);

        let vm = widget.vm();
        assert_eq!(vm.state, CollapsedState::Expanded);
        assert!(!vm.sidebar_collapsed);
        assert!(vm.last_error.is_some());
    }

    #[test]
    fn given_failed_then_successful_toggle_when_reduced_then_error_clears() {
        let mut widget = widget_without("topbar", ToggleMode::Lockstep);
        let _failed = widget.reduce(LayoutUiEvent::ToggleCollapsed);
        assert!(widget.vm().last_error.is_some());

        widget.insert_region(Element::new("topbar"));
        let _ok = widget.reduce(LayoutUiEvent::ToggleCollapsed);
        assert_eq!(widget.vm().last_error, None);
        assert_eq!(widget.vm().state, CollapsedState::Collapsed);
    }

    #[test]
    fn given_select_section_when_reduced_then_section_changes() {
        let mut widget = LayoutWidget::new(
            SidebarToggle::default(),
            CollapseRules::default(),
        );
        let _task = widget
            .reduce(LayoutUiEvent::SelectSection(NavSection::Settings));
        assert_eq!(widget.vm().section, NavSection::Settings);
        assert_eq!(widget.vm().state, CollapsedState::Expanded);
    }
}
