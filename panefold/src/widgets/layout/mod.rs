mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{LayoutEffect, LayoutEvent, LayoutUiEvent};
use iced::Task;
use model::LayoutViewModel;
use panefold_ui_regions::{CollapseRules, SidebarToggle};
use state::LayoutState;

/// Layout widget owning the sidebar, top bar and main content regions.
pub(crate) struct LayoutWidget {
    state: LayoutState,
}

impl LayoutWidget {
    /// Construct the widget with all three regions expanded.
    pub(crate) fn new(toggle: SidebarToggle, rules: CollapseRules) -> Self {
        Self {
            state: LayoutState::new(toggle, rules),
        }
    }

    /// Construct the widget over an explicit page structure.
    #[cfg(test)]
    pub(crate) fn with_document(
        document: panefold_ui_regions::Document,
        toggle: SidebarToggle,
        rules: CollapseRules,
    ) -> Self {
        Self {
            state: LayoutState::with_document(document, toggle, rules),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, event: LayoutUiEvent) -> Task<LayoutEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> LayoutViewModel<'_> {
        let [sidebar_collapsed, _, _] = self.state.flags();
        LayoutViewModel {
            state: self.state.collapsed_state(),
            sidebar_collapsed,
            geometry: self.state.geometry(),
            section: self.state.section(),
            last_error: self.state.last_error(),
        }
    }

    #[cfg(test)]
    pub(crate) fn insert_region(
        &mut self,
        element: panefold_ui_regions::Element,
    ) {
        self.state.insert_region(element);
    }
}
