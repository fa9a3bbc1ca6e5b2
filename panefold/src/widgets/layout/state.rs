use panefold_ui_regions::{
    CollapseRules, CollapsedState, Document, Element, LayoutGeometry, Region,
    SidebarToggle, ToggleError,
};

use super::model::NavSection;

/// Internal state: the page regions plus the toggle acting on them.
#[derive(Debug)]
pub(super) struct LayoutState {
    document: Document,
    toggle: SidebarToggle,
    rules: CollapseRules,
    section: NavSection,
    last_error: Option<String>,
}

impl LayoutState {
    /// Build state whose document holds the three regions, all expanded.
    pub(super) fn new(toggle: SidebarToggle, rules: CollapseRules) -> Self {
        let document =
            toggle.ids().ordered().into_iter().map(Element::new).collect();
        Self::with_document(document, toggle, rules)
    }

    pub(super) fn with_document(
        document: Document,
        toggle: SidebarToggle,
        rules: CollapseRules,
    ) -> Self {
        Self {
            document,
            toggle,
            rules,
            section: NavSection::default(),
            last_error: None,
        }
    }

    pub(super) fn section(&self) -> NavSection {
        self.section
    }

    pub(super) fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Marker presence per region in toggle order; absent regions read as
    /// expanded.
    pub(super) fn flags(&self) -> [bool; 3] {
        let marker = self.toggle.marker();
        self.toggle.ids().ordered().map(|id| {
            self.document
                .get_by_id(id)
                .is_some_and(|element| element.has_marker(marker))
        })
    }

    pub(super) fn collapsed_state(&self) -> CollapsedState {
        CollapsedState::from_flags(self.flags())
    }

    pub(super) fn geometry(&self) -> LayoutGeometry {
        self.rules.geometry(self.flags())
    }

    pub(super) fn select_section(&mut self, section: NavSection) {
        self.section = section;
    }

    pub(super) fn toggle(&mut self) -> Result<CollapsedState, ToggleError> {
        let result = self.toggle.toggle(&mut self.document);
        self.last_error = result.as_ref().err().map(ToString::to_string);
        result
    }
}

#[cfg(test)]
impl LayoutState {
    pub(super) fn insert_region(&mut self, element: Element) {
        self.document.insert(element);
    }
}
