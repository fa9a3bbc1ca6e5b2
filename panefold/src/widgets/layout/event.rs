use panefold_ui_regions::CollapsedState;

use super::model::NavSection;

/// Intent events handled by the layout presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LayoutUiEvent {
    /// Flip the collapsed marker on sidebar, top bar and main content.
    ToggleCollapsed,
    SelectSection(NavSection),
}

/// Effect events produced by the layout reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LayoutEffect {
    Changed(CollapsedState),
    ToggleFailed(String),
}

/// Layout event stream routed through the app update loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LayoutEvent {
    /// Intent event reduced by the layout widget.
    Ui(LayoutUiEvent),
    /// External effect orchestrated by app-level routing.
    Effect(LayoutEffect),
}
