use panefold_ui_regions::{CollapsedState, LayoutGeometry};

/// Destinations listed in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum NavSection {
    #[default]
    Overview,
    Activity,
    Settings,
}

impl NavSection {
    pub(crate) const ALL: [NavSection; 3] =
        [NavSection::Overview, NavSection::Activity, NavSection::Settings];

    pub(crate) fn title(self) -> &'static str {
        match self {
            NavSection::Overview => "Overview",
            NavSection::Activity => "Activity",
            NavSection::Settings => "Settings",
        }
    }

    /// Short label shown while the sidebar is collapsed to a rail.
    pub(crate) fn glyph(self) -> &'static str {
        match self {
            NavSection::Overview => "O",
            NavSection::Activity => "A",
            NavSection::Settings => "S",
        }
    }
}

/// Read-only snapshot consumed by layout views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LayoutViewModel<'a> {
    pub(crate) state: CollapsedState,
    pub(crate) sidebar_collapsed: bool,
    pub(crate) geometry: LayoutGeometry,
    pub(crate) section: NavSection,
    pub(crate) last_error: Option<&'a str>,
}
