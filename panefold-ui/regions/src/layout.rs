use crate::document::RegionSource;
use crate::marker::Marker;
use crate::region::{Region, RegionRole};
use crate::toggle::CollapsedState;

/// Owning component for the three collapsible regions.
///
/// The regions are injected at construction, so [`CollapsibleLayout::toggle`]
/// cannot hit a missing region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapsibleLayout<R: Region> {
    sidebar: R,
    topbar: R,
    main_content: R,
    marker: Marker,
}

impl<R: Region> CollapsibleLayout<R> {
    pub fn new(sidebar: R, topbar: R, main_content: R) -> Self {
        Self::with_marker(sidebar, topbar, main_content, Marker::COLLAPSED)
    }

    pub fn with_marker(
        sidebar: R,
        topbar: R,
        main_content: R,
        marker: Marker,
    ) -> Self {
        Self {
            sidebar,
            topbar,
            main_content,
            marker,
        }
    }

    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    pub fn get(&self, role: RegionRole) -> &R {
        match role {
            RegionRole::Sidebar => &self.sidebar,
            RegionRole::Topbar => &self.topbar,
            RegionRole::MainContent => &self.main_content,
        }
    }

    pub fn get_mut(&mut self, role: RegionRole) -> &mut R {
        match role {
            RegionRole::Sidebar => &mut self.sidebar,
            RegionRole::Topbar => &mut self.topbar,
            RegionRole::MainContent => &mut self.main_content,
        }
    }

    pub fn state(&self) -> CollapsedState {
        CollapsedState::from_flags(
            RegionRole::ORDER
                .map(|role| self.get(role).has_marker(&self.marker)),
        )
    }

    pub fn is_collapsed(&self) -> bool {
        self.state().is_collapsed()
    }

    /// Flip the marker on every region and return the resulting state.
    pub fn toggle(&mut self) -> CollapsedState {
        if self.state() == CollapsedState::Mixed {
            log::warn!(
                "regions disagree on `{}` before toggle; flipping each region \
                 individually",
                self.marker
            );
        }
        for role in RegionRole::ORDER {
            let marker = self.marker.clone();
            self.get_mut(role).toggle_marker(&marker);
        }
        self.state()
    }

    /// Release the injected regions in toggle order.
    pub fn into_regions(self) -> [R; 3] {
        [self.sidebar, self.topbar, self.main_content]
    }
}

impl<R: Region> RegionSource for CollapsibleLayout<R> {
    type Region = R;

    fn region(&self, id: &str) -> Option<&R> {
        RegionRole::ORDER
            .into_iter()
            .map(|role| self.get(role))
            .find(|region| region.id() == id)
    }

    fn region_mut(&mut self, id: &str) -> Option<&mut R> {
        [&mut self.sidebar, &mut self.topbar, &mut self.main_content]
            .into_iter()
            .find(|region| region.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::{Element, RegionIds};
    use crate::toggle::SidebarToggle;

    fn layout() -> CollapsibleLayout<Element> {
        CollapsibleLayout::new(
            Element::new("sidebar"),
            Element::new("topbar"),
            Element::new("main-content"),
        )
    }

    #[test]
    fn given_expanded_layout_when_toggled_twice_then_original_is_restored() {
        let mut layout = layout();
        let original = layout.clone();

        assert_eq!(layout.toggle(), CollapsedState::Collapsed);
        assert!(layout.is_collapsed());
        assert_eq!(layout.toggle(), CollapsedState::Expanded);
        assert_eq!(layout, original);
    }

    #[test]
    fn given_mixed_layout_when_toggled_then_each_region_flips() {
        let mut layout = CollapsibleLayout::new(
            Element::new("sidebar").with_marker(Marker::COLLAPSED),
            Element::new("topbar"),
            Element::new("main-content"),
        );

        assert_eq!(layout.toggle(), CollapsedState::Mixed);
        assert!(
            !layout
                .get(RegionRole::Sidebar)
                .has_marker(&Marker::COLLAPSED)
        );
        assert!(layout.get(RegionRole::Topbar).has_marker(&Marker::COLLAPSED));
        assert!(
            layout
                .get(RegionRole::MainContent)
                .has_marker(&Marker::COLLAPSED)
        );
    }

    #[test]
    fn given_layout_as_region_source_when_by_id_toggle_runs_then_state_matches()
    {
        let mut layout = layout();
        let toggle = SidebarToggle::new(RegionIds::default(), Marker::COLLAPSED)
            .expect("default ids are distinct");

        let state = toggle.toggle(&mut layout).expect("regions are injected");

        assert_eq!(state, CollapsedState::Collapsed);
        assert_eq!(layout.state(), CollapsedState::Collapsed);
    }

    #[test]
    fn given_custom_marker_when_toggled_then_default_marker_is_untouched() {
        let folded = Marker::new("folded").expect("valid marker");
        let mut layout = CollapsibleLayout::with_marker(
            Element::new("a"),
            Element::new("b"),
            Element::new("c"),
            folded.clone(),
        );

        layout.toggle();

        for region in layout.into_regions() {
            assert!(region.has_marker(&folded));
            assert!(!region.has_marker(&Marker::COLLAPSED));
        }
    }
}
