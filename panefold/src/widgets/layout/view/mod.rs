pub(crate) mod main_content;
pub(crate) mod sidebar;
pub(crate) mod topbar;

use iced::widget::container;
use iced::{Element, Theme};
use panefold_ui_regions::LayoutView;

use super::event::LayoutUiEvent;
use super::model::LayoutViewModel;

/// Props for the layout view aggregator.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LayoutProps<'a> {
    pub(crate) vm: LayoutViewModel<'a>,
    pub(crate) status: Option<&'a str>,
}

/// Render sidebar, top bar and main content with the resolved geometry.
pub(crate) fn view(props: LayoutProps<'_>) -> Element<'_, LayoutUiEvent> {
    let vm = props.vm;

    let sidebar = sidebar::view(sidebar::SidebarProps {
        collapsed: vm.sidebar_collapsed,
        section: vm.section,
    });
    let topbar = topbar::view(topbar::TopbarProps {
        state: vm.state,
        title: vm.section.title(),
    });
    let main_content = main_content::view(main_content::MainContentProps {
        section: vm.section,
        status: vm.last_error.or(props.status),
    });

    LayoutView::new(vm.geometry, sidebar, topbar, main_content)
        .sidebar_style(region_style)
        .topbar_style(region_style)
        .view()
}

fn region_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}
