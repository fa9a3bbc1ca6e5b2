use iced::widget::{Column, button, container, text};
use iced::{Element, Length, alignment};

use super::super::event::LayoutUiEvent;
use super::super::model::NavSection;

const ENTRY_HEIGHT: f32 = 40.0;
const ENTRY_PADDING: f32 = 12.0;
const SIDEBAR_PADDING: f32 = 8.0;
const SIDEBAR_SPACING: f32 = 4.0;

/// Props for rendering the navigation sidebar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarProps {
    pub(crate) collapsed: bool,
    pub(crate) section: NavSection,
}

/// Render navigation entries; collapsed sidebars show glyphs only.
pub(crate) fn view<'a>(props: SidebarProps) -> Element<'a, LayoutUiEvent> {
    let entries = NavSection::ALL
        .into_iter()
        .map(|section| entry(section, props));

    container(
        Column::with_children(entries)
            .spacing(SIDEBAR_SPACING)
            .width(Length::Fill),
    )
    .padding(SIDEBAR_PADDING)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn entry<'a>(
    section: NavSection,
    props: SidebarProps,
) -> Element<'a, LayoutUiEvent> {
    let label = if props.collapsed {
        section.glyph()
    } else {
        section.title()
    };
    let align = if props.collapsed {
        alignment::Horizontal::Center
    } else {
        alignment::Horizontal::Left
    };
    let is_active = section == props.section;

    let content = container(text(label))
        .width(Length::Fill)
        .align_x(align)
        .align_y(alignment::Vertical::Center);

    button(content)
        .on_press(LayoutUiEvent::SelectSection(section))
        .padding([0.0, ENTRY_PADDING])
        .width(Length::Fill)
        .height(Length::Fixed(ENTRY_HEIGHT))
        .style(if is_active {
            button::primary
        } else {
            button::text
        })
        .into()
}
