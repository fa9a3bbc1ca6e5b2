use iced::widget::{Space, button, container, row, text};
use iced::{Element, Length, alignment};
use panefold_ui_regions::CollapsedState;

use super::super::event::LayoutUiEvent;

const TOPBAR_PADDING: f32 = 8.0;
const TOPBAR_SPACING: f32 = 12.0;
const TITLE_SIZE: f32 = 18.0;

/// Props for rendering the top bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TopbarProps {
    pub(crate) state: CollapsedState,
    pub(crate) title: &'static str,
}

/// Render the top bar with the collapse toggle button.
pub(crate) fn view<'a>(props: TopbarProps) -> Element<'a, LayoutUiEvent> {
    let toggle_label = if props.state.is_collapsed() {
        "Expand"
    } else {
        "Collapse"
    };

    let toggle = button(text(toggle_label))
        .on_press(LayoutUiEvent::ToggleCollapsed)
        .style(button::secondary);

    let content = row![
        toggle,
        text(props.title).size(TITLE_SIZE),
        Space::new().width(Length::Fill),
    ]
    .spacing(TOPBAR_SPACING)
    .align_y(alignment::Vertical::Center);

    container(content)
        .padding(TOPBAR_PADDING)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .into()
}
