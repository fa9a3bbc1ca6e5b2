use iced::widget::{column, container, text};
use iced::{Element, Length};

use super::super::event::LayoutUiEvent;
use super::super::model::NavSection;

const CONTENT_PADDING: f32 = 24.0;
const CONTENT_SPACING: f32 = 12.0;
const HEADING_SIZE: f32 = 24.0;
const STATUS_SIZE: f32 = 13.0;

/// Props for rendering the main content area.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MainContentProps<'a> {
    pub(crate) section: NavSection,
    pub(crate) status: Option<&'a str>,
}

/// Render the page body for the selected section.
pub(crate) fn view(props: MainContentProps<'_>) -> Element<'_, LayoutUiEvent> {
    let mut body = column![
        text(props.section.title()).size(HEADING_SIZE),
        text("Press Ctrl+B or the top bar button to fold the sidebar."),
    ]
    .spacing(CONTENT_SPACING);

    if let Some(status) = props.status {
        body = body.push(text(status).size(STATUS_SIZE));
    }

    container(body)
        .padding(CONTENT_PADDING)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
