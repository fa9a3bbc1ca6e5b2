use iced::{Element, Theme};

use super::{App, AppEvent};
use crate::widgets::layout::view::{self as layout_view, LayoutProps};
use crate::widgets::layout::{LayoutEvent, LayoutUiEvent};

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let props = LayoutProps {
        vm: app.widgets.layout.vm(),
        status: app.status.as_deref(),
    };

    layout_view::view(props)
        .map(|event: LayoutUiEvent| AppEvent::Layout(LayoutEvent::Ui(event)))
}
