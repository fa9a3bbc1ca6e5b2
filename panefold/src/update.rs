use iced::Task;

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::Layout(event) => routers::layout::route(app, event),
        AppEvent::Keyboard(event) => routers::keyboard::route(event),
    }
}
