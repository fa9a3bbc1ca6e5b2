use iced::Task;
use iced::keyboard::{self, Key, Modifiers};

use crate::app::AppEvent;
use crate::widgets::layout::{LayoutEvent, LayoutUiEvent};

const TOGGLE_KEY: &str = "b";

/// Translate keyboard shortcuts into widget intents.
pub(crate) fn route(event: keyboard::Event) -> Task<AppEvent> {
    match event {
        keyboard::Event::KeyPressed { key, modifiers, .. }
            if is_toggle_shortcut(&key, modifiers) =>
        {
            Task::done(AppEvent::Layout(LayoutEvent::Ui(
                LayoutUiEvent::ToggleCollapsed,
            )))
        },
        _ => Task::none(),
    }
}

/// `Ctrl+B` (`Cmd+B` on macOS) toggles the collapsed layout.
fn is_toggle_shortcut(key: &Key, modifiers: Modifiers) -> bool {
    let Key::Character(character) = key else {
        return false;
    };
    modifiers.command()
        && !modifiers.alt()
        && !modifiers.shift()
        && character.eq_ignore_ascii_case(TOGGLE_KEY)
}
