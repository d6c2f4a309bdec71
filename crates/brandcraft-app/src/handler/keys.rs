//! Key event handlers for the form, result board and alert

use super::UpdateResult;
use crate::form::FormField;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, View};

/// Convert key events to messages based on what is on screen
pub fn handle_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    if key == InputKey::CharCtrl('c') {
        return UpdateResult::message(Message::Quit);
    }

    if state.has_alert() {
        return handle_key_alert(key);
    }

    match state.view {
        View::Form => handle_key_form(state, key),
        View::Result(_) => handle_key_result(key),
    }
}

/// While the alert is open only dismiss and quit get through
fn handle_key_alert(key: InputKey) -> UpdateResult {
    match key {
        InputKey::Enter | InputKey::Esc => UpdateResult::message(Message::DismissAlert),
        InputKey::Char('q') => UpdateResult::message(Message::Quit),
        _ => UpdateResult::none(),
    }
}

fn handle_key_form(state: &mut AppState, key: InputKey) -> UpdateResult {
    let form = &mut state.form;

    match key {
        InputKey::Esc => return UpdateResult::message(Message::Quit),
        InputKey::Enter => return UpdateResult::message(Message::Submit),
        InputKey::Tab | InputKey::Down => form.focus_next(),
        InputKey::BackTab | InputKey::Up => form.focus_prev(),
        _ => {}
    }

    match (form.focus, key) {
        (FormField::Vibe, InputKey::Right | InputKey::Char(' ') | InputKey::Char('l')) => {
            form.vibe = form.vibe.next();
        }
        (FormField::Vibe, InputKey::Left | InputKey::Char('h')) => {
            form.vibe = form.vibe.prev();
        }
        (field, _) if field.is_text() => {
            if let Some(input) = form.focused_input_mut() {
                match key {
                    InputKey::Char(c) => input.insert(c),
                    InputKey::Backspace => input.backspace(),
                    InputKey::Delete => input.delete(),
                    InputKey::Left => input.move_left(),
                    InputKey::Right => input.move_right(),
                    InputKey::Home => input.move_home(),
                    InputKey::End => input.move_end(),
                    _ => {}
                }
            }
        }
        _ => {}
    }

    UpdateResult::none()
}

fn handle_key_result(key: InputKey) -> UpdateResult {
    if let Some(digit) = key.digit() {
        return UpdateResult::message(Message::CopySwatch { index: digit - 1 });
    }

    match key {
        InputKey::Char('q') => UpdateResult::message(Message::Quit),
        InputKey::Char('b') | InputKey::Esc => UpdateResult::message(Message::BackToForm),
        InputKey::Down | InputKey::Char('j') => UpdateResult::message(Message::SelectNextSwatch),
        InputKey::Up | InputKey::Char('k') => UpdateResult::message(Message::SelectPrevSwatch),
        InputKey::Enter | InputKey::Char('c') => UpdateResult::message(Message::CopySelected),
        InputKey::Char('e') | InputKey::Char('p') => UpdateResult::message(Message::Export),
        _ => UpdateResult::none(),
    }
}
