//! Login screen reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{Focus, LoginScreenState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(state: &mut LoginScreenState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            state.spinner_frame = state.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::AuthChanged(auth) => {
            state.auth = auth;
            state.pending = false;
            vec![]
        }
        UiEvent::Terminal(Event::Key(key)) => handle_key(state, key),
        UiEvent::Terminal(_) => vec![],
    }
}

fn handle_key(state: &mut LoginScreenState, key: KeyEvent) -> Vec<UiEffect> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => {
            state.should_quit = true;
            vec![]
        }
        KeyCode::Char('c') if ctrl => {
            state.should_quit = true;
            vec![]
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            state.focus = state.focus.next();
            vec![]
        }
        KeyCode::Enter => match state.focus {
            // Enter on the username field moves on to the password.
            Focus::Username => {
                state.focus = Focus::Password;
                vec![]
            }
            Focus::Password => submit(state),
        },
        KeyCode::Char(ch) if !ctrl => {
            state.focused_field_mut().insert_char(ch);
            vec![]
        }
        KeyCode::Backspace => {
            state.focused_field_mut().delete_prev_char();
            vec![]
        }
        KeyCode::Delete => {
            state.focused_field_mut().delete_next_char();
            vec![]
        }
        KeyCode::Left => {
            state.focused_field_mut().move_left();
            vec![]
        }
        KeyCode::Right => {
            state.focused_field_mut().move_right();
            vec![]
        }
        KeyCode::Home => {
            state.focused_field_mut().move_home();
            vec![]
        }
        KeyCode::End => {
            state.focused_field_mut().move_end();
            vec![]
        }
        _ => vec![],
    }
}

/// Submits the entered credentials.
///
/// No client-side validation: empty fields are submitted as-is and the portal
/// decides. Submits while an attempt is in flight are dropped.
fn submit(state: &mut LoginScreenState) -> Vec<UiEffect> {
    if state.pending {
        return vec![];
    }
    state.pending = true;
    vec![UiEffect::SubmitLogin {
        username: state.username.value().to_string(),
        password: state.password.value().to_string(),
    }]
}
