//! Pure view/render functions for the login screen.
//!
//! Functions here take `&LoginScreenState` by immutable reference, draw to a
//! ratatui Frame, and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use sesam_core::auth::AuthState;
use unicode_width::UnicodeWidthStr;

use crate::state::{Focus, LoginScreenState};

/// Width of the centered form column.
const FORM_WIDTH: u16 = 46;

/// Total height of the form column.
const FORM_HEIGHT: u16 = 12;

/// Spinner frames for the in-flight status line.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Mask character for the password field.
const MASK: char = '•';

/// Renders the entire login screen to the frame.
pub fn render(state: &LoginScreenState, frame: &mut Frame) {
    let area = centered_rect(FORM_WIDTH, FORM_HEIGHT, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Status line
            Constraint::Length(1),
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Length(1),
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "SESAM",
        Style::default().fg(Color::Cyan),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    frame.render_widget(
        status_line(state).alignment(Alignment::Center),
        chunks[1],
    );

    render_field(
        frame,
        chunks[3],
        "Username",
        state.username.value(),
        state.focus == Focus::Username,
    );

    let masked = MASK
        .to_string()
        .repeat(state.password.value().chars().count());
    render_field(
        frame,
        chunks[4],
        "Password",
        &masked,
        state.focus == Focus::Password,
    );

    let hints = Paragraph::new(Line::from(Span::styled(
        "Enter sign in · Tab switch field · Esc quit",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[6]);

    set_cursor(state, frame, chunks[3], chunks[4]);
}

/// Builds the one-line status text for the current state.
fn status_line(state: &LoginScreenState) -> Paragraph<'static> {
    if state.pending {
        let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
        return Paragraph::new(Line::from(Span::styled(
            format!("{spinner} Signing in..."),
            Style::default().fg(Color::Yellow),
        )));
    }

    let color = match state.auth {
        AuthState::Unauthorized => Color::DarkGray,
        AuthState::Authorized => Color::Green,
        AuthState::Error(_) => Color::Red,
    };
    Paragraph::new(Line::from(Span::styled(
        state.auth.label(),
        Style::default().fg(color),
    )))
}

/// Renders one bordered input field.
fn render_field(frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let field = Paragraph::new(value.to_string()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .border_style(border_style),
    );
    frame.render_widget(field, area);
}

/// Places the terminal cursor inside the focused field.
fn set_cursor(state: &LoginScreenState, frame: &mut Frame, username: Rect, password: Rect) {
    let (area, offset) = match state.focus {
        Focus::Username => {
            let prefix: String = state
                .username
                .value()
                .chars()
                .take(state.username.cursor())
                .collect();
            (username, prefix.width() as u16)
        }
        // Every mask char renders one column wide.
        Focus::Password => (password, state.password.cursor() as u16),
    };

    let max = area.width.saturating_sub(2).saturating_sub(1);
    frame.set_cursor_position((area.x + 1 + offset.min(max), area.y + 1));
}

/// Centers a fixed-size rect inside `area`, clamping to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
