use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Screen};

use super::screens::{choose_profile, dashboard, landing, login, signup};
use super::styles;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);
    render_main_content(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = "  ♥ VitaLink";
    let subtitle = match app.screen {
        Screen::Landing => "Home care, connected",
        Screen::ChooseProfile => "Create your account",
        Screen::Login => "Sign in",
        Screen::Signup => "Create your account",
        Screen::Dashboard => "Dashboard",
    };

    let title_line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::styled(format!("  {}", subtitle), styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(title_line).block(block);
    frame.render_widget(paragraph, area);
}

fn render_main_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.screen {
        Screen::Landing => landing::render(frame, app, area),
        Screen::ChooseProfile => choose_profile::render(frame, app, area),
        Screen::Login => login::render(frame, app, area),
        Screen::Signup => signup::render(frame, app, area),
        Screen::Dashboard => dashboard::render(frame, app, area),
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = if let Some(ref msg) = app.status_message {
        format!(" {} ", msg)
    } else if let Some(session) = app.session.current() {
        format!(" Signed in as {} ({}) ", session.full_name, session.role)
    } else {
        " Not signed in ".to_string()
    };

    let shortcuts = match app.screen {
        Screen::Landing => "[l]ogin | [s]ign up | [q]uit",
        Screen::ChooseProfile => "←/→ choose | Enter continue | Esc back",
        Screen::Login => "Tab next field | Enter submit | Esc back",
        Screen::Signup => "Tab next field | Enter submit | Esc back",
        Screen::Dashboard => "←/→ cards | [l]ogout | [q]uit",
    };
    let right_text = format!(" {} ", shortcuts);

    let width = area.width as usize;
    let padding_len = width
        .saturating_sub(left_text.len())
        .saturating_sub(right_text.len());
    let status_line = Line::from(vec![
        Span::styled(left_text, styles::muted_style()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(right_text, styles::muted_style()),
    ]);
    let paragraph = Paragraph::new(status_line).style(styles::status_bar_style());
    frame.render_widget(paragraph, area);
}
