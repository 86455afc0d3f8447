use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use vitalink_core::Role;

use crate::app::App;
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(session) = app.session.current() else {
        // Shouldn't happen: the dashboard is only reachable signed in
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // Welcome
            Constraint::Length(8),  // Quick actions
            Constraint::Min(4),     // Status card
        ])
        .split(area);

    let tagline = match session.role {
        Role::Patient => "Find qualified health professionals for your needs",
        Role::Professional => "Manage your visits and connect with patients",
    };
    let welcome = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" Welcome, {}!", session.full_name),
                styles::title_style(),
            ),
            Span::styled(
                format!("   {}", Local::now().format("%A, %B %e")),
                styles::muted_style(),
            ),
        ]),
        Line::from(Span::styled(format!(" {}", tagline), styles::muted_style())),
    ];
    frame.render_widget(Paragraph::new(welcome), chunks[0]);

    render_quick_actions(frame, app, session.role, chunks[1]);
    render_status_card(frame, chunks[2]);
}

fn render_quick_actions(frame: &mut Frame, app: &App, role: Role, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let appointments_text = match role {
        Role::Patient => "Book home-care visits",
        Role::Professional => "Manage your schedule",
    };
    let messages_text = match role {
        Role::Patient => "Secure chat with professionals",
        Role::Professional => "Secure chat with patients",
    };

    let actions: [(&str, &str); 4] = [
        ("Appointments", appointments_text),
        ("Messages", messages_text),
        ("Profile", "View and edit your profile"),
        ("Settings", "Adjust your preferences"),
    ];

    for (i, (title, text)) in actions.iter().enumerate() {
        let selected = app.dashboard_selection == i;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styles::border_style(selected))
            .title(Span::styled(
                format!(" {} ", title),
                styles::card_title_style(selected),
            ));

        let paragraph = Paragraph::new(Span::styled(*text, styles::muted_style()))
            .block(block)
            .wrap(ratatui::widgets::Wrap { trim: true });
        frame.render_widget(paragraph, cards[i]);
    }
}

fn render_status_card(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(false))
        .title(Span::styled(" Onboarding ", styles::card_title_style(false)));

    let lines = vec![
        Line::from(Span::styled(
            " Account setup complete",
            styles::success_style(),
        )),
        Line::from(Span::styled(
            " Identity verification opens soon - you'll be notified here.",
            styles::muted_style(),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
