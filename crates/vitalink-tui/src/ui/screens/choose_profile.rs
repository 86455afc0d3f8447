use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use vitalink_core::Role;

use crate::app::App;
use crate::ui::styles;

const PATIENT_BULLETS: [&str; 3] = [
    "Find verified professionals",
    "Book home-care visits",
    "Chat securely with professionals",
];

const PROFESSIONAL_BULLETS: [&str; 3] = [
    "Grow your patient base",
    "Manage your schedule easily",
    "Get paid securely",
];

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Heading
            Constraint::Min(12),    // Cards
            Constraint::Length(2),  // Continue hint
        ])
        .split(area);

    let heading = vec![
        Line::from(""),
        Line::from(Span::styled(
            "How do you want to use VitaLink?",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            "Choose the profile that fits you best",
            styles::muted_style(),
        )),
    ];
    frame.render_widget(
        Paragraph::new(heading).alignment(Alignment::Center),
        chunks[0],
    );

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_card(
        frame,
        cards[0],
        "I am a patient",
        "Looking for qualified home-care professionals",
        &PATIENT_BULLETS,
        app.profile_selection == Some(Role::Patient),
    );
    render_card(
        frame,
        cards[1],
        "I am a professional",
        "Offering qualified health services to patients",
        &PROFESSIONAL_BULLETS,
        app.profile_selection == Some(Role::Professional),
    );

    let hint = if app.profile_selection.is_some() {
        Line::from(vec![
            Span::styled("Press ", styles::muted_style()),
            Span::styled("Enter", styles::help_key_style()),
            Span::styled(" to continue", styles::muted_style()),
        ])
    } else {
        Line::from(Span::styled(
            "Select a profile with ←/→",
            styles::muted_style(),
        ))
    };
    frame.render_widget(
        Paragraph::new(hint).alignment(Alignment::Center),
        chunks[2],
    );
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    blurb: &str,
    bullets: &[&str],
    selected: bool,
) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(blurb, styles::help_desc_style())),
        Line::from(""),
    ];
    for bullet in bullets {
        lines.push(Line::from(vec![
            Span::styled("  ✓ ", styles::success_style()),
            Span::styled(*bullet, styles::muted_style()),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(selected))
        .title(Span::styled(
            format!(" {} ", title),
            styles::card_title_style(selected),
        ));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(ratatui::widgets::Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
