use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::styles;

/// The four marketing feature cards under the hero.
const FEATURES: [(&str, &str); 4] = [
    (
        "Verified professionals",
        "Every professional is identity-checked before they can offer care",
    ),
    (
        "Fast scheduling",
        "Find available professionals near you in minutes",
    ),
    (
        "Secure chat",
        "Talk to professionals without sharing your contact details",
    ),
    (
        "Secure payment",
        "Pay through the platform, released after the visit",
    ),
];

pub fn render(frame: &mut Frame, _app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Hero
            Constraint::Min(8),    // Feature cards
        ])
        .split(area);

    render_hero(frame, chunks[0]);
    render_features(frame, chunks[1]);
}

fn render_hero(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Connect with qualified health professionals",
            styles::title_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Safe, professional home care. Find the care you need,",
            styles::help_desc_style(),
        )),
        Line::from(Span::styled(
            "from people you can trust.",
            styles::help_desc_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", styles::muted_style()),
            Span::styled("[s]", styles::help_key_style()),
            Span::styled(" to create an account or ", styles::muted_style()),
            Span::styled("[l]", styles::help_key_style()),
            Span::styled(" to sign in", styles::muted_style()),
        ]),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_features(frame: &mut Frame, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    for (i, (title, text)) in FEATURES.iter().enumerate() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styles::border_style(false))
            .title(Span::styled(format!(" {} ", title), styles::card_title_style(false)));

        let paragraph = Paragraph::new(Span::styled(*text, styles::muted_style()))
            .block(block)
            .wrap(ratatui::widgets::Wrap { trim: true });
        frame.render_widget(paragraph, cards[i]);
    }
}
