use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, LoginFocus};
use crate::ui::{centered_rect_fixed, styles};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let height = if app.login_error.is_some() { 13 } else { 11 };
    let card = centered_rect_fixed(46, height, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "          Welcome back!",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            "     Sign in to your account to continue",
            styles::muted_style(),
        )),
        Line::from(""),
    ];

    lines.push(field_line(
        "E-mail:   ",
        &app.login_email,
        app.login_focus == LoginFocus::Email,
        false,
    ));
    lines.push(field_line(
        "Password: ",
        &app.login_password,
        app.login_focus == LoginFocus::Password,
        true,
    ));

    let button_focused = app.login_focus == LoginFocus::Button;
    let button_style = if button_focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    lines.push(Line::from(""));
    if button_focused {
        lines.push(Line::from(vec![
            Span::raw("            ["),
            Span::styled(" ▶ Sign in ◀ ", button_style),
            Span::raw("]"),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::raw("            ["),
            Span::styled("   Sign in   ", button_style),
            Span::raw("]"),
        ]));
    }

    if let Some(ref error) = app.login_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            styles::error_style(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("   No account yet? ", styles::muted_style()),
        Span::styled("Esc", styles::help_key_style()),
        Span::styled(" then ", styles::muted_style()),
        Span::styled("[s]", styles::help_key_style()),
        Span::styled(" to sign up", styles::muted_style()),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    frame.render_widget(Paragraph::new(lines).block(block), card);
}

fn field_line<'a>(label: &'a str, value: &str, focused: bool, masked: bool) -> Line<'a> {
    let style = if focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    let shown = if masked {
        "*".repeat(value.len().min(24))
    } else {
        value.chars().take(24).collect()
    };
    let display = format!("{:<24}", shown);
    let cursor = if focused { "▌" } else { "" };
    Line::from(vec![
        Span::raw("   "),
        Span::styled(label, styles::muted_style()),
        Span::styled("[", styles::muted_style()),
        Span::styled(format!("{}{}", display, cursor), style),
        Span::styled("]", styles::muted_style()),
    ])
}
