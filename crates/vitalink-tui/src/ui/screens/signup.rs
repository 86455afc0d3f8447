use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use vitalink_core::Role;

use crate::app::{App, SignupFocus};
use crate::ui::{centered_rect_fixed, styles};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let professional = app.signup_role == Role::Professional;

    // Title + blank + fields + blank + button, plus room for an error line
    let field_count: u16 = if professional { 8 } else { 6 };
    let mut height = 2 + field_count + 2 + 2;
    if app.signup_error.is_some() {
        height += 2;
    }
    let card = centered_rect_fixed(56, height, area);

    let title = if professional {
        "          Professional signup"
    } else {
        "          Patient signup"
    };
    let subtitle = if professional {
        "   Fill in your professional details to register"
    } else {
        "     Fill in your details to create your account"
    };

    let mut lines = vec![
        Line::from(Span::styled(title, styles::title_style())),
        Line::from(Span::styled(subtitle, styles::muted_style())),
    ];

    let focus = app.signup_focus;
    lines.push(field_line(
        "Full name:    ",
        &app.signup_full_name,
        focus == SignupFocus::FullName,
        false,
    ));
    lines.push(field_line(
        "E-mail:       ",
        &app.signup_email,
        focus == SignupFocus::Email,
        false,
    ));
    lines.push(field_line(
        "CPF:          ",
        &app.signup_cpf,
        focus == SignupFocus::Cpf,
        false,
    ));
    lines.push(field_line(
        "Phone:        ",
        &app.signup_phone,
        focus == SignupFocus::Phone,
        false,
    ));
    if professional {
        lines.push(field_line(
            "Registration: ",
            &app.signup_professional_id,
            focus == SignupFocus::ProfessionalId,
            false,
        ));
        lines.push(field_line(
            "Specialty:    ",
            &app.signup_specialty,
            focus == SignupFocus::Specialty,
            false,
        ));
    }
    lines.push(field_line(
        "Password:     ",
        &app.signup_password,
        focus == SignupFocus::Password,
        true,
    ));
    lines.push(field_line(
        "Confirm:      ",
        &app.signup_confirm_password,
        focus == SignupFocus::ConfirmPassword,
        true,
    ));

    let button_focused = focus == SignupFocus::Button;
    let button_style = if button_focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    let button_label = if button_focused {
        " ▶ Create account ◀ "
    } else {
        "   Create account   "
    };
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("              ["),
        Span::styled(button_label, button_style),
        Span::raw("]"),
    ]));

    if let Some(ref error) = app.signup_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            styles::error_style(),
        )));
    }

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
