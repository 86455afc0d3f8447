//! Keyboard input handling for the TUI.
//!
//! This module translates key events into application state changes.
//! Navigation after a successful login/signup/logout happens here, as an
//! explicit consequence of the store call returning - the session store
//! itself knows nothing about screens.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use vitalink_core::Role;

use crate::app::{
    can_add_digit_char, can_add_email_char, can_add_password_char, can_add_text_char, App,
    LoginFocus, Screen, SignupFocus, DASHBOARD_CARDS,
};

/// Handle keyboard input. Returns true if the app should quit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Any keypress clears a lingering status message
    app.status_message = None;

    match app.screen {
        Screen::Landing => handle_landing_input(app, key),
        Screen::ChooseProfile => handle_choose_profile_input(app, key),
        Screen::Login => handle_login_input(app, key),
        Screen::Signup => handle_signup_input(app, key),
        Screen::Dashboard => handle_dashboard_input(app, key),
    }
}

fn handle_landing_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
        KeyCode::Char('l') => app.open_login(),
        KeyCode::Char('s') | KeyCode::Enter => app.open_choose_profile(),
        _ => {}
    }
    Ok(false)
}

fn handle_choose_profile_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => app.open_landing(),
        KeyCode::Left => app.profile_selection = Some(Role::Patient),
        KeyCode::Right => app.profile_selection = Some(Role::Professional),
        KeyCode::Tab => {
            // Toggle between the two cards
            app.profile_selection = match app.profile_selection {
                Some(Role::Patient) => Some(Role::Professional),
                _ => Some(Role::Patient),
            };
        }
        KeyCode::Enter => {
            if let Some(role) = app.profile_selection {
                app.open_signup(role);
            }
        }
        _ => {}
    }
    Ok(false)
}

fn handle_login_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.open_landing();
        }
        KeyCode::Down | KeyCode::Tab => {
            app.login_focus = match app.login_focus {
                LoginFocus::Email => LoginFocus::Password,
                LoginFocus::Password => LoginFocus::Button,
                LoginFocus::Button => LoginFocus::Email,
            };
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.login_focus = match app.login_focus {
                LoginFocus::Email => LoginFocus::Button,
                LoginFocus::Password => LoginFocus::Email,
                LoginFocus::Button => LoginFocus::Password,
            };
        }
        KeyCode::Enter => match app.login_focus {
            LoginFocus::Email => {
                app.login_focus = LoginFocus::Password;
            }
            LoginFocus::Password => {
                app.login_focus = LoginFocus::Button;
            }
            LoginFocus::Button => {
                // Navigates to the dashboard on success; sets
                // login_error and stays here otherwise
                app.attempt_login();
            }
        },
        KeyCode::Backspace => match app.login_focus {
            LoginFocus::Email => {
                app.login_email.pop();
            }
            LoginFocus::Password => {
                app.login_password.pop();
            }
            LoginFocus::Button => {}
        },
        KeyCode::Char(c) => match app.login_focus {
            LoginFocus::Email => {
                if can_add_email_char(app.login_email.len(), c) {
                    app.login_email.push(c);
                }
            }
            LoginFocus::Password => {
                if can_add_password_char(app.login_password.len(), c) {
                    app.login_password.push(c);
                }
            }
            LoginFocus::Button => {}
        },
        _ => {}
    }
    Ok(false)
}

fn handle_signup_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    let role = app.signup_role;
    match key.code {
        KeyCode::Esc => {
            app.open_choose_profile();
        }
        KeyCode::Down | KeyCode::Tab => {
            app.signup_focus = app.signup_focus.next(role);
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.signup_focus = app.signup_focus.prev(role);
        }
        KeyCode::Enter => {
            if app.signup_focus == SignupFocus::Button {
                // Signs the new account in and navigates on success
                app.attempt_signup();
            } else {
                app.signup_focus = app.signup_focus.next(role);
            }
        }
        KeyCode::Backspace => {
            if let Some(field) = focused_field_mut(app) {
                field.pop();
            }
        }
        KeyCode::Char(c) => {
            let accept = match app.signup_focus {
                SignupFocus::Email => can_add_email_char(app.signup_email.len(), c),
                SignupFocus::Cpf => can_add_digit_char(app.signup_cpf.len(), c),
                SignupFocus::Phone => can_add_digit_char(app.signup_phone.len(), c),
                SignupFocus::Password => can_add_password_char(app.signup_password.len(), c),
                SignupFocus::ConfirmPassword => {
                    can_add_password_char(app.signup_confirm_password.len(), c)
                }
                SignupFocus::FullName => can_add_text_char(app.signup_full_name.len(), c),
                SignupFocus::ProfessionalId => {
                    can_add_text_char(app.signup_professional_id.len(), c)
                }
                SignupFocus::Specialty => can_add_text_char(app.signup_specialty.len(), c),
                SignupFocus::Button => false,
            };
            if accept {
                if let Some(field) = focused_field_mut(app) {
                    field.push(c);
                }
            }
        }
        _ => {}
    }
    Ok(false)
}

fn focused_field_mut(app: &mut App) -> Option<&mut String> {
    match app.signup_focus {
        SignupFocus::FullName => Some(&mut app.signup_full_name),
        SignupFocus::Email => Some(&mut app.signup_email),
        SignupFocus::Cpf => Some(&mut app.signup_cpf),
        SignupFocus::Phone => Some(&mut app.signup_phone),
        SignupFocus::ProfessionalId => Some(&mut app.signup_professional_id),
        SignupFocus::Specialty => Some(&mut app.signup_specialty),
        SignupFocus::Password => Some(&mut app.signup_password),
        SignupFocus::ConfirmPassword => Some(&mut app.signup_confirm_password),
        SignupFocus::Button => None,
    }
}

fn handle_dashboard_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // The dashboard requires a session; bounce to login if it's gone
    if !app.is_authenticated() {
        app.open_login();
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('l') => app.logout(),
        KeyCode::Left => {
            app.dashboard_selection =
                (app.dashboard_selection + DASHBOARD_CARDS - 1) % DASHBOARD_CARDS;
        }
        KeyCode::Right | KeyCode::Tab => {
            app.dashboard_selection = (app.dashboard_selection + 1) % DASHBOARD_CARDS;
        }
        _ => {}
    }
    Ok(false)
}
