//! Application state for the VitaLink terminal client.
//!
//! `App` owns the session store and all screen/form state. The store is
//! constructed and initialized here, once, at startup; screens receive it
//! by reference and navigation happens explicitly after each store call
//! returns.

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, warn};

use vitalink_core::config::Config;
use vitalink_core::{Account, FileStorage, Role, SessionStore};

use crate::forms::{validate_login, validate_signup, SignupForm};

// ============================================================================
// Constants
// ============================================================================

/// Maximum length for e-mail input.
/// 50 chars covers practically every address.
pub const MAX_EMAIL_LENGTH: usize = 50;

/// Maximum length for password input.
/// 128 chars accommodates password managers and passphrases.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Maximum length for free-text fields (name, registration, specialty).
pub const MAX_TEXT_LENGTH: usize = 60;

/// CPF is exactly 11 digits; phone is at most 11.
pub const MAX_DIGITS_LENGTH: usize = 11;

// ============================================================================
// UI State Types
// ============================================================================

/// Which screen is showing. Mirrors the web client's routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    ChooseProfile,
    Login,
    Signup,
    Dashboard,
}

/// Login form focus state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoginFocus {
    Email,
    Password,
    Button,
}

/// Signup form focus state. Professional signups have two extra fields;
/// `next`/`prev` skip them for patients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupFocus {
    FullName,
    Email,
    Cpf,
    Phone,
    ProfessionalId,
    Specialty,
    Password,
    ConfirmPassword,
    Button,
}

impl SignupFocus {
    pub fn next(&self, role: Role) -> Self {
        match self {
            SignupFocus::FullName => SignupFocus::Email,
            SignupFocus::Email => SignupFocus::Cpf,
            SignupFocus::Cpf => SignupFocus::Phone,
            SignupFocus::Phone => match role {
                Role::Professional => SignupFocus::ProfessionalId,
                Role::Patient => SignupFocus::Password,
            },
            SignupFocus::ProfessionalId => SignupFocus::Specialty,
            SignupFocus::Specialty => SignupFocus::Password,
            SignupFocus::Password => SignupFocus::ConfirmPassword,
            SignupFocus::ConfirmPassword => SignupFocus::Button,
            SignupFocus::Button => SignupFocus::FullName,
        }
    }

    pub fn prev(&self, role: Role) -> Self {
        match self {
            SignupFocus::FullName => SignupFocus::Button,
            SignupFocus::Email => SignupFocus::FullName,
            SignupFocus::Cpf => SignupFocus::Email,
            SignupFocus::Phone => SignupFocus::Cpf,
            SignupFocus::ProfessionalId => SignupFocus::Phone,
            SignupFocus::Specialty => SignupFocus::ProfessionalId,
            SignupFocus::Password => match role {
                Role::Professional => SignupFocus::Specialty,
                Role::Patient => SignupFocus::Phone,
            },
            SignupFocus::ConfirmPassword => SignupFocus::Password,
            SignupFocus::Button => SignupFocus::ConfirmPassword,
        }
    }
}

/// Quick-action cards on the dashboard.
pub const DASHBOARD_CARDS: usize = 4;

// ============================================================================
// Main Application Struct
// ============================================================================

/// Main application state container
pub struct App {
    // Core services
    pub config: Config,
    pub session: SessionStore<FileStorage>,

    // Navigation
    pub screen: Screen,
    pub status_message: Option<String>,

    // Choose-profile state
    pub profile_selection: Option<Role>,

    // Login form state
    pub login_email: String,
    pub login_password: String,
    pub login_focus: LoginFocus,
    pub login_error: Option<String>,

    // Signup form state
    pub signup_role: Role,
    pub signup_full_name: String,
    pub signup_email: String,
    pub signup_cpf: String,
    pub signup_phone: String,
    pub signup_professional_id: String,
    pub signup_specialty: String,
    pub signup_password: String,
    pub signup_confirm_password: String,
    pub signup_focus: SignupFocus,
    pub signup_error: Option<String>,

    // Dashboard state
    pub dashboard_selection: usize,
}

impl App {
    /// Create the application: load config, open the session store over
    /// the data directory, and rehydrate any persisted session.
    pub fn new() -> Result<Self> {
        debug!("App::new() starting");
        let config = match Config::load() {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Config::default()
            }
        };

        let data_dir = config.data_dir().unwrap_or_else(|_| PathBuf::from("./data"));
        debug!(?data_dir, "Data directory configured");

        let storage = FileStorage::new(data_dir)?;
        let mut session = SessionStore::new(storage);
        session.initialize();
        debug!(authenticated = session.is_authenticated(), "Session store initialized");

        // A restored session opens straight on the dashboard
        let screen = if session.is_authenticated() {
            Screen::Dashboard
        } else {
            Screen::Landing
        };

        // Prefill the login e-mail from the environment or the last login
        let login_email = std::env::var("VITALINK_EMAIL")
            .ok()
            .or_else(|| config.last_email.clone())
            .unwrap_or_default();

        Ok(Self {
            config,
            session,

            screen,
            status_message: None,

            profile_selection: None,

            login_email,
            login_password: String::new(),
            login_focus: LoginFocus::Email,
            login_error: None,

            signup_role: Role::Patient,
            signup_full_name: String::new(),
            signup_email: String::new(),
            signup_cpf: String::new(),
            signup_phone: String::new(),
            signup_professional_id: String::new(),
            signup_specialty: String::new(),
            signup_password: String::new(),
            signup_confirm_password: String::new(),
            signup_focus: SignupFocus::FullName,
            signup_error: None,

            dashboard_selection: 0,
        })
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn open_landing(&mut self) {
        self.screen = Screen::Landing;
    }

    pub fn open_choose_profile(&mut self) {
        self.profile_selection = None;
        self.screen = Screen::ChooseProfile;
    }

    pub fn open_login(&mut self) {
        self.login_password.clear();
        self.login_error = None;
        self.login_focus = if self.login_email.is_empty() {
            LoginFocus::Email
        } else {
            LoginFocus::Password
        };
        self.screen = Screen::Login;
    }

    pub fn open_signup(&mut self, role: Role) {
        self.signup_role = role;
        self.signup_full_name.clear();
        self.signup_email.clear();
        self.signup_cpf.clear();
        self.signup_phone.clear();
        self.signup_professional_id.clear();
        self.signup_specialty.clear();
        self.signup_password.clear();
        self.signup_confirm_password.clear();
        self.signup_focus = SignupFocus::FullName;
        self.signup_error = None;
        self.screen = Screen::Signup;
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Attempt login with the credentials from the login form. Navigates
    /// to the dashboard on success; on failure sets `login_error` and
    /// stays put.
    pub fn attempt_login(&mut self) {
        let email = self.login_email.trim().to_string();
        let password = self.login_password.clone();

        if let Err(e) = validate_login(&email, &password) {
            self.login_error = Some(e.to_string());
            return;
        }
        self.login_error = None;

        match self.session.login(&email, &password) {
            Ok(session) => {
                self.config.last_email = Some(email);
                if let Err(e) = self.config.save() {
                    warn!(error = %e, "Failed to save config");
                }

                self.login_password.clear();
                self.status_message = Some(format!("Welcome back, {}!", session.full_name));
                self.dashboard_selection = 0;
                self.screen = Screen::Dashboard;
            }
            Err(e) => {
                self.login_error = Some(e.to_string());
            }
        }
    }

    /// Attempt signup with the form fields. A successful signup signs the
    /// new account in and navigates to the dashboard.
    pub fn attempt_signup(&mut self) {
        let form = SignupForm {
            role: self.signup_role,
            full_name: self.signup_full_name.trim().to_string(),
            email: self.signup_email.trim().to_string(),
            cpf: self.signup_cpf.trim().to_string(),
            phone: self.signup_phone.trim().to_string(),
            professional_id: self.signup_professional_id.trim().to_string(),
            specialty: self.signup_specialty.trim().to_string(),
            password: self.signup_password.clone(),
            confirm_password: self.signup_confirm_password.clone(),
        };

        let account: Account = match validate_signup(&form) {
            Ok(account) => account,
            Err(e) => {
                self.signup_error = Some(e.to_string());
                return;
            }
        };
        self.signup_error = None;

        match self.session.signup(account) {
            Ok(session) => {
                self.config.last_email = Some(session.email.clone());
                if let Err(e) = self.config.save() {
                    warn!(error = %e, "Failed to save config");
                }

                self.login_email = session.email.clone();
                self.status_message = Some(format!("Welcome, {}!", session.full_name));
                self.dashboard_selection = 0;
                self.screen = Screen::Dashboard;
            }
            Err(e) => {
                self.signup_error = Some(e.to_string());
            }
        }
    }

    /// Sign out and return to the landing screen.
    pub fn logout(&mut self) {
        self.session.logout();
        self.status_message = Some("Signed out".to_string());
        self.open_landing();
    }
}

// ============================================================================
// Input validation helpers (exported for use in input.rs)
// ============================================================================

/// Check if a character is valid for input (no control characters)
fn is_valid_input_char(c: char) -> bool {
    !c.is_control()
}

/// Check if an e-mail character should be accepted
pub fn can_add_email_char(current_len: usize, c: char) -> bool {
    current_len < MAX_EMAIL_LENGTH && is_valid_input_char(c)
}

/// Check if a password character should be accepted
pub fn can_add_password_char(current_len: usize, c: char) -> bool {
    current_len < MAX_PASSWORD_LENGTH && is_valid_input_char(c)
}

/// Check if a free-text character should be accepted
pub fn can_add_text_char(current_len: usize, c: char) -> bool {
    current_len < MAX_TEXT_LENGTH && is_valid_input_char(c)
}

/// CPF and phone fields only take digits
pub fn can_add_digit_char(current_len: usize, c: char) -> bool {
    current_len < MAX_DIGITS_LENGTH && c.is_ascii_digit()
}

// ============================================================================
// Tests
// ============================================================================
