//! Submit-time form validation.
//!
//! The form layer owns format-level validation; the session store only
//! ever sees well-formed input. Rules match the web client's signup and
//! login schemas: e-mail shape, password length, CPF/phone digit counts,
//! and the professional-only fields.

use thiserror::Error;

use vitalink_core::{Account, Role};

/// Minimum password length, per the signup schema.
const MIN_PASSWORD_LENGTH: usize = 6;

/// CPF is a fixed 11-digit identifier.
const CPF_LENGTH: usize = 11;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Enter a valid e-mail address.")]
    InvalidEmail,

    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Full name must be at least 3 characters.")]
    NameTooShort,

    #[error("CPF must be exactly 11 digits.")]
    InvalidCpf,

    #[error("Phone must be 10 or 11 digits.")]
    InvalidPhone,

    #[error("Professional registration is required.")]
    RegistrationRequired,

    #[error("Specialty is required.")]
    SpecialtyRequired,
}

/// Raw signup form contents, before validation.
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub role: Role,
    pub full_name: String,
    pub email: String,
    pub cpf: String,
    pub phone: String,
    pub professional_id: String,
    pub specialty: String,
    pub password: String,
    pub confirm_password: String,
}

/// Minimal e-mail shape check: one `@` with something before it, and a
/// dot somewhere in the domain part (not at its edges).
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn is_digits(s: &str, min: usize, max: usize) -> bool {
    s.len() >= min && s.len() <= max && s.chars().all(|c| c.is_ascii_digit())
}

/// Validate the login form. The store does its own credential matching;
/// this only rejects input that could never match.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Validate the signup form and turn it into an account record. Checks
/// run in field order; the first violation wins.
pub fn validate_signup(form: &SignupForm) -> Result<Account, ValidationError> {
    if form.full_name.chars().count() < 3 {
        return Err(ValidationError::NameTooShort);
    }
    if !is_valid_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_digits(&form.cpf, CPF_LENGTH, CPF_LENGTH) {
        return Err(ValidationError::InvalidCpf);
    }
    if !is_digits(&form.phone, 10, 11) {
        return Err(ValidationError::InvalidPhone);
    }
    if form.role == Role::Professional {
        if form.professional_id.chars().count() < 3 {
            return Err(ValidationError::RegistrationRequired);
        }
        if form.specialty.chars().count() < 2 {
            return Err(ValidationError::SpecialtyRequired);
        }
    }
    if form.password.len() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    let professional = form.role == Role::Professional;
    Ok(Account {
        email: form.email.clone(),
        password: form.password.clone(),
        full_name: form.full_name.clone(),
        cpf: form.cpf.clone(),
        phone: form.phone.clone(),
        role: form.role,
        professional_id: professional.then(|| form.professional_id.clone()),
        specialty: professional.then(|| form.specialty.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient_form() -> SignupForm {
        SignupForm {
            role: Role::Patient,
            full_name: "Ana Souza".to_string(),
            email: "ana@example.com".to_string(),
            cpf: "11111111111".to_string(),
            phone: "11999999999".to_string(),
            professional_id: String::new(),
            specialty: String::new(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("a.b@sub.example.co"));
        assert!(!is_valid_email("ana"));
        assert!(!is_valid_email("ana@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana@example."));
        assert!(!is_valid_email("ana@.com"));
        assert!(!is_valid_email("a@b@example.com"));
    }

    #[test]
    fn test_validate_login() {
        assert_eq!(validate_login("ana@example.com", "secret1"), Ok(()));
        assert_eq!(
            validate_login("not-an-email", "secret1"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_login("ana@example.com", "12345"),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn test_patient_signup_drops_professional_fields() {
        let mut form = patient_form();
        // Stray text in the hidden fields must not leak into the record
        form.professional_id = "CRM 1".to_string();
        form.specialty = "X".to_string();

        let account = validate_signup(&form).unwrap();
        assert_eq!(account.professional_id, None);
        assert_eq!(account.specialty, None);
        assert_eq!(account.role, Role::Patient);
    }

    #[test]
    fn test_professional_requires_registration_and_specialty() {
        let mut form = patient_form();
        form.role = Role::Professional;

        assert_eq!(
            validate_signup(&form),
            Err(ValidationError::RegistrationRequired)
        );

        form.professional_id = "CRM 123456".to_string();
        assert_eq!(
            validate_signup(&form),
            Err(ValidationError::SpecialtyRequired)
        );

        form.specialty = "Cardiology".to_string();
        let account = validate_signup(&form).unwrap();
        assert_eq!(account.professional_id.as_deref(), Some("CRM 123456"));
        assert_eq!(account.specialty.as_deref(), Some("Cardiology"));
    }

    #[test]
    fn test_field_order_first_violation_wins() {
        let mut form = patient_form();
        form.full_name = "An".to_string();
        form.email = "bad".to_string();
        assert_eq!(validate_signup(&form), Err(ValidationError::NameTooShort));
    }

    #[test]
    fn test_cpf_and_phone_digit_rules() {
        let mut form = patient_form();
        form.cpf = "1234567890".to_string(); // 10 digits
        assert_eq!(validate_signup(&form), Err(ValidationError::InvalidCpf));

        form.cpf = "123456789012".to_string(); // 12 digits
        assert_eq!(validate_signup(&form), Err(ValidationError::InvalidCpf));

        form.cpf = "1111111111a".to_string();
        assert_eq!(validate_signup(&form), Err(ValidationError::InvalidCpf));

        form.cpf = "11111111111".to_string();
        form.phone = "119999".to_string();
        assert_eq!(validate_signup(&form), Err(ValidationError::InvalidPhone));

        form.phone = "1199999999".to_string(); // 10 digits is fine
        assert!(validate_signup(&form).is_ok());
    }

    #[test]
    fn test_password_rules() {
        let mut form = patient_form();
        form.password = "12345".to_string();
        form.confirm_password = "12345".to_string();
        assert_eq!(
            validate_signup(&form),
            Err(ValidationError::PasswordTooShort)
        );

        form.password = "secret1".to_string();
        form.confirm_password = "secret2".to_string();
        assert_eq!(
            validate_signup(&form),
            Err(ValidationError::PasswordMismatch)
        );
    }
}
