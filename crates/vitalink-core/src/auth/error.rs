use thiserror::Error;

/// Errors the session store surfaces to its caller.
///
/// Every variant carries a message suitable for showing directly on the
/// form that triggered it; the caller stays on the current screen.
/// Format-level validation is not represented here - it belongs to the
/// form layer and runs before the store is called.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No account found for this e-mail. Check the address or sign up.")]
    NotFound,

    #[error("Incorrect password. Try again.")]
    InvalidCredentials,

    #[error("This e-mail is already registered. Log in or use another e-mail.")]
    DuplicateEmail,

    #[error("This CPF is already registered.")]
    DuplicateCpf,

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}
