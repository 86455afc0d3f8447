use std::io;

use tracing::{debug, warn};

use crate::models::Account;
use crate::storage::Storage;

use super::error::AuthError;
use super::session::Session;

/// Storage key for the account registry (JSON array of accounts).
/// Fixed: the web front end reads the same keys from its own storage.
const USERS_KEY: &str = "healthcare_users";

/// Storage key for the current session projection (JSON object).
const SESSION_KEY: &str = "healthcare_user";

/// The session store: a registry of signed-up accounts plus at most one
/// active session, both persisted through a [`Storage`] backend.
///
/// The store is the sole writer of its two keys. The registry is
/// append-only; accounts are never mutated or deleted. A credential check
/// is an exact, case-sensitive match on e-mail and password - the
/// registry keeps passwords as entered (see DESIGN.md).
///
/// Two states: anonymous and authenticated. Successful `login`/`signup`
/// authenticate, `logout` returns to anonymous, and failed calls leave
/// the state untouched and surface an [`AuthError`] for the caller to
/// display.
pub struct SessionStore<S: Storage> {
    storage: S,
    current: Option<Session>,
}

impl<S: Storage> SessionStore<S> {
    /// Create a store with no active session. Call [`initialize`] once at
    /// startup to rehydrate the persisted session.
    ///
    /// [`initialize`]: SessionStore::initialize
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            current: None,
        }
    }

    /// Rehydrate the session persisted by a previous run, if any.
    ///
    /// Corrupt or unreadable data starts the store signed out; it never
    /// fails.
    pub fn initialize(&mut self) {
        match self.storage.get(SESSION_KEY) {
            Ok(Some(blob)) => match serde_json::from_str::<Session>(&blob) {
                Ok(session) => {
                    debug!(email = %session.email, "Restored session from storage");
                    self.current = Some(session);
                }
                Err(e) => {
                    warn!(error = %e, "Stored session is corrupt, starting signed out");
                }
            },
            Ok(None) => debug!("No stored session"),
            Err(e) => {
                warn!(error = %e, "Failed to read stored session, starting signed out");
            }
        }
    }

    /// The active session, if someone is signed in.
    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Authenticate against the registry. E-mail and password must match
    /// a stored account exactly (case-sensitive).
    ///
    /// On success the new session is persisted and returned; the caller
    /// handles any post-login navigation. On failure the current session
    /// (or its absence) is untouched.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Session, AuthError> {
        let registry = self.load_registry();

        let account = registry
            .iter()
            .find(|a| a.email == email)
            .ok_or(AuthError::NotFound)?;

        if account.password != password {
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session::from_account(account);
        self.persist_session(&session)?;
        debug!(email = %session.email, "Login succeeded");
        self.current = Some(session.clone());
        Ok(session)
    }

    /// Register a new account and sign it in.
    ///
    /// The registry is scanned for duplicates before anything is written:
    /// e-mail first, then CPF, first violation wins. On success the
    /// account is appended to the registry (insertion order preserved)
    /// and the derived session becomes current; any failure leaves both
    /// the registry and the session unchanged.
    pub fn signup(&mut self, account: Account) -> Result<Session, AuthError> {
        let mut registry = self.load_registry();

        if registry.iter().any(|a| a.email == account.email) {
            return Err(AuthError::DuplicateEmail);
        }
        if registry.iter().any(|a| a.cpf == account.cpf) {
            return Err(AuthError::DuplicateCpf);
        }

        let session = Session::from_account(&account);
        debug!(email = %account.email, role = %account.role, "Registering account");
        registry.push(account);
        self.save_registry(&registry)?;

        self.persist_session(&session)?;
        self.current = Some(session.clone());
        Ok(session)
    }

    /// Sign out. Clears the in-memory session and removes the persisted
    /// entry; the registry is untouched. No-op when already signed out,
    /// and never fails - a remove that goes wrong is logged and the
    /// session is still gone from memory.
    pub fn logout(&mut self) {
        let Some(session) = self.current.take() else {
            return;
        };
        debug!(email = %session.email, "Logout");
        if let Err(e) = self.storage.remove(SESSION_KEY) {
            warn!(error = %e, "Failed to remove stored session");
        }
    }

    /// Read the registry, treating absent or corrupt data as empty.
    fn load_registry(&self) -> Vec<Account> {
        match self.storage.get(USERS_KEY) {
            Ok(Some(blob)) => match serde_json::from_str(&blob) {
                Ok(accounts) => accounts,
                Err(e) => {
                    warn!(error = %e, "Account registry is corrupt, treating as empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read account registry");
                Vec::new()
            }
        }
    }

    fn save_registry(&self, registry: &[Account]) -> Result<(), AuthError> {
        let blob = serde_json::to_string(registry).map_err(io::Error::from)?;
        self.storage.set(USERS_KEY, &blob)?;
        Ok(())
    }

    fn persist_session(&self, session: &Session) -> Result<(), AuthError> {
        let blob = serde_json::to_string(session).map_err(io::Error::from)?;
        self.storage.set(SESSION_KEY, &blob)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::storage::{FileStorage, MemoryStorage};

    fn patient(email: &str, cpf: &str) -> Account {
        Account {
            email: email.to_string(),
            password: "secret1".to_string(),
            full_name: "Test Patient".to_string(),
            cpf: cpf.to_string(),
            phone: "11999999999".to_string(),
            role: Role::Patient,
            professional_id: None,
            specialty: None,
        }
    }

    fn ana() -> Account {
        Account {
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
            full_name: "Ana".to_string(),
            cpf: "11111111111".to_string(),
            phone: "11999999999".to_string(),
            role: Role::Patient,
            professional_id: None,
            specialty: None,
        }
    }

    fn registry_of(storage: &MemoryStorage) -> Vec<Account> {
        match storage.get(USERS_KEY).unwrap() {
            Some(blob) => serde_json::from_str(&blob).unwrap(),
            None => Vec::new(),
        }
    }

    #[test]
    fn test_signup_appends_one_record_and_signs_in() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::new(storage.clone());

        let session = store.signup(ana()).unwrap();
        assert_eq!(session.email, "a@x.com");
        assert_eq!(session.full_name, "Ana");
        assert_eq!(session.role, Role::Patient);
        assert!(store.is_authenticated());

        let registry = registry_of(&storage);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry[0], ana());
    }

    #[test]
    fn test_signup_preserves_prior_records() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::new(storage.clone());

        store.signup(patient("a@x.com", "11111111111")).unwrap();
        let first_blob = storage.get(USERS_KEY).unwrap().unwrap();

        store.signup(patient("b@x.com", "22222222222")).unwrap();
        store.signup(patient("c@x.com", "33333333333")).unwrap();

        let registry = registry_of(&storage);
        assert_eq!(registry.len(), 3);
        // Insertion order, and the first record serialized exactly as before
        assert_eq!(
            serde_json::to_string(&registry[0]).unwrap(),
            first_blob.trim_start_matches('[').trim_end_matches(']')
        );
        assert_eq!(registry[1].email, "b@x.com");
        assert_eq!(registry[2].email, "c@x.com");
    }

    #[test]
    fn test_duplicate_email_rejected_before_cpf() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::new(storage.clone());
        store.signup(patient("a@x.com", "11111111111")).unwrap();
        store.logout();

        // Same email AND same cpf: the email check must win
        let err = store.signup(patient("a@x.com", "11111111111")).unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail));

        // Same email, different cpf
        let err = store.signup(patient("a@x.com", "99999999999")).unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail));

        assert_eq!(registry_of(&storage).len(), 1);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_duplicate_cpf_rejected() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::new(storage.clone());
        store.signup(patient("a@x.com", "11111111111")).unwrap();

        let err = store.signup(patient("b@x.com", "11111111111")).unwrap_err();
        assert!(matches!(err, AuthError::DuplicateCpf));
        assert_eq!(registry_of(&storage).len(), 1);
    }

    #[test]
    fn test_login_unknown_email() {
        let mut store = SessionStore::new(MemoryStorage::new());
        let err = store.login("nobody@x.com", "whatever").unwrap_err();
        assert!(matches!(err, AuthError::NotFound));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_login_email_is_case_sensitive() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.signup(ana()).unwrap();
        store.logout();

        let err = store.login("A@X.COM", "secret1").unwrap_err();
        assert!(matches!(err, AuthError::NotFound));
    }

    #[test]
    fn test_failed_login_keeps_existing_session() {
        let mut store = SessionStore::new(MemoryStorage::new());
        let session = store.signup(ana()).unwrap();

        let err = store.login("a@x.com", "wrong").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(store.current(), Some(&session));

        let err = store.login("nobody@x.com", "secret1").unwrap_err();
        assert!(matches!(err, AuthError::NotFound));
        assert_eq!(store.current(), Some(&session));
    }

    #[test]
    fn test_signup_then_login_roundtrip() {
        let mut store = SessionStore::new(MemoryStorage::new());

        let professional = Account {
            email: "joao@x.com".to_string(),
            password: "hunter22".to_string(),
            full_name: "Dr. Joao Silva".to_string(),
            cpf: "22222222222".to_string(),
            phone: "11988888888".to_string(),
            role: Role::Professional,
            professional_id: Some("CRM 123456".to_string()),
            specialty: Some("Cardiology".to_string()),
        };
        store.signup(professional).unwrap();
        store.logout();

        let session = store.login("joao@x.com", "hunter22").unwrap();
        assert_eq!(session.full_name, "Dr. Joao Silva");
        assert_eq!(session.role, Role::Professional);
        assert_eq!(session.id, "joao@x.com");
    }

    #[test]
    fn test_restart_restores_session() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::new(storage.clone());
        store.signup(ana()).unwrap();

        let mut restarted = SessionStore::new(storage);
        assert!(!restarted.is_authenticated());
        restarted.initialize();
        assert!(restarted.is_authenticated());
        assert_eq!(restarted.current().unwrap().email, "a@x.com");
    }

    #[test]
    fn test_logout_then_restart_is_anonymous() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::new(storage.clone());
        store.signup(ana()).unwrap();
        store.logout();
        assert!(!store.is_authenticated());

        let mut restarted = SessionStore::new(storage);
        restarted.initialize();
        assert!(!restarted.is_authenticated());
    }

    #[test]
    fn test_logout_when_anonymous_is_noop() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.logout();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_logout_does_not_touch_registry() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::new(storage.clone());
        store.signup(ana()).unwrap();
        store.logout();

        assert_eq!(registry_of(&storage).len(), 1);
        // A fresh login still works against the intact registry
        assert!(store.login("a@x.com", "secret1").is_ok());
    }

    #[test]
    fn test_corrupt_session_blob_starts_signed_out() {
        let storage = MemoryStorage::new();
        storage.set(SESSION_KEY, "{not json").unwrap();

        let mut store = SessionStore::new(storage);
        store.initialize();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_corrupt_registry_treated_as_empty() {
        let storage = MemoryStorage::new();
        storage.set(USERS_KEY, "][").unwrap();

        let mut store = SessionStore::new(storage);
        let err = store.login("a@x.com", "secret1").unwrap_err();
        assert!(matches!(err, AuthError::NotFound));
    }

    #[test]
    fn test_file_backed_store_survives_restart() {
        let dir = tempfile::tempdir().unwrap();

        {
            let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
            let mut store = SessionStore::new(storage);
            store.signup(ana()).unwrap();
        }

        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        let mut store = SessionStore::new(storage);
        store.initialize();
        assert_eq!(store.current().unwrap().email, "a@x.com");

        // The two fixed keys are the only files written
        assert!(dir.path().join("healthcare_users.json").exists());
        assert!(dir.path().join("healthcare_user.json").exists());
    }

    // The end-to-end scenario: signup, wrong password, logout, login again.
    #[test]
    fn test_full_onboarding_scenario() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::new(storage.clone());

        let session = store.signup(ana()).unwrap();
        assert_eq!(registry_of(&storage).len(), 1);
        assert_eq!(session.email, "a@x.com");
        assert_eq!(session.full_name, "Ana");
        assert_eq!(session.role, Role::Patient);

        let err = store.login("a@x.com", "wrong").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(store.current().map(|s| s.email.as_str()), Some("a@x.com"));

        store.logout();
        assert_eq!(store.current(), None);

        let session = store.login("a@x.com", "secret1").unwrap();
        assert_eq!(session.full_name, "Ana");
        assert!(store.is_authenticated());
    }
}
