use serde::{Deserialize, Serialize};

use crate::models::{Account, Role};

/// The signed-in account's public projection - what the screens see and
/// what gets persisted under the session key. Never carries the password.
///
/// `id` equals the account's e-mail: the registry has no generated
/// identifiers, so the unique e-mail doubles as the stable handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct Session {
    pub id: String,
    pub email: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub role: Role,
}

impl Session {
    pub fn from_account(account: &Account) -> Self {
        Self {
            id: account.email.clone(),
            email: account.email.clone(),
            full_name: account.full_name.clone(),
            role: account.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_strips_password_and_uses_email_as_id() {
        let account = Account {
            email: "ana@example.com".to_string(),
            password: "secret1".to_string(),
            full_name: "Ana Souza".to_string(),
            cpf: "11111111111".to_string(),
            phone: "11999999999".to_string(),
            role: Role::Patient,
            professional_id: None,
            specialty: None,
        };

        let session = Session::from_account(&account);
        assert_eq!(session.id, "ana@example.com");
        assert_eq!(session.email, "ana@example.com");
        assert_eq!(session.full_name, "Ana Souza");
        assert_eq!(session.role, Role::Patient);

        let json = serde_json::to_string(&session).unwrap();
        assert!(!json.contains("secret1"));
        assert!(json.contains("\"fullName\""));
    }
}
