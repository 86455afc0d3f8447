use serde::{Deserialize, Serialize};

/// Which side of the marketplace an account belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub enum Role {
    Patient,
    Professional,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Patient => write!(f, "Patient"),
            Role::Professional => write!(f, "Professional"),
        }
    }
}

/// A registered account, stored verbatim in the registry at signup.
///
/// Field names follow the wire format the web front end reads
/// (`fullName`, `professionalId`); the two professional-only fields are
/// omitted from the JSON when absent. The password is kept as entered -
/// there is no backend to hash against, and the registry format predates
/// this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct Account {
    pub email: String,
    pub password: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub cpf: String,
    pub phone: String,
    pub role: Role,
    #[serde(
        rename = "professionalId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub professional_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
}

impl Account {
    pub fn is_professional(&self) -> bool {
        self.role == Role::Professional
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_wire_format_omits_professional_fields() {
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

        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&account).unwrap()).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj["fullName"], "Ana Souza");
        assert_eq!(obj["role"], "patient");
        assert!(!obj.contains_key("professionalId"));
        assert!(!obj.contains_key("specialty"));
    }

    #[test]
    fn test_professional_wire_format() {
        let account = Account {
            email: "joao@example.com".to_string(),
            password: "secret1".to_string(),
            full_name: "Dr. Joao Silva".to_string(),
            cpf: "22222222222".to_string(),
            phone: "11988888888".to_string(),
            role: Role::Professional,
            professional_id: Some("CRM 123456".to_string()),
            specialty: Some("Cardiology".to_string()),
        };

        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&account).unwrap()).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj["role"], "professional");
        assert_eq!(obj["professionalId"], "CRM 123456");
        assert_eq!(obj["specialty"], "Cardiology");
    }

    #[test]
    fn test_parses_registry_entry_written_by_web_client() {
        let raw = r#"{
            "email": "ana@example.com",
            "password": "secret1",
            "fullName": "Ana Souza",
            "cpf": "11111111111",
            "phone": "11999999999",
            "role": "patient"
        }"#;

        let account: Account = serde_json::from_str(raw).unwrap();
        assert_eq!(account.full_name, "Ana Souza");
        assert_eq!(account.role, Role::Patient);
        assert_eq!(account.professional_id, None);
    }
}
