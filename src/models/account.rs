use serde::{Deserialize, Serialize};
use std::fmt;

/// How the registrant takes part in the event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipationType {
    Exhibitor,
    Buyer,
    Visitor,
}

impl ParticipationType {
    pub const ALL: [ParticipationType; 3] = [Self::Exhibitor, Self::Buyer, Self::Visitor];

    /// Human-readable label for selectors
    pub fn title(&self) -> &'static str {
        match self {
            Self::Exhibitor => "Exhibitor",
            Self::Buyer => "Buyer",
            Self::Visitor => "Visitor",
        }
    }
}

impl fmt::Display for ParticipationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhibitor => write!(f, "exhibitor"),
            Self::Buyer => write!(f, "buyer"),
            Self::Visitor => write!(f, "visitor"),
        }
    }
}

impl std::str::FromStr for ParticipationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exhibitor" => Ok(Self::Exhibitor),
            "buyer" => Ok(Self::Buyer),
            "visitor" => Ok(Self::Visitor),
            _ => Err(format!("Invalid participation type: {s}")),
        }
    }
}

/// Step 1 data bag: account credentials
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub password_confirmation: String,
    pub participation_type: Option<ParticipationType>,
}

impl AccountInfo {
    /// Merge-patch: only fields present in `patch` are overwritten
    pub fn apply(&mut self, patch: AccountInfoPatch) {
        let AccountInfoPatch {
            first_name,
            last_name,
            email,
            username,
            password,
            password_confirmation,
            participation_type,
        } = patch;

        if let Some(value) = first_name {
            self.first_name = value;
        }
        if let Some(value) = last_name {
            self.last_name = value;
        }
        if let Some(value) = email {
            self.email = value;
        }
        if let Some(value) = username {
            self.username = value;
        }
        if let Some(value) = password {
            self.password = value;
        }
        if let Some(value) = password_confirmation {
            self.password_confirmation = value;
        }
        if let Some(value) = participation_type {
            self.participation_type = Some(value);
        }
    }

    /// "First Last", trimmed
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

// Passwords stay out of logs.
impl fmt::Debug for AccountInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountInfo")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("password_confirmation", &"[REDACTED]")
            .field("participation_type", &self.participation_type)
            .finish()
    }
}

/// Partial update for [`AccountInfo`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountInfoPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
    pub participation_type: Option<ParticipationType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_only_touches_present_fields() {
        let mut account = AccountInfo {
            first_name: "Maria".to_string(),
            last_name: "Cruz".to_string(),
            ..Default::default()
        };

        account.apply(AccountInfoPatch {
            email: Some("maria@example.com".to_string()),
            ..Default::default()
        });

        assert_eq!(account.first_name, "Maria");
        assert_eq!(account.last_name, "Cruz");
        assert_eq!(account.email, "maria@example.com");
    }

    #[test]
    fn test_patch_from_partial_json() {
        let patch: AccountInfoPatch =
            serde_json::from_str(r#"{"firstName":"Jo","participationType":"buyer"}"#).unwrap();
        assert_eq!(patch.first_name.as_deref(), Some("Jo"));
        assert_eq!(patch.participation_type, Some(ParticipationType::Buyer));
        assert!(patch.email.is_none());

        let invalid = serde_json::from_str::<AccountInfoPatch>(r#"{"participationType":"vip"}"#);
        assert!(invalid.is_err());
    }

    #[test]
    fn test_full_name_is_trimmed() {
        let account = AccountInfo {
            first_name: "Maria".to_string(),
            ..Default::default()
        };
        assert_eq!(account.full_name(), "Maria");
        assert_eq!(AccountInfo::default().full_name(), "");
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let account = AccountInfo {
            password: "hunter22".to_string(),
            ..Default::default()
        };
        assert!(!format!("{account:?}").contains("hunter22"));
    }

    #[test]
    fn test_participation_type_string_conversion() {
        assert_eq!(ParticipationType::Exhibitor.to_string(), "exhibitor");
        assert_eq!(
            "visitor".parse::<ParticipationType>().unwrap(),
            ParticipationType::Visitor
        );
        assert!("sponsor".parse::<ParticipationType>().is_err());
    }
}
