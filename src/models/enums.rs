use serde::{Deserialize, Serialize};

use super::ModelError;

/// Capability class of the current session.
///
/// `Guest` is never written to storage: it is the absence of the role key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Guest,
    Admin,
    Doctor,
    /// Patient browsing before authenticating.
    Patient,
    LoggedPatient,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Admin => "admin",
            Self::Doctor => "doctor",
            Self::Patient => "patient",
            Self::LoggedPatient => "loggedPatient",
        }
    }

    /// Roles that are only valid while a session token is present.
    pub fn requires_token(&self) -> bool {
        match self {
            Self::Admin | Self::Doctor | Self::LoggedPatient => true,
            Self::Guest | Self::Patient => false,
        }
    }
}

impl std::str::FromStr for Role {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guest" => Ok(Self::Guest),
            "admin" => Ok(Self::Admin),
            "doctor" => Ok(Self::Doctor),
            "patient" => Ok(Self::Patient),
            "loggedPatient" => Ok(Self::LoggedPatient),
            _ => Err(ModelError::InvalidEnum {
                field: "Role".into(),
                value: s.into(),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_round_trip() {
        for (variant, s) in [
            (Role::Guest, "guest"),
            (Role::Admin, "admin"),
            (Role::Doctor, "doctor"),
            (Role::Patient, "patient"),
            (Role::LoggedPatient, "loggedPatient"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Role::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn invalid_role_returns_error() {
        assert!(Role::from_str("superuser").is_err());
        assert!(Role::from_str("Admin").is_err());
        assert!(Role::from_str("").is_err());
    }

    #[test]
    fn only_authenticated_roles_require_token() {
        assert!(Role::Admin.requires_token());
        assert!(Role::Doctor.requires_token());
        assert!(Role::LoggedPatient.requires_token());
        assert!(!Role::Patient.requires_token());
        assert!(!Role::Guest.requires_token());
    }
}
