//! Role classification for authorization decisions made elsewhere.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RoleError;

const ADMIN: &str = "admin";
const USER: &str = "user";

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

/// Maps any string onto a [`Role`].
///
/// Only the exact literal `admin` is privileged. Every other value, including
/// case variants and the empty string, falls back to [`Role::User`].
#[must_use]
pub fn validate_role(value: &str) -> Role {
    if value == ADMIN { Role::Admin } else { Role::User }
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => ADMIN,
            Self::User => USER,
        }
    }

    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        validate_role(value)
    }
}

/// Strict parsing: unlike [`validate_role`], unknown values are an error.
impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ADMIN => Ok(Self::Admin),
            USER => Ok(Self::User),
            other => Err(RoleError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Role, validate_role};
    use crate::error::RoleError;
    use std::str::FromStr;

    #[test]
    fn admin_literal_is_privileged() {
        assert_eq!(validate_role("admin"), Role::Admin);
    }

    #[test]
    fn everything_else_is_user() {
        for input in ["user", "", "Admin", "root", "ADMIN", " admin", "admin\n", "admim"] {
            assert_eq!(validate_role(input), Role::User, "input {input:?}");
        }
    }

    #[test]
    fn normalizing_output_is_a_no_op() {
        for input in ["admin", "user", "", "root"] {
            let once = validate_role(input);
            assert_eq!(validate_role(once.as_str()), once);
        }
    }

    #[test]
    fn strict_parse_rejects_typos() {
        assert_eq!(Role::from_str("admin"), Ok(Role::Admin));
        assert_eq!(Role::from_str("user"), Ok(Role::User));
        assert_eq!(
            Role::from_str("admim"),
            Err(RoleError::Unknown("admim".to_string()))
        );
    }

    #[test]
    fn serializes_lowercase() {
        let json = match serde_json::to_string(&Role::Admin) {
            Ok(value) => value,
            Err(err) => panic!("failed to serialize role: {err}"),
        };
        assert_eq!(json, r#""admin""#);
        assert_eq!(Role::from("user").to_string(), "user");
    }
}
