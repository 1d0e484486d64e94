//! Signed-in user as exposed by the auth store.

use serde::{Deserialize, Serialize};

use crate::domain::types::UserId;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub nombre: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "esAdmin", alias = "es_admin")]
    pub is_admin: bool,
    #[serde(default, alias = "esSuperusuario", alias = "is_superusuario")]
    pub is_superuser: bool,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl User {
    /// Whether the user may delete reference data (admin or superuser).
    pub fn can_manage(&self) -> bool {
        self.is_admin || self.is_superuser
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_admin: bool, is_superuser: bool) -> User {
        User {
            id: UserId::new(1).unwrap(),
            nombre: "Operador".to_string(),
            email: None,
            is_admin,
            is_superuser,
            roles: vec!["catalogos".to_string()],
        }
    }

    #[test]
    fn manage_predicate_requires_admin_or_superuser() {
        assert!(!user(false, false).can_manage());
        assert!(user(true, false).can_manage());
        assert!(user(false, true).can_manage());
    }

    #[test]
    fn role_flags_accept_backend_aliases() {
        let parsed: User = serde_json::from_str(
            r#"{"id": 4, "nombre": "Ana", "esAdmin": true, "roles": ["planta"]}"#,
        )
        .unwrap();
        assert!(parsed.is_admin);
        assert!(!parsed.is_superuser);
        assert!(parsed.has_role("planta"));
    }
}
