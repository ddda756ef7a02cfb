use serde::{Deserialize, Serialize};

use crate::utils::{
    read_key, remove_key, write_key, STORAGE_KEY_ACCESS_TOKEN, STORAGE_KEY_ROLE,
    STORAGE_KEY_USER_ID,
};

/// Rol del usuario autenticado; decide qué dashboard puede cargar.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "EMPLOYEE")]
    Employee,
    #[serde(rename = "CLIENT")]
    Client,
}

impl Role {
    pub fn parse(raw: &str) -> Option<Role> {
        match raw {
            "EMPLOYEE" => Some(Role::Employee),
            "CLIENT" => Some(Role::Client),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "EMPLOYEE",
            Role::Client => "CLIENT",
        }
    }
}

/// Triple de sesión persistido en localStorage bajo tres claves planas.
#[derive(Clone, PartialEq, Debug)]
pub struct Session {
    pub access_token: String,
    pub user_id: i64,
    pub role: Role,
}

impl Session {
    /// Restaura el triple desde storage; cualquier clave ausente o inválida
    /// significa que no hay sesión usable.
    pub fn load() -> Option<Session> {
        let access_token = read_key(STORAGE_KEY_ACCESS_TOKEN)?;
        let user_id = read_key(STORAGE_KEY_USER_ID)?.parse().ok()?;
        let role = Role::parse(&read_key(STORAGE_KEY_ROLE)?)?;
        Some(Session {
            access_token,
            user_id,
            role,
        })
    }

    pub fn save(&self) {
        let _ = write_key(STORAGE_KEY_ACCESS_TOKEN, &self.access_token);
        let _ = write_key(STORAGE_KEY_USER_ID, &self.user_id.to_string());
        let _ = write_key(STORAGE_KEY_ROLE, self.role.as_str());
    }

    /// Borra las tres claves, sin mirar el estado previo.
    pub fn clear() {
        let _ = remove_key(STORAGE_KEY_ACCESS_TOKEN);
        let _ = remove_key(STORAGE_KEY_USER_ID);
        let _ = remove_key(STORAGE_KEY_ROLE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_accepts_known_values_only() {
        assert_eq!(Role::parse("EMPLOYEE"), Some(Role::Employee));
        assert_eq!(Role::parse("CLIENT"), Some(Role::Client));
        assert_eq!(Role::parse("ADMIN"), None);
        assert_eq!(Role::parse("client"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn role_round_trips_through_str() {
        for role in [Role::Employee, Role::Client] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }
}
