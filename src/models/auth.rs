/// Tabla fija de credenciales (usuario, contraseña). Sin hash: es una demo.
pub const CREDENTIALS: [(&str, &str); 5] = [
    ("admin", "admin123"),
    ("tech_support", "dept123"),
    ("billing", "dept123"),
    ("general", "dept123"),
    ("sales", "dept123"),
];

pub const ADMIN_USERNAME: &str = "admin";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    Admin,
    Department,
}

impl Role {
    pub fn for_username(username: &str) -> Self {
        if username == ADMIN_USERNAME {
            Role::Admin
        } else {
            Role::Department
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Department => "department",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Role::Admin),
            "department" => Some(Role::Department),
            _ => None,
        }
    }
}

/// Datos de sesión persistidos tras un login correcto
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SessionData {
    pub username: String,
    pub role: Role,
}

impl SessionData {
    pub fn new(username: impl Into<String>) -> Self {
        let username = username.into();
        let role = Role::for_username(&username);
        Self { username, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_admin_gets_admin_role() {
        assert_eq!(SessionData::new("admin").role, Role::Admin);
        assert_eq!(SessionData::new("billing").role, Role::Department);
        assert!(!SessionData::new("Admin").is_admin());
    }

    #[test]
    fn role_round_trips_through_storage_string() {
        assert_eq!(Role::parse(Role::Department.as_str()), Some(Role::Department));
        assert_eq!(Role::parse("root"), None);
    }
}
