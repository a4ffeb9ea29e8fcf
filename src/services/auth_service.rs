// ============================================================================
// AUTH SERVICE - Credenciales fijas + sesión local
// ============================================================================
// Solo decide y persiste. Los banners y redirecciones los hace el que llama.
// ============================================================================

use crate::config::PageConfig;
use crate::error::Result;
use crate::models::auth::CREDENTIALS;
use crate::models::{Role, SessionData};
use crate::state::SessionState;

/// Buscar usuario en la tabla fija (contraseña exacta, case-sensitive)
pub fn authenticate(username: &str, password: &str) -> Option<Role> {
    CREDENTIALS
        .iter()
        .find(|(user, _)| *user == username)
        .filter(|(_, expected)| *expected == password)
        .map(|(user, _)| Role::for_username(user))
}

/// Página de destino tras el login
pub fn landing_page(session: &SessionData, pages: &PageConfig) -> String {
    if session.is_admin() {
        pages.admin.clone()
    } else {
        format!("{}?department={}", pages.admin, session.username)
    }
}

pub struct AuthService {
    session: SessionState,
}

impl AuthService {
    pub fn new(session: SessionState) -> Self {
        Self { session }
    }

    /// Login: Some(sesión) si las credenciales son correctas (y quedan guardadas).
    /// None si no; en ese caso los flags no se tocan.
    pub fn login(&self, username: &str, password: &str) -> Result<Option<SessionData>> {
        match authenticate(username, password) {
            Some(role) => {
                let data = SessionData {
                    username: username.to_string(),
                    role,
                };
                self.session.create(&data)?;
                log::info!("✅ [AUTH] Login correcto: {} ({})", username, role.as_str());
                Ok(Some(data))
            }
            None => {
                log::warn!("⚠️ [AUTH] Credenciales inválidas para '{}'", username);
                Ok(None)
            }
        }
    }

    pub fn logout(&self) -> Result<()> {
        self.session.clear()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MemoryStore;
    use crate::utils::{LOGGED_IN_KEY, ROLE_KEY, USERNAME_KEY};
    use pretty_assertions::assert_eq;
    use std::rc::Rc;

    fn service() -> (AuthService, SessionState) {
        let session = SessionState::new(Rc::new(MemoryStore::new()));
        (AuthService::new(session.clone()), session)
    }

    #[test]
    fn admin_login_sets_all_three_flags() {
        let (auth, session) = service();
        let data = auth.login("admin", "admin123").expect("store ok");

        assert_eq!(data, Some(SessionData::new("admin")));
        assert!(auth.is_logged_in());
        assert_eq!(session.store().get(LOGGED_IN_KEY).as_deref(), Some("true"));
        assert_eq!(session.store().get(USERNAME_KEY).as_deref(), Some("admin"));
        assert_eq!(session.store().get(ROLE_KEY).as_deref(), Some("admin"));
    }

    #[test]
    fn wrong_password_leaves_flags_unchanged() {
        let (auth, session) = service();
        assert_eq!(auth.login("admin", "wrong").expect("store ok"), None);
        assert!(!auth.is_logged_in());
        assert_eq!(session.store().get(USERNAME_KEY), None);

        // con una sesión previa, un login fallido tampoco la pisa
        auth.login("sales", "dept123").expect("store ok");
        assert_eq!(auth.login("admin", "wrong").expect("store ok"), None);
        assert_eq!(session.current(), Some(SessionData::new("sales")));
    }

    #[test]
    fn unknown_user_is_rejected() {
        let (auth, _) = service();
        assert_eq!(auth.login("nosuchuser", "x").expect("store ok"), None);
        assert_eq!(authenticate("ADMIN", "admin123"), None);
        assert_eq!(authenticate("admin", "ADMIN123"), None);
    }

    #[test]
    fn department_accounts_share_password() {
        for user in ["tech_support", "billing", "general", "sales"] {
            assert_eq!(authenticate(user, "dept123"), Some(Role::Department));
        }
    }

    #[test]
    fn logout_clears_session() {
        let (auth, session) = service();
        auth.login("general", "dept123").expect("store ok");
        auth.logout().expect("store ok");
        assert!(!auth.is_logged_in());
        assert_eq!(session.current(), None);
    }

    #[test]
    fn landing_page_carries_department() {
        let pages = PageConfig::default();
        assert_eq!(landing_page(&SessionData::new("admin"), &pages), "admin/index.html");
        assert_eq!(
            landing_page(&SessionData::new("billing"), &pages),
            "admin/index.html?department=billing"
        );
    }

    #[test]
    fn restored_session_lands_where_login_did() {
        let pages = PageConfig::default();
        for (user, password) in [("admin", "admin123"), ("tech_support", "dept123")] {
            let (auth, session) = service();
            let logged = auth.login(user, password).expect("store ok").expect("valid");
            let restored = session.current().expect("session stored");
            assert_eq!(restored.is_admin(), logged.is_admin());
            assert_eq!(landing_page(&restored, &pages), landing_page(&logged, &pages));
        }
    }
}
