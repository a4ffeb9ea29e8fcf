// ============================================================================
// SESSION STATE - Flags de sesión (loggedIn / username / role)
// ============================================================================
// Objeto explícito en vez de leer localStorage desde cualquier sitio.
// El backend de almacenamiento es intercambiable: localStorage en el
// navegador, memoria si localStorage no está disponible (o en tests).
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::Storage;

use crate::error::Result;
use crate::models::{Role, SessionData};
use crate::utils::storage::{delete_item, read_item, write_item};
use crate::utils::{LOGGED_IN_KEY, ROLE_KEY, USERNAME_KEY};

/// Almacenamiento clave-valor de strings
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// localStorage del navegador
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }
}

impl SessionStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        read_item(&self.storage, key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        write_item(&self.storage, key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        delete_item(&self.storage, key)
    }
}

/// Store en memoria (dura lo que dura la página)
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

/// Estado de sesión
#[derive(Clone)]
pub struct SessionState {
    store: Rc<dyn SessionStore>,
}

impl SessionState {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// localStorage si existe, memoria si no
    pub fn from_browser() -> Self {
        match crate::utils::storage::get_local_storage() {
            Some(storage) => Self::new(Rc::new(LocalStorageStore::new(storage))),
            None => {
                log::warn!("⚠️ [SESSION] localStorage no disponible, sesión solo en memoria");
                Self::new(Rc::new(MemoryStore::new()))
            }
        }
    }

    /// Crear sesión: escribe los tres flags
    pub fn create(&self, session: &SessionData) -> Result<()> {
        self.store.set(LOGGED_IN_KEY, "true")?;
        self.store.set(USERNAME_KEY, &session.username)?;
        self.store.set(ROLE_KEY, session.role.as_str())?;
        log::info!("💾 [SESSION] Sesión creada para {}", session.username);
        Ok(())
    }

    /// Limpiar sesión: borra los tres flags
    pub fn clear(&self) -> Result<()> {
        self.store.remove(LOGGED_IN_KEY)?;
        self.store.remove(USERNAME_KEY)?;
        self.store.remove(ROLE_KEY)?;
        log::info!("🧹 [SESSION] Sesión eliminada");
        Ok(())
    }

    /// Lectura pura del flag loggedIn (ausente = false)
    pub fn is_logged_in(&self) -> bool {
        self.store.get(LOGGED_IN_KEY).as_deref() == Some("true")
    }

    /// Sesión actual, si está completa
    pub fn current(&self) -> Option<SessionData> {
        if !self.is_logged_in() {
            return None;
        }
        let username = self.store.get(USERNAME_KEY)?;
        let role = self.store.get(ROLE_KEY).as_deref().and_then(Role::parse)?;
        Some(SessionData { username, role })
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn memory_session() -> SessionState {
        SessionState::new(Rc::new(MemoryStore::new()))
    }

    #[test]
    fn missing_flag_means_logged_out() {
        let session = memory_session();
        assert!(!session.is_logged_in());
        assert_eq!(session.current(), None);
    }

    #[test]
    fn create_then_clear_round_trip() {
        let session = memory_session();
        session.create(&SessionData::new("billing")).expect("create");

        assert!(session.is_logged_in());
        assert_eq!(session.store().get(LOGGED_IN_KEY).as_deref(), Some("true"));
        assert_eq!(session.store().get(ROLE_KEY).as_deref(), Some("department"));
        assert_eq!(session.current(), Some(SessionData::new("billing")));

        session.clear().expect("clear");
        assert!(!session.is_logged_in());
        assert_eq!(session.store().get(USERNAME_KEY), None);
        assert_eq!(session.store().get(ROLE_KEY), None);
    }

    #[test]
    fn only_the_literal_true_counts() {
        let session = memory_session();
        session.store().set(LOGGED_IN_KEY, "yes").expect("set");
        assert!(!session.is_logged_in());
    }
}
