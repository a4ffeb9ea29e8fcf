// ============================================================================
// APP STATE - Estado global de la página
// ============================================================================

use crate::config::CONFIG;
use crate::state::{NotificationState, SessionState, StagingState};

/// Estado compartido por todos los handlers (clonar = compartir)
#[derive(Clone)]
pub struct AppState {
    pub staging: StagingState,
    pub session: SessionState,
    pub notifications: NotificationState,
}

impl AppState {
    /// Estado para el navegador (sesión en localStorage)
    pub fn new() -> Self {
        Self {
            staging: StagingState::new(),
            session: SessionState::from_browser(),
            notifications: NotificationState::new(CONFIG.notification_config.capacity),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
