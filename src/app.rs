// ============================================================================
// APP - Arranque de la página: enlaza cada feature con su parte del DOM
// ============================================================================
// Cada feature es opcional: si su HTML no está en la página, bind() devuelve
// None y simplemente no se activa.
// ============================================================================

use crate::config::CONFIG;
use crate::dom::{current_path, navigate_after};
use crate::error::Result;
use crate::models::Severity;
use crate::services::{landing_page, AuthService};
use crate::state::AppState;
use crate::views::{
    animations, notify, start_if_listing, CharacterCounter, FileUpload, TicketForm,
};

/// Qué features quedaron activas tras montar
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MountedFeatures {
    pub character_counter: bool,
    pub file_upload: bool,
    pub ticket_form: bool,
    pub status_simulation: bool,
}

/// Aplicación principal
pub struct App {
    state: AppState,
    mounted: Option<MountedFeatures>,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
            mounted: None,
        }
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Enlazar todas las features (idempotente)
    pub fn mount(&mut self) -> Result<MountedFeatures> {
        if let Some(mounted) = self.mounted {
            log::warn!("⚠️ [APP] mount() ya fue llamado, ignorando");
            return Ok(mounted);
        }
        log::info!("🎬 [APP] Montando features...");

        if let Err(e) = animations::inject_keyframes() {
            log::warn!("⚠️ [APP] No se pudieron inyectar keyframes: {}", e);
        }

        let mut mounted = MountedFeatures::default();

        if let Some(counter) = CharacterCounter::bind() {
            mounted.character_counter = feature_attached("contador", counter.attach());
        }

        if let Some(upload) = FileUpload::bind(self.state.staging.clone()) {
            mounted.file_upload = feature_attached("adjuntos", upload.attach());
        }

        if let Some(form) = TicketForm::bind() {
            mounted.ticket_form = feature_attached("formulario", form.attach(self.state.clone()));
        }

        let cards = animations::bind_card_hover().unwrap_or_else(|e| {
            log::error!("❌ [APP] Hover de cards no enlazado: {}", e);
            0
        });
        let buttons = animations::bind_button_pulse().unwrap_or_else(|e| {
            log::error!("❌ [APP] Pulso de botones no enlazado: {}", e);
            0
        });
        log::debug!("✨ [APP] Animaciones: {} cards, {} botones", cards, buttons);

        if let Some(path) = current_path() {
            mounted.status_simulation = start_if_listing(&path);
        }

        if let Some(session) = self.state.session.current() {
            log::info!("🔐 [APP] Sesión restaurada: {} ({})", session.username, session.role.as_str());
        }

        log::info!("✅ [APP] Features montadas: {:?}", mounted);
        self.mounted = Some(mounted);
        Ok(mounted)
    }

    /// Login con banner + redirección
    pub fn login(&self, username: &str, password: &str) -> Result<bool> {
        let auth = AuthService::new(self.state.session.clone());
        match auth.login(username, password)? {
            Some(session) => {
                notify(
                    &self.state.notifications,
                    &format!("👋 Welcome back, {}!", session.username),
                    Severity::Success,
                );
                navigate_after(
                    CONFIG.redirect_config.login_delay_ms,
                    landing_page(&session, &CONFIG.pages),
                );
                Ok(true)
            }
            None => {
                notify(
                    &self.state.notifications,
                    "❌ Invalid username or password",
                    Severity::Danger,
                );
                Ok(false)
            }
        }
    }

    /// Logout con banner + redirección a inicio
    pub fn logout(&self) -> Result<()> {
        AuthService::new(self.state.session.clone()).logout()?;
        notify(&self.state.notifications, "👋 Logged out successfully", Severity::Info);
        navigate_after(CONFIG.redirect_config.login_delay_ms, CONFIG.pages.home.clone());
        Ok(())
    }

    pub fn is_logged_in(&self) -> bool {
        AuthService::new(self.state.session.clone()).is_logged_in()
    }
}

/// Una feature que falla al enlazar se registra y no impide montar las demás
fn feature_attached(name: &str, result: Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::error!("❌ [APP] Feature '{}' no enlazada: {}", name, e);
            false
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HelpdeskError;

    #[test]
    fn failed_feature_is_reported_inactive() {
        assert!(feature_attached("contador", Ok(())));
        assert!(!feature_attached(
            "adjuntos",
            Err(HelpdeskError::Dom("addEventListener falló".to_string()))
        ));
    }

    #[test]
    fn one_failure_does_not_stop_the_others() {
        let results = vec![
            ("contador", Err(HelpdeskError::MissingElement("charCount".to_string()))),
            ("adjuntos", Ok(())),
            ("formulario", Ok(())),
        ];
        let attached: Vec<bool> = results
            .into_iter()
            .map(|(name, result)| feature_attached(name, result))
            .collect();
        assert_eq!(attached, vec![false, true, true]);
    }
}
