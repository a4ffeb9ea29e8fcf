// ============================================================================
// HELPORT UI - Interactividad de la página de tickets (RUST PURO + WASM)
// ============================================================================
// - dom: helpers web-sys (elementos, eventos, builder)
// - models: datos puros (adjuntos, tickets, auth, notificaciones)
// - state: estado compartido con Rc<RefCell>
// - services: lógica sin DOM (validación, credenciales)
// - views: cada feature enlazada a su parte del HTML
// ============================================================================

mod app;
pub mod config;
mod dom;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
mod utils;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;
use crate::models::Severity;

// Instancia global de App (un único hilo de UI)
thread_local! {
    static APP: RefCell<App> = RefCell::new(App::new());
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Helport UI - Rust Puro");
    if let Ok(json) = serde_json::to_string(&*CONFIG) {
        log::debug!("⚙️ [CONFIG] {}", json);
    }

    let document = dom::require_document()?;
    if document.ready_state() == "loading" {
        // Esperar al DOM completo. Listener global: se registra una sola vez.
        dom::on_event(&document, "DOMContentLoaded", move |_: web_sys::Event| mount_app())?;
    } else {
        mount_app();
    }

    Ok(())
}

fn mount_app() {
    APP.with(|app| {
        if let Err(e) = app.borrow_mut().mount() {
            log::error!("❌ [APP] Error montando la página: {}", e);
        }
    });
}

/// Login de administración (llamable desde JavaScript)
#[wasm_bindgen]
pub fn admin_login(username: &str, password: &str) -> bool {
    APP.with(|app| match app.borrow().login(username, password) {
        Ok(logged_in) => logged_in,
        Err(e) => {
            log::error!("❌ [AUTH] Error guardando sesión: {}", e);
            false
        }
    })
}

/// ¿Hay sesión? (lectura pura del flag)
#[wasm_bindgen]
pub fn check_login() -> bool {
    APP.with(|app| app.borrow().is_logged_in())
}

#[wasm_bindgen]
pub fn logout() {
    APP.with(|app| {
        if let Err(e) = app.borrow().logout() {
            log::error!("❌ [AUTH] Error cerrando sesión: {}", e);
        }
    });
}

/// Resetear formulario y adjuntos
#[wasm_bindgen]
pub fn reset_form() -> bool {
    APP.with(|app| views::reset_form(app.borrow().state()))
}

/// Cambiar el estado visible de un ticket en la tabla
#[wasm_bindgen]
pub fn update_ticket_status(ticket_id: &str, status: &str) -> Result<usize, JsValue> {
    APP.with(|app| Ok(views::update_ticket_status(app.borrow().state(), ticket_id, status)?))
}

/// Banner genérico: kind = success | danger | info
#[wasm_bindgen]
pub fn show_alert(message: &str, kind: &str) {
    APP.with(|app| views::notify(&app.borrow().state().notifications, message, Severity::parse(kind)));
}
