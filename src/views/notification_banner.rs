// ============================================================================
// NOTIFICATION BANNER - Banners fijos con auto-cierre
// ============================================================================
// Entrada: slideIn. Tras display_ms: slideOut. exit_ms después: se elimina.
// Los timers nunca se cancelan; si la página navega antes, simplemente no
// se disparan.
// ============================================================================

use gloo_timers::callback::Timeout;
use web_sys::Element;

use crate::config::{NotificationConfig, CONFIG};
use crate::dom::{get_element_by_id, require_document, set_style, ElementBuilder};
use crate::error::{HelpdeskError, Result};
use crate::models::notification::element_id;
use crate::models::Severity;
use crate::state::NotificationState;

const BANNER_STYLE: [(&str, &str); 7] = [
    ("position", "fixed"),
    ("top", "100px"),
    ("right", "20px"),
    ("z-index", "9999"),
    ("min-width", "300px"),
    ("max-width", "400px"),
    ("animation", "slideIn 0.3s ease"),
];

/// Pasos del cierre de un banner
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BannerStep {
    SlideOut,
    Remove,
}

/// Cierre de un banner: (ms desde el paso anterior, paso).
/// Solo depende de la config: cada banner tiene su propio calendario.
pub fn dismiss_schedule(config: &NotificationConfig) -> [(u32, BannerStep); 2] {
    [
        (config.display_ms, BannerStep::SlideOut),
        (config.exit_ms, BannerStep::Remove),
    ]
}

pub fn slide_out_animation(exit_ms: u32) -> String {
    format!("slideOut {}s ease", exit_ms as f64 / 1000.0)
}

/// Mostrar un banner. Los errores se registran, nunca se propagan al handler.
pub fn notify(state: &NotificationState, message: &str, severity: Severity) {
    if let Err(e) = show_banner(state, message, severity) {
        log::error!("❌ [ALERT] No se pudo mostrar '{}': {}", message, e);
    }
}

fn show_banner(state: &NotificationState, message: &str, severity: Severity) -> Result<()> {
    let body = require_document()?
        .body()
        .ok_or_else(|| HelpdeskError::MissingElement("body".to_string()))?;

    let mut rendered = None;
    let pushed = state.push_with(message, severity, |pushed| {
        if let Some(evicted) = pushed.evicted {
            log::debug!(
                "🗑️ [ALERT] Cola llena ({}), quitando banner {}",
                state.capacity(),
                evicted
            );
            if let Some(old) = get_element_by_id(&element_id(evicted)) {
                old.remove();
            }
        }

        let notification = &pushed.notification;
        let banner = ElementBuilder::new("div")?
            .class(notification.severity.css_class())
            .id(&notification.element_id())?
            .text(&notification.message)
            .style(&BANNER_STYLE)?
            .build();
        body.append_child(&banner)?;
        rendered = Some(banner);
        Ok(())
    })?;

    let id = pushed.notification.id;
    log::debug!("🔔 [ALERT] Banner {} mostrado", id);
    if let Some(banner) = rendered {
        schedule_dismiss(banner, state.clone(), id, dismiss_schedule(&CONFIG.notification_config));
    }
    Ok(())
}

fn schedule_dismiss(
    banner: Element,
    state: NotificationState,
    id: u64,
    steps: [(u32, BannerStep); 2],
) {
    let [(first_delay, first), (second_delay, second)] = steps;
    Timeout::new(first_delay, move || {
        run_step(first, &banner, &state, id);
        Timeout::new(second_delay, move || run_step(second, &banner, &state, id)).forget();
    })
    .forget();
}

fn run_step(step: BannerStep, banner: &Element, state: &NotificationState, id: u64) {
    match step {
        BannerStep::SlideOut => {
            let animation = slide_out_animation(CONFIG.notification_config.exit_ms);
            let _ = set_style(banner, "animation", &animation);
        }
        BannerStep::Remove => {
            banner.remove();
            state.remove(id);
        }
    }
}
