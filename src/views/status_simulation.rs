// ============================================================================
// STATUS SIMULATION - "Actualizaciones" decorativas en la lista de tickets
// ============================================================================
// Solo en la página de listado. Cada poll tira un número por badge y, con
// probabilidad p, repite la animación pulse. Nunca cambia datos y el
// Interval no se cancela nunca.
// ============================================================================

use gloo_timers::callback::Interval;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{
    play_animation, query_selector_all, require_document, set_class_name, set_text_content,
    ElementBuilder,
};
use crate::error::{HelpdeskError, Result};
use crate::models::{Severity, TicketStatus};
use crate::state::AppState;
use crate::utils::{BADGE_SELECTOR, TICKET_ROW_SELECTOR};
use crate::views::notification_banner::notify;

pub fn is_listing_page(path: &str, listing_page: &str) -> bool {
    path.contains(listing_page)
}

/// draw uniforme en [0, 1)
pub fn should_pulse(draw: f64, probability: f64) -> bool {
    draw > 1.0 - probability
}

/// Arranca el polling si estamos en el listado. true si arrancó.
pub fn start_if_listing(path: &str) -> bool {
    if !is_listing_page(path, &CONFIG.pages.listing) {
        return false;
    }

    let interval_ms = CONFIG.simulation_config.poll_interval_ms;
    let probability = CONFIG.simulation_config.pulse_probability;
    log::info!("⏰ [SIMULATION] Polling de estados cada {}ms", interval_ms);

    Interval::new(interval_ms, move || {
        let badges = match query_selector_all(BADGE_SELECTOR) {
            Ok(badges) => badges,
            Err(e) => {
                log::warn!("⚠️ [SIMULATION] {}", e);
                return;
            }
        };
        for badge in &badges {
            if should_pulse(js_sys::Math::random(), probability) {
                play_animation(badge, "pulse 0.5s ease", 500);
            }
        }
    })
    .forget();
    true
}

/// Cambiar el badge de un ticket en la tabla. Devuelve cuántas filas cambiaron.
pub fn update_ticket_status(state: &AppState, ticket_id: &str, status_key: &str) -> Result<usize> {
    let status = TicketStatus::parse(status_key)
        .ok_or_else(|| HelpdeskError::UnknownStatus(status_key.to_string()))?;

    let mut updated = 0;
    for row in query_selector_all(TICKET_ROW_SELECTOR)? {
        if row_ticket_id(&row)?.as_deref() != Some(ticket_id) {
            continue;
        }
        let Some(badge) = row.query_selector("td:nth-child(4) span")? else {
            log::warn!("⚠️ [SIMULATION] Fila de {} sin badge", ticket_id);
            continue;
        };
        render_badge(&badge, status)?;
        updated += 1;
        notify(
            &state.notifications,
            &format!("Ticket {} status updated to {}", ticket_id, status.label()),
            Severity::Info,
        );
    }

    if updated == 0 {
        log::debug!("🔍 [SIMULATION] Ticket {} no encontrado en la tabla", ticket_id);
    }
    Ok(updated)
}

fn row_ticket_id(row: &Element) -> Result<Option<String>> {
    Ok(row
        .query_selector("td:first-child strong")?
        .and_then(|cell| cell.text_content()))
}

fn render_badge(badge: &Element, status: TicketStatus) -> Result<()> {
    set_class_name(badge, &format!("badge {}", status.badge_class()));
    set_text_content(badge, "");
    let icon = ElementBuilder::new("i")?.class(&status.icon_class()).build();
    badge.append_child(&icon)?;
    let label = require_document()?.create_text_node(&format!(" {}", status.label()));
    badge.append_child(&label)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_listing_page_polls() {
        assert!(is_listing_page("/helpdesk/view-tickets.html", "view-tickets.html"));
        assert!(!is_listing_page("/helpdesk/index.html", "view-tickets.html"));
    }

    #[test]
    fn pulse_draw_rule() {
        assert!(!should_pulse(0.0, 0.05));
        assert!(!should_pulse(0.94, 0.05));
        assert!(should_pulse(0.951, 0.05));
        assert!(should_pulse(0.999, 0.05));
        assert!(!should_pulse(0.999, 0.0));
    }

    #[test]
    fn pulse_rate_roughly_matches_probability() {
        // draws deterministas repartidos en [0, 1)
        let hits = (0..10_000)
            .map(|i| i as f64 / 10_000.0)
            .filter(|draw| should_pulse(*draw, 0.05))
            .count();
        assert!((450..=550).contains(&hits), "{}", hits);
    }
}
