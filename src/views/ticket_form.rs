// ============================================================================
// TICKET FORM - Submit con validación + reset
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::config::CONFIG;
use crate::dom::{get_typed_element, navigate_after, on_submit, set_style};
use crate::models::ticket::ticket_id;
use crate::models::{Severity, TicketField};
use crate::services::{validate, TicketFields, ValidationReport};
use crate::state::AppState;
use crate::utils::{ERROR_COLOR, TICKET_FORM_ID};
use crate::views::file_upload::clear_file_list;
use crate::views::notification_banner::notify;

/// Valor de un input o textarea
fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}

pub struct TicketForm {
    form: HtmlFormElement,
    fields: Vec<(TicketField, Element)>,
}

impl TicketForm {
    /// None si falta el formulario o alguno de sus cuatro campos
    pub fn bind() -> Option<Self> {
        let form = get_typed_element::<HtmlFormElement>(TICKET_FORM_ID)?;
        let mut fields = Vec::with_capacity(TicketField::ALL.len());
        for field in TicketField::ALL {
            let selector = format!("#{}", field.element_id());
            match form.query_selector(&selector).ok().flatten() {
                Some(element) => fields.push((field, element)),
                None => {
                    log::debug!("🔍 [FORM] Falta el campo {}", selector);
                    return None;
                }
            }
        }
        Some(Self { form, fields })
    }

    fn read(&self) -> TicketFields {
        let mut values = TicketFields::default();
        for (field, element) in &self.fields {
            let value = field_value(element);
            match field {
                TicketField::Name => values.name = value,
                TicketField::Email => values.email = value,
                TicketField::Subject => values.subject = value,
                TicketField::Description => values.description = value,
            }
        }
        values
    }

    fn highlight(&self, report: &ValidationReport) {
        for (field, element) in &self.fields {
            let color = if report.is_field_valid(*field) { "" } else { ERROR_COLOR };
            if let Err(e) = set_style(element, "border-color", color) {
                log::warn!("⚠️ [FORM] {}", e);
            }
        }
    }

    pub fn attach(self, state: AppState) -> crate::error::Result<()> {
        let form = self.form.clone();
        on_submit(&form, move |e: Event| {
            e.prevent_default();

            let report = validate(&self.read());
            self.highlight(&report);

            match report.message() {
                None => {
                    let id = ticket_id(chrono::Utc::now().timestamp_millis());
                    log::info!("🎫 [FORM] Ticket {} enviado", id);
                    notify(
                        &state.notifications,
                        &format!("🎉 Ticket submitted successfully! Your ticket ID is {}", id),
                        Severity::Success,
                    );
                    navigate_after(
                        CONFIG.redirect_config.submit_delay_ms,
                        CONFIG.pages.listing.clone(),
                    );
                }
                Some(message) => {
                    log::info!("⚠️ [FORM] Validación fallida: {:?}", report.failures());
                    notify(&state.notifications, &format!("❌ {}", message), Severity::Danger);
                }
            }
        })
    }
}

/// Resetear formulario + adjuntos. false si no hay formulario en la página
pub fn reset_form(state: &AppState) -> bool {
    let Some(form) = get_typed_element::<HtmlFormElement>(TICKET_FORM_ID) else {
        return false;
    };
    form.reset();
    clear_file_list(&state.staging);
    notify(&state.notifications, "🔄 Form has been reset", Severity::Info);
    true
}
