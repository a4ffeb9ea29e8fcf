// ============================================================================
// CHARACTER COUNTER - Contador de caracteres de la descripción
// ============================================================================

use web_sys::{Element, HtmlTextAreaElement};

use crate::dom::{dispatch, get_element_by_id, get_typed_element, on_input, set_style, set_text_content};
use crate::error::Result;
use crate::utils::{CHAR_COUNT_ID, DESCRIPTION_ID, ERROR_COLOR, OK_COLOR, WARNING_COLOR};

/// Color según longitud: <10 error, <50 aviso, resto ok
pub fn counter_color(count: usize) -> &'static str {
    if count < 10 {
        ERROR_COLOR
    } else if count < 50 {
        WARNING_COLOR
    } else {
        OK_COLOR
    }
}

pub struct CharacterCounter {
    textarea: HtmlTextAreaElement,
    label: Element,
}

impl CharacterCounter {
    /// None si falta el textarea o la etiqueta
    pub fn bind() -> Option<Self> {
        Some(Self {
            textarea: get_typed_element::<HtmlTextAreaElement>(DESCRIPTION_ID)?,
            label: get_element_by_id(CHAR_COUNT_ID)?,
        })
    }

    pub fn attach(self) -> Result<()> {
        let textarea = self.textarea.clone();
        let label = self.label.clone();
        on_input(&self.textarea, move |_| {
            let count = textarea.value().chars().count();
            set_text_content(&label, &count.to_string());
            if let Err(e) = set_style(&label, "color", counter_color(count)) {
                log::warn!("⚠️ [COUNTER] {}", e);
            }
        })?;

        // conteo inicial
        dispatch(&self.textarea, "input")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_tiers() {
        assert_eq!(counter_color(0), ERROR_COLOR);
        assert_eq!(counter_color(9), ERROR_COLOR);
        assert_eq!(counter_color(10), WARNING_COLOR);
        assert_eq!(counter_color(49), WARNING_COLOR);
        assert_eq!(counter_color(50), OK_COLOR);
    }
}
