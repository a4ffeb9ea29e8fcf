// ============================================================================
// ANIMATIONS - Keyframes + hover de cards + pulse de botones
// ============================================================================

use web_sys::{Element, MouseEvent};

use crate::dom::{
    create_element, has_class, on_click, on_hover, play_animation, query_selector_all,
    require_document, set_style, set_text_content,
};
use crate::error::{HelpdeskError, Result};
use crate::utils::{BUTTON_SELECTOR, CARD_SELECTOR, PRIMARY_BUTTON_CLASS};

const KEYFRAMES_ID: &str = "helport-keyframes";

const KEYFRAMES_CSS: &str = r#"
@keyframes slideIn {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}

@keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}

@keyframes pulse {
    0% { transform: scale(1); }
    50% { transform: scale(1.05); }
    100% { transform: scale(1); }
}
"#;

/// Inyectar keyframes en <head> (solo una vez)
pub fn inject_keyframes() -> Result<()> {
    let document = require_document()?;
    if document.get_element_by_id(KEYFRAMES_ID).is_some() {
        return Ok(());
    }
    let head = document
        .head()
        .ok_or_else(|| HelpdeskError::MissingElement("head".to_string()))?;
    let style = create_element("style")?;
    style.set_id(KEYFRAMES_ID);
    set_text_content(&style, KEYFRAMES_CSS);
    head.append_child(&style)?;
    Ok(())
}

/// Hover en .card: sube 5px
pub fn bind_card_hover() -> Result<usize> {
    let cards = query_selector_all(CARD_SELECTOR)?;
    for card in &cards {
        let enter = card.clone();
        let leave = card.clone();
        on_hover(
            card,
            move |_: MouseEvent| nudge(&enter, "translateY(-5px)"),
            move |_: MouseEvent| nudge(&leave, "translateY(0)"),
        )?;
    }
    Ok(cards.len())
}

fn nudge(element: &Element, transform: &str) {
    let _ = set_style(element, "transform", transform);
}

/// Click en .btn-primary: pulse de 300ms
pub fn bind_button_pulse() -> Result<usize> {
    let buttons = query_selector_all(BUTTON_SELECTOR)?;
    for button in &buttons {
        let target = button.clone();
        on_click(button, move |_| {
            if has_class(&target, PRIMARY_BUTTON_CLASS) {
                play_animation(&target, "pulse 0.3s ease", 300);
            }
        })?;
    }
    Ok(buttons.len())
}
