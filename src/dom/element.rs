// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::{HelpdeskError, Result};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener document o error
pub fn require_document() -> Result<Document> {
    document().ok_or(HelpdeskError::NoDocument)
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Obtener elemento por ID con el tipo concreto (None si falta o no es del tipo)
pub fn get_typed_element<T: JsCast>(id: &str) -> Option<T> {
    get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element> {
    Ok(require_document()?.create_element(tag)?)
}

/// Establecer class name (reemplaza todas las clases)
pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

/// Verificar si tiene clase
pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Vaciar contenido
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<()> {
    parent.append_child(child)?;
    Ok(())
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<()> {
    Ok(element.set_attribute(name, value)?)
}

/// Establecer una propiedad CSS inline (valor vacío = quitarla)
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<()> {
    let html = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| HelpdeskError::Dom("Element is not an HtmlElement".to_string()))?;
    if value.is_empty() {
        html.style().remove_property(property)?;
    } else {
        html.style().set_property(property, value)?;
    }
    Ok(())
}

/// Aplicar varias propiedades CSS de una vez
pub fn set_styles(element: &Element, styles: &[(&str, &str)]) -> Result<()> {
    for (property, value) in styles {
        set_style(element, property, value)?;
    }
    Ok(())
}

/// Query selector all sobre el document, ya convertido a Element
pub fn query_selector_all(selector: &str) -> Result<Vec<Element>> {
    let nodes = require_document()?.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Path actual (window.location.pathname)
pub fn current_path() -> Option<String> {
    window()?.location().pathname().ok()
}

/// Navegar a otra página
pub fn navigate_to(href: &str) -> Result<()> {
    let win = window().ok_or(HelpdeskError::NoWindow)?;
    win.location().set_href(href)?;
    Ok(())
}

/// Navegar después de un delay (el timer no se cancela nunca)
pub fn navigate_after(delay_ms: u32, href: String) {
    Timeout::new(delay_ms, move || {
        log::info!("➡️ [NAV] Navegando a {}", href);
        if let Err(e) = navigate_to(&href) {
            log::error!("❌ [NAV] Error navegando a {}: {}", href, e);
        }
    })
    .forget();
}

/// Reproducir una animación CSS y limpiarla al terminar
pub fn play_animation(element: &Element, animation: &str, duration_ms: u32) {
    if let Err(e) = set_style(element, "animation", animation) {
        log::warn!("⚠️ [ANIM] No se pudo aplicar animación: {}", e);
        return;
    }
    let element = element.clone();
    Timeout::new(duration_ms, move || {
        let _ = set_style(&element, "animation", "");
    })
    .forget();
}
