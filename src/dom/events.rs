// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Listeners en elementos del DOM: cuando el elemento se destruye (p.ej. al
//   re-renderizar la lista de archivos) el navegador limpia sus listeners, así
//   que closure.forget() es seguro.
// - Listeners globales (window/document): registrarlos UNA SOLA VEZ al inicio.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, EventTarget, MouseEvent};

use crate::error::Result;

/// Registrar un listener genérico y mantener vivo el closure
pub fn on_event<E, F>(target: &EventTarget, event_type: &str, handler: F) -> Result<()>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Click
pub fn on_click<F>(target: &EventTarget, handler: F) -> Result<()>
where
    F: FnMut(MouseEvent) + 'static,
{
    on_event(target, "click", handler)
}

/// Input (cada tecla en inputs/textarea)
pub fn on_input<F>(target: &EventTarget, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    on_event(target, "input", handler)
}

/// Change (file picker)
pub fn on_change<F>(target: &EventTarget, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    on_event(target, "change", handler)
}

/// Submit de formulario
pub fn on_submit<F>(target: &EventTarget, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    on_event(target, "submit", handler)
}

/// Drag over / leave / drop comparten firma
pub fn on_drag<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<()>
where
    F: FnMut(DragEvent) + 'static,
{
    on_event(target, event_type, handler)
}

/// Hover: enter y leave
pub fn on_hover<FE, FL>(target: &EventTarget, on_enter: FE, on_leave: FL) -> Result<()>
where
    FE: FnMut(MouseEvent) + 'static,
    FL: FnMut(MouseEvent) + 'static,
{
    on_event(target, "mouseenter", on_enter)?;
    on_event(target, "mouseleave", on_leave)
}

/// Disparar un evento sintético (p.ej. "input" para el conteo inicial)
pub fn dispatch(target: &EventTarget, event_type: &str) -> Result<()> {
    let event = Event::new(event_type)?;
    target.dispatch_event(&event)?;
    Ok(())
}
