// ============================================================================
// ERRORES - Errores internos (DOM, storage) convertibles a JsValue
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum HelpdeskError {
    #[error("window no disponible")]
    NoWindow,

    #[error("document no disponible")]
    NoDocument,

    #[error("elemento no encontrado: {0}")]
    MissingElement(String),

    #[error("el elemento {id} no es un {expected}")]
    WrongElementType { id: String, expected: &'static str },

    #[error("localStorage: {0}")]
    Storage(String),

    #[error("estado de ticket desconocido: {0}")]
    UnknownStatus(String),

    #[error("error DOM: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, HelpdeskError>;

impl From<JsValue> for HelpdeskError {
    fn from(value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        HelpdeskError::Dom(message)
    }
}

impl From<HelpdeskError> for JsValue {
    fn from(error: HelpdeskError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_piece() {
        assert_eq!(
            HelpdeskError::MissingElement("#fileList".to_string()).to_string(),
            "elemento no encontrado: #fileList"
        );
        assert_eq!(
            HelpdeskError::WrongElementType {
                id: "fileInput".to_string(),
                expected: "HtmlInputElement",
            }
            .to_string(),
            "el elemento fileInput no es un HtmlInputElement"
        );
    }
}
