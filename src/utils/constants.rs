// ============================================================================
// CONSTANTES - Contrato con el HTML y claves de localStorage
// ============================================================================

// IDs de elementos
pub const DESCRIPTION_ID: &str = "description";
pub const CHAR_COUNT_ID: &str = "charCount";
pub const FILE_UPLOAD_ID: &str = "fileUpload";
pub const FILE_INPUT_ID: &str = "fileInput";
pub const FILE_LIST_ID: &str = "fileList";
pub const TICKET_FORM_ID: &str = "ticketForm";

// Selectores
pub const CARD_SELECTOR: &str = ".card";
pub const BUTTON_SELECTOR: &str = ".btn";
pub const PRIMARY_BUTTON_CLASS: &str = "btn-primary";
pub const BADGE_SELECTOR: &str = ".badge";
pub const TICKET_ROW_SELECTOR: &str = "table tbody tr";

// Claves de sesión en localStorage
pub const LOGGED_IN_KEY: &str = "loggedIn";
pub const USERNAME_KEY: &str = "username";
pub const ROLE_KEY: &str = "role";

// Colores
pub const ERROR_COLOR: &str = "#ff8a80";
pub const WARNING_COLOR: &str = "#ffb74d";
pub const OK_COLOR: &str = "#81c784";
pub const DROP_HIGHLIGHT_BORDER: &str = "#00c853";
pub const DROP_HIGHLIGHT_BACKGROUND: &str = "rgba(0, 200, 83, 0.1)";
