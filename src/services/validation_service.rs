// ============================================================================
// VALIDATION SERVICE - Validación del formulario de ticket
// ============================================================================

use crate::models::TicketField;

pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// Valores crudos de los cuatro campos
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TicketFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub description: String,
}

impl TicketFields {
    pub fn value(&self, field: TicketField) -> &str {
        match field {
            TicketField::Name => &self.name,
            TicketField::Email => &self.email,
            TicketField::Subject => &self.subject,
            TicketField::Description => &self.description,
        }
    }
}

/// Resultado: campos que fallan, en orden de comprobación
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationReport {
    failures: Vec<TicketField>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn is_field_valid(&self, field: TicketField) -> bool {
        !self.failures.contains(&field)
    }

    pub fn failures(&self) -> &[TicketField] {
        &self.failures
    }

    /// Mensaje mostrado: el del ÚLTIMO campo que falla
    pub fn message(&self) -> Option<&'static str> {
        self.failures.last().map(TicketField::error_message)
    }
}

/// Espacio en blanco tal como lo entienden `\s` y `trim()` del navegador.
/// No coincide con `char::is_whitespace`: incluye U+FEFF y excluye U+0085.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Regla de cada campo
pub fn is_field_valid(field: TicketField, value: &str) -> bool {
    let trimmed = value.trim_matches(is_js_whitespace);
    match field {
        TicketField::Name | TicketField::Subject => !trimmed.is_empty(),
        // el patrón se aplica al valor sin recortar
        TicketField::Email => !trimmed.is_empty() && is_valid_email(value),
        TicketField::Description => trimmed.chars().count() >= MIN_DESCRIPTION_CHARS,
    }
}

pub fn validate(fields: &TicketFields) -> ValidationReport {
    let failures = TicketField::ALL
        .iter()
        .copied()
        .filter(|field| !is_field_valid(*field, fields.value(*field)))
        .collect();
    ValidationReport { failures }
}

/// Equivale a /^[^\s@]+@[^\s@]+\.[^\s@]+$/
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_js_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_fields() -> TicketFields {
        TicketFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Printer".to_string(),
            description: "Paper jam on floor 3".to_string(),
        }
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email(" a@b.co"));
    }

    #[test]
    fn description_boundary_is_ten_trimmed_chars() {
        assert!(!is_field_valid(TicketField::Description, "123456789"));
        assert!(is_field_valid(TicketField::Description, "1234567890"));
        assert!(!is_field_valid(TicketField::Description, "   123456789   "));
        assert!(is_field_valid(TicketField::Description, "ñandú ñandú"));
    }

    #[test]
    fn whitespace_only_name_and_subject_fail() {
        assert!(!is_field_valid(TicketField::Name, "   "));
        assert!(!is_field_valid(TicketField::Subject, "\t\n"));
        assert!(is_field_valid(TicketField::Subject, " x "));
    }

    #[test]
    fn all_valid_passes() {
        let report = validate(&valid_fields());
        assert!(report.is_valid());
        assert_eq!(report.message(), None);
    }

    #[test]
    fn surfaced_message_is_last_failure() {
        let fields = TicketFields {
            name: String::new(),
            description: "short".to_string(),
            ..valid_fields()
        };
        let report = validate(&fields);
        assert!(!report.is_valid());
        assert_eq!(report.failures(), &[TicketField::Name, TicketField::Description]);
        assert_eq!(
            report.message(),
            Some("Please provide a detailed description (minimum 10 characters)")
        );
        assert!(!report.is_field_valid(TicketField::Name));
        assert!(report.is_field_valid(TicketField::Email));
    }

    #[test]
    fn single_failure_reports_its_own_message() {
        let fields = TicketFields {
            email: "not-an-email".to_string(),
            ..valid_fields()
        };
        assert_eq!(validate(&fields).message(), Some("Please enter a valid email address"));
    }

    #[test]
    fn whitespace_follows_browser_rules() {
        // U+FEFF cuenta como espacio, U+0085 no
        assert!(!is_valid_email("a\u{FEFF}@b.co"));
        assert!(is_valid_email("a\u{85}@b.co"));
        assert!(!is_valid_email("a@b\u{3000}.co"));

        assert!(!is_field_valid(TicketField::Name, "\u{FEFF}"));
        assert!(!is_field_valid(TicketField::Subject, "\u{A0}\u{2007}"));
        assert!(is_field_valid(TicketField::Name, "\u{85}"));
        assert!(!is_field_valid(TicketField::Description, "\u{FEFF}123456789\u{FEFF}"));
    }
}
