#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Success,
    Danger,
    Info,
}

impl Severity {
    /// Desconocido -> Info
    pub fn parse(kind: &str) -> Self {
        match kind {
            "success" => Severity::Success,
            "danger" => Severity::Danger,
            _ => Severity::Info,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "alert alert-success",
            Severity::Danger => "alert alert-danger",
            Severity::Info => "alert alert-info",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    /// ID del elemento en el DOM
    pub fn element_id(&self) -> String {
        element_id(self.id)
    }
}

pub fn element_id(id: u64) -> String {
    format!("alert-{}", id)
}
