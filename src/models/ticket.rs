/// Campos obligatorios del formulario de ticket, en orden de validación
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TicketField {
    Name,
    Email,
    Subject,
    Description,
}

impl TicketField {
    pub const ALL: [TicketField; 4] = [
        TicketField::Name,
        TicketField::Email,
        TicketField::Subject,
        TicketField::Description,
    ];

    /// ID del elemento dentro de #ticketForm
    pub fn element_id(&self) -> &'static str {
        match self {
            TicketField::Name => "name",
            TicketField::Email => "email",
            TicketField::Subject => "subject",
            TicketField::Description => "description",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            TicketField::Name => "Please enter your name",
            TicketField::Email => "Please enter a valid email address",
            TicketField::Subject => "Please enter a subject",
            TicketField::Description => {
                "Please provide a detailed description (minimum 10 characters)"
            }
        }
    }
}

/// ID sintético a partir del timestamp en milisegundos
pub fn ticket_id(timestamp_millis: i64) -> String {
    format!("TICKET-{}", timestamp_millis)
}

/// Estados que puede mostrar un badge de la tabla de tickets
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "open" => Some(TicketStatus::Open),
            "progress" => Some(TicketStatus::InProgress),
            "resolved" => Some(TicketStatus::Resolved),
            "closed" => Some(TicketStatus::Closed),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "progress",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            TicketStatus::Open => "badge-success",
            TicketStatus::InProgress => "badge-warning",
            TicketStatus::Resolved => "badge-info",
            TicketStatus::Closed => "badge-secondary",
        }
    }

    pub fn icon_class(&self) -> String {
        format!("fas fa-circle status-{}", self.key())
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_checked_in_form_order() {
        let ids: Vec<_> = TicketField::ALL.iter().map(TicketField::element_id).collect();
        assert_eq!(ids, ["name", "email", "subject", "description"]);
    }

    #[test]
    fn ticket_id_embeds_timestamp() {
        assert_eq!(ticket_id(1_700_000_000_123), "TICKET-1700000000123");
    }

    #[test]
    fn status_keys_map_to_badges() {
        let status = TicketStatus::parse("progress").expect("known status");
        assert_eq!(status, TicketStatus::InProgress);
        assert_eq!(status.badge_class(), "badge-warning");
        assert_eq!(status.icon_class(), "fas fa-circle status-progress");
        assert_eq!(status.label(), "In Progress");
        assert_eq!(TicketStatus::parse("Closed"), None);
        assert_eq!(TicketStatus::parse("archived"), None);
    }
}
