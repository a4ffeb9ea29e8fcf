pub mod attachment;
pub mod auth;
pub mod notification;
pub mod ticket;

pub use attachment::{format_file_size, Attachment, FileKind};
pub use auth::{Role, SessionData};
pub use notification::{Notification, Severity};
pub use ticket::{TicketField, TicketStatus};
