pub mod animations;
pub mod character_counter;
pub mod file_upload;
pub mod notification_banner;
pub mod status_simulation;
pub mod ticket_form;

pub use character_counter::CharacterCounter;
pub use file_upload::FileUpload;
pub use notification_banner::notify;
pub use status_simulation::{start_if_listing, update_ticket_status};
pub use ticket_form::{reset_form, TicketForm};
