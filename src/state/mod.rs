// ============================================================================
// STATE MODULE - State Management con Rc<RefCell>
// ============================================================================

pub mod staging_state;
pub mod session_state;
pub mod notification_state;
pub mod app_state;

pub use staging_state::*;
pub use session_state::*;
pub use notification_state::*;
pub use app_state::*;
