//! State Management
//!
//! Browser session store and global portal state.

pub mod global;
pub mod session;

pub use global::{provide_portal_state, use_portal, BookingDraft, BrowserHost, Portal, PortalState};
pub use session::LocalStorageStore;
