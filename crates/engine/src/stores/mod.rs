//! In-memory state storage.
//!
//! - `SessionStore` - one character per builder session

pub mod session;

pub use session::{Session, SessionId, SessionStore, SessionSummary};
