//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Sheet storage (could swap files -> a database)
//! - Clock/Random (for testing)

mod error;
mod store;
mod testing;

pub use error::{SessionError, StoreError};
pub use store::SheetStorePort;
pub use testing::{ClockPort, RandomPort};

#[cfg(test)]
pub use store::MockSheetStorePort;
#[cfg(test)]
pub use testing::{MockClockPort, MockRandomPort};
