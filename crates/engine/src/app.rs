//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::{SystemClock, SystemRandom},
    ports::{ClockPort, RandomPort, SheetStorePort},
};
use crate::stores::SessionStore;
use crate::use_cases;

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub sessions: Arc<SessionStore>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub session: use_cases::SessionUseCases,
    pub edit: use_cases::EditCharacter,
    pub transfer: use_cases::TransferUseCases,
    pub dice: use_cases::RollDice,
}

impl App {
    /// Wire the use cases against system time and randomness.
    pub fn new(store: Arc<dyn SheetStorePort>) -> Self {
        Self::with_ports(
            store,
            Arc::new(SystemClock::new()),
            Arc::new(SystemRandom::new()),
        )
    }

    pub fn with_ports(
        store: Arc<dyn SheetStorePort>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let sessions = Arc::new(SessionStore::new());

        let use_cases = UseCases {
            session: use_cases::SessionUseCases::new(
                sessions.clone(),
                clock.clone(),
                random.clone(),
            ),
            edit: use_cases::EditCharacter::new(sessions.clone(), clock.clone()),
            transfer: use_cases::TransferUseCases::new(sessions.clone(), store, clock),
            dice: use_cases::RollDice::new(random),
        };

        Self {
            sessions,
            use_cases,
        }
    }
}
