//! Session lifecycle: open, view, list, and drop builder sessions.

use std::sync::Arc;

use serde::Serialize;
use vtm_builder_domain::SheetView;

use crate::infrastructure::ports::{ClockPort, RandomPort, SessionError};
use crate::stores::{Session, SessionId, SessionStore, SessionSummary};

/// A session id with its current sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub id: SessionId,
    pub sheet: SheetView,
}

/// Container for session use cases.
pub struct SessionUseCases {
    sessions: Arc<SessionStore>,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
}

impl SessionUseCases {
    pub fn new(
        sessions: Arc<SessionStore>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            sessions,
            clock,
            random,
        }
    }

    /// Open a session holding a fresh character.
    pub fn create(&self) -> SessionSnapshot {
        let id = SessionId::from_uuid(self.random.gen_uuid());
        let session = Session::new(id, self.clock.now());
        let sheet = session.state.sheet();
        self.sessions.insert(session);

        tracing::info!(session_id = %id, open_sessions = self.sessions.len(), "Session created");
        SessionSnapshot { id, sheet }
    }

    pub fn get(&self, id: SessionId) -> Result<SessionSnapshot, SessionError> {
        let session = self.sessions.get(id).ok_or(SessionError::NotFound(id))?;
        Ok(SessionSnapshot {
            id,
            sheet: session.state.sheet(),
        })
    }

    pub fn list(&self) -> Vec<SessionSummary> {
        self.sessions.summaries()
    }

    pub fn delete(&self, id: SessionId) -> Result<(), SessionError> {
        self.sessions
            .remove(id)
            .ok_or(SessionError::NotFound(id))?;
        tracing::info!(session_id = %id, "Session dropped");
        Ok(())
    }
}
