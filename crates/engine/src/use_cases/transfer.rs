//! Sheet export, import, and named save/load through the sheet store.

use std::sync::Arc;

use serde::Serialize;
use vtm_builder_domain::{ImportSummary, SheetView};

use crate::infrastructure::ports::{ClockPort, SessionError, SheetStorePort};
use crate::stores::{SessionId, SessionStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOutcome {
    pub imported: ImportSummary,
    pub sheet: SheetView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSheet {
    pub name: String,
}

pub struct TransferUseCases {
    sessions: Arc<SessionStore>,
    store: Arc<dyn SheetStorePort>,
    clock: Arc<dyn ClockPort>,
}

impl TransferUseCases {
    pub fn new(
        sessions: Arc<SessionStore>,
        store: Arc<dyn SheetStorePort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            sessions,
            store,
            clock,
        }
    }

    /// The session's character as a pretty-printed sheet document.
    pub fn export(&self, session_id: SessionId) -> Result<String, SessionError> {
        let session = self
            .sessions
            .get(session_id)
            .ok_or(SessionError::NotFound(session_id))?;
        let document = session.state.export_document()?;
        tracing::info!(session_id = %session_id, bytes = document.len(), "Sheet exported");
        Ok(document)
    }

    /// Replace all or half of the session's character from a document.
    /// A rejected document leaves the session unchanged.
    pub fn import(&self, session_id: SessionId, raw: &str) -> Result<ImportOutcome, SessionError> {
        let now = self.clock.now();
        let result = self
            .sessions
            .update(session_id, |session| -> Result<ImportOutcome, SessionError> {
                let imported = session.state.import_document(raw)?;
                session.updated_at = now;
                Ok(ImportOutcome {
                    imported,
                    sheet: session.state.sheet(),
                })
            })
            .ok_or(SessionError::NotFound(session_id))?;

        match &result {
            Ok(outcome) => tracing::info!(
                session_id = %session_id,
                builder = outcome.imported.builder,
                freebies = outcome.imported.freebies,
                refunded = outcome.imported.refunded,
                "Sheet imported"
            ),
            Err(e) => tracing::warn!(session_id = %session_id, error = %e, "Sheet import rejected"),
        }
        result
    }

    /// Write the session's sheet to the store. Without a name, the
    /// character's name is used.
    pub async fn save(
        &self,
        session_id: SessionId,
        name: Option<String>,
    ) -> Result<SavedSheet, SessionError> {
        let session = self
            .sessions
            .get(session_id)
            .ok_or(SessionError::NotFound(session_id))?;
        let document = session.state.export_document()?;
        let requested = name.unwrap_or_else(|| session.state.builder.concept.name.clone());

        let name = self.store.save(&requested, &document).await?;
        tracing::info!(session_id = %session_id, sheet = %name, "Sheet saved");
        Ok(SavedSheet { name })
    }

    /// Import a stored sheet into the session.
    pub async fn load(
        &self,
        session_id: SessionId,
        name: &str,
    ) -> Result<ImportOutcome, SessionError> {
        if self.sessions.get(session_id).is_none() {
            return Err(SessionError::NotFound(session_id));
        }
        let document = self.store.load(name).await?;
        tracing::debug!(session_id = %session_id, sheet = %name, "Sheet loaded from store");
        self.import(session_id, &document)
    }

    pub async fn list_saved(&self) -> Result<Vec<String>, SessionError> {
        Ok(self.store.list().await?)
    }
}
