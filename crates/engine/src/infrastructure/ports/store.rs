//! Persistence port for exported sheet documents.

use async_trait::async_trait;

use super::error::StoreError;

/// Named storage for sheet documents.
///
/// Documents are opaque strings here; parsing and validation belong to the
/// domain import path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SheetStorePort: Send + Sync {
    /// Store `document` under `name`. Returns the name actually used after
    /// sanitizing.
    async fn save(&self, name: &str, document: &str) -> Result<String, StoreError>;
    async fn load(&self, name: &str) -> Result<String, StoreError>;
    /// Saved sheet names, sorted.
    async fn list(&self) -> Result<Vec<String>, StoreError>;
}
