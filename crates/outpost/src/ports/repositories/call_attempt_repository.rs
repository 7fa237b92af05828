//! CallAttempt Repository Port
//!
//! Append-only persistence for the outbound call audit trail.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, CallAttempt, PendingCallAttempt};

/// Default page size for `list_recent`
pub const DEFAULT_RECENT_LIMIT: i64 = 100;

/// Audit store for outbound call attempts
///
/// Records are never updated or deleted through this interface.
#[async_trait]
pub trait CallAttemptRepository: Send + Sync {
    /// Persist a pending attempt, assigning the next identity.
    ///
    /// Identities are unique and increase monotonically.
    async fn append(&self, attempt: PendingCallAttempt) -> Result<CallAttempt, DomainError>;

    /// Most recent attempts first (`requested_at` desc, then `id` desc)
    async fn list_recent(&self, limit: i64) -> Result<Vec<CallAttempt>, DomainError>;

    /// Exact lookup by identity
    async fn find_by_id(&self, id: i64) -> Result<Option<CallAttempt>, DomainError>;
}
