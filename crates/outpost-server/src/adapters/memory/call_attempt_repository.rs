use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use outpost::{CallAttempt, CallAttemptRepository, DomainError, PendingCallAttempt};

/// Vec-backed audit store with monotonic ids
#[derive(Default)]
pub struct MemoryCallAttemptRepository {
    attempts: RwLock<Vec<CallAttempt>>,
    fail_writes: AtomicBool,
}

impl MemoryCallAttemptRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose `append` always errors
    pub fn failing() -> Self {
        let repo = Self::default();
        repo.fail_writes.store(true, Ordering::SeqCst);
        repo
    }

    pub async fn len(&self) -> usize {
        self.attempts.read().await.len()
    }

    pub async fn all(&self) -> Vec<CallAttempt> {
        self.attempts.read().await.clone()
    }
}

#[async_trait]
impl CallAttemptRepository for MemoryCallAttemptRepository {
    async fn append(&self, attempt: PendingCallAttempt) -> Result<CallAttempt, DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Repository("audit store unavailable".to_string()));
        }

        let mut attempts = self.attempts.write().await;
        let id = attempts.last().map_or(1, |last| last.id + 1);
        let committed = CallAttempt::from_pending(id, attempt);
        attempts.push(committed.clone());
        Ok(committed)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<CallAttempt>, DomainError> {
        let mut attempts = self.attempts.read().await.clone();
        attempts.sort_by(|a, b| {
            b.requested_at
                .cmp(&a.requested_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        attempts.truncate(usize::try_from(limit.max(0)).unwrap_or(usize::MAX));
        Ok(attempts)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CallAttempt>, DomainError> {
        Ok(self
            .attempts
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration as ChronoDuration, Utc};
    use outpost::{HttpMethod, Provider};
    use std::time::Duration;

    fn pending(offset_secs: i64) -> PendingCallAttempt {
        let mut p = PendingCallAttempt::dispatched(
            Provider::ExchangeRate,
            HttpMethod::Get,
            "http://rates.test/USD",
            None,
        )
        .succeeded(200, "{}".to_string(), Duration::from_millis(3));
        p.requested_at = Utc::now() + ChronoDuration::seconds(offset_secs);
        p
    }

    #[tokio::test]
    async fn test_ids_increase_monotonically() {
        let repo = MemoryCallAttemptRepository::new();
        let a = repo.append(pending(0)).await.unwrap();
        let b = repo.append(pending(0)).await.unwrap();
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn test_list_recent_orders_newest_first_with_id_tiebreak() {
        let repo = MemoryCallAttemptRepository::new();
        let same = pending(0);
        let first = repo.append(same.clone()).await.unwrap();
        let second = repo.append(same).await.unwrap();
        let older = repo.append(pending(-60)).await.unwrap();

        let listed = repo.list_recent(10).await.unwrap();
        let ids: Vec<i64> = listed.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![second.id, first.id, older.id]);
    }

    #[tokio::test]
    async fn test_list_recent_respects_limit() {
        let repo = MemoryCallAttemptRepository::new();
        for _ in 0..5 {
            repo.append(pending(0)).await.unwrap();
        }
        assert_eq!(repo.list_recent(2).await.unwrap().len(), 2);
        assert!(repo.list_recent(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failing_store_rejects_appends() {
        let repo = MemoryCallAttemptRepository::failing();
        let err = repo.append(pending(0)).await.unwrap_err();
        assert!(matches!(err, DomainError::Repository(_)));
        assert_eq!(repo.len().await, 0);
    }
}
