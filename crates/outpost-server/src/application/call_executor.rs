//! Call Executor
//!
//! Runs one outbound request and commits exactly one audit record for it,
//! whatever the outcome.

use std::sync::Arc;
use std::time::Instant;

use outpost::{
    CallAttemptRepository, DecodeError, GatewayError, HttpTransport, OutboundRequest,
    PendingCallAttempt, Provider,
};

/// Times, classifies and audits outbound provider calls
pub struct CallExecutor {
    transport: Arc<dyn HttpTransport>,
    audit: Arc<dyn CallAttemptRepository>,
}

impl CallExecutor {
    pub fn new(transport: Arc<dyn HttpTransport>, audit: Arc<dyn CallAttemptRepository>) -> Self {
        Self { transport, audit }
    }

    /// Send `request`, decode a 2xx body with `decode`, and record the attempt.
    ///
    /// No retries. A failed commit turns any outcome into `GatewayError::Store`.
    pub async fn execute<T, F>(
        &self,
        provider: Provider,
        request: OutboundRequest,
        decode: F,
    ) -> Result<T, GatewayError>
    where
        F: FnOnce(&str) -> Result<T, DecodeError>,
    {
        let pending = PendingCallAttempt::dispatched(
            provider,
            request.method,
            request.url.clone(),
            request.body.clone(),
        );

        tracing::info!(%provider, method = %request.method, url = %request.url, "Calling provider");

        let started = Instant::now();
        let sent = self.transport.send(&request).await;
        let elapsed = started.elapsed();

        let (attempt, outcome) = match sent {
            Err(failure) => {
                tracing::error!(%provider, elapsed_ms = elapsed.as_millis() as u64, "Transport failure: {}", failure);
                let attempt = pending.transport_failed(failure.status, &failure.message, elapsed);
                (attempt, Err(GatewayError::Transport(failure.message)))
            }
            Ok(response) if !response.is_success() => {
                tracing::warn!(%provider, status = response.status, elapsed_ms = elapsed.as_millis() as u64, "Provider returned an error status");
                let attempt =
                    pending.upstream_failed(response.status, response.body.clone(), elapsed);
                (
                    attempt,
                    Err(GatewayError::Upstream {
                        status: response.status,
                        body: response.body,
                    }),
                )
            }
            Ok(response) => match decode(&response.body) {
                Ok(value) => {
                    let attempt = pending.succeeded(response.status, response.body, elapsed);
                    (attempt, Ok(value))
                }
                Err(e) => {
                    tracing::warn!(%provider, elapsed_ms = elapsed.as_millis() as u64, "Undecodable provider payload: {}", e);
                    let attempt = pending.decode_failed(response.status, response.body, &e, elapsed);
                    (attempt, Err(GatewayError::Decode(e)))
                }
            },
        };

        let committed = self.audit.append(attempt).await.map_err(|e| {
            tracing::error!(%provider, "Failed to write audit record: {}", e);
            GatewayError::Store(e)
        })?;

        tracing::info!(
            %provider,
            attempt_id = committed.id,
            success = committed.success,
            elapsed_ms = committed.elapsed_ms,
            "Provider call recorded"
        );

        outcome
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::adapters::memory::MemoryCallAttemptRepository;
    use async_trait::async_trait;
    use outpost::{OutboundResponse, TransportFailure};
    use std::collections::HashSet;

    /// Transport that replays one canned outcome
    pub(crate) struct StubTransport {
        outcome: Result<OutboundResponse, TransportFailure>,
    }

    impl StubTransport {
        pub(crate) fn respond(status: u16, body: &str) -> Self {
            Self {
                outcome: Ok(OutboundResponse {
                    status,
                    body: body.to_string(),
                }),
            }
        }

        pub(crate) fn fail(message: &str) -> Self {
            Self {
                outcome: Err(TransportFailure::unreachable(message)),
            }
        }
    }

    #[async_trait]
    impl HttpTransport for StubTransport {
        async fn send(
            &self,
            _request: &OutboundRequest,
        ) -> Result<OutboundResponse, TransportFailure> {
            self.outcome.clone()
        }
    }

    fn executor(
        transport: StubTransport,
        store: Arc<MemoryCallAttemptRepository>,
    ) -> CallExecutor {
        CallExecutor::new(Arc::new(transport), store)
    }

    fn parse_number(raw: &str) -> Result<i32, DecodeError> {
        raw.trim()
            .parse()
            .map_err(|_| DecodeError::wrong_type("$", "integer"))
    }

    fn request() -> OutboundRequest {
        OutboundRequest::get("http://provider.test/latest/USD")
    }

    #[tokio::test]
    async fn test_success_is_audited_once() {
        let store = Arc::new(MemoryCallAttemptRepository::new());
        let value = executor(StubTransport::respond(200, "42"), store.clone())
            .execute(Provider::ExchangeRate, request(), parse_number)
            .await
            .unwrap();

        assert_eq!(value, 42);
        let attempts = store.all().await;
        assert_eq!(attempts.len(), 1);
        let attempt = &attempts[0];
        assert!(attempt.success);
        assert_eq!(attempt.status_code, Some(200));
        assert_eq!(attempt.response_body.as_deref(), Some("42"));
        assert_eq!(attempt.request_url, "http://provider.test/latest/USD");
        assert_eq!(attempt.provider, "Exchange Rate API");
        assert!(attempt.elapsed_ms >= 0);
        assert!(attempt.is_well_formed());
    }

    #[tokio::test]
    async fn test_upstream_error_keeps_status_and_body() {
        let store = Arc::new(MemoryCallAttemptRepository::new());
        let err = executor(StubTransport::respond(503, "down"), store.clone())
            .execute(Provider::ExchangeRate, request(), parse_number)
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::Upstream { status: 503, .. }));
        let attempt = &store.all().await[0];
        assert!(!attempt.success);
        assert_eq!(attempt.status_code, Some(503));
        assert_eq!(attempt.response_body.as_deref(), Some("down"));
        assert!(attempt.error_message.as_deref().unwrap().contains("503"));
    }

    #[tokio::test]
    async fn test_transport_failure_has_no_status() {
        let store = Arc::new(MemoryCallAttemptRepository::new());
        let err = executor(StubTransport::fail("connection refused"), store.clone())
            .execute(Provider::Weather, request(), parse_number)
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::Transport(ref m) if m == "connection refused"));
        let attempt = &store.all().await[0];
        assert!(!attempt.success);
        assert_eq!(attempt.status_code, None);
        assert_eq!(attempt.error_message.as_deref(), Some("connection refused"));
    }

    #[tokio::test]
    async fn test_decode_failure_is_audited_with_status() {
        let store = Arc::new(MemoryCallAttemptRepository::new());
        let err = executor(StubTransport::respond(200, "not a number"), store.clone())
            .execute(Provider::ExchangeRate, request(), parse_number)
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::Decode(_)));
        let attempt = &store.all().await[0];
        assert!(!attempt.success);
        assert_eq!(attempt.status_code, Some(200));
        assert_eq!(attempt.response_body.as_deref(), Some("not a number"));
        assert!(attempt.error_message.as_deref().unwrap().contains("expected integer"));
    }

    #[tokio::test]
    async fn test_store_failure_voids_the_result() {
        let store = Arc::new(MemoryCallAttemptRepository::failing());
        let err = executor(StubTransport::respond(200, "7"), store.clone())
            .execute(Provider::ExchangeRate, request(), parse_number)
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::Store(_)));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_executes_are_audited_independently() {
        const CALLS: usize = 32;
        let store = Arc::new(MemoryCallAttemptRepository::new());
        let executor = Arc::new(executor(StubTransport::respond(200, "42"), store.clone()));

        let mut tasks = tokio::task::JoinSet::new();
        for n in 0..CALLS {
            let executor = executor.clone();
            tasks.spawn(async move {
                let request = OutboundRequest::get(format!("http://provider.test/latest/{n}"));
                executor
                    .execute(Provider::ExchangeRate, request, parse_number)
                    .await
            });
        }
        while let Some(joined) = tasks.join_next().await {
            assert_eq!(joined.unwrap().unwrap(), 42);
        }

        let attempts = store.all().await;
        assert_eq!(attempts.len(), CALLS);
        let ids: HashSet<i64> = attempts.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), CALLS);
        let urls: HashSet<&str> = attempts.iter().map(|a| a.request_url.as_str()).collect();
        assert_eq!(urls.len(), CALLS);
        assert!(attempts.iter().all(|a| a.success && a.is_well_formed()));
    }
}
