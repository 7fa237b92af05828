//! Reqwest HTTP Transport
//!
//! Sends outbound provider requests over a pooled reqwest client.

use async_trait::async_trait;
use reqwest::{header, Client, Method};
use std::error::Error as _;
use std::time::Duration;

use outpost::{HttpMethod, HttpTransport, OutboundRequest, OutboundResponse, TransportFailure};

/// reqwest implementation of HttpTransport
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &OutboundRequest) -> Result<OutboundResponse, TransportFailure> {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        if let Some(body) = &request.body {
            builder = builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportFailure::unreachable(describe(&e)))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| TransportFailure {
            message: describe(&e),
            status: Some(status),
        })?;

        Ok(OutboundResponse { status, body })
    }
}

/// reqwest's top-level message hides the cause (refused, DNS, ...); append the chain.
fn describe(err: &reqwest::Error) -> String {
    let kind = if err.is_timeout() {
        "request timed out"
    } else if err.is_connect() {
        "connection failed"
    } else if err.is_body() || err.is_decode() {
        "failed to read response body"
    } else {
        "request failed"
    };

    let mut message = format!("{kind}: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn transport() -> ReqwestTransport {
        ReqwestTransport::new(Duration::from_secs(5), "outpost-test").unwrap()
    }

    #[tokio::test]
    async fn test_returns_status_and_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/forecast").query_param("latitude", "1");
            then.status(200).body(r#"{"ok":true}"#);
        });

        let response = transport()
            .send(&OutboundRequest::get(server.url("/forecast?latitude=1")))
            .await
            .unwrap();

        mock.assert();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"ok":true}"#);
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn test_non_success_status_is_not_a_transport_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/latest/USD");
            then.status(503).body("maintenance");
        });

        let response = transport()
            .send(&OutboundRequest::get(server.url("/latest/USD")))
            .await
            .unwrap();

        assert_eq!(response.status, 503);
        assert_eq!(response.body, "maintenance");
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_sends_body_with_json_content_type() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/echo")
                .header("content-type", "application/json")
                .body(r#"{"a":1}"#);
            then.status(201).body("created");
        });

        let request = OutboundRequest {
            method: HttpMethod::Post,
            url: server.url("/echo"),
            body: Some(r#"{"a":1}"#.to_string()),
        };
        let response = transport().send(&request).await.unwrap();

        mock.assert();
        assert_eq!(response.status, 201);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_has_no_status() {
        // Port 9 (discard) is closed on test hosts.
        let failure = transport()
            .send(&OutboundRequest::get("http://127.0.0.1:9/forecast"))
            .await
            .unwrap_err();

        assert_eq!(failure.status, None);
        assert!(!failure.message.is_empty());
    }
}
