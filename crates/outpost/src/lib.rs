//! Outpost Domain Library
//!
//! Core domain types and interfaces for the Outpost outbound API gateway.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (CallAttempt, WeatherResult, ExchangeRateResult, Product)
//!   - `value_objects/`: Immutable value types (Provider, HttpMethod, Coordinates, CurrencyCode)
//!   - `decoders/`: Pure provider payload decoders
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Audit store and catalog interfaces
//!   - `services/`: Outbound HTTP transport interface
//!
//! # Usage
//!
//! ```rust,ignore
//! use outpost::domain::decoders::decode_weather;
//! use outpost::ports::{CallAttemptRepository, HttpTransport};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    CallAttempt, Coordinates, CurrencyCode, CurrentConditions, DecodeError, DomainError,
    ExchangeRateResult, GatewayError, HttpMethod, PendingCallAttempt, Product, ProductDraft,
    Provider, WeatherResult,
};
pub use ports::{
    // Repositories
    CallAttemptRepository,
    // Transport
    HttpTransport,
    OutboundRequest,
    OutboundResponse,
    ProductRepository,
    TransportFailure,
    DEFAULT_RECENT_LIMIT,
};
