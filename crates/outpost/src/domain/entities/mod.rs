//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - CallAttempt: Audit record of an outbound call
//! - WeatherResult / ExchangeRateResult: Decoded provider payloads
//! - Product: Catalog entry

mod call_attempt;
mod exchange_rate;
mod product;
mod weather;

pub use call_attempt::*;
pub use exchange_rate::*;
pub use product::*;
pub use weather::*;
