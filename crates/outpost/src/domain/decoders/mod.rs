//! Provider Response Decoders
//!
//! Pure `raw JSON -> typed result` functions, one per provider. No I/O.
//! Errors name the offending JSON path.

mod exchange_rate;
mod json;
mod weather;

pub use exchange_rate::decode_exchange_rates;
pub use weather::decode_weather;
