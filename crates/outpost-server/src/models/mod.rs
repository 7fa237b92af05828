//! Outpost Data Models
//!
//! Request/response DTOs for the HTTP API (camelCase JSON).

mod call_attempt;
mod exchange_rate;
mod product;
mod weather;

pub use call_attempt::*;
pub use exchange_rate::*;
pub use product::*;
pub use weather::*;
