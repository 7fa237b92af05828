//! Value Objects
//!
//! Immutable value types.

mod coordinates;
mod currency_code;
mod http_method;
mod provider;

pub use coordinates::*;
pub use currency_code::*;
pub use http_method::*;
pub use provider::*;
