//! Order persistence: the Entity binding for orders and the order error type.

pub mod entity;
pub mod error;

pub use error::*;
