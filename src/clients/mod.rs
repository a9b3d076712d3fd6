//! Typed clients over the resource actors.
//!
//! [`ProductClient`] wraps the product store; [`OrderClient`] is the root
//! client that orchestrates pricing, discounting, stock and persistence.

#[macro_use]
mod macros;

pub mod order_client;
pub mod product_client;

pub use order_client::*;
pub use product_client::*;
