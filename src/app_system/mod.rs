//! System orchestration: startup, seeding, flag reload and shutdown.

pub mod order_system;
pub mod reload;
pub mod seed;
pub mod telemetry;

pub use order_system::*;
pub use reload::*;
pub use seed::*;
pub use telemetry::*;
