use std::convert::Infallible;

use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate};

impl Entity for Order {
    type Id = u64;
    type CreatePayload = OrderCreate;
    type Action = Infallible; // Orders are immutable once placed
    type ActionResult = ();

    /// Creates a new Order stamped with the current time.
    ///
    /// # Notes
    /// The order is initialized with status "Pending" and its items are
    /// attached to the new id.
    fn from_create(id: u64, params: OrderCreate) -> Result<Self, String> {
        Order::assemble(id, params, Utc::now())
    }

    fn handle_action(&mut self, action: Infallible) -> Result<(), String> {
        match action {}
    }
}
