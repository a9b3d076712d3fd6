/// Custom actions for Product entities.
///
/// These actions are the only way stock changes after a product is registered.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Removes `u32` units from stock.
    ///
    /// # Errors
    /// Fails when the requested amount exceeds available stock; stock is left unchanged.
    ReserveStock(u32),
    /// Returns `u32` previously reserved units to stock.
    ReleaseStock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// Stock left after the reservation
    ReserveStock(u32),
    /// Stock available after the release
    ReleaseStock(u32),
}
