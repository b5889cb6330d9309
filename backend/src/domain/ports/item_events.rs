//! Port for announcing item lifecycle events to other worker units.

use crate::domain::Item;

/// Driven port notified after an item has been stored.
///
/// Publishing is best effort: implementations log delivery problems rather
/// than failing the request that produced the event.
#[cfg_attr(test, mockall::automock)]
pub trait ItemEvents: Send + Sync {
    /// Announce a newly created item.
    fn item_created(&self, item: &Item);
}

/// Event sink that discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpItemEvents;

impl ItemEvents for NoOpItemEvents {
    fn item_created(&self, _item: &Item) {}
}
