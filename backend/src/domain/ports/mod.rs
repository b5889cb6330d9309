//! Domain ports for the hexagonal boundary.

mod item_commands;
mod item_events;
mod item_repository;

pub use item_commands::{ItemCommand, ItemQuery};
#[cfg(test)]
pub use item_events::MockItemEvents;
pub use item_events::{ItemEvents, NoOpItemEvents};
#[cfg(test)]
pub use item_repository::MockItemRepository;
pub use item_repository::ItemRepository;
