//! In-process item event bus.
//!
//! Created items are encoded with [`ItemCodec`] and broadcast as wire
//! messages, so every worker unit and background task sees the same bytes a
//! remote consumer would. Delivery is best effort: publishing never fails the
//! request that produced the event, and a subscriber that falls behind skips
//! the messages it missed.

use bytes::Bytes;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::codec::{ItemCodec, WireCodec};
use crate::domain::Item;
use crate::domain::ports::ItemEvents;

/// Broadcast channel carrying wire-encoded items.
#[derive(Clone)]
pub struct ItemEventBus {
    sender: broadcast::Sender<Bytes>,
}

impl ItemEventBus {
    /// Create a bus buffering up to `capacity` messages per subscriber.
    ///
    /// A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Encode and broadcast `item`.
    pub fn publish(&self, item: &Item) {
        let message = match ItemCodec.encode_to_bytes(item) {
            Ok(message) => message,
            Err(err) => {
                warn!(item_id = %item.id(), error = %err, "item event not encodable");
                return;
            }
        };
        match self.sender.send(message) {
            Ok(receivers) => debug!(item_id = %item.id(), receivers, "item event published"),
            Err(_) => debug!(item_id = %item.id(), "item event dropped without subscribers"),
        }
    }

    /// Subscribe to messages published from now on.
    pub fn subscribe(&self) -> ItemEventSubscriber {
        ItemEventSubscriber {
            receiver: self.sender.subscribe(),
        }
    }
}

impl ItemEvents for ItemEventBus {
    fn item_created(&self, item: &Item) {
        self.publish(item);
    }
}

/// Receiving end of an [`ItemEventBus`].
pub struct ItemEventSubscriber {
    receiver: broadcast::Receiver<Bytes>,
}

impl ItemEventSubscriber {
    /// Wait for the next decodable item.
    ///
    /// Returns `None` once every bus handle has been dropped. Messages that
    /// fail to decode are logged and skipped.
    pub async fn next(&mut self) -> Option<Item> {
        loop {
            match self.receiver.recv().await {
                Ok(message) => match ItemCodec.decode_exact(&message) {
                    Ok(item) => return Some(item),
                    Err(err) => warn!(error = %err, "discarding malformed item event"),
                },
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "item event subscriber lagged");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

/// Log every created item until the bus closes.
pub async fn audit_created_items(mut subscriber: ItemEventSubscriber) {
    while let Some(item) = subscriber.next().await {
        info!(item_id = %item.id(), name = item.name(), "item created");
    }
    debug!("item audit stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use uuid::Uuid;

    #[tokio::test]
    async fn subscriber_receives_published_item() {
        let bus = ItemEventBus::new(8);
        let mut subscriber = bus.subscribe();
        let item = Item::new(Uuid::new_v4(), "widget");

        bus.item_created(&item);

        assert_eq!(subscriber.next().await, Some(item));
    }

    #[tokio::test]
    async fn every_subscriber_sees_each_item() {
        let bus = ItemEventBus::new(8);
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();
        let item = Item::new(Uuid::new_v4(), "widget");

        bus.publish(&item);

        assert_eq!(first.next().await, Some(item.clone()));
        assert_eq!(second.next().await, Some(item));
    }

    #[tokio::test]
    async fn lagging_subscriber_skips_to_retained_messages() {
        let bus = ItemEventBus::new(1);
        let mut subscriber = bus.subscribe();
        let latest = Item::new(Uuid::new_v4(), "latest");

        bus.publish(&Item::new(Uuid::new_v4(), "missed"));
        bus.publish(&latest);

        assert_eq!(subscriber.next().await, Some(latest));
    }

    #[tokio::test]
    async fn malformed_message_is_skipped() {
        let bus = ItemEventBus::new(8);
        let mut subscriber = bus.subscribe();
        let item = Item::new(Uuid::new_v4(), "widget");

        bus.sender
            .send(Bytes::from_static(&[0, 0, 0, 9, b'x']))
            .expect("subscriber attached");
        bus.publish(&item);

        assert_eq!(subscriber.next().await, Some(item));
    }

    #[tokio::test]
    async fn closed_bus_ends_subscription() {
        let bus = ItemEventBus::new(8);
        let subscriber = bus.subscribe();
        drop(bus);

        audit_created_items(subscriber).await;
    }

    #[rstest]
    fn publish_without_subscribers_is_silent() {
        let bus = ItemEventBus::new(0);
        bus.publish(&Item::new(Uuid::new_v4(), "widget"));
    }
}
