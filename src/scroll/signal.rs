use tokio::sync::watch;

/// Source of scroll offsets.
pub trait ScrollSignal {
    /// Starts listening. The subscription is released when dropped.
    fn subscribe(&self) -> ScrollSubscription;
}

/// Live scroll listener.
#[derive(Debug)]
pub struct ScrollSubscription {
    rx: watch::Receiver<u32>,
}

impl ScrollSubscription {
    /// Returns the latest offset if it was published since the last call.
    pub fn poll(&mut self) -> Option<u32> {
        match self.rx.has_changed() {
            Ok(true) => Some(*self.rx.borrow_and_update()),
            Ok(false) => None,
            // Publisher gone: nothing more will arrive.
            Err(_) => None,
        }
    }
}

/// In-process scroll signal backed by a `watch` channel.
///
/// The body scroller publishes; any number of components subscribe.
#[derive(Debug)]
pub struct ScrollBus {
    tx: watch::Sender<u32>,
}

impl ScrollBus {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx }
    }

    /// Publishes a new offset. Works with or without subscribers.
    pub fn publish(&self, offset: u32) {
        let previous = self.tx.send_replace(offset);
        if previous != offset {
            tracing::trace!(offset, "Scroll offset published");
        }
    }

    pub fn offset(&self) -> u32 {
        *self.tx.borrow()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ScrollBus {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSignal for ScrollBus {
    fn subscribe(&self) -> ScrollSubscription {
        let mut rx = self.tx.subscribe();
        // Treat the current offset as unseen so a fresh subscriber evaluates it.
        rx.mark_changed();
        ScrollSubscription { rx }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_subscriber_sees_current_offset() {
        let bus = ScrollBus::new();
        bus.publish(120);
        let mut sub = bus.subscribe();
        assert_eq!(sub.poll(), Some(120));
        assert_eq!(sub.poll(), None);
    }

    #[test]
    fn poll_returns_latest_only() {
        let bus = ScrollBus::new();
        let mut sub = bus.subscribe();
        sub.poll();
        bus.publish(10);
        bus.publish(20);
        bus.publish(30);
        assert_eq!(sub.poll(), Some(30));
    }

    #[test]
    fn dropping_subscription_releases_it() {
        let bus = ScrollBus::new();
        assert_eq!(bus.subscriber_count(), 0);
        let sub = bus.subscribe();
        let other = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);
        drop(sub);
        assert_eq!(bus.subscriber_count(), 1);
        drop(other);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn poll_ends_quietly_when_bus_dropped() {
        let bus = ScrollBus::new();
        let mut sub = bus.subscribe();
        sub.poll();
        bus.publish(75);
        drop(bus);
        assert_eq!(sub.poll(), None);
    }
}
