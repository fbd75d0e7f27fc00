//! Mount flags shared between a component and the tasks it spawns.
//!
//! A [`MountHandle`] starts mounted. Calling [`MountHandle::unmount`] flips the
//! flag once and wakes every task parked in [`MountHandle::unmounted`]. Timer
//! tasks check [`MountHandle::is_mounted`] before emitting anything, so a tick
//! that races with teardown is dropped on the floor.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Cloneable mount flag.
#[derive(Clone)]
pub struct MountHandle {
    mounted: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl MountHandle {
    pub fn new() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
            notify: Arc::new(Notify::new()),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Returns true only for the call that actually performed the unmount.
    pub fn unmount(&self) -> bool {
        if self.mounted.swap(false, Ordering::SeqCst) {
            self.notify.notify_waiters();
            true
        } else {
            false
        }
    }

    pub async fn unmounted(&self) {
        // Register interest before reading the flag, otherwise an unmount that
        // lands between the check and the await is never observed.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if !self.is_mounted() {
            return;
        }
        notified.await;
    }
}

impl Default for MountHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MountHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountHandle")
            .field("mounted", &self.is_mounted())
            .finish()
    }
}
