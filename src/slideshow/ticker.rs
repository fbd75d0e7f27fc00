//! Timer tasks owned by a guard.
//!
//! A [`Ticker`] spawns a tokio task that calls its emit closure on schedule.
//! Dropping the ticker unmounts it and aborts the task, so no tick can reach
//! state that has already been torn down.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::lifecycle::MountHandle;

pub struct Ticker {
    mount: MountHandle,
    task: JoinHandle<()>,
}

impl Ticker {
    /// Calls `emit` every `period`, first after one full period.
    ///
    /// The task stops on its own when `emit` returns false (receiver gone).
    pub fn every<F>(period: Duration, emit: F) -> Self
    where
        F: Fn() -> bool + Send + 'static,
    {
        let mount = MountHandle::new();
        let guard = mount.clone();
        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = guard.unmounted() => break,
                    _ = interval.tick() => {
                        if !guard.is_mounted() || !emit() {
                            break;
                        }
                    }
                }
            }
        });
        Self { mount, task }
    }

    /// Calls `emit` once after `delay`.
    pub fn once<F>(delay: Duration, emit: F) -> Self
    where
        F: FnOnce() -> bool + Send + 'static,
    {
        let mount = MountHandle::new();
        let guard = mount.clone();
        let task = tokio::spawn(async move {
            tokio::select! {
                _ = guard.unmounted() => {}
                _ = time::sleep(delay) => {
                    if guard.is_mounted() {
                        emit();
                    }
                }
            }
        });
        Self { mount, task }
    }

    pub fn is_active(&self) -> bool {
        self.mount.is_mounted() && !self.task.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.mount.unmount();
        self.task.abort();
    }
}
