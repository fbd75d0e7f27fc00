//! Hero slideshow runtime: timers, events and the [`Slideshow`] component.
//!
//! State transitions live in [`crate::ui::carousel`]; this module decides when
//! timers are armed or cancelled and turns their ticks into events.

mod controller;
mod ticker;

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::mpsc;

pub use controller::Slideshow;
pub use ticker::Ticker;

/// Shortest accepted advance period.
pub const MIN_INTERVAL: Duration = Duration::from_millis(250);

/// Default advance period.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(4000);

/// Invalid input to the slideshow. Never fatal; callers log and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("slideshow needs at least one slide")]
    EmptySlides,

    #[error("slideshow already started")]
    AlreadyStarted,

    #[error("slide index {index} out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Advance period clamped to [`MIN_INTERVAL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceInterval(Duration);

impl AdvanceInterval {
    pub fn new(period: Duration) -> Self {
        if period < MIN_INTERVAL {
            tracing::warn!(
                requested_ms = period.as_millis() as u64,
                min_ms = MIN_INTERVAL.as_millis() as u64,
                "Slideshow interval too short, using minimum"
            );
            return Self(MIN_INTERVAL);
        }
        Self(period)
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn get(self) -> Duration {
        self.0
    }
}

impl Default for AdvanceInterval {
    fn default() -> Self {
        Self(DEFAULT_INTERVAL)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Advance,
    TransitionEnd,
}

/// Emitted by a slideshow timer. `generation` identifies the timer instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideshowEvent {
    pub generation: u64,
    pub kind: TimerKind,
}

/// Where timer events go. Returns false once nobody is listening.
pub type EventSink = Arc<dyn Fn(SlideshowEvent) -> bool + Send + Sync>;

/// Builds a sink that wraps each event and sends it down `tx`.
pub fn channel_sink<E, F>(tx: mpsc::UnboundedSender<E>, wrap: F) -> EventSink
where
    E: Send + 'static,
    F: Fn(SlideshowEvent) -> E + Send + Sync + 'static,
{
    Arc::new(move |event| tx.send(wrap(event)).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_interval_is_coerced_to_minimum() {
        assert_eq!(AdvanceInterval::from_millis(0).get(), MIN_INTERVAL);
        assert_eq!(AdvanceInterval::from_millis(10).get(), MIN_INTERVAL);
    }

    #[test]
    fn valid_interval_is_kept() {
        assert_eq!(
            AdvanceInterval::from_millis(4000).get(),
            Duration::from_millis(4000)
        );
    }

    #[test]
    fn channel_sink_reports_closed_receiver() {
        let (tx, rx) = mpsc::unbounded_channel::<SlideshowEvent>();
        let sink = channel_sink(tx, |event| event);
        let event = SlideshowEvent {
            generation: 1,
            kind: TimerKind::Advance,
        };
        assert!(sink(event));
        drop(rx);
        assert!(!sink(event));
    }
}
