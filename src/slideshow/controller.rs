//! The hero slideshow component.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::content::Slide;
use crate::ui::carousel::{CarouselIntent, CarouselReducer, CarouselState};
use crate::ui::mvi::dispatch;

use super::ticker::Ticker;
use super::{AdvanceInterval, CarouselError, EventSink, SlideshowEvent, TimerKind};

/// Timer generations are unique per process, so an event queued by one
/// slideshow can never be mistaken for a timer of another.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Auto-advancing carousel bound to a fixed slide list.
///
/// Owns its advance and transition timers. Every timer carries a generation
/// number and events from any other generation are dropped, so a tick that
/// was already queued when the slideshow paused or tore down changes nothing.
pub struct Slideshow {
    slides: Arc<[Slide]>,
    state: CarouselState,
    interval: AdvanceInterval,
    transition: Duration,
    sink: EventSink,
    advance: Option<(u64, Ticker)>,
    transition_timer: Option<(u64, Ticker)>,
}

impl Slideshow {
    /// Creates an idle slideshow. Nothing is scheduled until [`start`](Self::start).
    pub fn new(sink: EventSink, transition: Duration) -> Self {
        Self {
            slides: Arc::from(Vec::new()),
            state: CarouselState::default(),
            interval: AdvanceInterval::default(),
            transition,
            sink,
            advance: None,
            transition_timer: None,
        }
    }

    /// Begins automatic advancement over `slides`.
    ///
    /// The slide list is fixed from here on.
    pub fn start(&mut self, slides: Vec<Slide>, interval: Duration) -> Result<(), CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::EmptySlides);
        }
        if !matches!(self.state.phase, crate::ui::carousel::PlaybackPhase::Idle) {
            return Err(CarouselError::AlreadyStarted);
        }

        self.interval = AdvanceInterval::new(interval);
        let slide_count = slides.len();
        self.slides = Arc::from(slides);
        self.apply(CarouselIntent::Start { slide_count });
        tracing::debug!(
            slide_count,
            interval_ms = self.interval.get().as_millis() as u64,
            "Slideshow started"
        );
        Ok(())
    }

    pub fn pause(&mut self) -> bool {
        self.apply(CarouselIntent::Pause)
    }

    pub fn resume(&mut self) -> bool {
        self.apply(CarouselIntent::Resume)
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.apply(CarouselIntent::TogglePause)
    }

    pub fn next(&mut self) -> bool {
        self.apply(CarouselIntent::Next)
    }

    pub fn previous(&mut self) -> bool {
        self.apply(CarouselIntent::Previous)
    }

    /// Jumps to `index`. Out-of-range indices are rejected and leave the
    /// current slide untouched.
    pub fn go_to(&mut self, index: usize) -> Result<bool, CarouselError> {
        if index >= self.slides.len() {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        Ok(self.apply(CarouselIntent::GoTo { index }))
    }

    /// Feeds a timer event back in. Returns true when the state changed.
    pub fn handle(&mut self, event: SlideshowEvent) -> bool {
        match event.kind {
            TimerKind::Advance => {
                if !matches!(self.advance, Some((generation, _)) if generation == event.generation)
                {
                    tracing::trace!(generation = event.generation, "Dropping stale advance tick");
                    return false;
                }
                self.apply(CarouselIntent::Advance)
            }
            TimerKind::TransitionEnd => {
                if !matches!(self.transition_timer, Some((generation, _)) if generation == event.generation)
                {
                    tracing::trace!(generation = event.generation, "Dropping stale transition end");
                    return false;
                }
                self.transition_timer = None;
                self.apply(CarouselIntent::TransitionEnd)
            }
        }
    }

    /// Stops the slideshow and cancels every pending timer. Idempotent.
    pub fn teardown(&mut self) {
        if self.state.is_stopped() {
            return;
        }
        self.apply(CarouselIntent::Teardown);
        tracing::debug!("Slideshow torn down");
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.state.current_index)
    }

    pub fn interval(&self) -> Duration {
        self.interval.get()
    }

    /// True while an auto-advance timer is scheduled.
    pub fn is_advance_armed(&self) -> bool {
        self.advance.as_ref().is_some_and(|(_, ticker)| ticker.is_active())
    }

    /// True while any timer is held, armed or not yet reaped.
    pub fn has_timers(&self) -> bool {
        self.advance.is_some() || self.transition_timer.is_some()
    }

    fn apply(&mut self, intent: CarouselIntent) -> bool {
        let before_index = self.state.current_index;
        let changed = dispatch::<CarouselReducer>(&mut self.state, intent);
        let index_changed = self.state.current_index != before_index;

        if self.state.is_stopped() {
            self.advance = None;
            self.transition_timer = None;
            return changed;
        }

        if index_changed && self.state.is_transitioning {
            self.arm_transition();
        }

        if self.state.is_playing() {
            let manual = index_changed && intent != CarouselIntent::Advance;
            if self.advance.is_none() || manual {
                self.arm_advance();
            }
        } else if self.advance.take().is_some() {
            tracing::trace!("Advance timer cancelled");
        }

        changed
    }

    fn next_generation() -> u64 {
        NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
    }

    fn arm_advance(&mut self) {
        let generation = Self::next_generation();
        let sink = Arc::clone(&self.sink);
        let ticker = Ticker::every(self.interval.get(), move || {
            sink(SlideshowEvent {
                generation,
                kind: TimerKind::Advance,
            })
        });
        // Replacing the old pair drops its ticker, which cancels it.
        self.advance = Some((generation, ticker));
    }

    fn arm_transition(&mut self) {
        if self.transition.is_zero() {
            self.transition_timer = None;
            dispatch::<CarouselReducer>(&mut self.state, CarouselIntent::TransitionEnd);
            return;
        }
        let generation = Self::next_generation();
        let sink = Arc::clone(&self.sink);
        let ticker = Ticker::once(self.transition, move || {
            sink(SlideshowEvent {
                generation,
                kind: TimerKind::TransitionEnd,
            })
        });
        self.transition_timer = Some((generation, ticker));
    }
}

impl Drop for Slideshow {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for Slideshow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slideshow")
            .field("state", &self.state)
            .field("slides", &self.slides.len())
            .field("interval", &self.interval.get())
            .field("advance_armed", &self.advance.is_some())
            .finish()
    }
}
