use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc;

use crate::lifecycle::MountHandle;
use crate::slideshow::SlideshowEvent;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// Timer event from the hero slideshow.
    Slideshow(SlideshowEvent),
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl EventHandler {
    /// Spawns the terminal reader thread. It stops once `running` is
    /// unmounted or the receiving side is gone.
    pub fn new(tick_rate: Duration, running: MountHandle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if !running.is_mounted() {
                    break;
                }

                // Short poll timeout so the mount flag is checked often
                let timeout =
                    tick_rate.saturating_sub(last_tick.elapsed()).min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => {
                        let sent = match event::read() {
                            Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)).is_ok(),
                            Ok(Event::Resize(cols, rows)) => {
                                event_tx.send(AppEvent::Resize(cols, rows)).is_ok()
                            }
                            Ok(_) => true,
                            Err(err) => {
                                tracing::error!("Terminal read failed: {}", err);
                                false
                            }
                        };
                        if !sent {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!("Terminal poll failed: {}", err);
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
            tracing::debug!("Event reader stopped");
        });

        Self { rx, tx }
    }

    /// Next event, or `None` once every sender is gone.
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.tx.clone()
    }
}
