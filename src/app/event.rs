//! Terminal event abstraction.
//!
//! A background task polls crossterm and forwards key presses and resizes
//! over a channel, so the main loop only ever awaits one receiver.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

impl AppEvent {
    /// Map a raw crossterm event.  Key releases and repeats are dropped
    /// (Windows terminals report both).
    fn from_crossterm(ev: CtEvent) -> Option<Self> {
        match ev {
            CtEvent::Key(k) if k.kind == KeyEventKind::Press => Some(AppEvent::Key(k)),
            CtEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        }
    }
}

/// Spawns the reader task.  A `Tick` is sent whenever `tick_rate` passes
/// without input.  The task ends once the receiver is dropped.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || loop {
        let next = match event::poll(tick_rate) {
            Ok(true) => match event::read() {
                Ok(ev) => AppEvent::from_crossterm(ev),
                Err(e) => {
                    tracing::warn!("terminal read failed: {e}");
                    None
                }
            },
            Ok(false) => Some(AppEvent::Tick),
            Err(e) => {
                tracing::warn!("terminal poll failed: {e}");
                break;
            }
        };
        if let Some(ev) = next {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    rx
}
