use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize,
}

/// Wait up to `timeout` for terminal input on the calling thread. No input
/// within the timeout is reported as a tick so the caller can redraw.
pub fn next_event(timeout: Duration) -> anyhow::Result<AppEvent> {
    if !event::poll(timeout)? {
        return Ok(AppEvent::Tick);
    }
    let event = match event::read()? {
        Event::Key(key) => AppEvent::Key(key),
        Event::Resize(_, _) => AppEvent::Resize,
        _ => AppEvent::Tick,
    };
    Ok(event)
}
