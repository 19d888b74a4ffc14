//! Terminal input while a submission is in flight

use crate::api::SubmissionClient;
use crate::app::App;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::io;
use std::time::Duration;

/// How often queued keys are checked while waiting on the request
const BUSY_POLL: Duration = Duration::from_millis(50);

/// Ctrl+C quits from any screen
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Next already-queued terminal event, without blocking
pub fn next_queued() -> io::Result<Option<Event>> {
    if event::poll(Duration::ZERO)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

fn interrupted(event: &Event) -> bool {
    matches!(event, Event::Key(key) if is_interrupt(key))
}

async fn wait_for_interrupt<S>(source: &mut S) -> io::Result<()>
where
    S: FnMut() -> io::Result<Option<Event>>,
{
    loop {
        match source()? {
            Some(event) if interrupted(&event) => return Ok(()),
            Some(_) => {}
            None => tokio::time::sleep(BUSY_POLL).await,
        }
    }
}

/// Send the pending submission, dropping every key pressed meanwhile.
///
/// Keys queued during the request are consumed here so they never reach the
/// screen that follows it. Returns `true` when Ctrl+C ended the wait.
pub async fn send_discarding_input<C, S>(app: &mut App<C>, source: &mut S) -> io::Result<bool>
where
    C: SubmissionClient,
    S: FnMut() -> io::Result<Option<Event>>,
{
    tokio::select! {
        _ = app.send_pending() => {}
        result = wait_for_interrupt(source) => {
            result?;
            return Ok(true);
        }
    }

    // Whatever arrived after the last check
    while let Some(event) = source()? {
        if interrupted(&event) {
            return Ok(true);
        }
    }
    Ok(false)
}
