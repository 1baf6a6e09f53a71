#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;
use tokio::io::Lines;
use tokio::sync::mpsc;

use crate::domain::models::Event;

/// Merges typed lines with events raised by background workers.
pub struct EventsService<R> {
    lines: Lines<R>,
    input_open: bool,
    events: mpsc::UnboundedReceiver<Event>,
}

impl<R: AsyncBufRead + Unpin> EventsService<R> {
    pub fn new(input: R, events: mpsc::UnboundedReceiver<Event>) -> EventsService<R> {
        return EventsService {
            lines: input.lines(),
            input_open: true,
            events,
        };
    }

    /// Waits for the next event. `InputClosed` is emitted once when input
    /// reaches EOF, after which only worker events are returned.
    pub async fn next(&mut self) -> Result<Event> {
        if !self.input_open {
            match self.events.recv().await {
                Some(event) => return Ok(event),
                None => bail!("Event channel closed"),
            }
        }

        tokio::select! {
            event = self.events.recv() => {
                match event {
                    Some(event) => return Ok(event),
                    None => bail!("Event channel closed"),
                }
            },
            line = self.lines.next_line() => {
                match line? {
                    Some(line) => return Ok(Event::UserInput(line)),
                    None => {
                        self.input_open = false;
                        return Ok(Event::InputClosed());
                    }
                }
            }
        }
    }
}
