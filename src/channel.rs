//! Event channels between the devices and the translator.
//!
//! [`EventSource`] yields raw events until the stream ends. [`EventSink`]
//! accepts events for the synthetic device. Both are implemented by the Linux
//! devices and, for tests and tooling, by plain iterators and closures.
//!
//! ```
//! use keymouse::channel::{EventSink, EventSource};
//! use keymouse::event::Event;
//!
//! let mut source = vec![Event::sync()].into_iter();
//! let mut written = Vec::new();
//! let mut sink = |event: &Event| -> keymouse::Result<()> {
//!     written.push(*event);
//!     Ok(())
//! };
//!
//! while let Some(event) = source.read_event() {
//!     sink.write_event(&event).unwrap();
//! }
//! assert_eq!(written, vec![Event::sync()]);
//! ```

use crate::error::Result;
use crate::event::Event;

/// Blocking reader of source events.
pub trait EventSource {
    /// Read the next event.
    ///
    /// Returns `None` once the stream has ended, whether through end of file
    /// or a read failure.
    fn read_event(&mut self) -> Option<Event>;
}

/// Iterators act as finite sources.
impl<I> EventSource for I
where
    I: Iterator<Item = Event>,
{
    fn read_event(&mut self) -> Option<Event> {
        self.next()
    }
}

/// Writer of events to the synthetic device.
pub trait EventSink {
    /// Write one event. Any failure is fatal to the run.
    fn write_event(&mut self, event: &Event) -> Result<()>;
}

/// Implement EventSink for closures.
impl<F> EventSink for F
where
    F: FnMut(&Event) -> Result<()>,
{
    fn write_event(&mut self, event: &Event) -> Result<()> {
        self(event)
    }
}
