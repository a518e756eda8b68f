//! The blocking event loop.

use crate::channel::{EventSink, EventSource};
use crate::error::Result;
use crate::translate::Translator;

/// Counters collected over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Events read from the source.
    pub read: u64,
    /// Events written to the sink, synthesized ones included.
    pub written: u64,
}

/// Pump events from `source` through `translator` into `sink`.
///
/// Blocks until the source ends, which is a normal shutdown. A write failure
/// aborts the run; events already written stay written.
pub fn run<S, K>(source: &mut S, sink: &mut K, translator: &mut Translator) -> Result<RunStats>
where
    S: EventSource + ?Sized,
    K: EventSink + ?Sized,
{
    let mut stats = RunStats::default();

    while let Some(event) = source.read_event() {
        stats.read += 1;
        for out in translator.feed(event) {
            sink.write_event(out)?;
            stats.written += 1;
        }
    }

    if !translator.is_idle() {
        log::debug!(
            "source ended mid-report ({:?}), discarding it",
            translator.report_state()
        );
    }
    log::info!(
        "source ended after {} events read, {} written",
        stats.read,
        stats.written
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::event::{Event, KEY_PRESS};
    use crate::keymap::Keymap;
    use std::io;

    #[test]
    fn test_run_counts_events() {
        let input = vec![Event::scan(30), Event::key(30, KEY_PRESS), Event::sync()];
        let mut source = input.clone().into_iter();
        let mut written = Vec::new();
        let mut sink = |event: &Event| -> Result<()> {
            written.push(*event);
            Ok(())
        };
        let mut translator = Translator::new(Keymap::default(), 10);

        let stats = run(&mut source, &mut sink, &mut translator).unwrap();
        assert_eq!(stats, RunStats { read: 3, written: 3 });
        assert_eq!(written, input);
    }

    #[test]
    fn test_partial_report_discarded_at_end() {
        let mut source = vec![Event::scan(30), Event::key(30, KEY_PRESS)].into_iter();
        let mut sink = |_: &Event| -> Result<()> { Ok(()) };
        let mut translator = Translator::new(Keymap::default(), 10);

        let stats = run(&mut source, &mut sink, &mut translator).unwrap();
        assert_eq!(stats, RunStats { read: 2, written: 0 });
    }

    #[test]
    fn test_write_failure_aborts() {
        let mut source = vec![Event::sync(), Event::sync(), Event::sync()].into_iter();
        let mut attempts = 0;
        let mut sink = |_: &Event| -> Result<()> {
            attempts += 1;
            Err(Error::Write(io::Error::from(io::ErrorKind::WriteZero)))
        };
        let mut translator = Translator::new(Keymap::default(), 10);

        assert!(matches!(
            run(&mut source, &mut sink, &mut translator),
            Err(Error::Write(_))
        ));
        assert_eq!(attempts, 1);
        // The remaining events were never read
        assert_eq!(source.len(), 2);
    }
}
