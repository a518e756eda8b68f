//! Report assembly and key-to-mouse translation.
//!
//! Events arrive one at a time and are grouped into reports of up to three
//! slots: an optional scan code, a key event and the closing sync marker.
//! Each finished report is either forwarded as is, dropped, or replaced with
//! synthesized mouse events.
//!
//! ```
//! use keymouse::event::{Event, KEY_PRESS};
//! use keymouse::keymap::Keymap;
//! use keymouse::translate::Translator;
//!
//! let mut translator = Translator::new(Keymap::default(), 10);
//! assert!(translator.feed(Event::scan(30)).is_empty());
//! assert!(translator.feed(Event::key(30, KEY_PRESS)).is_empty());
//! // Unbound keys go out unchanged once the report is complete
//! assert_eq!(translator.feed(Event::sync()).len(), 3);
//! ```

use crate::event::{Event, KEY_PRESS, KEY_RELEASE, KEY_REPEAT, REL_X, REL_Y};
use crate::keymap::{Button, Direction, KeyRole, Keymap};
use crate::state::TranslatorState;

/// Which slot of the report buffer receives the next event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportState {
    /// Slot 0: expecting a scan code, a bare key event or a passthrough event.
    AwaitingReportStart,
    /// Slot 1: a scan code was seen, expecting its key event.
    AwaitingKeyEvent,
    /// Slot 2: expecting the sync marker that closes the report.
    AwaitingSync,
}

/// Event stream translator.
#[derive(Debug, Clone)]
pub struct Translator {
    keymap: Keymap,
    state: TranslatorState,
    report: ReportState,
    slots: [Event; 3],
    out: Vec<Event>,
}

impl Translator {
    pub fn new(keymap: Keymap, base_speed: i32) -> Self {
        Self {
            keymap,
            state: TranslatorState::new(base_speed),
            report: ReportState::AwaitingReportStart,
            slots: [Event::sync(); 3],
            out: Vec::with_capacity(6),
        }
    }

    pub fn state(&self) -> &TranslatorState {
        &self.state
    }

    pub fn report_state(&self) -> ReportState {
        self.report
    }

    /// Whether no report is partially assembled.
    pub fn is_idle(&self) -> bool {
        self.report == ReportState::AwaitingReportStart
    }

    /// Feed one event read from the source device.
    ///
    /// Returns the events to write to the sink, in order. The slice is empty
    /// while a report is still being assembled or when a report is dropped.
    pub fn feed(&mut self, event: Event) -> &[Event] {
        self.out.clear();
        self.report = match self.report {
            ReportState::AwaitingReportStart => self.start_report(event),
            ReportState::AwaitingKeyEvent => self.continue_report(event),
            ReportState::AwaitingSync => self.finish_report(event),
        };
        &self.out
    }

    fn start_report(&mut self, event: Event) -> ReportState {
        self.slots[0] = event;
        if event.is_key() {
            // No scan code prefix. Slot 0 becomes a placeholder.
            self.slots[1] = event;
            self.state.suppress_slot0 = true;
            ReportState::AwaitingSync
        } else if event.is_scan() {
            ReportState::AwaitingKeyEvent
        } else {
            self.out.push(event);
            ReportState::AwaitingReportStart
        }
    }

    fn continue_report(&mut self, event: Event) -> ReportState {
        self.slots[1] = event;
        if event.is_key() {
            return ReportState::AwaitingSync;
        }

        if !self.state.take_suppress() {
            self.out.push(self.slots[0]);
        }
        self.out.push(event);
        ReportState::AwaitingReportStart
    }

    fn finish_report(&mut self, event: Event) -> ReportState {
        self.slots[2] = event;
        if !event.is_sync() {
            return self.flush();
        }

        let key = self.slots[1];
        match self.keymap.role(key.code) {
            Some(KeyRole::Modifier) => {
                self.state.modifier_held = key.value != KEY_RELEASE;
                log::debug!("modifier held: {}", self.state.modifier_held);
                self.flush()
            }
            Some(KeyRole::Move(direction)) if self.state.modifier_held => {
                self.synthesize_motion(direction)
            }
            Some(KeyRole::Click(button)) => self.remap_button(button),
            _ => self.flush(),
        }
    }

    /// Write out the buffered report, skipping a suppressed slot 0.
    fn flush(&mut self) -> ReportState {
        if !self.state.take_suppress() {
            self.out.push(self.slots[0]);
        }
        self.out.push(self.slots[1]);
        self.out.push(self.slots[2]);
        ReportState::AwaitingReportStart
    }

    fn synthesize_motion(&mut self, direction: Direction) -> ReportState {
        let key = self.slots[1];
        if key.value == KEY_RELEASE {
            self.state.reset_speed();
            self.state.suppress_slot0 = false;
            log::debug!("movement key {} released, report dropped", key.code);
            return ReportState::AwaitingReportStart;
        }

        // A placeholder slot 0 becomes real here and borrows the key's time.
        let x_time = if self.state.take_suppress() {
            key.time
        } else {
            self.slots[0].time
        };

        let (dx, dy) = direction.delta();
        let speed = self.state.take_speed();
        self.slots[0] = Event::relative(REL_X, dx.saturating_mul(speed)).at(x_time);
        self.slots[1] = Event::relative(REL_Y, dy.saturating_mul(speed)).at(key.time);
        log::debug!("{:?} at speed {}", direction, speed);

        self.flush()
    }

    fn remap_button(&mut self, button: Button) -> ReportState {
        let key = self.slots[1];
        if !self.state.modifier_held || key.value == KEY_REPEAT {
            return self.flush();
        }

        let sync = self.slots[2];
        let modifier = self.keymap.modifier();
        self.out.extend([
            Event::key(modifier, KEY_RELEASE).at(key.time),
            sync,
            Event::key(button.code(), key.value).at(key.time),
            sync,
        ]);
        log::debug!("{:?} button {}", button, key.value);

        // Restore the modifier through the regular flush; the raw key never goes out.
        self.slots[1] = Event::key(modifier, KEY_PRESS).at(key.time);
        self.state.suppress_slot0 = true;
        self.flush()
    }
}
