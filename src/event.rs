//! Raw input event records as they travel between the source and sink devices.

/// Event category (the `type` field of a kernel input event).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category(pub u16);

impl Category {
    /// Synchronization markers.
    pub const SYNC: Category = Category(0x00);
    /// Keys and buttons.
    pub const KEY: Category = Category(0x01);
    /// Relative axes.
    pub const RELATIVE: Category = Category(0x02);
    /// Absolute axes.
    pub const ABSOLUTE: Category = Category(0x03);
    /// Miscellaneous events such as scan codes.
    pub const MISC: Category = Category(0x04);
    /// Binary switches.
    pub const SWITCH: Category = Category(0x05);
    /// LEDs.
    pub const LED: Category = Category(0x11);
    /// Sound output.
    pub const SOUND: Category = Category(0x12);
    /// Autorepeat settings.
    pub const REPEAT: Category = Category(0x14);
    /// Force feedback.
    pub const FORCE_FEEDBACK: Category = Category(0x15);

    /// Highest category identifier known to the input subsystem.
    pub const MAX: u16 = 0x1f;

    /// Whether the category declares individual codes as capabilities.
    ///
    /// Categories like `SYNC` or `REPEAT` are enabled as a whole.
    pub fn carries_codes(self) -> bool {
        matches!(
            self,
            Category::KEY
                | Category::RELATIVE
                | Category::ABSOLUTE
                | Category::MISC
                | Category::LED
                | Category::SOUND
                | Category::FORCE_FEEDBACK
                | Category::SWITCH
        )
    }
}

/// End-of-report synchronization code.
pub const SYN_REPORT: u16 = 0x00;
/// Scan code that precedes a key event on most keyboards.
pub const MSC_SCAN: u16 = 0x04;
/// Horizontal relative motion.
pub const REL_X: u16 = 0x00;
/// Vertical relative motion.
pub const REL_Y: u16 = 0x01;
/// Left mouse button.
pub const BTN_LEFT: u16 = 0x110;
/// Right mouse button.
pub const BTN_RIGHT: u16 = 0x111;
/// Middle mouse button.
pub const BTN_MIDDLE: u16 = 0x112;

/// Key event value for a release.
pub const KEY_RELEASE: i32 = 0;
/// Key event value for a press.
pub const KEY_PRESS: i32 = 1;
/// Key event value for an autorepeat.
pub const KEY_REPEAT: i32 = 2;

/// Kernel timestamp of an event, kept at microsecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp {
    /// Seconds.
    pub sec: i64,
    /// Microseconds within the second.
    pub usec: i64,
}

impl Timestamp {
    pub const fn new(sec: i64, usec: i64) -> Self {
        Self { sec, usec }
    }
}

/// A single input event record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Event {
    /// When the event occurred.
    pub time: Timestamp,
    /// The event category.
    pub category: Category,
    /// Key, axis or marker within the category.
    pub code: u16,
    /// Key state, axis delta or marker payload.
    pub value: i32,
}

impl Event {
    /// Create an event with a zero timestamp.
    pub const fn new(category: Category, code: u16, value: i32) -> Self {
        Self {
            time: Timestamp::new(0, 0),
            category,
            code,
            value,
        }
    }

    /// Replace the timestamp.
    pub const fn at(mut self, time: Timestamp) -> Self {
        self.time = time;
        self
    }

    /// Create a key event.
    pub const fn key(code: u16, value: i32) -> Self {
        Self::new(Category::KEY, code, value)
    }

    /// Create a scan code event.
    pub const fn scan(scan_code: i32) -> Self {
        Self::new(Category::MISC, MSC_SCAN, scan_code)
    }

    /// Create a relative motion event.
    pub const fn relative(axis: u16, delta: i32) -> Self {
        Self::new(Category::RELATIVE, axis, delta)
    }

    /// Create an end-of-report marker.
    pub const fn sync() -> Self {
        Self::new(Category::SYNC, SYN_REPORT, 0)
    }

    pub fn is_key(&self) -> bool {
        self.category == Category::KEY
    }

    pub fn is_scan(&self) -> bool {
        self.category == Category::MISC && self.code == MSC_SCAN
    }

    pub fn is_sync(&self) -> bool {
        self.category == Category::SYNC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_carrying_categories() {
        assert!(Category::KEY.carries_codes());
        assert!(Category::RELATIVE.carries_codes());
        assert!(Category::SWITCH.carries_codes());
        assert!(Category::FORCE_FEEDBACK.carries_codes());
        assert!(!Category::SYNC.carries_codes());
        assert!(!Category::REPEAT.carries_codes());
        assert!(!Category(0x1e).carries_codes());
    }

    #[test]
    fn test_event_classification() {
        assert!(Event::key(30, KEY_PRESS).is_key());
        assert!(Event::scan(30).is_scan());
        assert!(Event::sync().is_sync());
        // A MISC event with a code other than MSC_SCAN is not a scan prefix
        assert!(!Event::new(Category::MISC, 0x05, 1).is_scan());
    }

    #[test]
    fn test_at_keeps_payload() {
        let time = Timestamp::new(12, 345);
        let event = Event::relative(REL_Y, -4).at(time);
        assert_eq!(event.time, time);
        assert_eq!(event.category, Category::RELATIVE);
        assert_eq!(event.code, REL_Y);
        assert_eq!(event.value, -4);
    }
}
