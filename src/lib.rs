//! # keymouse
//!
//! Keyboard-driven mouse emulation for Linux.
//!
//! keymouse grabs one evdev keyboard exclusively, creates a synthetic uinput
//! device that supports everything the keyboard does plus mouse buttons and
//! relative axes, and forwards the keyboard's events through a translator:
//!
//! - While the modifier (right meta) is held, the W E R / S D F / X C V grid
//!   moves the pointer, accelerating as a key autorepeats.
//! - J, K and L click the left, middle and right buttons while the modifier
//!   is held.
//! - Everything else is forwarded unchanged.
//!
//! ## Quick Start
//!
//! ```no_run
//! use keymouse::{Config, remap_device};
//!
//! let stats = remap_device(&Config::new("/dev/input/event3")).expect("remapping failed");
//! println!("{} events in, {} out", stats.read, stats.written);
//! ```
//!
//! ## Architecture
//!
//! The [`translate::Translator`] is a pure state machine: it takes one raw
//! event at a time and returns the events to write. [`capability::mirror`]
//! sets up the synthetic device through the [`capability::DeviceControl`]
//! trait, and [`remap::run`] pumps events between any
//! [`channel::EventSource`] and [`channel::EventSink`]. The Linux devices
//! implementing those traits live in the platform module.

pub mod capability;
pub mod channel;
pub mod config;
pub mod error;
pub mod event;
pub mod keymap;
pub mod remap;
pub mod state;
pub mod translate;

mod platform;

// Re-exports
pub use capability::{Capabilities, DeviceControl, DeviceIdentity};
pub use channel::{EventSink, EventSource};
pub use config::Config;
pub use error::{Error, Result};
pub use event::{Category, Event, Timestamp};
pub use keymap::{Button, Direction, KeyRole, Keymap};
pub use remap::RunStats;
pub use translate::{ReportState, Translator};

// Device access
pub use platform::{SourceDevice, UinputDevice, remap_device};
