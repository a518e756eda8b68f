//! Linux platform implementation.
//!
//! The source keyboard is read through evdev and the synthetic device is
//! created through uinput.
//!
//! ## Permissions
//!
//! Reading `/dev/input/event*` and writing `/dev/uinput` requires root or
//! membership in the `input` group plus a udev rule for uinput:
//! ```bash
//! sudo usermod -aG input $USER
//! # Then log out and back in
//! ```

mod source;
mod uinput;

pub use source::SourceDevice;
pub use uinput::UinputDevice;

use crate::capability::{self, DeviceControl};
use crate::config::Config;
use crate::error::Result;
use crate::event::{Category, Event, Timestamp};
use crate::remap::{self, RunStats};
use crate::translate::Translator;

pub(crate) fn raw_to_event(raw: &libc::input_event) -> Event {
    Event {
        time: Timestamp::new(raw.time.tv_sec as i64, raw.time.tv_usec as i64),
        category: Category(raw.type_),
        code: raw.code,
        value: raw.value,
    }
}

pub(crate) fn event_to_raw(event: &Event) -> libc::input_event {
    libc::input_event {
        time: libc::timeval {
            tv_sec: event.time.sec as _,
            tv_usec: event.time.usec as _,
        },
        type_: event.category.0,
        code: event.code,
        value: event.value,
    }
}

/// Grab `config.device`, mirror it onto a new uinput device and remap its
/// events until the source stream ends.
///
/// The synthetic device is destroyed and both devices are closed before
/// returning, on success and on error alike.
pub fn remap_device(config: &Config) -> Result<RunStats> {
    let mut source = SourceDevice::open(&config.device)?;
    let mut sink = UinputDevice::open(&config.uinput)?;
    source.grab()?;

    capability::mirror(&source.capabilities(), &config.identity, &mut sink)?;

    let mut translator = Translator::new(config.keymap.clone(), config.base_speed);
    let stats = remap::run(&mut source, &mut sink, &mut translator)?;

    if let Err(err) = sink.destroy() {
        log::warn!("destroying synthetic device failed: {}", err);
    }
    Ok(stats)
}
