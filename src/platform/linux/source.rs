//! Source keyboard read through evdev.
//!
//! The device is opened blocking and grabbed exclusively, so nothing else on
//! the system sees its unfiltered events.

use super::raw_to_event;
use crate::capability::Capabilities;
use crate::channel::EventSource;
use crate::error::{Error, Result};
use crate::event::{Category, Event};
use evdev::raw_stream::RawDevice;
use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};

/// A grabbed physical input device.
pub struct SourceDevice {
    device: RawDevice,
    path: PathBuf,
    pending: VecDeque<Event>,
}

impl SourceDevice {
    /// Open the device node and read its capabilities.
    pub fn open(path: &Path) -> Result<Self> {
        let device = RawDevice::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!(
            "opened {} ({})",
            path.display(),
            device.name().unwrap_or("unknown")
        );

        Ok(Self {
            device,
            path: path.to_path_buf(),
            pending: VecDeque::new(),
        })
    }

    /// Take exclusive access to the device.
    pub fn grab(&mut self) -> Result<()> {
        self.device.grab().map_err(|source| Error::Grab {
            path: self.path.clone(),
            source,
        })?;
        log::info!("grabbed {}", self.path.display());
        Ok(())
    }

    /// Snapshot of the categories and codes the device reports.
    pub fn capabilities(&self) -> Capabilities {
        let device = &self.device;
        let mut caps = Capabilities::new();

        for category in device.supported_events().iter() {
            caps.insert_category(Category(category.0));
        }
        if let Some(keys) = device.supported_keys() {
            caps.extend_codes(Category::KEY, keys.iter().map(|key| key.code()));
        }
        if let Some(axes) = device.supported_relative_axes() {
            caps.extend_codes(Category::RELATIVE, axes.iter().map(|axis| axis.0));
        }
        if let Some(axes) = device.supported_absolute_axes() {
            caps.extend_codes(Category::ABSOLUTE, axes.iter().map(|axis| axis.0));
        }
        if let Some(misc) = device.misc_properties() {
            caps.extend_codes(Category::MISC, misc.iter().map(|msc| msc.0));
        }
        if let Some(switches) = device.supported_switches() {
            caps.extend_codes(Category::SWITCH, switches.iter().map(|sw| sw.0));
        }
        if let Some(leds) = device.supported_leds() {
            caps.extend_codes(Category::LED, leds.iter().map(|led| led.0));
        }
        if let Some(sounds) = device.supported_sounds() {
            caps.extend_codes(Category::SOUND, sounds.iter().map(|snd| snd.0));
        }
        if let Some(effects) = device.supported_ff() {
            caps.extend_codes(Category::FORCE_FEEDBACK, effects.iter().map(|ff| ff.0));
        }

        caps
    }

    fn fill(&mut self) {
        loop {
            match self.device.fetch_events() {
                Ok(events) => {
                    self.pending
                        .extend(events.map(|event| raw_to_event(event.as_ref())));
                    return;
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    log::warn!("reading {} failed: {}", self.path.display(), err);
                    return;
                }
            }
        }
    }
}

impl EventSource for SourceDevice {
    fn read_event(&mut self) -> Option<Event> {
        if self.pending.is_empty() {
            // An empty refill means end of file
            self.fill();
        }
        self.pending.pop_front()
    }
}
