//! Synthetic device created through `/dev/uinput`.
//!
//! Capabilities are registered one bit at a time with the `UI_SET_*BIT`
//! ioctls so every category the source reports can be mirrored, which the
//! higher level evdev builder does not cover.

use super::event_to_raw;
use crate::capability::{DeviceControl, DeviceIdentity};
use crate::channel::EventSink;
use crate::error::{Error, Result};
use crate::event::{Category, Event};
use nix::{ioctl_none, ioctl_write_int, ioctl_write_ptr};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::mem;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::AsRawFd;
use std::path::Path;

const UINPUT_IOCTL_BASE: u8 = b'U';
ioctl_write_ptr!(ui_dev_setup, UINPUT_IOCTL_BASE, 3, libc::uinput_setup);
ioctl_none!(ui_dev_create, UINPUT_IOCTL_BASE, 1);
ioctl_none!(ui_dev_destroy, UINPUT_IOCTL_BASE, 2);

ioctl_write_int!(ui_set_evbit, UINPUT_IOCTL_BASE, 100);
ioctl_write_int!(ui_set_keybit, UINPUT_IOCTL_BASE, 101);
ioctl_write_int!(ui_set_relbit, UINPUT_IOCTL_BASE, 102);
ioctl_write_int!(ui_set_absbit, UINPUT_IOCTL_BASE, 103);
ioctl_write_int!(ui_set_mscbit, UINPUT_IOCTL_BASE, 104);
ioctl_write_int!(ui_set_ledbit, UINPUT_IOCTL_BASE, 105);
ioctl_write_int!(ui_set_sndbit, UINPUT_IOCTL_BASE, 106);
ioctl_write_int!(ui_set_ffbit, UINPUT_IOCTL_BASE, 107);
ioctl_write_int!(ui_set_swbit, UINPUT_IOCTL_BASE, 109);

type SetBit =
    unsafe fn(libc::c_int, nix::sys::ioctl::ioctl_param_type) -> nix::Result<libc::c_int>;

/// The `UI_SET_*BIT` request registering codes of a category.
fn code_request(category: Category) -> Option<SetBit> {
    let request: SetBit = match category {
        Category::KEY => ui_set_keybit,
        Category::RELATIVE => ui_set_relbit,
        Category::ABSOLUTE => ui_set_absbit,
        Category::MISC => ui_set_mscbit,
        Category::LED => ui_set_ledbit,
        Category::SOUND => ui_set_sndbit,
        Category::FORCE_FEEDBACK => ui_set_ffbit,
        Category::SWITCH => ui_set_swbit,
        _ => return None,
    };
    Some(request)
}

/// Build the `UI_DEV_SETUP` record. The name is NUL terminated.
fn setup_record(identity: &DeviceIdentity) -> libc::uinput_setup {
    let mut name = [0 as libc::c_char; libc::UINPUT_MAX_NAME_SIZE];
    for (dst, src) in name
        .iter_mut()
        .zip(identity.name.bytes().take(libc::UINPUT_MAX_NAME_SIZE - 1))
    {
        *dst = src as libc::c_char;
    }

    libc::uinput_setup {
        id: libc::input_id {
            bustype: identity.bus_type,
            vendor: identity.vendor,
            product: identity.product,
            version: identity.version,
        },
        name,
        ff_effects_max: 0,
    }
}

/// Open uinput handle, optionally backing a created device.
pub struct UinputDevice {
    file: File,
    created: bool,
}

impl UinputDevice {
    /// Open the uinput node write-only and non-blocking.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(path)
            .map_err(|source| Error::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            file,
            created: false,
        })
    }
}

impl DeviceControl for UinputDevice {
    fn enable_category(&mut self, category: Category) -> io::Result<()> {
        unsafe { ui_set_evbit(self.file.as_raw_fd(), category.0.into()) }?;
        Ok(())
    }

    fn enable_code(&mut self, category: Category, code: u16) -> io::Result<()> {
        let request = code_request(category).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::Unsupported,
                format!("event {} has no per-code capabilities", category.0),
            )
        })?;
        unsafe { request(self.file.as_raw_fd(), code.into()) }?;
        Ok(())
    }

    fn set_identity(&mut self, identity: &DeviceIdentity) -> io::Result<()> {
        let setup = setup_record(identity);
        unsafe { ui_dev_setup(self.file.as_raw_fd(), &setup) }?;
        Ok(())
    }

    fn create(&mut self) -> io::Result<()> {
        unsafe { ui_dev_create(self.file.as_raw_fd()) }?;
        self.created = true;
        Ok(())
    }

    fn destroy(&mut self) -> io::Result<()> {
        if !self.created {
            return Ok(());
        }
        self.created = false;
        unsafe { ui_dev_destroy(self.file.as_raw_fd()) }?;
        log::info!("destroyed synthetic device");
        Ok(())
    }
}

impl EventSink for UinputDevice {
    fn write_event(&mut self, event: &Event) -> Result<()> {
        let raw = event_to_raw(event);
        let size = mem::size_of::<libc::input_event>();
        // SAFETY: input_event is plain old data without padding we rely on.
        let bytes =
            unsafe { std::slice::from_raw_parts(&raw as *const libc::input_event as *const u8, size) };

        match self.file.write(bytes) {
            Ok(n) if n == size => Ok(()),
            Ok(_) => Err(Error::Write(io::Error::from(io::ErrorKind::WriteZero))),
            Err(err) => Err(Error::Write(err)),
        }
    }
}

impl Drop for UinputDevice {
    fn drop(&mut self) {
        if let Err(err) = self.destroy() {
            log::warn!("destroying synthetic device failed: {}", err);
        }
    }
}
