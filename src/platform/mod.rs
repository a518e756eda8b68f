//! Platform-specific device access.

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "linux")]
pub use linux::*;

// evdev and uinput exist only on Linux
#[cfg(not(target_os = "linux"))]
compile_error!("keymouse only supports Linux");
