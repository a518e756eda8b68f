//! Runtime configuration.

use crate::capability::DeviceIdentity;
use crate::keymap::Keymap;
use crate::state::DEFAULT_BASE_SPEED;
use std::path::PathBuf;

/// Default uinput control node.
pub const DEFAULT_UINPUT_PATH: &str = "/dev/uinput";

/// Everything needed for one remapping session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Source device node, e.g. `/dev/input/event3`.
    pub device: PathBuf,
    /// uinput node used to create the synthetic device.
    pub uinput: PathBuf,
    pub identity: DeviceIdentity,
    /// Motion magnitude of the first synthesized step.
    pub base_speed: i32,
    pub keymap: Keymap,
}

impl Config {
    /// Defaults for everything but the source device.
    pub fn new(device: impl Into<PathBuf>) -> Self {
        Self {
            device: device.into(),
            uinput: PathBuf::from(DEFAULT_UINPUT_PATH),
            identity: DeviceIdentity::default(),
            base_speed: DEFAULT_BASE_SPEED,
            keymap: Keymap::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("/dev/input/event0");
        assert_eq!(config.device, PathBuf::from("/dev/input/event0"));
        assert_eq!(config.uinput, PathBuf::from("/dev/uinput"));
        assert_eq!(config.base_speed, 10);
        assert_eq!(config.identity.vendor, 0xcccc);
        assert_eq!(config.keymap, Keymap::default());
    }
}
