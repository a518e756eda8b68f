//! Error types for device setup and event forwarding.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for keymouse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort the remapper.
///
/// Ending the source stream is not an error; see [`crate::remap::run`].
#[derive(Debug, Error)]
pub enum Error {
    /// A device node could not be opened or its capabilities read.
    #[error("failed trying to open \"{}\": {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Exclusive access to the source device was refused.
    #[error("grabbing input device \"{}\" failed: {source}", path.display())]
    Grab {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A category could not be registered on the synthetic device.
    #[error("setting event bit {category} on the synthetic device failed: {source}")]
    EnableCategory {
        category: u16,
        #[source]
        source: io::Error,
    },

    /// A code could not be registered on the synthetic device.
    #[error("setting code {code} for event {category} on the synthetic device failed: {source}")]
    EnableCode {
        category: u16,
        code: u16,
        #[source]
        source: io::Error,
    },

    /// The device name does not fit the uinput setup record.
    #[error("invalid device name {0:?}: at most 79 bytes and no NUL")]
    InvalidName(String),

    /// Setting the device identity failed.
    #[error("setup on the synthetic device failed: {0}")]
    Setup(#[source] io::Error),

    /// Creating the synthetic device failed.
    #[error("device creation on the synthetic device failed: {0}")]
    Create(#[source] io::Error),

    /// Writing an event to the synthetic device failed.
    #[error("writing to the synthetic device failed: {0}")]
    Write(#[source] io::Error),
}
