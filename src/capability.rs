//! Capability mirroring onto the synthetic device.
//!
//! The synthetic device must accept everything the source device can emit,
//! plus the mouse buttons and relative axes the translator synthesizes.

use crate::error::{Error, Result};
use crate::event::{BTN_LEFT, BTN_MIDDLE, BTN_RIGHT, Category, REL_X, REL_Y};
use std::collections::{BTreeMap, BTreeSet};
use std::io;

/// USB bus type from `linux/input.h`.
pub const BUS_USB: u16 = 0x03;

/// Longest device name accepted by uinput, excluding the terminating NUL.
pub const MAX_NAME_LEN: usize = 79;

/// Event categories and codes supported by a device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    categories: BTreeMap<Category, BTreeSet<u16>>,
}

impl Capabilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a category as supported.
    pub fn insert_category(&mut self, category: Category) {
        self.categories.entry(category).or_default();
    }

    /// Mark a code as supported, implying its category.
    pub fn insert_code(&mut self, category: Category, code: u16) {
        self.categories.entry(category).or_default().insert(code);
    }

    /// Mark several codes of one category as supported.
    pub fn extend_codes(&mut self, category: Category, codes: impl IntoIterator<Item = u16>) {
        self.categories.entry(category).or_default().extend(codes);
    }

    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains_key(&category)
    }

    pub fn has_code(&self, category: Category, code: u16) -> bool {
        self.categories
            .get(&category)
            .is_some_and(|codes| codes.contains(&code))
    }

    /// Supported categories in ascending order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.keys().copied()
    }

    /// Supported codes of a category in ascending order.
    pub fn codes(&self, category: Category) -> impl Iterator<Item = u16> + '_ {
        self.categories
            .get(&category)
            .into_iter()
            .flat_map(|codes| codes.iter().copied())
    }

    /// Whether every category and code in `self` is also in `other`.
    pub fn is_subset(&self, other: &Capabilities) -> bool {
        self.categories.iter().all(|(category, codes)| {
            other
                .categories
                .get(category)
                .is_some_and(|theirs| codes.is_subset(theirs))
        })
    }
}

/// Identification metadata of the synthetic device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceIdentity {
    pub bus_type: u16,
    pub vendor: u16,
    pub product: u16,
    pub version: u16,
    pub name: String,
}

impl Default for DeviceIdentity {
    fn default() -> Self {
        Self {
            bus_type: BUS_USB,
            vendor: 0xcccc,
            product: 0xcccc,
            version: 0,
            name: "Keyboard Mouse".into(),
        }
    }
}

impl DeviceIdentity {
    /// Check that the name fits the uinput setup record.
    pub fn validate(&self) -> Result<()> {
        if self.name.len() > MAX_NAME_LEN || self.name.as_bytes().contains(&0) {
            return Err(Error::InvalidName(self.name.clone()));
        }
        Ok(())
    }
}

/// Control channel of a not-yet-created synthetic device.
pub trait DeviceControl {
    /// Register a supported category.
    fn enable_category(&mut self, category: Category) -> io::Result<()>;

    /// Register a supported code within a code-carrying category.
    fn enable_code(&mut self, category: Category, code: u16) -> io::Result<()>;

    /// Set the identification metadata.
    fn set_identity(&mut self, identity: &DeviceIdentity) -> io::Result<()>;

    /// Finalize and create the device.
    fn create(&mut self) -> io::Result<()>;

    /// Tear down a created device.
    fn destroy(&mut self) -> io::Result<()>;
}

/// Capabilities added to the synthetic device regardless of the source.
pub fn mouse_capabilities() -> Capabilities {
    let mut caps = Capabilities::new();
    caps.extend_codes(Category::KEY, [BTN_LEFT, BTN_MIDDLE, BTN_RIGHT]);
    caps.extend_codes(Category::RELATIVE, [REL_X, REL_Y]);
    caps
}

/// Register `source` plus the mouse capabilities on `sink`, then create it.
///
/// The sync category is left to the kernel. Categories above
/// [`Category::MAX`] are skipped.
pub fn mirror<D: DeviceControl>(
    source: &Capabilities,
    identity: &DeviceIdentity,
    sink: &mut D,
) -> Result<()> {
    identity.validate()?;

    for category in source.categories() {
        if category == Category::SYNC || category.0 > Category::MAX {
            continue;
        }
        enable(sink, source, category)?;
    }

    let extra = mouse_capabilities();
    for category in extra.categories() {
        enable(sink, &extra, category)?;
    }

    sink.set_identity(identity).map_err(Error::Setup)?;
    sink.create().map_err(Error::Create)?;
    log::info!(
        "created synthetic device \"{}\" ({:04x}:{:04x})",
        identity.name,
        identity.vendor,
        identity.product
    );
    Ok(())
}

fn enable<D: DeviceControl>(sink: &mut D, caps: &Capabilities, category: Category) -> Result<()> {
    sink.enable_category(category)
        .map_err(|source| Error::EnableCategory { category: category.0, source })?;

    if !category.carries_codes() {
        return Ok(());
    }

    let mut count = 0usize;
    for code in caps.codes(category) {
        sink.enable_code(category, code)
            .map_err(|source| Error::EnableCode {
                category: category.0,
                code,
                source,
            })?;
        count += 1;
    }
    log::debug!("mirrored category {} with {} codes", category.0, count);
    Ok(())
}
