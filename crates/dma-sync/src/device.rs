use alloc::collections::btree_map::BTreeMap;

use log::debug;
use spin::RwLock;

static CONFIG: DeviceDmaConfig = DeviceDmaConfig::new();

/// Identifies one DMA-capable device instance.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DeviceId(u64);

impl DeviceId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for DeviceId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<DeviceId> for u64 {
    fn from(value: DeviceId) -> Self {
        value.0
    }
}

/// Per-device DMA coherence flags.
///
/// A device marked coherent never needs the maintenance table; the
/// buffer-mapping layer consults the flag to skip sync calls entirely.
/// An unconfigured device reports non-coherent.
pub struct DeviceDmaConfig {
    coherent: RwLock<BTreeMap<DeviceId, bool>>,
}

impl DeviceDmaConfig {
    pub const fn new() -> Self {
        Self {
            coherent: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn configure(&self, device: DeviceId, coherent: bool) {
        self.coherent.write().insert(device, coherent);
        debug!(
            "device {:#x}: dma {}",
            device.raw(),
            if coherent { "coherent" } else { "non-coherent" }
        );
    }

    pub fn is_coherent(&self, device: DeviceId) -> bool {
        self.coherent.read().get(&device).copied().unwrap_or(false)
    }
}

impl Default for DeviceDmaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Records whether `device`'s DMA is cache-coherent by hardware design.
///
/// The dispatcher itself never consults this flag; whether a given
/// transfer is exempt from maintenance is the caller's decision, made
/// via [`is_device_coherent`] before invoking the sync entry points.
pub fn configure_device_dma(device: DeviceId, coherent: bool) {
    CONFIG.configure(device, coherent);
}

pub fn is_device_coherent(device: DeviceId) -> bool {
    CONFIG.is_coherent(device)
}
