use log::debug;
use spin::RwLock;

use crate::ops::{CacheSyncOps, Coherent, Direction};

const DEFAULT_OPS: &dyn CacheSyncOps = &Coherent;

static ACTIVE: CacheSync = CacheSync::new();

/// Dispatches cache maintenance requests to the registered
/// [`CacheSyncOps`] table.
///
/// The table defaults to [`Coherent`] and is replaced once, by the
/// platform, during single-threaded startup before any non-coherent DMA
/// traffic. The lock makes installation visible to all later dispatches
/// and makes a replacement atomic with respect to them; it does not make
/// registering concurrently with live DMA traffic a supported pattern.
pub struct CacheSync {
    ops: RwLock<&'static dyn CacheSyncOps>,
}

impl CacheSync {
    pub const fn new() -> Self {
        Self {
            ops: RwLock::new(DEFAULT_OPS),
        }
    }

    /// Replaces the active table. All subsequent dispatches observe `ops`.
    pub fn register(&self, ops: &'static dyn CacheSyncOps) {
        *self.ops.write() = ops;
        debug!("cache sync ops installed");
    }

    /// Maintenance before `[paddr, paddr + size)` is handed to the device.
    pub fn sync_for_device(&self, paddr: usize, size: usize, dir: Direction) {
        let ops = self.ops.read();
        match dir {
            Direction::ToDevice => ops.clean_device(paddr, size, dir),
            Direction::FromDevice => ops.invalidate_device(paddr, size, dir),
            Direction::Bidirectional => ops.flush_device(paddr, size, dir),
        }
    }

    /// Maintenance after the device completed a transfer on
    /// `[paddr, paddr + size)`.
    pub fn sync_for_cpu(&self, paddr: usize, size: usize, dir: Direction) {
        let ops = self.ops.read();
        match dir {
            Direction::ToDevice => ops.clean_cpu(paddr, size, dir),
            Direction::FromDevice => ops.invalidate_cpu(paddr, size, dir),
            Direction::Bidirectional => ops.flush_cpu(paddr, size, dir),
        }
    }

    /// Zero-fills a freshly allocated region and flushes it on both the
    /// device and the CPU side, so neither observes pre-allocation
    /// garbage through a stale line.
    ///
    /// # Safety
    ///
    /// `[paddr, paddr + size)` must be writable memory owned by the
    /// caller and directly addressable at `paddr`.
    pub unsafe fn prepare_coherent_region(&self, paddr: usize, size: usize) {
        unsafe { core::ptr::write_bytes(paddr as *mut u8, 0, size) };
        let ops = self.ops.read();
        ops.flush_device(paddr, size, Direction::Bidirectional);
        ops.flush_cpu(paddr, size, Direction::Bidirectional);
    }
}

impl Default for CacheSync {
    fn default() -> Self {
        Self::new()
    }
}

/// Installs `ops` as the process-wide maintenance table.
///
/// Called once by the platform during startup, before concurrent DMA
/// traffic exists.
pub fn register(ops: &'static dyn CacheSyncOps) {
    ACTIVE.register(ops);
}

pub fn sync_for_device(paddr: usize, size: usize, dir: Direction) {
    ACTIVE.sync_for_device(paddr, size, dir);
}

pub fn sync_for_cpu(paddr: usize, size: usize, dir: Direction) {
    ACTIVE.sync_for_cpu(paddr, size, dir);
}

/// See [`CacheSync::prepare_coherent_region`].
///
/// # Safety
///
/// `[paddr, paddr + size)` must be writable memory owned by the caller
/// and directly addressable at `paddr`.
pub unsafe fn prepare_coherent_region(paddr: usize, size: usize) {
    unsafe { ACTIVE.prepare_coherent_region(paddr, size) }
}
