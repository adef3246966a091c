/// Direction of a DMA transfer, relative to main memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The device reads memory the CPU wrote.
    ToDevice,
    /// The device writes memory the CPU will read.
    FromDevice,
    /// Both sides read and write the buffer.
    Bidirectional,
}

/// Cache maintenance strategy of one platform.
///
/// Each method covers one slot of the maintenance table: `*_device`
/// operations run before a buffer is handed to the device, `*_cpu`
/// operations after the device signals completion. A platform overrides
/// only the slots its hardware needs; the default body is a no-op, which
/// is the correct behavior for a path that is coherent by design.
///
/// Implementations must not block or allocate. Dispatch may happen in
/// interrupt context.
pub trait CacheSyncOps: Sync {
    /// Drop cached lines in `[paddr, paddr + size)` before the device
    /// writes the range.
    fn invalidate_device(&self, paddr: usize, size: usize, dir: Direction) {
        let _ = (paddr, size, dir);
    }

    /// Write dirty lines in `[paddr, paddr + size)` back to memory before
    /// the device reads the range.
    fn clean_device(&self, paddr: usize, size: usize, dir: Direction) {
        let _ = (paddr, size, dir);
    }

    /// Clean and invalidate, for bidirectional buffers.
    fn flush_device(&self, paddr: usize, size: usize, dir: Direction) {
        let _ = (paddr, size, dir);
    }

    /// CPU-side mirror of [`invalidate_device`](Self::invalidate_device),
    /// run after a device write completes.
    fn invalidate_cpu(&self, paddr: usize, size: usize, dir: Direction) {
        let _ = (paddr, size, dir);
    }

    /// CPU-side mirror of [`clean_device`](Self::clean_device).
    fn clean_cpu(&self, paddr: usize, size: usize, dir: Direction) {
        let _ = (paddr, size, dir);
    }

    /// CPU-side mirror of [`flush_device`](Self::flush_device).
    fn flush_cpu(&self, paddr: usize, size: usize, dir: Direction) {
        let _ = (paddr, size, dir);
    }
}

/// Maintenance table of a fully coherent platform: every slot no-ops.
///
/// This is the table in effect until [`register`](crate::register) is
/// called.
pub struct Coherent;

impl CacheSyncOps for Coherent {}
