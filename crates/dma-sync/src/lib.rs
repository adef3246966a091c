#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod device;
mod dispatch;
mod ops;

pub use device::{DeviceDmaConfig, DeviceId, configure_device_dma, is_device_coherent};
pub use dispatch::{CacheSync, prepare_coherent_region, register, sync_for_cpu, sync_for_device};
pub use ops::{CacheSyncOps, Coherent, Direction};
