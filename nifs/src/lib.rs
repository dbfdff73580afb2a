//! Platform native functions for the Tern VM.
//!
//! Five privileged operations exposed to managed bytecode through a
//! static name registry: retained RTC memory set/get, MAC identity,
//! SHA-1 digest, and wall-clock control. The managed-term contract
//! (tagged values, bounded heap) lives in the `memory` crate; the
//! interpreter, collector and module loader are the host's.

pub mod context;
pub mod error;
pub mod platform;
pub mod registry;
pub mod rtc;
pub mod sys;

pub use context::{Context, GlobalContext};
pub use error::NifError;
pub use registry::{get_nif, init, Nif, NifFn};
pub use rtc::{RtcMemory, RTC_MEMORY_SIZE};
pub use sys::{HostSys, SysApi};
