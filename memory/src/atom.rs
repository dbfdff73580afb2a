//! Well-known atoms shared between the host VM and native code.
//!
//! The real atom table lives in the host; native code only ever needs
//! the handful of result markers below, so they are pinned to fixed
//! ids the host is expected to honor.

pub const OK: u32 = 0;
pub const ERROR: u32 = 1;

const NAMES: [&str; 2] = ["ok", "error"];

/// Printable name of a well-known atom, if the id is one of ours.
pub fn name(id: u32) -> Option<&'static str> {
    NAMES.get(id as usize).copied()
}
