use thiserror::Error;

/// Capacity in bytes of the retained RTC region. Fixed at build time;
/// this is the library's sole tunable.
pub const RTC_MEMORY_SIZE: usize = 1024;

/// A write larger than the retained region. Nothing was copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("write of {0} bytes exceeds retained capacity of {RTC_MEMORY_SIZE}")]
pub struct CapacityExceeded(pub usize);

/// The byte buffer that lives in retained memory and survives a warm
/// reset. Boots empty; only [`RtcMemory::write`] transitions its
/// state, and writes are all-or-nothing.
pub struct RtcMemory {
    data: [u8; RTC_MEMORY_SIZE],
    len: usize,
}

impl Default for RtcMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl RtcMemory {
    pub fn new() -> Self {
        Self {
            data: [0; RTC_MEMORY_SIZE],
            len: 0,
        }
    }

    /// Overwrite the stored contents. Oversize input is rejected
    /// whole: the previous length and bytes stay untouched.
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), CapacityExceeded> {
        if bytes.len() > RTC_MEMORY_SIZE {
            return Err(CapacityExceeded(bytes.len()));
        }
        self.data[..bytes.len()].copy_from_slice(bytes);
        self.len = bytes.len();
        Ok(())
    }

    /// The currently stored bytes. Reading never mutates the store.
    pub fn read(&self) -> &[u8] {
        &self.data[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
