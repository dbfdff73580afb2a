use memory::HeapExhausted;
use thiserror::Error;

/// Raised error kinds a NIF can signal back to the host VM.
///
/// Both are fatal to the current operation; the host maps them onto
/// its raise channel. The recoverable clock failure is *not* here —
/// it travels as a returned `{error, Errno}` tuple term, so callers
/// can inspect it without unwinding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NifError {
    /// Wrong value shape or a size constraint was violated.
    #[error("bad argument")]
    BadArg,
    /// The managed heap could not guarantee space for the result. The
    /// host must let its collector run before retrying the call.
    #[error("out of memory")]
    OutOfMemory,
}

impl From<HeapExhausted> for NifError {
    fn from(_: HeapExhausted) -> Self {
        NifError::OutOfMemory
    }
}
