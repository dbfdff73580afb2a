use std::ptr;

/// Privileged host access behind the NIF layer: the fused identity
/// read and the wall-clock syscall. Injected into [`GlobalContext`]
/// as a boxed trait object so embedders (and tests) can swap the
/// driver without touching the marshaling code.
///
/// [`GlobalContext`]: crate::context::GlobalContext
pub trait SysApi {
    /// The 6-byte hardware-assigned address from the device's fused
    /// identity storage. Fixed for the life of the device.
    fn mac_address(&self) -> [u8; 6];

    /// Set the OS wall clock, no timezone offset applied. `Err`
    /// carries the OS error code.
    fn set_clock(&mut self, secs: i64, micros: i64) -> Result<(), i32>;
}

/// Hosted driver: `settimeofday(2)` for the clock, and a MAC supplied
/// by the embedder at construction (hosted builds have no fused
/// identity storage to read).
pub struct HostSys {
    mac: [u8; 6],
}

impl HostSys {
    pub fn new(mac: [u8; 6]) -> Self {
        Self { mac }
    }
}

impl SysApi for HostSys {
    fn mac_address(&self) -> [u8; 6] {
        self.mac
    }

    fn set_clock(&mut self, secs: i64, micros: i64) -> Result<(), i32> {
        let tv = libc::timeval {
            tv_sec: secs as libc::time_t,
            tv_usec: micros as libc::suseconds_t,
        };
        // SAFETY: tv is a valid timeval for the duration of the call;
        // a null timezone is the documented "don't touch tz" form.
        let res = unsafe { libc::settimeofday(&tv, ptr::null()) };
        if res != 0 {
            let code = std::io::Error::last_os_error()
                .raw_os_error()
                .unwrap_or(libc::EINVAL);
            return Err(code);
        }
        Ok(())
    }
}
