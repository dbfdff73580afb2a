use memory::Heap;

use crate::rtc::RtcMemory;
use crate::sys::SysApi;

/// Process-wide VM state visible to native code: the retained RTC
/// store and the injected system driver. Owned for the life of the
/// process by whoever embeds the VM; never a `static`.
pub struct GlobalContext {
    pub rtc: RtcMemory,
    pub sys: Box<dyn SysApi>,
}

impl GlobalContext {
    pub fn new(sys: Box<dyn SysApi>) -> Self {
        Self {
            rtc: RtcMemory::new(),
            sys,
        }
    }
}

/// The per-call execution environment handed `&mut` into every NIF:
/// the managed heap plus the global state. The exclusive borrow is
/// what makes the heap's check-then-construct discipline sound — no
/// other heap mutation can interleave within one call.
pub struct Context {
    pub heap: Heap,
    pub global: GlobalContext,
}

impl Context {
    pub fn new(global: GlobalContext) -> Self {
        Self {
            heap: Heap::new(),
            global,
        }
    }

    /// A context over a heap of the given byte capacity. Small
    /// capacities are how tests starve the allocation checks.
    pub fn with_heap_capacity(global: GlobalContext, capacity: usize) -> Self {
        Self {
            heap: Heap::with_capacity(capacity),
            global,
        }
    }
}
