use thiserror::Error;

use crate::Value;

/// Managed word size used by the heap-cost functions.
pub const WORD_SIZE: usize = 8;

/// Heap capacity a fresh context starts with, in bytes.
pub const DEFAULT_HEAP_CAPACITY: usize = 256 * 1024;

/// Bytes a binary of `len` payload bytes occupies on the managed heap:
/// a two-word header plus the payload rounded up to whole words.
pub fn binary_heap_size(len: usize) -> usize {
    let payload_words = len.div_ceil(WORD_SIZE);
    (2 + payload_words) * WORD_SIZE
}

/// Bytes an `arity`-element tuple occupies: one header word plus one
/// word per element.
pub fn tuple_heap_size(arity: usize) -> usize {
    (1 + arity) * WORD_SIZE
}

/// Bytes a boxed 64-bit integer occupies: header word plus value word.
pub fn boxed_int_heap_size() -> usize {
    2 * WORD_SIZE
}

/// The heap refused to guarantee space for a requested allocation.
/// The caller must give the host collector a chance to run (or grow
/// the heap) before retrying; `request_gc` is already set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("managed heap cannot guarantee {requested} bytes ({free} free)")]
pub struct HeapExhausted {
    pub requested: usize,
    pub free: usize,
}

/// The managed heap contract native code is written against.
///
/// Arenas hold the composite terms; `bytes_allocated` tracks their
/// managed-word cost against a fixed capacity. There is no collector
/// here — collection belongs to the host VM, which polls `request_gc`
/// the way the interpreter loop polls its GC flag between calls.
///
/// Discipline: every `alloc_*` must be preceded by an `ensure_free`
/// for the same cost on the same logical call. `ensure_free` is the
/// only thing standing between a composite-term construction and a
/// collector with no headroom.
pub struct Heap {
    binaries: Vec<Vec<u8>>,
    tuples: Vec<Vec<Value>>,
    boxed_ints: Vec<i64>,
    bytes_allocated: usize,
    capacity: usize,
    /// Set when an allocation check fails; cleared by the host after
    /// it has collected.
    pub request_gc: bool,
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}

impl Heap {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HEAP_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            binaries: Vec::new(),
            tuples: Vec::new(),
            boxed_ints: Vec::new(),
            bytes_allocated: 0,
            capacity,
            request_gc: false,
        }
    }

    /// Check that `bytes` of managed space can be guaranteed before a
    /// construction begins. On refusal, flags the host for collection
    /// and returns the exhaustion marker; nothing is allocated.
    pub fn ensure_free(&mut self, bytes: usize) -> Result<(), HeapExhausted> {
        let free = self.capacity.saturating_sub(self.bytes_allocated);
        if bytes > free {
            self.request_gc = true;
            return Err(HeapExhausted {
                requested: bytes,
                free,
            });
        }
        Ok(())
    }

    pub fn bytes_allocated(&self) -> usize {
        self.bytes_allocated
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn alloc_binary(&mut self, bytes: Vec<u8>) -> u32 {
        self.bytes_allocated += binary_heap_size(bytes.len());
        let handle = self.binaries.len() as u32;
        self.binaries.push(bytes);
        handle
    }

    pub fn get_binary(&self, handle: u32) -> Option<&[u8]> {
        self.binaries.get(handle as usize).map(|b| b.as_slice())
    }

    pub fn alloc_tuple(&mut self, elements: Vec<Value>) -> u32 {
        self.bytes_allocated += tuple_heap_size(elements.len());
        let handle = self.tuples.len() as u32;
        self.tuples.push(elements);
        handle
    }

    pub fn get_tuple(&self, handle: u32) -> Option<&[Value]> {
        self.tuples.get(handle as usize).map(|t| t.as_slice())
    }

    pub fn alloc_boxed_int(&mut self, val: i64) -> u32 {
        self.bytes_allocated += boxed_int_heap_size();
        let handle = self.boxed_ints.len() as u32;
        self.boxed_ints.push(val);
        handle
    }

    pub fn get_boxed_int(&self, handle: u32) -> Option<i64> {
        self.boxed_ints.get(handle as usize).copied()
    }

    /// Widen any integer term to i64, unboxing through the heap when
    /// the value does not fit the inline i60 form.
    pub fn unbox_int64(&self, val: Value) -> Option<i64> {
        if let Some(i) = val.as_int() {
            return Some(i);
        }
        if val.is_boxed_int() {
            return self.get_boxed_int(val.as_handle()?);
        }
        None
    }
}
