use std::fmt;

use crate::atom;

// --- Tagged u64 Constants ---
// Bits 63..60 = tag  (4 bits, 16 possible types)
// Bits 59..0  = payload (60 bits)

const TAG_SHIFT: u32 = 60;
const PAYLOAD_MASK: u64 = (1u64 << 60) - 1; // 0x0FFF_FFFF_FFFF_FFFF

// Tags
pub const TAG_INT: u64 = 0; // i60 inline (most common -> tag 0 for speed)
pub const TAG_ATOM: u64 = 1; // index into the well-known atom table
pub const TAG_BINARY: u64 = 2;
pub const TAG_TUPLE: u64 = 3;
pub const TAG_BOXED_INT: u64 = 4; // 64-bit integer stored on the heap
// 5-15 reserved for the host VM

// i60 range constants
pub const I60_MIN: i64 = -(1i64 << 59);
pub const I60_MAX: i64 = (1i64 << 59) - 1;

// Compile-time guards
const _: () = assert!(TAG_INT < 16, "tag must fit in 4 bits");
const _: () = assert!(TAG_ATOM < 16, "tag must fit in 4 bits");
const _: () = assert!(TAG_BINARY < 16, "tag must fit in 4 bits");
const _: () = assert!(TAG_TUPLE < 16, "tag must fit in 4 bits");
const _: () = assert!(TAG_BOXED_INT < 16, "tag must fit in 4 bits");

/// A managed term: either an immediate (small integer, atom) or a
/// handle into the heap (binary, tuple, boxed integer). Opaque to
/// native code except through these constructors and accessors.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Value(pub u64);

impl Value {
    // --- Constructors ---

    #[inline]
    pub fn int(val: i64) -> Self {
        Value((TAG_INT << TAG_SHIFT) | ((val as u64) & PAYLOAD_MASK))
    }

    #[inline]
    pub fn atom(id: u32) -> Self {
        Value((TAG_ATOM << TAG_SHIFT) | (id as u64))
    }

    #[inline]
    pub fn binary(handle: u32) -> Self {
        Value::make_obj(TAG_BINARY, handle)
    }

    #[inline]
    pub fn tuple(handle: u32) -> Self {
        Value::make_obj(TAG_TUPLE, handle)
    }

    #[inline]
    pub fn boxed_int(handle: u32) -> Self {
        Value::make_obj(TAG_BOXED_INT, handle)
    }

    #[inline]
    fn make_obj(tag: u64, handle: u32) -> Self {
        Value((tag << TAG_SHIFT) | (handle as u64))
    }

    // --- Checkers ---

    #[inline]
    pub fn tag(&self) -> u64 {
        (self.0 >> TAG_SHIFT) & 0xF
    }

    #[inline]
    pub fn is_int(&self) -> bool {
        self.tag() == TAG_INT
    }

    #[inline]
    pub fn is_atom(&self) -> bool {
        self.tag() == TAG_ATOM
    }

    #[inline]
    pub fn is_obj(&self) -> bool {
        self.tag() >= TAG_BINARY
    }

    #[inline]
    pub fn is_binary(&self) -> bool {
        self.tag() == TAG_BINARY
    }

    #[inline]
    pub fn is_tuple(&self) -> bool {
        self.tag() == TAG_TUPLE
    }

    #[inline]
    pub fn is_boxed_int(&self) -> bool {
        self.tag() == TAG_BOXED_INT
    }

    /// True for any integer term, inline or boxed. Unboxing the wide
    /// form needs the heap; see [`crate::Heap::unbox_int64`].
    #[inline]
    pub fn is_any_integer(&self) -> bool {
        self.is_int() || self.is_boxed_int()
    }

    // --- Accessors ---

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        if self.tag() != TAG_INT {
            return None;
        }
        let raw = self.0 & PAYLOAD_MASK;
        // Sign-extend from bit 59
        let extended = if raw & (1u64 << 59) != 0 {
            raw | !PAYLOAD_MASK // fill upper bits with 1s
        } else {
            raw
        };
        Some(extended as i64)
    }

    #[inline]
    pub fn as_atom(&self) -> Option<u32> {
        if self.is_atom() {
            Some((self.0 & 0xFFFFFFFF) as u32)
        } else {
            None
        }
    }

    #[inline]
    pub fn as_handle(&self) -> Option<u32> {
        if self.is_obj() {
            Some((self.0 & 0xFFFFFFFF) as u32)
        } else {
            None
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_int() {
            write!(f, "Int({})", self.as_int().unwrap())
        } else if self.is_atom() {
            let id = self.as_atom().unwrap();
            match atom::name(id) {
                Some(name) => write!(f, "Atom({})", name),
                None => write!(f, "Atom(#{})", id),
            }
        } else if self.is_binary() {
            write!(f, "Binary({})", self.as_handle().unwrap())
        } else if self.is_tuple() {
            write!(f, "Tuple({})", self.as_handle().unwrap())
        } else if self.is_boxed_int() {
            write!(f, "BoxedInt({})", self.as_handle().unwrap())
        } else {
            write!(f, "Unknown(Bits: {:x})", self.0)
        }
    }
}
