//! The five platform NIFs. Each validates its managed arguments,
//! proves heap space for any result it must construct, performs the
//! privileged operation, and marshals the result back as a new term.

use memory::heap::{binary_heap_size, tuple_heap_size};
use memory::{atom, Value};
use sha1::{Digest, Sha1};

use crate::context::Context;
use crate::error::NifError;

/// Length of the hardware-assigned address, in bytes.
pub const MAC_LEN: usize = 6;

/// Length of a SHA-1 digest, in bytes.
pub const SHA1_LEN: usize = 20;

/// `tern_lib:set_rtc_memory/1` — overwrite the retained buffer.
///
/// Rejection is atomic: an oversize or non-binary argument leaves the
/// stored bytes and length untouched. No heap allocation happens on
/// this path.
pub fn nif_set_rtc_memory(ctx: &mut Context, args: &[Value]) -> Result<Value, NifError> {
    let binary = *args.first().ok_or(NifError::BadArg)?;
    if !binary.is_binary() {
        return Err(NifError::BadArg);
    }
    let handle = binary.as_handle().ok_or(NifError::BadArg)?;
    let bytes = ctx.heap.get_binary(handle).ok_or(NifError::BadArg)?;

    ctx.global.rtc.write(bytes).map_err(|_| NifError::BadArg)?;
    Ok(Value::atom(atom::OK))
}

/// `tern_lib:get_rtc_memory/0` — copy the retained buffer out.
///
/// Non-destructive: the store keeps its length and contents. Boot
/// state reads back as the empty binary.
pub fn nif_get_rtc_memory(ctx: &mut Context, _args: &[Value]) -> Result<Value, NifError> {
    let len = ctx.global.rtc.len();
    ctx.heap.ensure_free(binary_heap_size(len))?;

    let copy = ctx.global.rtc.read().to_vec();
    let handle = ctx.heap.alloc_binary(copy);
    Ok(Value::binary(handle))
}

/// `tern_lib:get_mac/0` — the device identity as 12 lowercase hex
/// characters, no separators, no prefix.
pub fn nif_get_mac(ctx: &mut Context, _args: &[Value]) -> Result<Value, NifError> {
    let mac = ctx.global.sys.mac_address();

    ctx.heap.ensure_free(binary_heap_size(2 * MAC_LEN))?;
    let buf = format!(
        "{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
        mac[0], mac[1], mac[2], mac[3], mac[4], mac[5]
    );
    let handle = ctx.heap.alloc_binary(buf.into_bytes());
    Ok(Value::binary(handle))
}

/// `tern_lib:sha1/1` — 160-bit digest of a binary of any length.
pub fn nif_sha1(ctx: &mut Context, args: &[Value]) -> Result<Value, NifError> {
    let binary = *args.first().ok_or(NifError::BadArg)?;
    if !binary.is_binary() {
        return Err(NifError::BadArg);
    }
    let handle = binary.as_handle().ok_or(NifError::BadArg)?;

    ctx.heap.ensure_free(binary_heap_size(SHA1_LEN))?;
    // Fetch the input only after the space check: a collecting host
    // may have moved binaries while making room.
    let bytes = ctx.heap.get_binary(handle).ok_or(NifError::BadArg)?;
    let digest = Sha1::digest(bytes);

    let out = ctx.heap.alloc_binary(digest.to_vec());
    Ok(Value::binary(out))
}

/// `tern_lib:set_time_of_day/1` — set the wall clock from milliseconds
/// since the Unix epoch.
///
/// Success allocates nothing and returns the `ok` atom. An OS failure
/// is a recoverable, returned `{error, Errno}` tuple rather than a
/// raised condition. The tuple headroom is proven *before* the clock
/// is touched, so a starved heap raises `OutOfMemory` with the clock
/// unchanged instead of losing the error code after the fact.
pub fn nif_set_time_of_day(ctx: &mut Context, args: &[Value]) -> Result<Value, NifError> {
    let val = *args.first().ok_or(NifError::BadArg)?;
    if !val.is_any_integer() {
        return Err(NifError::BadArg);
    }
    let ms_since_epoch = ctx.heap.unbox_int64(val).ok_or(NifError::BadArg)?;

    ctx.heap.ensure_free(tuple_heap_size(2))?;

    let secs = ms_since_epoch.div_euclid(1000);
    let micros = ms_since_epoch.rem_euclid(1000) * 1000;

    match ctx.global.sys.set_clock(secs, micros) {
        Ok(()) => Ok(Value::atom(atom::OK)),
        Err(code) => {
            let handle = ctx
                .heap
                .alloc_tuple(vec![Value::atom(atom::ERROR), Value::int(code as i64)]);
            Ok(Value::tuple(handle))
        }
    }
}
