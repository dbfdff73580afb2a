use memory::heap::{binary_heap_size, boxed_int_heap_size, tuple_heap_size, WORD_SIZE};
use memory::{atom, Heap, Value};

#[test]
fn test_heap_cost_functions() {
    // Header words only for the empty binary
    assert_eq!(binary_heap_size(0), 2 * WORD_SIZE);
    // Payload rounds up to whole words
    assert_eq!(binary_heap_size(1), 3 * WORD_SIZE);
    assert_eq!(binary_heap_size(8), 3 * WORD_SIZE);
    assert_eq!(binary_heap_size(9), 4 * WORD_SIZE);

    assert_eq!(tuple_heap_size(2), 3 * WORD_SIZE);
    assert_eq!(boxed_int_heap_size(), 2 * WORD_SIZE);
}

#[test]
fn test_ensure_free_within_capacity() {
    let mut heap = Heap::with_capacity(1024);
    assert!(heap.ensure_free(binary_heap_size(100)).is_ok());
    assert!(!heap.request_gc);
}

#[test]
fn test_ensure_free_refusal_flags_gc() {
    let mut heap = Heap::with_capacity(64);
    let err = heap.ensure_free(128).unwrap_err();
    assert_eq!(err.requested, 128);
    assert_eq!(err.free, 64);
    assert!(heap.request_gc, "refusal must flag the host for collection");
    // Refusal allocates nothing
    assert_eq!(heap.bytes_allocated(), 0);
}

#[test]
fn test_alloc_binary_accounting_and_readback() {
    let mut heap = Heap::with_capacity(1024);
    let payload = vec![1u8, 2, 3, 4, 5];
    heap.ensure_free(binary_heap_size(payload.len())).unwrap();
    let h = heap.alloc_binary(payload.clone());
    assert_eq!(heap.get_binary(h), Some(payload.as_slice()));
    assert_eq!(heap.bytes_allocated(), binary_heap_size(5));
    assert_eq!(heap.get_binary(h + 1), None);
}

#[test]
fn test_alloc_tuple_readback() {
    let mut heap = Heap::with_capacity(1024);
    heap.ensure_free(tuple_heap_size(2)).unwrap();
    let h = heap.alloc_tuple(vec![Value::atom(atom::ERROR), Value::int(22)]);
    let elems = heap.get_tuple(h).unwrap();
    assert_eq!(elems, &[Value::atom(atom::ERROR), Value::int(22)]);
}

#[test]
fn test_unbox_int64_inline_and_boxed() {
    let mut heap = Heap::with_capacity(1024);

    assert_eq!(heap.unbox_int64(Value::int(42)), Some(42));
    assert_eq!(heap.unbox_int64(Value::int(-42)), Some(-42));

    heap.ensure_free(boxed_int_heap_size()).unwrap();
    let h = heap.alloc_boxed_int(i64::MAX);
    assert_eq!(heap.unbox_int64(Value::boxed_int(h)), Some(i64::MAX));

    assert_eq!(heap.unbox_int64(Value::atom(atom::OK)), None);
    assert_eq!(heap.unbox_int64(Value::binary(0)), None);
}

#[test]
fn test_fresh_heap_starts_empty() {
    let heap = Heap::new();
    assert_eq!(heap.bytes_allocated(), 0);
    assert!(!heap.request_gc);
    assert!(heap.capacity() > 0);
}
