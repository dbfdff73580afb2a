pub mod atom;
pub mod heap;
pub mod value;

#[cfg(test)]
mod value_tests;

pub use heap::{Heap, HeapExhausted};
pub use value::Value;
