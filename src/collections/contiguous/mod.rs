//! Contiguous collection types. Namely [`DynamicArray`], a sequence which grows at runtime.

mod buffer;
pub mod dynamic_array;

#[doc(inline)]
pub use dynamic_array::{Access, DEFAULT_CAP, DynamicArray, GROWTH_CHUNK, OutOfRange};
