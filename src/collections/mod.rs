//! Collection types.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! provides borrowed iteration and the rest of the slice API for free.

pub mod contiguous;
