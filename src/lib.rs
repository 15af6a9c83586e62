//! A small growable array container, written against raw allocations rather than [`Vec`].
//!
//! # Purpose
//! This crate provides [`DynamicArray`](collections::contiguous::DynamicArray): an ordered,
//! index-addressable sequence backed by a single contiguous allocation. It is a teaching container
//! rather than a performance library, so some of its behavior is deliberately simple. Most
//! notably, it grows by a fixed chunk of [`GROWTH_CHUNK`](collections::contiguous::GROWTH_CHUNK)
//! slots instead of doubling.
//!
//! # Error Handling
//! Checked accessors (`front`, `back`, `at`, `pop_back` and `erase`) return a [`Result`] with a
//! strongly typed [`OutOfRange`](collections::contiguous::OutOfRange) error, rather than panicking.
//! Running out of memory is not treated as recoverable: allocation failure is passed to
//! [`handle_alloc_error`](std::alloc::handle_alloc_error) and capacity overflow panics.
//!
//! The unchecked paths (`index_unchecked` and `insert_unchecked`) are `unsafe` and perform no
//! validation at all. It is up to the caller to uphold their contracts.
//!
//! # Dependencies
//! Error types are derived with `derive_more`. Buffer reallocation emits `tracing` events at the
//! trace level, which cost nothing unless the embedding program installs a subscriber.

#![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

#[cfg(test)]
pub(crate) mod util;
