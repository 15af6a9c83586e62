//! Helpers shared by the unit tests.

pub(crate) mod alloc;
pub(crate) mod panic;
