//! A module containing [`DynamicArray`] and associated types.
//!
//! The other included types are [`IntoIter`] for owned iteration, and [`OutOfRange`] / [`Access`]
//! for reporting failed checked accesses. [`IterMut`](std::slice::IterMut) and
//! [`Iter`](std::slice::Iter) from [`std::slice`] are used for borrowed iteration.
//!
//! [`DynamicArray`] is also re-exported under the parent module.

mod dynamic_array;
mod error;
mod iter;

pub use dynamic_array::*;
pub use error::*;
pub use iter::*;
