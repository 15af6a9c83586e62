use derive_more::{Display, Error, IsVariant};

/// The checked [`DynamicArray`](super::DynamicArray) operations, used to report which one failed.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// [`DynamicArray::front`](super::DynamicArray::front)
    #[display("front")]
    Front,
    /// [`DynamicArray::back`](super::DynamicArray::back)
    #[display("back")]
    Back,
    /// [`DynamicArray::at`](super::DynamicArray::at)
    #[display("at")]
    At,
    /// [`DynamicArray::pop_back`](super::DynamicArray::pop_back)
    #[display("pop_back")]
    PopBack,
    /// [`DynamicArray::erase`](super::DynamicArray::erase)
    #[display("erase")]
    Erase,
}

/// The error returned when a checked operation refers to a position that doesn't hold an element.
///
/// # Examples
/// ```
/// # use dynamic_array::collections::contiguous::{Access, DynamicArray, OutOfRange};
/// let arr: DynamicArray<u8> = DynamicArray::new();
/// assert_eq!(arr.back(), Err(OutOfRange::EmptyArray { op: Access::Back }));
/// ```
#[derive(Debug, Display, Error, IsVariant, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutOfRange {
    /// The operation requires at least one element, but the DynamicArray was empty.
    #[display("{op} called on an empty DynamicArray")]
    EmptyArray {
        /// The operation which failed.
        op: Access,
    },
    /// The operation was given an index which is not less than the length.
    #[display("{op} index {index} out of range for DynamicArray with {len} elements")]
    PastEnd {
        /// The operation which failed.
        op: Access,
        /// The requested index.
        index: usize,
        /// The length of the DynamicArray at the time of the request.
        len: usize,
    },
}

impl OutOfRange {
    /// Returns the operation which produced this error.
    pub const fn op(&self) -> Access {
        match self {
            OutOfRange::EmptyArray { op } | OutOfRange::PastEnd { op, .. } => *op,
        }
    }
}
