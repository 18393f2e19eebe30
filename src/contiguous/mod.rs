//! Contiguous collection types, backed by a single owned buffer.

pub mod array_list;

#[doc(inline)]
pub use array_list::ArrayList;
