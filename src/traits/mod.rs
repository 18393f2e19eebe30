//! Contracts shared between multiple collection types.

mod list;

pub use list::*;
