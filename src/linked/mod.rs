//! Linked collection types, built from chains of individually owned nodes.

pub mod list;

#[doc(inline)]
pub use list::SinglyLinkedList;
