//! A module containing [`SinglyLinkedList`] and associated types: [`Cursor`] for the
//! fail-fast removing traversal, and [`Iter`]/[`IterMut`]/[`IntoIter`] for plain
//! borrow-checked iteration.

mod cursor;
mod iter;
mod node;
mod singly_linked_list;
mod tests;

pub use cursor::*;
pub use iter::*;
pub(crate) use node::*;
pub use singly_linked_list::*;
