//! A module containing [`ArrayList`] and associated types.
//!
//! [`Cursor`] provides the fail-fast removing traversal and [`IntoIter`] owned
//! iteration. [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from
//! [`std::slice`] are used for borrowed iteration, since an [`ArrayList`] derefs to a
//! slice of its live elements.

mod array_list;
mod cursor;
mod iter;

pub use array_list::*;
pub use cursor::*;
pub use iter::*;
