//! Two takes on the same indexed, unsorted list contract.
//!
//! # Purpose
//! This crate implements one abstract list - positional access, front/rear/targeted
//! insertion and removal, value-equality searches and a fail-fast traversal cursor -
//! over two very different physical layouts:
//!
//! - [`ArrayList`](contiguous::ArrayList): a growable contiguous buffer. Indexed reads
//!   are `O(1)`, anything that isn't at the rear pays for a shift.
//! - [`SinglyLinkedList`](linked::SinglyLinkedList): a chain of uniquely-owned nodes
//!   with a non-owning tail reference. Front and rear insertion are `O(1)`, anything
//!   indexed pays for a walk, and removing from the rear is `O(n)` because the links
//!   only point one way.
//!
//! Writing the same contract twice is the point: the asymptotics flip depending on the
//! layout, but every caller-observable behavior - bounds, search misses, traversal
//! invalidation - must come out identical. The shared surface is pinned down by the
//! [`IndexedList`](traits::IndexedList) trait.
//!
//! # Method
//! Neither list leans on [`Vec`] or [`std::collections::LinkedList`]; the buffer and
//! the node chain are managed by hand, which is where all of the interesting ownership
//! questions live. Unsafe code is kept to the few places the layouts genuinely require
//! it (reading initialized slots out of the buffer, dereferencing the tail pointer) and
//! every block carries its justification.
//!
//! # Error Handling
//! Fallible operations come in pairs: a `try_` method returning a strongly typed
//! [`Result`] (enums for static dispatch, small structs implementing
//! [`Error`](std::error::Error)), and a short-named convenience wrapper that panics
//! with the error's own message. Operations whose only failure is "the list is empty"
//! or "no match" return [`Option`] instead.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod contiguous;
pub mod linked;
pub mod traits;

pub(crate) mod util;
