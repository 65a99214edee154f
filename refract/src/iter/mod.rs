//! Iterator types produced by [`RefView`](crate::RefView).
//!
//! One family per strategy, each in a shared and a mutable flavor. All four
//! are plain forward iterators: the begin position is computed lazily on the
//! first [`next`](Iterator::next) call, the end position is owned by the
//! underlying collection iterator, and a full traversal touches each
//! underlying slot exactly once.

mod unvalidated;
mod validated;

pub use unvalidated::{UnvalidatedIter, UnvalidatedIterMut};
pub use validated::{ValidatedIter, ValidatedIterMut};
