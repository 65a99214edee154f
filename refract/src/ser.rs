//! `Serialize` support for shared-borrow views.
//!
//! A validated view serializes as the sequence of its visible values; an
//! unvalidated view serializes one element per underlying slot, with null
//! slots as `null`. Serialization walks the view directly and allocates no
//! intermediate collection.

use serde::ser::{Serialize, Serializer};

use crate::filter::Filter;
use crate::handle::Handle;
use crate::iter::{UnvalidatedIter, ValidatedIter};
use crate::strategy::{Unvalidated, Validated};
use crate::view::RefView;

impl<'c, C, H, F> Serialize for RefView<&'c C, Validated<F>>
where
    C: ?Sized,
    &'c C: IntoIterator<Item = &'c H>,
    H: Handle + ?Sized + 'c,
    H::Value: Serialize,
    F: Filter<H::Value> + Clone,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let handles = self.collection.into_iter();
        serializer.collect_seq(ValidatedIter::new(handles, self.strategy.filter.clone()))
    }
}

impl<'c, C, H> Serialize for RefView<&'c C, Unvalidated>
where
    C: ?Sized,
    &'c C: IntoIterator<Item = &'c H>,
    H: Handle + ?Sized + 'c,
    H::Value: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(UnvalidatedIter::new(self.collection.into_iter()))
    }
}
