//! Containers that can grow by constructing a new trailing element in place.

mod stable;

use std::collections::{LinkedList, VecDeque};

use crate::construct::Construct;

pub use stable::{Iter, StableVec, DEFAULT_CHUNK_CAPACITY};

/// A sequence that can grow by constructing elements at its end.
///
/// This is what a [`crate::BackEmplacer`] needs to be created at all; which
/// bundles can actually be emplaced is decided per call by [`EmplaceBack`].
pub trait EmplaceTarget {
    type Item;
}

impl<T> EmplaceTarget for Vec<T> {
    type Item = T;
}

impl<T> EmplaceTarget for VecDeque<T> {
    type Item = T;
}

impl<T> EmplaceTarget for LinkedList<T> {
    type Item = T;
}

impl<T> EmplaceTarget for StableVec<T> {
    type Item = T;
}

impl<C> EmplaceTarget for &mut C
where
    C: EmplaceTarget + ?Sized,
{
    type Item = C::Item;
}

/// The capability to append a new element built from the bundle `Args`.
///
/// Implementations must construct the element before touching their storage:
/// when construction fails, the container is left exactly as it was.
pub trait EmplaceBack<Args>: EmplaceTarget {
    type Error;

    fn emplace_back(&mut self, args: Args) -> Result<(), Self::Error>;
}

impl<T, Args> EmplaceBack<Args> for Vec<T>
where
    T: Construct<Args>,
{
    type Error = T::Error;

    fn emplace_back(&mut self, args: Args) -> Result<(), Self::Error> {
        let value = T::construct(args)?;
        self.push(value);
        Ok(())
    }
}

impl<T, Args> EmplaceBack<Args> for VecDeque<T>
where
    T: Construct<Args>,
{
    type Error = T::Error;

    fn emplace_back(&mut self, args: Args) -> Result<(), Self::Error> {
        let value = T::construct(args)?;
        self.push_back(value);
        Ok(())
    }
}

impl<T, Args> EmplaceBack<Args> for LinkedList<T>
where
    T: Construct<Args>,
{
    type Error = T::Error;

    fn emplace_back(&mut self, args: Args) -> Result<(), Self::Error> {
        let value = T::construct(args)?;
        self.push_back(value);
        Ok(())
    }
}

impl<T, Args> EmplaceBack<Args> for StableVec<T>
where
    T: Construct<Args>,
{
    type Error = T::Error;

    fn emplace_back(&mut self, args: Args) -> Result<(), Self::Error> {
        self.emplace(args).map(|_| ())
    }
}

impl<C, Args> EmplaceBack<Args> for &mut C
where
    C: EmplaceBack<Args> + ?Sized,
{
    type Error = C::Error;

    fn emplace_back(&mut self, args: Args) -> Result<(), Self::Error> {
        (**self).emplace_back(args)
    }
}
