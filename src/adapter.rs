//! Output cursors that append to a borrowed container.

use std::convert::Infallible;

use crate::{
    container::{EmplaceBack, EmplaceTarget},
    cursor::OutputCursor,
    typelist::TypeList,
};

/// Appends to a container by constructing each new element in place from an
/// argument bundle.
///
/// The emplacer only borrows its container and keeps no other state. Assigning
/// a bundle forwards it, unopened, to [`EmplaceBack::emplace_back`]; owned
/// arguments in the bundle are moved into the element's constructor and
/// borrowed ones stay borrowed. Dereferencing and advancing are no-ops kept so
/// that the emplacer reads like any other output cursor.
pub struct BackEmplacer<'a, C>
where
    C: ?Sized,
{
    container: &'a mut C,
}

impl<'a, C> BackEmplacer<'a, C>
where
    C: EmplaceTarget + ?Sized,
{
    pub fn new(container: &'a mut C) -> Self {
        BackEmplacer { container }
    }

    pub fn get(&mut self) -> &mut Self {
        self
    }

    pub fn advance(&mut self) -> &mut Self {
        self
    }

    /// Returns a second emplacer over the same container, leaving this one
    /// usable once the returned one is dropped.
    pub fn advance_post(&mut self) -> BackEmplacer<'_, C> {
        BackEmplacer {
            container: &mut *self.container,
        }
    }

    /// Constructs one new trailing element from `args`.
    ///
    /// Errors raised by the element's constructor are returned as-is, and the
    /// container is left unchanged.
    pub fn assign<Args>(
        &mut self,
        args: Args,
    ) -> Result<&mut Self, <C as EmplaceBack<Args>>::Error>
    where
        C: EmplaceBack<Args>,
        Args: TypeList,
    {
        self.container.emplace_back(args)?;
        Ok(self)
    }

    pub fn container(&self) -> &C {
        self.container
    }

    pub fn into_inner(self) -> &'a mut C {
        self.container
    }
}

/// Creates a [`BackEmplacer`] over `container`.
///
/// Only sequences that can construct elements at their end are accepted:
///
/// ```compile_fail
/// let mut count = 5u32;
/// let _it = emplace::back_emplacer(&mut count);
/// ```
pub fn back_emplacer<C>(container: &mut C) -> BackEmplacer<'_, C>
where
    C: EmplaceTarget + ?Sized,
{
    BackEmplacer::new(container)
}

impl<C, Args> OutputCursor<Args> for BackEmplacer<'_, C>
where
    C: EmplaceBack<Args> + ?Sized,
    Args: TypeList,
{
    type Error = C::Error;

    fn put(&mut self, args: Args) -> Result<(), Self::Error> {
        self.container.emplace_back(args)
    }
}

impl<C, Args> Extend<Args> for BackEmplacer<'_, C>
where
    C: EmplaceBack<Args, Error = Infallible> + ?Sized,
    Args: TypeList,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Args>,
    {
        for args in iter {
            self.container
                .emplace_back(args)
                .unwrap_or_else(|never| match never {});
        }
    }
}

/// Appends finished values to a container through [`Extend`].
pub struct BackInserter<'a, C>
where
    C: ?Sized,
{
    container: &'a mut C,
}

impl<'a, C> BackInserter<'a, C>
where
    C: ?Sized,
{
    pub fn new(container: &'a mut C) -> Self {
        BackInserter { container }
    }

    pub fn assign<V>(&mut self, value: V) -> &mut Self
    where
        C: Extend<V>,
    {
        self.container.extend(std::iter::once(value));
        self
    }

    pub fn into_inner(self) -> &'a mut C {
        self.container
    }
}

pub fn back_inserter<C>(container: &mut C) -> BackInserter<'_, C>
where
    C: ?Sized,
{
    BackInserter::new(container)
}

impl<C, V> OutputCursor<V> for BackInserter<'_, C>
where
    C: Extend<V> + ?Sized,
{
    type Error = Infallible;

    fn put(&mut self, value: V) -> Result<(), Self::Error> {
        self.assign(value);
        Ok(())
    }
}
