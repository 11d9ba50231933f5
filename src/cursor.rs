/// A write-only, single-pass cursor.
///
/// This is the protocol the generic algorithms in [`crate::algorithm`] write
/// through: `put` a value, then `step` past it. Cursors that append to a
/// container have no position, so `step` defaults to doing nothing.
pub trait OutputCursor<V> {
    type Error;

    fn put(&mut self, value: V) -> Result<(), Self::Error>;

    fn step(&mut self) {}
}

impl<O, V> OutputCursor<V> for &mut O
where
    O: OutputCursor<V> + ?Sized,
{
    type Error = O::Error;

    fn put(&mut self, value: V) -> Result<(), Self::Error> {
        (**self).put(value)
    }

    fn step(&mut self) {
        (**self).step()
    }
}
