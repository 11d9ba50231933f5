use std::{iter::Flatten, ops::Index, pin::Pin, slice};

use crate::construct::Construct;

pub const DEFAULT_CHUNK_CAPACITY: usize = 32;

pub type Iter<'a, T> = Flatten<slice::Iter<'a, Vec<T>>>;

/// An append-only sequence whose growth never relocates stored elements.
///
/// Elements live in fixed-size chunks. A chunk is allocated with room for
/// `chunk_capacity` elements and is never pushed past that, so it is never
/// reallocated; growing the sequence only adds chunks. Once an element has
/// been stored it stays at the same address until the whole sequence is
/// cleared or dropped, which lets callers treat stored elements as pinned.
pub struct StableVec<T> {
    chunks: Vec<Vec<T>>,
    chunk_capacity: usize,
    len: usize,
}

impl<T> StableVec<T> {
    pub fn new() -> Self {
        Self::with_chunk_capacity(DEFAULT_CHUNK_CAPACITY)
    }

    /// Creates an empty sequence storing `chunk_capacity` elements per chunk.
    /// A capacity of zero is treated as one.
    pub fn with_chunk_capacity(chunk_capacity: usize) -> Self {
        StableVec {
            chunks: Vec::new(),
            chunk_capacity: chunk_capacity.max(1),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn chunk_capacity(&self) -> usize {
        self.chunk_capacity
    }

    /// Appends `value` and returns its index.
    pub fn push(&mut self, value: T) -> usize {
        let index = self.len;
        self.tail_chunk().push(value);
        self.len += 1;
        index
    }

    /// Constructs a new trailing element from `args` and returns its index.
    ///
    /// The element is built before any storage is reserved, so a failed
    /// construction leaves the sequence unchanged.
    pub fn emplace<Args>(&mut self, args: Args) -> Result<usize, T::Error>
    where
        T: Construct<Args>,
    {
        let value = T::construct(args)?;
        Ok(self.push(value))
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        let (chunk, offset) = self.locate(index)?;
        self.chunks[chunk].get(offset)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T>
    where
        T: Unpin,
    {
        let (chunk, offset) = self.locate(index)?;
        self.chunks[chunk].get_mut(offset)
    }

    pub fn get_pin(&self, index: usize) -> Option<Pin<&T>> {
        // Safety: Stored elements are never moved out of their chunk, and
        // chunks are never reallocated. They are only dropped in place.
        self.get(index).map(|value| unsafe { Pin::new_unchecked(value) })
    }

    pub fn get_pin_mut(&mut self, index: usize) -> Option<Pin<&mut T>> {
        let (chunk, offset) = self.locate(index)?;
        let value = self.chunks[chunk].get_mut(offset)?;
        // Safety: See `get_pin`. No method hands out an unpinned `&mut T`
        // unless `T: Unpin`.
        Some(unsafe { Pin::new_unchecked(value) })
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.chunks.iter().flatten()
    }

    pub fn iter_pinned(&self) -> impl Iterator<Item = Pin<&T>> + '_ {
        // Safety: See `get_pin`.
        self.iter().map(|value| unsafe { Pin::new_unchecked(value) })
    }

    pub fn iter_pinned_mut(&mut self) -> impl Iterator<Item = Pin<&mut T>> + '_ {
        // Safety: See `get_pin_mut`.
        self.chunks
            .iter_mut()
            .flatten()
            .map(|value| unsafe { Pin::new_unchecked(value) })
    }

    /// Drops every element in place.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.len = 0;
    }

    fn locate(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.len {
            return None;
        }
        Some((index / self.chunk_capacity, index % self.chunk_capacity))
    }

    fn tail_chunk(&mut self) -> &mut Vec<T> {
        let full = self
            .chunks
            .last()
            .map_or(true, |chunk| chunk.len() == self.chunk_capacity);
        if full {
            self.chunks.push(Vec::with_capacity(self.chunk_capacity));
        }
        let last = self.chunks.len() - 1;
        &mut self.chunks[last]
    }
}

impl<T> Default for StableVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for StableVec<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Index<usize> for StableVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Some(value) => value,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len, index
            ),
        }
    }
}

impl<T> Extend<T> for StableVec<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for StableVec<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut items = StableVec::new();
        items.extend(iter);
        items
    }
}

impl<'a, T> IntoIterator for &'a StableVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        marker::PhantomPinned,
        rc::Rc,
    };

    use super::*;

    struct DropFlag(Rc<Cell<usize>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    struct Pinned {
        value: RefCell<u32>,
        _pin: PhantomPinned,
    }

    impl Construct<(u32,)> for Pinned {
        type Error = std::convert::Infallible;

        fn construct((value,): (u32,)) -> Result<Self, Self::Error> {
            Ok(Pinned {
                value: RefCell::new(value),
                _pin: PhantomPinned,
            })
        }
    }

    #[test]
    fn growth_keeps_addresses() {
        let mut items = StableVec::with_chunk_capacity(4);
        items.push(0usize);
        let first: *const usize = &items[0];
        for i in 1..100 {
            items.push(i);
        }
        assert_eq!(first, &items[0] as *const usize);
        assert_eq!(items.len(), 100);
        assert!(items.iter().copied().eq(0..100));
    }

    #[test]
    fn zero_chunk_capacity_is_clamped() {
        let mut items = StableVec::with_chunk_capacity(0);
        assert_eq!(items.chunk_capacity(), 1);
        assert_eq!(items.push('a'), 0);
        assert_eq!(items.push('b'), 1);
        assert_eq!(items.get(1), Some(&'b'));
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        let items: StableVec<u8> = [1, 2, 3].into_iter().collect();
        assert_eq!(items.get(3), None);
        assert!(items.get_pin(7).is_none());
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn out_of_range_index_panics() {
        let items = StableVec::<u8>::new();
        let _value: u8 = items[0];
    }

    #[test]
    fn pinned_elements_are_reachable() {
        let mut items = StableVec::<Pinned>::with_chunk_capacity(2);
        for value in 0u32..5 {
            items.emplace((value,)).unwrap();
        }
        for pinned in items.iter_pinned() {
            *pinned.value.borrow_mut() += 1;
        }
        let values: Vec<u32> = items.iter().map(|p| *p.value.borrow()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
        assert_eq!(*items.get_pin_mut(4).unwrap().value.borrow(), 5);
    }

    #[test]
    fn pinned_mutation_reaches_every_element() {
        let mut items: StableVec<u32> = (0..5).collect();
        for mut value in items.iter_pinned_mut() {
            *value *= 10;
        }
        assert!(items.iter().copied().eq([0, 10, 20, 30, 40]));
    }

    #[test]
    fn pinned_values_are_replaced_in_place() {
        let mut items = StableVec::<Pinned>::with_chunk_capacity(2);
        for value in 0u32..3 {
            items.emplace((value,)).unwrap();
        }
        let before: *const Pinned = &items[2];
        for mut pinned in items.iter_pinned_mut() {
            let next = *pinned.value.borrow() + 100;
            pinned.set(Pinned::construct((next,)).unwrap());
        }
        assert_eq!(before, &items[2] as *const Pinned);
        let values: Vec<u32> = items.iter().map(|p| *p.value.borrow()).collect();
        assert_eq!(values, vec![100, 101, 102]);
    }

    #[test]
    fn clear_drops_in_place() {
        let drops = Rc::new(Cell::new(0));
        let mut items = StableVec::with_chunk_capacity(3);
        items.extend((0..7).map(|_| DropFlag(drops.clone())));
        assert_eq!(drops.get(), 0);
        items.clear();
        assert_eq!(drops.get(), 7);
        assert!(items.is_empty());
    }

    #[test]
    fn get_mut_updates_unpin_values() {
        let mut items: StableVec<String> = ["a", "b"].into_iter().map(String::from).collect();
        items.get_mut(1).unwrap().push('!');
        assert_eq!(format!("{:?}", items), r#"["a", "b!"]"#);
    }
}
