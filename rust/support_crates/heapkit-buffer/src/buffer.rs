use std::ops::{Index, IndexMut};

use heapkit_common::{
    Error, Result,
    result::{verify_index, verify_range},
    verify_arg,
};

use crate::{
    policy::GrowthPolicy,
    view::{BufferView, BufferViewMut},
};

/// A resizable sequence of owned elements with an explicit growth policy.
///
/// The buffer tracks its logical capacity itself rather than relying on the
/// allocator's rounding, so `capacity()` always reports the value chosen by the
/// [`GrowthPolicy`]. The invariant `len() <= capacity()` holds at all times, and
/// no storage is allocated while `capacity() == 0`.
///
/// Elements are dropped exactly once: on removal (`pop`, `set`, `truncate`) or
/// when the buffer itself is dropped or [`destroy`](GrowableBuffer::destroy)ed.
pub struct GrowableBuffer<T> {
    /// Backing storage. Its allocation is always at least `cap` slots.
    elements: Vec<T>,
    /// Logical capacity, as decided by `policy`.
    cap: usize,
    policy: GrowthPolicy,
}

impl<T> GrowableBuffer<T> {
    /// Creates an empty buffer with no allocation.
    pub fn new() -> GrowableBuffer<T> {
        GrowableBuffer {
            elements: Vec::new(),
            cap: 0,
            policy: GrowthPolicy::DEFAULT,
        }
    }

    /// Creates an empty buffer that can hold `capacity` elements without growing.
    pub fn with_capacity(capacity: usize) -> GrowableBuffer<T> {
        GrowableBuffer {
            elements: Vec::with_capacity(capacity),
            cap: capacity,
            policy: GrowthPolicy::DEFAULT,
        }
    }

    /// Creates an empty buffer that grows according to the given policy.
    pub fn with_policy(policy: GrowthPolicy) -> Result<GrowableBuffer<T>> {
        policy.validate()?;
        Ok(GrowableBuffer {
            elements: Vec::new(),
            cap: 0,
            policy,
        })
    }

    /// Returns the number of elements in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements the buffer can hold before the next growth.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the growth policy of this buffer.
    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// Appends an element at the logical end, growing the storage when full.
    ///
    /// Growth may move the elements; references obtained earlier cannot survive
    /// this call, which the borrow checker enforces.
    pub fn append(&mut self, value: T) {
        if self.elements.len() == self.cap {
            self.grow();
        }
        self.elements.push(value);
    }

    /// Returns a reference to the element at `index`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        verify_index(index, self.len())?;
        Ok(&self.elements[index])
    }

    /// Returns a mutable reference to the element at `index`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_index(index, self.len())?;
        Ok(&mut self.elements[index])
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Overwrites the element at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.at_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Exchanges the elements at `i` and `j`. Swapping an index with itself is a no-op.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        let len = self.len();
        verify_index(i, len)?;
        verify_index(j, len)?;
        if i != j {
            self.elements.swap(i, j);
        }
        Ok(())
    }

    /// Removes and returns the last element.
    ///
    /// Fails with an underflow error, leaving the buffer untouched, when it is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.elements.pop().ok_or_else(|| Error::underflow("pop"))
    }

    /// Returns a read-only window over `[from, to)`.
    ///
    /// The view borrows the buffer: it cannot outlive it, and the buffer cannot
    /// grow while the view is alive.
    pub fn slice(&self, from: usize, to: usize) -> Result<BufferView<'_, T>> {
        verify_range(from, to, self.len())?;
        Ok(BufferView::new(&self.elements[from..to]))
    }

    /// Returns a live mutable window over `[from, to)`.
    ///
    /// Writes through the view land directly in this buffer's storage.
    pub fn slice_mut(&mut self, from: usize, to: usize) -> Result<BufferViewMut<'_, T>> {
        verify_range(from, to, self.len())?;
        Ok(BufferViewMut::new(&mut self.elements[from..to]))
    }

    /// Copies `[from, to)` into a new, independently owned buffer.
    pub fn slice_to_owned(&self, from: usize, to: usize) -> Result<GrowableBuffer<T>>
    where
        T: Clone,
    {
        Ok(self.slice(from, to)?.to_owned_buffer())
    }

    /// Shortens the buffer to `len` elements, dropping the rest. Capacity is kept.
    pub fn truncate(&mut self, len: usize) {
        self.elements.truncate(len);
    }

    /// Removes all elements. Capacity is kept.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }

    /// Consumes the buffer, returning its elements as a `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Releases the storage and every element it holds.
    ///
    /// Equivalent to dropping the buffer; provided for callers that want the
    /// release point to be explicit.
    pub fn destroy(self) {
        log::trace!(
            "releasing buffer: len {}, capacity {}",
            self.len(),
            self.cap
        );
        drop(self);
    }

    fn grow(&mut self) {
        let new_cap = self.policy.next_capacity(self.cap);
        log::trace!("growing buffer: capacity {} -> {}", self.cap, new_cap);
        self.elements.reserve_exact(new_cap - self.elements.len());
        self.cap = new_cap;
    }
}

impl<T: Default> GrowableBuffer<T> {
    /// Creates a buffer of `len` default-valued elements with room for `cap` elements.
    ///
    /// The effective capacity is `max(cap, len)`. A negative `len` is rejected as
    /// an invalid argument; a negative `cap` simply yields `cap == len`.
    pub fn make(len: isize, cap: isize) -> Result<GrowableBuffer<T>> {
        verify_arg!(len, len >= 0);
        let len = len as usize;
        let cap = usize::try_from(cap).unwrap_or(0).max(len);
        let mut buffer = GrowableBuffer::with_capacity(cap);
        buffer.elements.resize_with(len, T::default);
        Ok(buffer)
    }
}

impl<T> Default for GrowableBuffer<T> {
    fn default() -> Self {
        GrowableBuffer::new()
    }
}

impl<T: Clone> Clone for GrowableBuffer<T> {
    fn clone(&self) -> Self {
        let mut elements = Vec::with_capacity(self.cap);
        elements.extend_from_slice(&self.elements);
        GrowableBuffer {
            elements,
            cap: self.cap,
            policy: self.policy,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for GrowableBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrowableBuffer")
            .field("len", &self.len())
            .field("capacity", &self.cap)
            .field("elements", &self.elements)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for GrowableBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowableBuffer<T> {}

impl<T> Index<usize> for GrowableBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<T> IndexMut<usize> for GrowableBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.elements[index]
    }
}

impl<T> AsRef<[T]> for GrowableBuffer<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> From<Vec<T>> for GrowableBuffer<T> {
    fn from(elements: Vec<T>) -> Self {
        // Zero-sized elements report an unbounded allocation.
        let cap = if size_of::<T>() == 0 {
            elements.len()
        } else {
            elements.capacity()
        };
        GrowableBuffer {
            elements,
            cap,
            policy: GrowthPolicy::DEFAULT,
        }
    }
}

impl<T: Clone> From<&[T]> for GrowableBuffer<T> {
    fn from(slice: &[T]) -> Self {
        GrowableBuffer::from(slice.to_vec())
    }
}

impl<T> FromIterator<T> for GrowableBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buffer = GrowableBuffer::new();
        buffer.extend(iter);
        buffer
    }
}

impl<T> Extend<T> for GrowableBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> IntoIterator for GrowableBuffer<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a GrowableBuffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use heapkit_common::ErrorKind;

    use super::*;

    #[test]
    fn test_new_is_unallocated() {
        let buf = GrowableBuffer::<u64>::new();
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.as_slice(), &[] as &[u64]);
    }

    #[test]
    fn test_append_keeps_prior_values() {
        let mut buf = GrowableBuffer::new();
        for i in 0..2500u64 {
            buf.append(i);
            assert_eq!(buf.len() as u64, i + 1);
            assert!(buf.len() <= buf.capacity());
        }
        for i in 0..2500usize {
            assert_eq!(*buf.at(i).unwrap(), i as u64);
        }
    }

    #[test]
    fn test_append_capacity_sequence() {
        let mut buf = GrowableBuffer::new();
        let mut capacities = vec![];
        for i in 0..1100 {
            buf.append(i);
            if capacities.last() != Some(&buf.capacity()) {
                capacities.push(buf.capacity());
            }
        }
        assert_eq!(
            capacities,
            vec![1, 2, 4, 8, 16, 32, 64, 128, 256, 512, 1024, 1228]
        );
    }

    #[test]
    fn test_growth_boundary() {
        let mut buf = GrowableBuffer::with_capacity(1000);
        buf.extend(0..1000);
        assert_eq!(buf.capacity(), 1000);
        buf.append(1000);
        assert_eq!(buf.capacity(), 1200);

        let mut small = GrowableBuffer::with_capacity(600);
        small.extend(0..601);
        assert_eq!(small.capacity(), 1200);
    }

    #[test]
    fn test_custom_policy() {
        let policy = GrowthPolicy {
            initial_capacity: 8,
            doubling_limit: 16,
            large_growth_numerator: 3,
            large_growth_denominator: 2,
        };
        let mut buf = GrowableBuffer::with_policy(policy).unwrap();
        buf.append(1);
        assert_eq!(buf.capacity(), 8);
        buf.extend(0..8);
        assert_eq!(buf.capacity(), 16);
        buf.extend(0..8);
        assert_eq!(buf.capacity(), 24);

        let bad = GrowthPolicy {
            initial_capacity: 0,
            ..policy
        };
        assert!(GrowableBuffer::<i32>::with_policy(bad).is_err());
    }

    #[test]
    fn test_make() {
        let buf = GrowableBuffer::<i32>::make(3, 10).unwrap();
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.capacity(), 10);
        assert_eq!(buf.as_slice(), &[0, 0, 0]);

        let buf = GrowableBuffer::<i32>::make(5, 2).unwrap();
        assert_eq!(buf.capacity(), 5);

        let buf = GrowableBuffer::<i32>::make(0, -4).unwrap();
        assert_eq!(buf.capacity(), 0);
    }

    #[test]
    fn test_make_negative_len() {
        let err = GrowableBuffer::<i32>::make(-1, 4).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
    }

    #[test]
    fn test_at_and_set_bounds() {
        let mut buf: GrowableBuffer<i32> = (0..4).collect();
        assert_eq!(buf.set(2, 20).unwrap(), 2);
        assert_eq!(*buf.at(2).unwrap(), 20);
        assert!(buf.at(4).unwrap_err().is_out_of_range());
        assert!(buf.set(4, 1).unwrap_err().is_out_of_range());
        assert_eq!(buf.get(4), None);
        assert_eq!(buf.as_slice(), &[0, 1, 20, 3]);
    }

    #[test]
    fn test_swap() {
        let mut buf: GrowableBuffer<i32> = (0..4).collect();
        buf.swap(0, 3).unwrap();
        buf.swap(1, 1).unwrap();
        assert_eq!(buf.as_slice(), &[3, 1, 2, 0]);
        assert!(buf.swap(0, 4).is_err());
        assert_eq!(buf.as_slice(), &[3, 1, 2, 0]);
    }

    #[test]
    fn test_pop() {
        let mut buf: GrowableBuffer<i32> = (0..2).collect();
        let cap = buf.capacity();
        assert_eq!(buf.pop().unwrap(), 1);
        assert_eq!(buf.pop().unwrap(), 0);
        assert!(buf.pop().unwrap_err().is_underflow());
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn test_slice_view() {
        let buf: GrowableBuffer<char> = "abcde".chars().collect();
        let view = buf.slice(2, 5).unwrap();
        assert_eq!(view.len(), 3);
        assert_eq!(*view.at(0).unwrap(), 'c');
        assert_eq!(*view.at(1).unwrap(), 'd');
        assert_eq!(*view.at(2).unwrap(), 'e');
        assert!(view.at(3).is_err());
    }

    #[test]
    fn test_slice_bounds() {
        let buf: GrowableBuffer<i32> = (0..5).collect();
        assert_eq!(
            buf.slice(1, 6).unwrap_err().into_kind(),
            ErrorKind::OutOfRange { index: 6, len: 5 }
        );
        assert!(buf.slice(3, 2).is_err());
        assert!(buf.slice(5, 5).unwrap().is_empty());
    }

    #[test]
    fn test_slice_mut_writes_through() {
        let mut buf: GrowableBuffer<char> = "abcde".chars().collect();
        {
            let mut view = buf.slice_mut(2, 5).unwrap();
            assert_eq!(view.set(0, 'x').unwrap(), 'c');
            view.swap(1, 2).unwrap();
        }
        assert_eq!(buf.as_slice(), &['a', 'b', 'x', 'e', 'd']);
    }

    #[test]
    fn test_slice_to_owned_is_independent() {
        let mut buf: GrowableBuffer<i32> = (0..5).collect();
        let mut copy = buf.slice_to_owned(1, 3).unwrap();
        copy.set(0, 100).unwrap();
        copy.append(7);
        buf.set(2, 200).unwrap();
        assert_eq!(copy.as_slice(), &[100, 2, 7]);
        assert_eq!(buf.as_slice(), &[0, 1, 200, 3, 4]);
    }

    #[test]
    fn test_elements_dropped_once() {
        let marker = Rc::new(());
        let mut buf = GrowableBuffer::new();
        for _ in 0..10 {
            buf.append(Rc::clone(&marker));
        }
        assert_eq!(Rc::strong_count(&marker), 11);
        drop(buf.pop().unwrap());
        buf.set(0, Rc::clone(&marker)).unwrap();
        assert_eq!(Rc::strong_count(&marker), 10);
        buf.truncate(4);
        assert_eq!(Rc::strong_count(&marker), 5);
        buf.destroy();
        assert_eq!(Rc::strong_count(&marker), 1);
    }

    #[test]
    fn test_from_vec_capacity() {
        let mut units = GrowableBuffer::from(vec![(); 3]);
        assert_eq!(units.len(), 3);
        assert_eq!(units.capacity(), 3);
        units.append(());
        assert_eq!(units.capacity(), 6);

        let mut v = Vec::with_capacity(10);
        v.extend([1u32, 2]);
        let buf = GrowableBuffer::from(v);
        assert_eq!(buf.capacity(), 10);
    }

    #[test]
    fn test_clone_preserves_capacity() {
        let mut buf = GrowableBuffer::with_capacity(12);
        buf.extend([3, 1, 2]);
        let copy = buf.clone();
        assert_eq!(copy, buf);
        assert_eq!(copy.capacity(), 12);
    }

    #[test]
    fn test_random_append_and_set() {
        fastrand::seed(0x5eed);
        let mut buf = GrowableBuffer::new();
        let mut reference = Vec::new();
        for _ in 0..5000 {
            if !reference.is_empty() && fastrand::u8(..) < 64 {
                let i = fastrand::usize(..reference.len());
                let v = fastrand::i64(..);
                buf.set(i, v).unwrap();
                reference[i] = v;
            } else {
                let v = fastrand::i64(..);
                buf.append(v);
                reference.push(v);
            }
        }
        assert_eq!(buf.as_slice(), reference.as_slice());
        assert!(buf.len() <= buf.capacity());
    }
}
