//! Capability traits a container implements to be driven by the heap algorithms.

use heapkit_buffer::{BufferViewMut, GrowableBuffer};
use heapkit_common::{Error, Result};

/// Ordering, length and swap over the index range `0..len()`.
///
/// This subset is enough for in-place algorithms such as [`heap_sort`](crate::heap_sort)
/// that never change the number of elements.
///
/// `less` must be a strict weak ordering over valid indices and must stay
/// consistent across calls while the underlying data is unchanged. Indices
/// passed by the algorithms are always in range; implementations may panic on
/// out-of-range indices.
pub trait Sortable {
    fn len(&self) -> usize;

    /// Returns `true` if the element at `i` must be ordered before (above) the element at `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchanges the elements at `i` and `j`. Must be a no-op when `i == j`.
    fn swap(&mut self, i: usize, j: usize);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The full capability set of a heap-backing container.
pub trait HeapContainer: Sortable {
    type Item;

    /// Appends `value` at index `len()`.
    fn push(&mut self, value: Self::Item);

    /// Removes and returns the element at the last index.
    ///
    /// Fails with an underflow error, without side effects, on an empty container.
    fn pop(&mut self) -> Result<Self::Item>;
}

/// Read access to individual elements, needed to peek at the top of a heap.
pub trait ElementAccess: HeapContainer {
    fn element(&self, index: usize) -> Option<&Self::Item>;
}

/// Flips the ordering of the wrapped container: what was least becomes greatest.
///
/// Wrapping a naturally ordered container turns the min-heap it backs into a
/// max-heap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reversed<S>(pub S);

impl<S> Reversed<S> {
    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S: Sortable> Sortable for Reversed<S> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self.0.less(j, i)
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j)
    }
}

impl<C: HeapContainer> HeapContainer for Reversed<C> {
    type Item = C::Item;

    fn push(&mut self, value: Self::Item) {
        self.0.push(value)
    }

    fn pop(&mut self) -> Result<Self::Item> {
        self.0.pop()
    }
}

impl<C: ElementAccess> ElementAccess for Reversed<C> {
    fn element(&self, index: usize) -> Option<&Self::Item> {
        self.0.element(index)
    }
}

impl<S: Sortable + ?Sized> Sortable for &mut S {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        (**self).less(i, j)
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        (**self).swap(i, j)
    }
}

impl<T: Ord> Sortable for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j)
    }
}

impl<T: Ord> Sortable for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j)
    }
}

impl<T: Ord> HeapContainer for Vec<T> {
    type Item = T;

    fn push(&mut self, value: T) {
        Vec::push(self, value)
    }

    fn pop(&mut self) -> Result<T> {
        Vec::pop(self).ok_or_else(|| Error::underflow("pop"))
    }
}

impl<T: Ord> ElementAccess for Vec<T> {
    fn element(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T: Ord> Sortable for GrowableBuffer<T> {
    #[inline]
    fn len(&self) -> usize {
        GrowableBuffer::len(self)
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j)
    }
}

impl<T: Ord> HeapContainer for GrowableBuffer<T> {
    type Item = T;

    fn push(&mut self, value: T) {
        self.append(value)
    }

    fn pop(&mut self) -> Result<T> {
        GrowableBuffer::pop(self)
    }
}

impl<T: Ord> ElementAccess for GrowableBuffer<T> {
    fn element(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

/// A mutable window can be reordered in place but never resized.
impl<T: Ord> Sortable for BufferViewMut<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        BufferViewMut::len(self)
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j)
    }
}
