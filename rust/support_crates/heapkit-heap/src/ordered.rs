use heapkit_buffer::GrowableBuffer;
use heapkit_common::Result;

use crate::container::{ElementAccess, HeapContainer, Sortable};

/// A [`GrowableBuffer`] paired with a caller-supplied ordering.
///
/// `less(a, b)` returns `true` when `a` belongs above `b`. This lets one buffer
/// type back a min-heap, a max-heap, or a heap keyed on part of the element,
/// without the element type implementing `Ord`.
#[derive(Clone)]
pub struct OrderedBuffer<T, F> {
    buffer: GrowableBuffer<T>,
    less: F,
}

impl<T, F> OrderedBuffer<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty buffer ordered by `less`.
    pub fn by(less: F) -> Self {
        OrderedBuffer::from_buffer(GrowableBuffer::new(), less)
    }

    /// Wraps an existing buffer. Its contents are not reordered.
    pub fn from_buffer(buffer: GrowableBuffer<T>, less: F) -> Self {
        OrderedBuffer { buffer, less }
    }

    pub fn buffer(&self) -> &GrowableBuffer<T> {
        &self.buffer
    }

    /// Gives mutable access to the elements. Changing an element of a heap
    /// requires a [`Heap::fix`](crate::Heap::fix) afterwards.
    pub fn buffer_mut(&mut self) -> &mut GrowableBuffer<T> {
        &mut self.buffer
    }

    pub fn into_buffer(self) -> GrowableBuffer<T> {
        self.buffer
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl<T: Ord> OrderedBuffer<T, fn(&T, &T) -> bool> {
    /// Smallest element on top.
    pub fn min() -> Self {
        Self::by(ascending::<T>)
    }

    /// Largest element on top.
    pub fn max() -> Self {
        Self::by(descending::<T>)
    }
}

fn ascending<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

fn descending<T: Ord>(a: &T, b: &T) -> bool {
    a > b
}

impl<T, F> Sortable for OrderedBuffer<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        (self.less)(&self.buffer[i], &self.buffer[j])
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.buffer.as_mut_slice().swap(i, j)
    }
}

impl<T, F> HeapContainer for OrderedBuffer<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    type Item = T;

    fn push(&mut self, value: T) {
        self.buffer.append(value)
    }

    fn pop(&mut self) -> Result<T> {
        self.buffer.pop()
    }
}

impl<T, F> ElementAccess for OrderedBuffer<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn element(&self, index: usize) -> Option<&T> {
        self.buffer.get(index)
    }
}

impl<T: std::fmt::Debug, F> std::fmt::Debug for OrderedBuffer<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("OrderedBuffer").field(&self.buffer).finish()
    }
}
