//! Borrowed windows over a [`GrowableBuffer`](crate::GrowableBuffer).
//!
//! A view never owns storage. It is tied to the lifetime of the buffer it was
//! taken from, so it cannot outlive that buffer, cannot release its storage, and
//! blocks any growth of the buffer while it is alive.

use std::fmt;
use std::ops::{Deref, DerefMut, Index, IndexMut};

use heapkit_common::{
    Result,
    result::{verify_index, verify_range},
};

use crate::buffer::GrowableBuffer;

/// A read-only window over a contiguous range of a buffer.
#[derive(Clone, Copy)]
pub struct BufferView<'a, T> {
    data: &'a [T],
}

impl<'a, T> BufferView<'a, T> {
    pub(crate) fn new(data: &'a [T]) -> Self {
        BufferView { data }
    }

    /// Returns the length of the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the window is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the element at `index` relative to the start of the window.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&'a T> {
        verify_index(index, self.data.len())?;
        Ok(&self.data[index])
    }

    /// Returns a reference to the element at the given index, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.data.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.data.iter()
    }

    /// Returns a narrower window over `[from, to)` of this one.
    pub fn slice(&self, from: usize, to: usize) -> Result<BufferView<'a, T>> {
        verify_range(from, to, self.data.len())?;
        Ok(BufferView::new(&self.data[from..to]))
    }

    /// Copies the window into a new, independently owned buffer.
    pub fn to_owned_buffer(&self) -> GrowableBuffer<T>
    where
        T: Clone,
    {
        let mut buffer = GrowableBuffer::with_capacity(self.data.len());
        buffer.extend(self.data.iter().cloned());
        buffer
    }
}

impl<T> Deref for BufferView<'_, T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.data
    }
}

impl<T> Index<usize> for BufferView<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for BufferView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BufferView").field(&self.data).finish()
    }
}

impl<T: PartialEq> PartialEq for BufferView<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<'a, T> IntoIterator for BufferView<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// A live mutable window over a contiguous range of a buffer.
///
/// Writes through the window modify the buffer in place. The window can neither
/// grow nor shrink; appends and pops go through the owning buffer once the
/// window is gone.
pub struct BufferViewMut<'a, T> {
    data: &'a mut [T],
}

impl<'a, T> BufferViewMut<'a, T> {
    pub(crate) fn new(data: &'a mut [T]) -> Self {
        BufferViewMut { data }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        verify_index(index, self.data.len())?;
        Ok(&self.data[index])
    }

    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_index(index, self.data.len())?;
        Ok(&mut self.data[index])
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Overwrites the element at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.at_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Exchanges the elements at `i` and `j` of the window.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        verify_index(i, self.data.len())?;
        verify_index(j, self.data.len())?;
        self.data.swap(i, j);
        Ok(())
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &*self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Downgrades to a read-only window over the same range.
    pub fn as_view(&self) -> BufferView<'_, T> {
        BufferView::new(&*self.data)
    }

    pub fn to_owned_buffer(&self) -> GrowableBuffer<T>
    where
        T: Clone,
    {
        self.as_view().to_owned_buffer()
    }
}

impl<T> Deref for BufferViewMut<'_, T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &*self.data
    }
}

impl<T> DerefMut for BufferViewMut<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut *self.data
    }
}

impl<T> Index<usize> for BufferViewMut<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for BufferViewMut<'_, T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for BufferViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BufferViewMut").field(&self.data).finish()
    }
}
