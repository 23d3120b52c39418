//! The binary heap engine: heap operations bound to one borrowed container.

use heapkit_common::{Error, Result, result::verify_index};

use crate::{
    algo::{build_heap, is_heap, sift_down, sift_up},
    container::{ElementAccess, HeapContainer},
};

/// A binary heap driven entirely through a container's capabilities.
///
/// The engine owns nothing: it holds an exclusive borrow of the container it is
/// bound to, which rules out any other mutation path while heap operations are
/// in progress. Dropping the engine releases the borrow and leaves the container
/// (in heap order) with its owner.
///
/// `C` may be unsized, so a `Heap<dyn HeapContainer<Item = T>>` can drive a
/// container chosen at runtime.
///
/// # Examples
///
/// ```
/// use heapkit_buffer::GrowableBuffer;
/// use heapkit_heap::Heap;
///
/// let mut buf: GrowableBuffer<i64> = (1..=20).rev().collect();
/// let mut heap = Heap::new(&mut buf);
/// heap.heapify();
/// let popped: Vec<i64> = heap.drain().collect();
/// assert_eq!(popped, (1..=20).collect::<Vec<_>>());
/// ```
pub struct Heap<'a, C: HeapContainer + ?Sized> {
    container: &'a mut C,
}

impl<'a, C: HeapContainer + ?Sized> Heap<'a, C> {
    /// Binds a new engine to `container`. The contents are not reordered; call
    /// [`heapify`](Heap::heapify) unless the container is already in heap order.
    pub fn new(container: &'a mut C) -> Heap<'a, C> {
        Heap { container }
    }

    /// Rebinds the engine to another container, returning the previous one.
    pub fn bind(&mut self, container: &'a mut C) -> &'a mut C {
        std::mem::replace(&mut self.container, container)
    }

    pub fn container(&self) -> &C {
        &*self.container
    }

    /// Releases the engine, handing back the container borrow.
    pub fn into_inner(self) -> &'a mut C {
        self.container
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.container.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    /// Transforms the current contents into heap order in O(n).
    pub fn heapify(&mut self) {
        log::debug!("building heap over {} elements", self.container.len());
        build_heap(&mut *self.container);
    }

    /// Adds `value` to the heap.
    pub fn push(&mut self, value: C::Item) {
        let len = self.container.len();
        self.container.push(value);
        debug_assert_eq!(
            self.container.len(),
            len + 1,
            "container push must grow the length by one"
        );
        sift_up(&mut *self.container, len);
    }

    /// Removes and returns the top of the heap.
    ///
    /// Fails with an underflow error, leaving the container untouched, when the
    /// heap is empty.
    pub fn pop(&mut self) -> Result<C::Item> {
        let len = self.container.len();
        if len == 0 {
            return Err(Error::underflow("heap pop"));
        }
        let last = len - 1;
        self.container.swap(0, last);
        let top = self.container.pop()?;
        sift_down(&mut *self.container, 0, last);
        Ok(top)
    }

    /// Restores heap order after the element at `index` was changed in place.
    pub fn fix(&mut self, index: usize) -> Result<()> {
        let len = self.container.len();
        verify_index(index, len)?;
        if !sift_down(&mut *self.container, index, len) {
            sift_up(&mut *self.container, index);
        }
        Ok(())
    }

    /// Removes and returns the element at `index`, keeping the rest in heap order.
    pub fn remove(&mut self, index: usize) -> Result<C::Item> {
        let len = self.container.len();
        verify_index(index, len)?;
        let last = len - 1;
        if index != last {
            self.container.swap(index, last);
            if !sift_down(&mut *self.container, index, last) {
                sift_up(&mut *self.container, index);
            }
        }
        self.container.pop()
    }

    /// Checks the heap property over the whole container.
    pub fn is_heap(&self) -> bool {
        is_heap(&*self.container)
    }

    /// Pops every element, yielding them in heap order.
    pub fn drain(&mut self) -> impl Iterator<Item = C::Item> + '_ {
        std::iter::from_fn(move || self.pop().ok())
    }
}

impl<C: ElementAccess + ?Sized> Heap<'_, C> {
    /// Returns the top of the heap without removing it.
    pub fn peek(&self) -> Result<&C::Item> {
        self.container
            .element(0)
            .ok_or_else(|| Error::underflow("heap peek"))
    }
}
