//! # Heapkit: growable buffers and a container-agnostic binary heap
//!
//! Heapkit pairs a resizable, exclusively owned element buffer with a binary
//! heap engine that drives *any* container exposing a small capability set
//! (ordering, length, swap, push, pop), without knowing the element type or
//! how the container stores its elements.
//!
//! ## Module Organization
//!
//! * [`common`] - Error type and argument verification shared by all crates
//! * [`buffer`] - [`GrowableBuffer`], its growth policy and borrowed views
//! * [`heap`] - Capability traits, container adapters, the [`Heap`] engine and heap sort
//!
//! ## Getting Started
//!
//! ```
//! use heapkit::{GrowableBuffer, Heap};
//!
//! let mut buf = GrowableBuffer::new();
//! for v in (1..=20).rev() {
//!     buf.append(v);
//! }
//! let mut heap = Heap::new(&mut buf);
//! heap.heapify();
//! assert_eq!(heap.pop().unwrap(), 1);
//! assert_eq!(heap.pop().unwrap(), 2);
//! ```
//!
//! The engine borrows its container exclusively for as long as it is alive, so
//! the container cannot be mutated through another path while heap operations
//! run. Failures surface as [`common::Error`] values: invalid construction
//! arguments, out-of-range indices, and underflow on an empty container.

pub use heapkit_buffer as buffer;
pub use heapkit_common as common;
pub use heapkit_heap as heap;

pub use heapkit_buffer::{BufferView, BufferViewMut, GrowableBuffer, GrowthPolicy};
pub use heapkit_heap::{ElementAccess, Heap, HeapContainer, OrderedBuffer, Reversed, Sortable};
