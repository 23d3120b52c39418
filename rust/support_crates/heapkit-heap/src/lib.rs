//! Binary heap algorithms over any container that exposes ordering, length,
//! swap, push and pop.
//!
//! The algorithms never see the element storage. They reason purely in terms
//! of indices `0..len()` and the capability traits in [`container`], so one
//! engine drives a [`GrowableBuffer`](heapkit_buffer::GrowableBuffer), a `Vec`,
//! a caller-ordered [`OrderedBuffer`], or any user type implementing
//! [`HeapContainer`], statically or through `dyn HeapContainer`.
//!
//! By convention `less(i, j)` means "the element at `i` belongs above the
//! element at `j`", so the natural ordering yields a min-heap.

pub mod algo;
pub mod container;
pub mod engine;
pub mod ordered;

pub use algo::{build_heap, heap_sort, is_heap, sift_down, sift_up};
pub use container::{ElementAccess, HeapContainer, Reversed, Sortable};
pub use engine::Heap;
pub use ordered::OrderedBuffer;
