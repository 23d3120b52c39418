//! Growable, exclusively owned element buffers for the heapkit infrastructure.
//!
//! [`GrowableBuffer`] is a resizable sequence with an explicit, predictable growth
//! policy (see [`GrowthPolicy`]). Sub-ranges are exposed either as borrowed
//! windows ([`BufferView`], [`BufferViewMut`]) that the borrow checker prevents
//! from outliving the buffer, or as independent owned copies.

pub mod buffer;
pub mod policy;
pub mod view;

pub use buffer::GrowableBuffer;
pub use policy::GrowthPolicy;
pub use view::{BufferView, BufferViewMut};
