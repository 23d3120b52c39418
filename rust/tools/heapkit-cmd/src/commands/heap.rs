//! Heap command implementation

use anyhow::{Context, Result};
use clap::ValueEnum;
use heapkit_buffer::GrowableBuffer;
use heapkit_heap::{Heap, HeapContainer, OrderedBuffer};
use serde::Serialize;

use super::Report;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Smallest element on top
    Min,
    /// Largest element on top
    Max,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Append everything, then heapify once
    Heapify,
    /// Push element by element through the heap engine
    Push,
}

#[derive(Debug, Serialize)]
pub struct HeapReport {
    order: Order,
    mode: BuildMode,
    count: usize,
    popped: Vec<i64>,
}

impl HeapReport {
    pub fn lines(&self) -> Vec<String> {
        self.popped.iter().map(|v| format!("popped: {v}")).collect()
    }
}

pub fn run(count: usize, order: Order, mode: BuildMode) -> Result<Report> {
    let top = i64::try_from(count).context("element count does not fit in i64")?;

    // The backing container is chosen at runtime; the engine only sees the capability set.
    let mut container: Box<dyn HeapContainer<Item = i64>> = match order {
        Order::Min => Box::new(GrowableBuffer::<i64>::new()),
        Order::Max => Box::new(OrderedBuffer::<i64, _>::max()),
    };

    match mode {
        BuildMode::Heapify => {
            for v in (1..=top).rev() {
                container.push(v);
            }
            Heap::new(container.as_mut()).heapify();
        }
        BuildMode::Push => {
            let mut heap = Heap::new(container.as_mut());
            for v in (1..=top).rev() {
                heap.push(v);
            }
        }
    }
    log::info!("built {order:?} heap of {count} elements via {mode:?}");

    let mut heap = Heap::new(container.as_mut());
    debug_assert!(heap.is_heap());
    let mut popped = Vec::with_capacity(count);
    while !heap.is_empty() {
        popped.push(heap.pop()?);
    }

    Ok(Report::Heap(HeapReport {
        order,
        mode,
        count,
        popped,
    }))
}
