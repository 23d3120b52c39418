//! Command implementations for heapkit-cmd

use serde::Serialize;

pub mod buffer;
pub mod heap;
pub mod sort;

/// Result of one command, printable as plain lines or as JSON.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Report {
    Heap(heap::HeapReport),
    Buffer(buffer::BufferReport),
    Sort(sort::SortReport),
}

impl Report {
    pub fn lines(&self) -> Vec<String> {
        match self {
            Report::Heap(report) => report.lines(),
            Report::Buffer(report) => report.lines(),
            Report::Sort(report) => report.lines(),
        }
    }
}
