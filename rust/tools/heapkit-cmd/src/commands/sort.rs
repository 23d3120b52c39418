//! Sort command implementation

use heapkit_buffer::GrowableBuffer;
use heapkit_heap::{Reversed, heap_sort};
use serde::Serialize;

use super::Report;

#[derive(Debug, Serialize)]
pub struct SortReport {
    descending: bool,
    sorted: Vec<i64>,
}

impl SortReport {
    pub fn lines(&self) -> Vec<String> {
        self.sorted.iter().map(|v| v.to_string()).collect()
    }
}

pub fn run(values: Vec<i64>, descending: bool) -> Report {
    let mut buffer = GrowableBuffer::from(values);
    if descending {
        heap_sort(&mut Reversed(&mut buffer));
    } else {
        heap_sort(&mut buffer);
    }
    Report::Sort(SortReport {
        descending,
        sorted: buffer.into_vec(),
    })
}
