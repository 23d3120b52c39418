//! Buffer command implementation

use anyhow::Result;
use heapkit_buffer::GrowableBuffer;
use serde::Serialize;

use super::Report;

#[derive(Debug, Serialize)]
pub struct BufferReport {
    len: usize,
    capacity: usize,
    /// Elements from the last index to the first.
    reversed: Vec<i64>,
}

impl BufferReport {
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.reversed.iter().map(|v| v.to_string()).collect();
        lines.push(format!("len: {}, capacity: {}", self.len, self.capacity));
        lines
    }
}

pub fn run(count: usize) -> Result<Report> {
    let mut buffer = GrowableBuffer::new();
    for v in 0..count as i64 {
        buffer.append(v);
    }

    let mut reversed = Vec::with_capacity(buffer.len());
    for i in (0..buffer.len()).rev() {
        reversed.push(*buffer.at(i)?);
    }

    let report = BufferReport {
        len: buffer.len(),
        capacity: buffer.capacity(),
        reversed,
    };
    buffer.destroy();
    Ok(Report::Buffer(report))
}
