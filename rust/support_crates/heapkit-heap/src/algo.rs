//! Index-level heap primitives over [`Sortable`] containers.
//!
//! Node `i` has children `2i + 1` and `2i + 2` and parent `(i - 1) / 2`.

use crate::container::{Reversed, Sortable};

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

/// Moves the element at `i` toward the root while it is `less` than its parent.
///
/// Returns `true` if the element moved.
pub fn sift_up<S: Sortable + ?Sized>(heap: &mut S, mut i: usize) -> bool {
    let start = i;
    while i > 0 {
        let p = parent(i);
        if !heap.less(i, p) {
            break;
        }
        heap.swap(i, p);
        i = p;
    }
    i != start
}

/// Moves the element at `i` toward the leaves of the heap occupying `0..end`,
/// swapping it with its more extreme child while that child is `less` than it.
///
/// Returns `true` if the element moved.
pub fn sift_down<S: Sortable + ?Sized>(heap: &mut S, mut i: usize, end: usize) -> bool {
    let start = i;
    loop {
        let left = match i.checked_mul(2).and_then(|d| d.checked_add(1)) {
            Some(left) if left < end => left,
            _ => break,
        };
        let right = left + 1;
        let child = if right < end && heap.less(right, left) {
            right
        } else {
            left
        };
        if !heap.less(child, i) {
            break;
        }
        heap.swap(i, child);
        i = child;
    }
    i != start
}

/// Arranges the whole container into heap order, bottom-up, in O(n).
pub fn build_heap<S: Sortable + ?Sized>(heap: &mut S) {
    let n = heap.len();
    for i in (0..n / 2).rev() {
        sift_down(heap, i, n);
    }
}

/// Checks that no element is `less` than its parent.
pub fn is_heap<S: Sortable + ?Sized>(heap: &S) -> bool {
    (1..heap.len()).all(|i| !heap.less(i, parent(i)))
}

/// Sorts the container in place so that `less` holds between no later element
/// and an earlier one (ascending under the natural ordering). O(n log n), not stable.
pub fn heap_sort<S: Sortable + ?Sized>(items: &mut S) {
    let n = items.len();
    log::debug!("heap sort over {n} elements");
    // Build a heap with the greatest element on top, then move tops to the back.
    let mut heap = Reversed(items);
    build_heap(&mut heap);
    for end in (1..n).rev() {
        heap.swap(0, end);
        sift_down(&mut heap, 0, end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sift_up() {
        let mut v = vec![1, 3, 2, 4, 0];
        assert!(sift_up(&mut v, 4));
        assert_eq!(v, vec![0, 1, 2, 4, 3]);
        assert!(!sift_up(&mut v, 0));
    }

    #[test]
    fn test_sift_down_prefers_smaller_child() {
        let mut v = vec![9, 4, 2, 5, 6, 3, 7];
        assert!(sift_down(&mut v, 0, 7));
        assert_eq!(v, vec![2, 4, 3, 5, 6, 9, 7]);
        assert!(is_heap(&v));
    }

    #[test]
    fn test_sift_down_respects_end() {
        let mut v = vec![5, 6, 1];
        assert!(!sift_down(&mut v, 0, 2));
        assert_eq!(v, vec![5, 6, 1]);
    }

    #[test]
    fn test_build_heap() {
        let mut v: Vec<i32> = (1..=20).rev().collect();
        build_heap(&mut v);
        assert!(is_heap(&v));
        assert_eq!(v[0], 1);

        let mut empty: Vec<i32> = vec![];
        build_heap(&mut empty);
        assert!(is_heap(&empty));
    }

    #[test]
    fn test_heap_sort() {
        let mut v = vec![5, -1, 3, 3, 0, 12, 7, -8];
        heap_sort(&mut v);
        assert_eq!(v, vec![-8, -1, 0, 3, 3, 5, 7, 12]);

        let mut reversed = Reversed(vec![1, 4, 2]);
        heap_sort(&mut reversed);
        assert_eq!(reversed.0, vec![4, 2, 1]);
    }

    #[test]
    fn test_heap_sort_slice() {
        let mut data = [3u8, 1, 2];
        heap_sort(&mut data[..]);
        assert_eq!(data, [1, 2, 3]);
    }

    #[test]
    fn test_heap_sort_random() {
        fastrand::seed(42);
        for len in [0usize, 1, 2, 17, 256, 1000] {
            let mut v: Vec<u32> = (0..len).map(|_| fastrand::u32(..500)).collect();
            let mut expected = v.clone();
            expected.sort();
            heap_sort(&mut v);
            assert_eq!(v, expected);
        }
    }
}
