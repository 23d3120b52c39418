//! Capacity growth policy for [`GrowableBuffer`](crate::GrowableBuffer).

use heapkit_common::{Result, verify_arg};

/// Determines the capacity a buffer grows to when an append finds it full.
///
/// Small buffers double their capacity. Once the capacity reaches
/// `doubling_limit` (inclusive), growth tapers to the ratio
/// `large_growth_numerator / large_growth_denominator` (rounded down), which
/// keeps appends amortized O(1) while bounding the slack of large buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GrowthPolicy {
    /// Capacity of the first allocation of an unallocated buffer.
    pub initial_capacity: usize,
    /// Capacities strictly below this limit double on growth. A capacity equal
    /// to the limit already takes the tapered step, so the default policy grows
    /// 1000 to 1200, not 2000.
    pub doubling_limit: usize,
    pub large_growth_numerator: usize,
    pub large_growth_denominator: usize,
}

impl GrowthPolicy {
    /// First allocation of one slot, doubling below 1000 slots, x1.2 from there on.
    pub const DEFAULT: GrowthPolicy = GrowthPolicy {
        initial_capacity: 1,
        doubling_limit: 1000,
        large_growth_numerator: 6,
        large_growth_denominator: 5,
    };

    /// Checks that the policy always makes progress.
    pub fn validate(&self) -> Result<()> {
        verify_arg!(initial_capacity, self.initial_capacity > 0);
        verify_arg!(large_growth_denominator, self.large_growth_denominator > 0);
        verify_arg!(
            large_growth_numerator,
            self.large_growth_numerator > self.large_growth_denominator
        );
        Ok(())
    }

    /// Returns the capacity a full buffer of capacity `cap` grows to.
    ///
    /// The result is always strictly greater than `cap`.
    pub fn next_capacity(&self, cap: usize) -> usize {
        if cap == 0 {
            return self.initial_capacity.max(1);
        }
        let grown = if cap < self.doubling_limit {
            cap.saturating_mul(2)
        } else {
            let scaled = cap as u128 * self.large_growth_numerator as u128
                / self.large_growth_denominator.max(1) as u128;
            usize::try_from(scaled).unwrap_or(usize::MAX)
        };
        grown.max(cap.saturating_add(1))
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        GrowthPolicy::DEFAULT
    }
}
