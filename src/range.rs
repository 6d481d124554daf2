//! Sorted set of inclusive integer intervals with merge-on-insert.

use crate::error::{Error, Result};

/// Ordered, disjoint, non-adjacent closed intervals `[a, b]`.
///
/// For consecutive spans `x` and `y`, `x.1 + 1 < y.0` always holds; touching
/// or overlapping spans are merged when inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexRange {
    spans: Vec<(usize, usize)>,
}

impl IndexRange {
    /// Create an empty range set.
    #[must_use]
    pub const fn new() -> Self {
        Self { spans: Vec::new() }
    }

    /// Add `[start, end]`, merging it with every span it overlaps or touches.
    pub fn insert(&mut self, start: usize, end: usize) -> Result<()> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        self.union(start, end);
        Ok(())
    }

    /// Merge an interval already known to satisfy `start <= end`.
    pub(crate) fn union(&mut self, start: usize, end: usize) {
        tracing::debug!("insert [{start},{end}]");
        // Spans are sorted and disjoint, so both bounds are monotonic.
        let lo = self.spans.partition_point(|&(_, b)| b.saturating_add(1) < start);
        let hi = self.spans.partition_point(|&(a, _)| a <= end.saturating_add(1));
        let merged = if lo < hi {
            (self.spans[lo].0.min(start), self.spans[hi - 1].1.max(end))
        } else {
            (start, end)
        };
        self.spans.splice(lo..hi, std::iter::once(merged));
    }

    /// Remove every span.
    pub fn clear(&mut self) {
        self.spans.clear();
    }

    /// Spans in ascending order.
    pub fn spans(&self) -> &[(usize, usize)] {
        &self.spans
    }

    /// Iterate spans in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.spans.iter().copied()
    }

    /// Number of spans (not positions).
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// True if no span has been inserted.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

}
