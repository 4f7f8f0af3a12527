//! Start/stop/step addressing for slice reads and writes.
//!
//! A [`SliceSpec`] is resolved against a live length into a [`ResolvedSlice`],
//! following the usual relative-index rules: negative bounds count from the
//! end, out-of-range bounds are clamped, and a negative step walks backwards.
//!
//! ```
//! use hookedup_list::SliceSpec;
//!
//! let resolved = SliceSpec::from(1..-1).resolve(5).unwrap();
//! assert_eq!(resolved.positions().collect::<Vec<_>>(), vec![1, 2, 3]);
//!
//! let backwards = SliceSpec::full().with_step(-2).resolve(5).unwrap();
//! assert_eq!(backwards.positions().collect::<Vec<_>>(), vec![4, 2, 0]);
//! ```

use core::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo};

use crate::error::{ListError, ListResult};

/// An unresolved slice: optional start, stop and step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliceSpec {
    /// First position (inclusive).
    pub start: Option<isize>,
    /// End position (exclusive).
    pub stop: Option<isize>,
    /// Distance between positions. Defaults to 1.
    pub step: Option<isize>,
}

impl SliceSpec {
    /// Creates a slice from explicit bounds.
    #[must_use]
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// The slice covering every position.
    #[must_use]
    pub fn full() -> Self {
        Self::default()
    }

    /// Sets the step.
    #[must_use]
    pub fn with_step(mut self, step: isize) -> Self {
        self.step = Some(step);
        self
    }

    /// Returns `true` when the step is 1, i.e. the slice may be resized on assignment.
    #[must_use]
    pub fn is_contiguous(&self) -> bool {
        self.step.unwrap_or(1) == 1
    }

    /// Resolves the slice against a sequence of length `len`.
    pub fn resolve(&self, len: usize) -> ListResult<ResolvedSlice> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(ListError::ZeroSliceStep);
        }

        let len = isize::try_from(len).unwrap_or(isize::MAX);
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };

        let clamp_bound = |bound: isize| {
            let bound = if bound < 0 { bound + len } else { bound };
            bound.clamp(lower, upper)
        };

        let start = self
            .start
            .map_or(if step < 0 { upper } else { lower }, clamp_bound);
        let stop = self
            .stop
            .map_or(if step < 0 { lower } else { upper }, clamp_bound);

        let count = if step > 0 && stop > start {
            (stop - start - 1) / step + 1
        } else if step < 0 && start > stop {
            (start - stop - 1) / (-step) + 1
        } else {
            0
        };

        Ok(ResolvedSlice {
            start,
            stop,
            step,
            count: count.unsigned_abs(),
        })
    }
}

impl From<Range<isize>> for SliceSpec {
    fn from(range: Range<isize>) -> Self {
        Self::new(Some(range.start), Some(range.end), None)
    }
}

impl From<RangeFrom<isize>> for SliceSpec {
    fn from(range: RangeFrom<isize>) -> Self {
        Self::new(Some(range.start), None, None)
    }
}

impl From<RangeTo<isize>> for SliceSpec {
    fn from(range: RangeTo<isize>) -> Self {
        Self::new(None, Some(range.end), None)
    }
}

impl From<RangeInclusive<isize>> for SliceSpec {
    fn from(range: RangeInclusive<isize>) -> Self {
        let (start, end) = range.into_inner();
        // `..=-1` reaches the last element, and `..=isize::MAX` has no
        // representable successor: both map to an open end.
        let stop = match end.checked_add(1) {
            Some(0) | None => None,
            stop => stop,
        };
        Self::new(Some(start), stop, None)
    }
}

impl From<RangeFull> for SliceSpec {
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}

/// A slice resolved against a concrete length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSlice {
    start: isize,
    stop: isize,
    step: isize,
    count: usize,
}

impl ResolvedSlice {
    /// First addressed position (may be `-1` or `len` for empty slices).
    #[must_use]
    pub fn start(&self) -> isize {
        self.start
    }

    /// End bound (exclusive), after clamping.
    #[must_use]
    pub fn stop(&self) -> isize {
        self.stop
    }

    /// The step, never zero.
    #[must_use]
    pub fn step(&self) -> isize {
        self.step
    }

    /// Number of addressed positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` when no position is addressed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Addressed positions, in slice order.
    pub fn positions(&self) -> impl Iterator<Item = usize> + use<> {
        let (start, step) = (self.start, self.step);
        (0..self.count).map(move |k| {
            let offset = isize::try_from(k).unwrap_or(isize::MAX);
            (start + offset * step).unsigned_abs()
        })
    }

    /// For contiguous slices: the half-open span `start..end` of existing
    /// positions that an assignment replaces.
    #[must_use]
    pub(crate) fn span(&self) -> Range<usize> {
        let start = self.start.max(0).unsigned_abs();
        start..start + self.count
    }
}
