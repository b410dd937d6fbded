//! Lazily recomputed min/max tracking for one dimension of a series.
//!
//! Each [`PlotSeries`](crate::series::PlotSeries) owns one [`RangeCache`] per
//! dimension. Appends extend the cached bounds incrementally; mutations that
//! could shrink an extremum (in-place replacement, removal of a boundary
//! value) only mark the cache dirty, and the next read pays a full O(n)
//! rescan. A non-dirty cache always reflects the true extrema of the stored
//! values.
//!
//! The cache uses `Cell` internally so that reads can stay `&self`, matching
//! the single-threaded contract of the containers that hold it.

use std::cell::Cell;

use serde::{Deserialize, Serialize};

use crate::sample::approx_eq_f64;

/// Closed interval covering the stored values of one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    /// Smallest stored value.
    pub min: f64,
    /// Largest stored value.
    pub max: f64,
}

impl Range {
    /// Creates a range from explicit bounds.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A degenerate range covering a single value.
    #[must_use]
    pub fn single(value: f64) -> Self {
        Self { min: value, max: value }
    }
}

/// Per-dimension (min, max) cache with a dirty flag.
///
/// Dirty means the next read triggers a full rescan of the backing storage.
/// An unset cache (no range yet) answers "none" until values are observed.
#[derive(Debug, Clone)]
pub struct RangeCache {
    range: Cell<Option<Range>>,
    dirty: Cell<bool>,
}

impl Default for RangeCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeCache {
    /// Creates an unset cache; the first read rescans.
    #[must_use]
    pub fn new() -> Self {
        Self {
            range: Cell::new(None),
            dirty: Cell::new(true),
        }
    }

    /// Seeds the cache from the first stored value, making it immediately
    /// valid without a rescan.
    pub fn prime(&self, value: f64) {
        self.range.set(Some(Range::single(value)));
        self.dirty.set(false);
    }

    /// Incrementally accounts for a newly appended value.
    ///
    /// Extends the bounds when the value lands outside them. A value
    /// strictly inside the bounds leaves min/max unaffected, so the cache
    /// stays valid. A dirty cache is left dirty; the pending rescan will see
    /// the value in storage.
    pub fn extend(&self, value: f64) {
        if self.dirty.get() {
            return;
        }
        match self.range.get() {
            None => self.range.set(Some(Range::single(value))),
            Some(mut r) => {
                if value > r.max {
                    r.max = value;
                    self.range.set(Some(r));
                } else if value < r.min {
                    r.min = value;
                    self.range.set(Some(r));
                }
            }
        }
    }

    /// Marks the cache dirty; the next read rescans.
    pub fn invalidate(&self) {
        self.dirty.set(true);
    }

    /// Returns the cache to the unset state.
    pub fn reset(&self) {
        self.range.set(None);
        self.dirty.set(true);
    }

    /// Whether `value` matches a cached extremum (within the equality
    /// tolerance) of a currently valid cache.
    ///
    /// Removing such a value may shrink the true range, which cannot be
    /// confirmed without a rescan; callers invalidate when this holds.
    #[must_use]
    pub fn covers_extremum(&self, value: f64) -> bool {
        if self.dirty.get() {
            return false;
        }
        self.range
            .get()
            .is_some_and(|r| approx_eq_f64(value, r.min) || approx_eq_f64(value, r.max))
    }

    /// Returns the cached range, rescanning `values` first if dirty.
    pub fn get_or_rescan<I>(&self, values: impl FnOnce() -> I) -> Option<Range>
    where
        I: Iterator<Item = f64>,
    {
        if self.dirty.get() {
            let mut range: Option<Range> = None;
            for v in values() {
                match &mut range {
                    None => range = Some(Range::single(v)),
                    Some(r) => {
                        if v < r.min {
                            r.min = v;
                        }
                        if v > r.max {
                            r.max = v;
                        }
                    }
                }
            }
            self.range.set(range);
            self.dirty.set(false);
        }
        self.range.get()
    }
}
