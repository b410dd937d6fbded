//! Generic point-series container.
//!
//! [`PlotSeries`] owns a logical ordered sequence of (x, y) samples over two
//! independent [`Sample`] types. It is the storage core shared by every
//! series kind: producers (parsers, ingest plugins) push points in, and
//! consumers (rendering) read points, extrema, and metadata back out.
//!
//! # Storage modes
//!
//! Internally the container is in one of two mutually exclusive modes:
//!
//! - *Constant mode*: every point seen so far shares one y value, stored
//!   once. Entered automatically on the first push and kept while each new
//!   y equals the stored constant (floats compare with a relative-epsilon
//!   tolerance). Live telemetry is full of long flat runs — booleans,
//!   enums, setpoints — and this keeps them O(1) in memory.
//! - *Variable mode*: each point's y is stored individually, in a sequence
//!   kept exactly as long as the domain sequence.
//!
//! The constant-to-variable transition is one-directional: the first
//! differing y backfills the materialized value sequence with the former
//! constant for every existing index. Only [`PlotSeries::clear`] (or
//! popping the last point) resets the container so constant mode can be
//! re-entered.
//!
//! # Thread safety
//!
//! The container is not internally locked. Exactly one logical writer is
//! assumed at a time; concurrent readers must be serialized externally
//! against any mutation of the same series.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::attributes::{AttributeValue, Attributes, PlotAttribute, set_checked};
use crate::error::{AccessError, Result};
use crate::group::GroupRef;
use crate::range::{Range, RangeCache};
use crate::sample::Sample;

/// One (domain, value) sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point<X, Y> {
    /// Domain coordinate (the timestamp, for a time series).
    pub x: X,
    /// Sample value.
    pub y: Y,
}

impl<X, Y> Point<X, Y> {
    /// Creates a point.
    pub fn new(x: X, y: Y) -> Self {
        Self { x, y }
    }
}

/// Generic sequence of (x, y) samples with cached extrema, a constant-value
/// storage optimization, and display metadata.
///
/// See the [module documentation](self) for the storage model.
#[derive(Debug, Clone)]
pub struct PlotSeries<X: Sample, Y: Sample> {
    name: String,
    attributes: Attributes,
    group: Option<GroupRef>,
    x_data: VecDeque<X>,
    y_data: VecDeque<Y>,
    const_y: Option<Y>,
    range_x: RangeCache,
    range_y: RangeCache,
}

impl<X: Sample, Y: Sample> PlotSeries<X, Y> {
    /// Advisory upper bound on the number of stored points.
    ///
    /// Documented for producers sizing their ingest buffers; the container
    /// itself never enforces it. Bounding memory is the job of the caller,
    /// typically through the time-window eviction of
    /// [`TimeSeries`](crate::timeseries::TimeSeries).
    pub const MAX_CAPACITY: usize = 1024 * 1024;

    /// Creates an empty series with a name and an optional group tag.
    pub fn new(name: impl Into<String>, group: Option<GroupRef>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            group,
            x_data: VecDeque::new(),
            y_data: VecDeque::new(),
            const_y: None,
            range_x: RangeCache::new(),
            range_y: RangeCache::new(),
        }
    }

    /// The series name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The group this series belongs to, if any.
    #[must_use]
    pub fn group(&self) -> Option<&GroupRef> {
        self.group.as_ref()
    }

    /// Moves the series to a different group (or out of any group).
    pub fn change_group(&mut self, group: Option<GroupRef>) {
        self.group = group;
    }

    /// Number of stored points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x_data.len()
    }

    /// Whether the series holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x_data.is_empty()
    }

    /// All assigned display attributes.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// The value assigned to `attribute`, if any.
    #[must_use]
    pub fn attribute(&self, attribute: PlotAttribute) -> Option<AttributeValue> {
        self.attributes.get(&attribute).cloned()
    }

    /// Assigns `value` to `attribute`.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::TypeMismatch`](crate::error::AttributeError)
    /// when the value kind does not match the attribute; the series is left
    /// unchanged.
    pub fn set_attribute(
        &mut self,
        attribute: PlotAttribute,
        value: AttributeValue,
    ) -> Result<()> {
        set_checked(&mut self.attributes, attribute, value)
    }

    /// Appends a point, amortized O(1).
    ///
    /// A point with a non-finite numeric coordinate is silently dropped:
    /// the series length does not change and neither range cache is
    /// touched. This is policy, not an error — stored series stay
    /// well-formed for downstream consumers.
    pub fn push_back(&mut self, point: Point<X, Y>) {
        if !point.x.is_finite() || !point.y.is_finite() {
            return;
        }
        self.observe_ranges(&point);
        self.store_y_back(point.y);
        self.x_data.push_back(point.x);
    }

    /// Inserts a point at an arbitrary position.
    ///
    /// Follows the same non-finite drop, range update, and constant-mode
    /// handling as [`push_back`](Self::push_back). This is the slow path
    /// behind the sorted insertion of
    /// [`TimeSeries::push_back`](crate::timeseries::TimeSeries::push_back).
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::OutOfRange`] when `index > len()`.
    pub fn insert(&mut self, index: usize, point: Point<X, Y>) -> Result<()> {
        if index > self.x_data.len() {
            return Err(AccessError::OutOfRange {
                index,
                len: self.x_data.len(),
            }
            .into());
        }
        if !point.x.is_finite() || !point.y.is_finite() {
            return Ok(());
        }
        self.observe_ranges(&point);

        if self.x_data.is_empty() {
            self.const_y = Some(point.y);
        } else if let Some(constant) = &self.const_y {
            match point.y.approx_eq(constant) {
                // Still constant; the shared value covers the new slot.
                Some(true) => {}
                _ => {
                    self.materialize_constant();
                    self.y_data.insert(index, point.y);
                }
            }
        } else {
            self.y_data.insert(index, point.y);
        }
        self.x_data.insert(index, point.x);
        Ok(())
    }

    /// The point at `index`, O(1).
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::OutOfRange`] when `index >= len()`, and
    /// [`AccessError::CorruptedStorage`] when the variable-mode value
    /// storage no longer matches the domain storage — a defensive check on
    /// an invariant that must never actually break.
    pub fn at(&self, index: usize) -> Result<Point<X, Y>> {
        if index >= self.x_data.len() {
            return Err(AccessError::OutOfRange {
                index,
                len: self.x_data.len(),
            }
            .into());
        }
        let y = match &self.const_y {
            Some(constant) => constant.clone(),
            None => {
                if self.y_data.len() != self.x_data.len() {
                    return Err(AccessError::CorruptedStorage {
                        x_len: self.x_data.len(),
                        y_len: self.y_data.len(),
                    }
                    .into());
                }
                self.y_data[index].clone()
            }
        };
        Ok(Point::new(self.x_data[index].clone(), y))
    }

    /// The point at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Point<X, Y>> {
        let x = self.x_data.get(index)?.clone();
        let y = match &self.const_y {
            Some(constant) => constant.clone(),
            None => self.y_data.get(index)?.clone(),
        };
        Some(Point::new(x, y))
    }

    /// Replaces the point at `index` in place.
    ///
    /// Applies the same non-finite skip and constant/variable transition
    /// rules as [`push_back`](Self::push_back). Both range caches are
    /// marked dirty: the replaced value may have been an extremum, which
    /// cannot be confirmed without a rescan.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::OutOfRange`] when `index >= len()`, and
    /// [`AccessError::CorruptedStorage`] on a variable-mode length desync.
    pub fn set_point(&mut self, index: usize, point: Point<X, Y>) -> Result<()> {
        if index >= self.x_data.len() {
            return Err(AccessError::OutOfRange {
                index,
                len: self.x_data.len(),
            }
            .into());
        }
        if !point.x.is_finite() || !point.y.is_finite() {
            return Ok(());
        }
        self.x_data[index] = point.x;

        if let Some(constant) = &self.const_y {
            match point.y.approx_eq(constant) {
                Some(true) => {}
                _ => {
                    self.materialize_constant();
                    self.y_data[index] = point.y;
                }
            }
        } else {
            if self.y_data.len() != self.x_data.len() {
                return Err(AccessError::CorruptedStorage {
                    x_len: self.x_data.len(),
                    y_len: self.y_data.len(),
                }
                .into());
            }
            self.y_data[index] = point.y;
        }

        self.range_x.invalidate();
        self.range_y.invalidate();
        Ok(())
    }

    /// Removes and returns the oldest point, amortized O(1).
    ///
    /// If the removed coordinate equals a cached extremum (within the
    /// equality tolerance) the corresponding cache is marked dirty, since
    /// removal can never safely shrink a cached extremum without a rescan.
    /// Emptying the series resets it to the unset state, ready to re-enter
    /// constant mode on the next push.
    pub fn pop_front(&mut self) -> Option<Point<X, Y>> {
        let removes_x_extremum = self
            .x_data
            .front()
            .and_then(Sample::as_scalar)
            .is_some_and(|v| self.range_x.covers_extremum(v));
        if removes_x_extremum {
            self.range_x.invalidate();
        }
        if self.const_y.is_none() {
            let removes_y_extremum = self
                .y_data
                .front()
                .and_then(Sample::as_scalar)
                .is_some_and(|v| self.range_y.covers_extremum(v));
            if removes_y_extremum {
                self.range_y.invalidate();
            }
        }

        let x = self.x_data.pop_front()?;
        let y = match &self.const_y {
            Some(constant) => constant.clone(),
            None => self.y_data.pop_front()?,
        };
        if self.x_data.is_empty() {
            self.reset_storage();
        }
        Some(Point::new(x, y))
    }

    /// The oldest stored point, if any.
    #[must_use]
    pub fn front(&self) -> Option<Point<X, Y>> {
        self.get(0)
    }

    /// The newest stored point, if any.
    #[must_use]
    pub fn back(&self) -> Option<Point<X, Y>> {
        self.len().checked_sub(1).and_then(|index| self.get(index))
    }

    /// Removes every point and resets range caches and constant mode to the
    /// unset state. Name, group, and attributes are kept.
    pub fn clear(&mut self) {
        self.x_data.clear();
        self.reset_storage();
    }

    /// Cached (min, max) of the domain coordinates.
    ///
    /// Lazily recomputes with a full O(n) scan when the cache is dirty.
    /// Answers `None` when the series is empty or the domain type is not
    /// numeric.
    #[must_use]
    pub fn range_x(&self) -> Option<Range> {
        if self.x_data.is_empty() {
            return None;
        }
        self.range_x
            .get_or_rescan(|| self.x_data.iter().filter_map(Sample::as_scalar))
    }

    /// Cached (min, max) of the sample values.
    ///
    /// Constant mode short-circuits to `(c, c)` without any scan. Otherwise
    /// behaves like [`range_x`](Self::range_x).
    #[must_use]
    pub fn range_y(&self) -> Option<Range> {
        if self.x_data.is_empty() {
            return None;
        }
        if let Some(constant) = &self.const_y {
            return constant.as_scalar().map(Range::single);
        }
        self.range_y
            .get_or_rescan(|| self.y_data.iter().filter_map(Sample::as_scalar))
    }

    /// Read-only random-access view over the stored points.
    ///
    /// Each `Point` is synthesized by value from the current index on
    /// dereference, never referenced out of storage, so the view stays
    /// correct across storage-mode transitions. Mutation must go through
    /// [`set_point`](Self::set_point), never through this view.
    #[must_use]
    pub fn iter(&self) -> PointsIter<'_, X, Y> {
        PointsIter {
            series: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Replaces this series' points, constant state, and range caches with
    /// copies of another's. Name, group, and attributes are kept.
    pub fn clone_points(&mut self, other: &Self) {
        self.x_data = other.x_data.clone();
        self.y_data = other.y_data.clone();
        self.const_y = other.const_y.clone();
        self.range_x = other.range_x.clone();
        self.range_y = other.range_y.clone();
    }

    /// Raw domain storage, used by the time-series binary searches.
    pub(crate) fn domain(&self) -> &VecDeque<X> {
        &self.x_data
    }

    /// Range updates for an accepted point: prime on the first push, extend
    /// incrementally afterwards.
    fn observe_ranges(&mut self, point: &Point<X, Y>) {
        let first = self.x_data.is_empty();
        if let Some(x) = point.x.as_scalar() {
            if first {
                self.range_x.prime(x);
            } else {
                self.range_x.extend(x);
            }
        }
        if let Some(y) = point.y.as_scalar() {
            if first {
                self.range_y.prime(y);
            } else {
                self.range_y.extend(y);
            }
        }
    }

    /// Appends `y` under the current storage mode, transitioning from
    /// constant to variable when the value differs from the constant.
    fn store_y_back(&mut self, y: Y) {
        if self.x_data.is_empty() {
            // First point: enter constant mode.
            self.const_y = Some(y);
        } else if let Some(constant) = &self.const_y {
            match y.approx_eq(constant) {
                // Still constant; nothing to store.
                Some(true) => {}
                // Differing value, or a type with no reliable equality.
                _ => {
                    self.materialize_constant();
                    self.y_data.push_back(y);
                }
            }
        } else {
            self.y_data.push_back(y);
        }
    }

    /// One-directional constant-to-variable transition: backfills the value
    /// sequence with the former constant for every stored index.
    fn materialize_constant(&mut self) {
        if let Some(constant) = self.const_y.take() {
            self.y_data.clear();
            self.y_data.resize(self.x_data.len(), constant);
        }
    }

    fn reset_storage(&mut self) {
        self.const_y = None;
        self.y_data.clear();
        self.range_x.reset();
        self.range_y.reset();
    }
}

/// Lazy, finite, restartable view over a series' points.
///
/// Created by [`PlotSeries::iter`]. Double-ended and exact-size; yields
/// each `Point` by value.
#[derive(Debug)]
pub struct PointsIter<'a, X: Sample, Y: Sample> {
    series: &'a PlotSeries<X, Y>,
    front: usize,
    back: usize,
}

impl<X: Sample, Y: Sample> Iterator for PointsIter<'_, X, Y> {
    type Item = Point<X, Y>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let point = self.series.get(self.front);
        self.front += 1;
        point
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<X: Sample, Y: Sample> DoubleEndedIterator for PointsIter<'_, X, Y> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.series.get(self.back)
    }
}

impl<X: Sample, Y: Sample> ExactSizeIterator for PointsIter<'_, X, Y> {}
impl<X: Sample, Y: Sample> FusedIterator for PointsIter<'_, X, Y> {}

impl<'a, X: Sample, Y: Sample> IntoIterator for &'a PlotSeries<X, Y> {
    type Item = Point<X, Y>;
    type IntoIter = PointsIter<'a, X, Y>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
