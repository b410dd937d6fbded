//! Time-ordered series specialization.
//!
//! [`TimeSeries`] fixes the domain of a [`PlotSeries`] to an `f64`
//! timestamp and adds the behaviors live telemetry needs on top of plain
//! storage:
//!
//! - **Sorted insertion.** Samples usually arrive in time order and take
//!   the O(1) append path; a sample older than the newest stored one is
//!   placed by binary search instead, keeping iteration in non-decreasing
//!   timestamp order. Equal timestamps preserve arrival order.
//! - **Nearest-timestamp lookup.** [`get_index_from_x`] resolves a queried
//!   time to the closest stored index in O(log n), which is how the
//!   rendering layer maps a cursor position back to a sample.
//! - **Sliding-window eviction.** An optional maximum timestamp span bounds
//!   memory: after every push, points older than the window are evicted
//!   from the front, never going below 2 points so consumers can still
//!   interpolate.
//!
//! [`get_index_from_x`]: TimeSeries::get_index_from_x

use crate::attributes::{AttributeValue, Attributes, PlotAttribute};
use crate::error::Result;
use crate::group::GroupRef;
use crate::range::Range;
use crate::sample::Sample;
use crate::series::{PlotSeries, Point, PointsIter};

/// A numeric time series; the common case for plotted telemetry.
pub type PlotData = TimeSeries<f64>;

/// A time series of text samples (state labels, log-derived channels).
pub type StringSeries = TimeSeries<String>;

/// [`PlotSeries`] specialized to a timestamp domain, with sorted insertion,
/// nearest-timestamp lookup, and a sliding time-window eviction policy.
///
/// Timestamps are `f64` seconds; the unit is by convention only.
#[derive(Debug, Clone)]
pub struct TimeSeries<Y: Sample> {
    series: PlotSeries<f64, Y>,
    max_range_x: f64,
}

impl<Y: Sample> TimeSeries<Y> {
    /// Creates an empty time series with an unbounded retention window.
    pub fn new(name: impl Into<String>, group: Option<GroupRef>) -> Self {
        Self {
            series: PlotSeries::new(name, group),
            max_range_x: f64::MAX,
        }
    }

    /// Pushes a sample, keeping storage sorted by timestamp.
    ///
    /// When the series is empty or `point.x` is not older than the newest
    /// stored timestamp this is a fast O(1) append. Otherwise the point is
    /// placed by binary search at the first position whose timestamp is
    /// strictly greater, which orders a late duplicate timestamp after the
    /// samples that already carry it. Non-finite coordinates are silently
    /// dropped, as in [`PlotSeries::push_back`]. The retention window is
    /// trimmed afterwards.
    pub fn push_back(&mut self, point: Point<f64, Y>) {
        let needs_sorting = self
            .series
            .domain()
            .back()
            .is_some_and(|last| point.x < *last);
        if needs_sorting {
            let index = self.series.domain().partition_point(|stored| *stored <= point.x);
            let inserted = self.series.insert(index, point);
            debug_assert!(inserted.is_ok(), "partition point is always in bounds");
        } else {
            self.series.push_back(point);
        }
        self.trim();
    }

    /// Index of the stored sample whose timestamp is nearest to `x`.
    ///
    /// Exact matches resolve to their own index; a query between two
    /// samples resolves to the numerically closer one, with the later index
    /// winning an exact tie. Queries outside the stored span clamp to the
    /// first or last index. `None` only when the series is empty.
    #[must_use]
    pub fn get_index_from_x(&self, x: f64) -> Option<usize> {
        let timestamps = self.series.domain();
        if timestamps.is_empty() {
            return None;
        }
        let index = timestamps.partition_point(|stored| *stored < x);
        if index >= timestamps.len() {
            return Some(timestamps.len() - 1);
        }
        if index > 0 && (x - timestamps[index - 1]).abs() < (timestamps[index] - x).abs() {
            return Some(index - 1);
        }
        Some(index)
    }

    /// Value of the sample nearest to `x`, respecting the storage mode.
    /// `None` only when the series is empty.
    #[must_use]
    pub fn get_y_from_x(&self, x: f64) -> Option<Y> {
        let index = self.get_index_from_x(x)?;
        self.series.get(index).map(|point| point.y)
    }

    /// Sets the retained timestamp span and trims immediately.
    pub fn set_maximum_range_x(&mut self, window: f64) {
        self.max_range_x = window;
        self.trim();
    }

    /// The configured retention span; `f64::MAX` when unbounded.
    #[must_use]
    pub fn maximum_range_x(&self) -> f64 {
        self.max_range_x
    }

    /// The underlying generic container, for read paths that operate on any
    /// series kind.
    #[must_use]
    pub fn series(&self) -> &PlotSeries<f64, Y> {
        &self.series
    }

    /// Evicts stale points from the front.
    ///
    /// The window is anchored to the newest stored timestamp; storage is
    /// kept sorted, so that is also the true maximum. Eviction never
    /// reduces the series below 2 points.
    fn trim(&mut self) {
        if self.max_range_x >= f64::MAX {
            return;
        }
        let Some(&newest) = self.series.domain().back() else {
            return;
        };
        while self.series.len() > 2
            && self
                .series
                .domain()
                .front()
                .is_some_and(|oldest| newest - oldest > self.max_range_x)
        {
            self.series.pop_front();
        }
    }

    // Delegated container surface. The write paths that could break the
    // timestamp ordering (generic insert) are deliberately not exposed.

    /// The series name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.series.name()
    }

    /// The group this series belongs to, if any.
    #[must_use]
    pub fn group(&self) -> Option<&GroupRef> {
        self.series.group()
    }

    /// Moves the series to a different group (or out of any group).
    pub fn change_group(&mut self, group: Option<GroupRef>) {
        self.series.change_group(group);
    }

    /// Number of stored samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether the series holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// All assigned display attributes.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        self.series.attributes()
    }

    /// The value assigned to `attribute`, if any.
    #[must_use]
    pub fn attribute(&self, attribute: PlotAttribute) -> Option<AttributeValue> {
        self.series.attribute(attribute)
    }

    /// Assigns `value` to `attribute`.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::TypeMismatch`](crate::error::AttributeError)
    /// when the value kind does not match the attribute.
    pub fn set_attribute(
        &mut self,
        attribute: PlotAttribute,
        value: AttributeValue,
    ) -> Result<()> {
        self.series.set_attribute(attribute, value)
    }

    /// The sample at `index`.
    ///
    /// # Errors
    ///
    /// See [`PlotSeries::at`].
    pub fn at(&self, index: usize) -> Result<Point<f64, Y>> {
        self.series.at(index)
    }

    /// The sample at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Point<f64, Y>> {
        self.series.get(index)
    }

    /// Replaces the sample at `index` in place.
    ///
    /// # Errors
    ///
    /// See [`PlotSeries::set_point`].
    pub fn set_point(&mut self, index: usize, point: Point<f64, Y>) -> Result<()> {
        self.series.set_point(index, point)
    }

    /// Removes and returns the oldest sample.
    pub fn pop_front(&mut self) -> Option<Point<f64, Y>> {
        self.series.pop_front()
    }

    /// The oldest stored sample, if any.
    #[must_use]
    pub fn front(&self) -> Option<Point<f64, Y>> {
        self.series.front()
    }

    /// The newest stored sample, if any.
    #[must_use]
    pub fn back(&self) -> Option<Point<f64, Y>> {
        self.series.back()
    }

    /// Removes every sample; the retention window configuration is kept.
    pub fn clear(&mut self) {
        self.series.clear();
    }

    /// Cached (min, max) of the stored timestamps.
    #[must_use]
    pub fn range_x(&self) -> Option<Range> {
        self.series.range_x()
    }

    /// Cached (min, max) of the sample values.
    #[must_use]
    pub fn range_y(&self) -> Option<Range> {
        self.series.range_y()
    }

    /// Read-only view over the stored samples in timestamp order.
    #[must_use]
    pub fn iter(&self) -> PointsIter<'_, f64, Y> {
        self.series.iter()
    }

    /// Replaces this series' samples with copies of another's; the
    /// retention window configuration is kept.
    pub fn clone_points(&mut self, other: &Self) {
        self.series.clone_points(&other.series);
    }
}

impl<'a, Y: Sample> IntoIterator for &'a TimeSeries<Y> {
    type Item = Point<f64, Y>;
    type IntoIter = PointsIter<'a, f64, Y>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
