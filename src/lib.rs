//! # plotbuf
//!
//! In-memory point-series store for live telemetry plotting.
//!
//! plotbuf is the data backbone of a plotting front end: a bounded-memory,
//! append-optimized container for (x, y) samples that producers (parsers,
//! ingest plugins) push into and consumers (rendering) read back out. It is
//! deliberately small — no persistence, no indexing beyond the time axis,
//! no rendering.
//!
//! ## Key Properties
//!
//! - Amortized O(1) append, O(log n) nearest-timestamp lookup
//! - Lazily cached min/max range queries per dimension
//! - Transparent constant-value storage: a flat run of equal samples costs
//!   one stored value, however long it gets
//! - Sliding time-window eviction with a two-point interpolation floor
//! - Generic over both coordinate types; numeric behaviors (range
//!   tracking, non-finite rejection) are selected statically per type and
//!   are inert for text or opaque samples
//!
//! ## Quick Start
//!
//! ```rust
//! use plotbuf::{PlotData, PlotGroup, Point};
//!
//! let group = PlotGroup::shared("vehicle");
//! let mut speed = PlotData::new("vehicle/speed", Some(group));
//!
//! // Keep ten seconds of history.
//! speed.set_maximum_range_x(10.0);
//!
//! speed.push_back(Point::new(0.0, 0.0));
//! speed.push_back(Point::new(0.1, 3.5));
//! speed.push_back(Point::new(0.2, 7.2));
//!
//! let range = speed.range_y().unwrap();
//! assert_eq!((range.min, range.max), (0.0, 7.2));
//! assert_eq!(speed.get_y_from_x(0.11), Some(3.5));
//! ```
//!
//! ## Concurrency
//!
//! The store is single-threaded by contract: no operation blocks, suspends,
//! or performs I/O, and nothing is locked internally. One logical writer at
//! a time; readers must be serialized externally against mutation.
//!
//! ## Modules
//!
//! For lower-level access, the individual modules are also public:
//!
//! - [`series`] — generic point container, storage modes, iteration
//! - [`timeseries`] — timestamp specialization, lookup, window eviction
//! - [`range`] — cached min/max tracking
//! - [`sample`] — per-type numeric behavior selection
//! - [`attributes`] — display metadata and validation
//! - [`group`] — shared sibling tags
//! - [`error`] — error types

pub mod attributes;
pub mod error;
pub mod group;
pub mod range;
pub mod sample;
pub mod series;
pub mod timeseries;

// Re-export primary API types at crate root for convenience.
pub use attributes::{AttributeValue, Attributes, PlotAttribute, Rgba};
pub use error::{AccessError, AttributeError, PlotError, Result};
pub use group::{GroupRef, PlotGroup};
pub use range::Range;
pub use sample::Sample;
pub use series::{PlotSeries, Point, PointsIter};
pub use timeseries::{PlotData, StringSeries, TimeSeries};
