//! Sample types storable in a point series.
//!
//! A [`PlotSeries`](crate::series::PlotSeries) is generic over the types of
//! both coordinates. Numeric-only behaviors — min/max range tracking,
//! non-finite rejection, and the tolerant equality behind the constant-value
//! storage optimization — are selected statically per parameter type through
//! the [`Sample`] trait, so non-numeric instantiations (text labels, opaque
//! payloads) pay nothing for them.
//!
//! Implementations are provided for the floating-point and integer
//! primitives and for `String`. A type that implements [`Sample`] with all
//! defaults gets the inert behavior: every value accepted, no range
//! tracking, and no equality, which forces the series to store every value
//! individually.

/// Relative-epsilon comparison used by the constant-value optimization and
/// by range-cache invalidation checks.
///
/// Two values are equal when their difference is within machine epsilon
/// scaled by the larger magnitude (floored at 1.0 so values near zero do not
/// demand absolute exactness).
#[must_use]
pub fn approx_eq_f64(a: f64, b: f64) -> bool {
    (a - b).abs() <= f64::EPSILON * 1.0_f64.max(a.abs()).max(b.abs())
}

/// Relative-epsilon comparison for `f32`, mirroring [`approx_eq_f64`].
#[must_use]
pub fn approx_eq_f32(a: f32, b: f32) -> bool {
    (a - b).abs() <= f32::EPSILON * 1.0_f32.max(a.abs()).max(b.abs())
}

/// A value usable as one coordinate of a stored point.
///
/// The three methods describe how much numeric structure the type has; the
/// defaults describe a fully opaque type. All dispatch is static, resolved
/// at monomorphization time.
pub trait Sample: Clone {
    /// Whether the value may be stored at all.
    ///
    /// Numeric types return `false` for NaN and infinities; such points are
    /// silently dropped on insertion so downstream consumers only ever see
    /// well-formed series. Non-numeric samples are always well-formed.
    fn is_finite(&self) -> bool {
        true
    }

    /// Numeric view of the value used for min/max range tracking.
    ///
    /// Returning `None` disables range tracking for the dimension; range
    /// queries over it answer "none".
    fn as_scalar(&self) -> Option<f64> {
        None
    }

    /// Equality used by the constant-value storage optimization.
    ///
    /// `None` means the type has no reliable equality; a series of such
    /// values never enters constant mode and stores every value
    /// individually.
    fn approx_eq(&self, _other: &Self) -> Option<bool> {
        None
    }
}

impl Sample for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }

    fn as_scalar(&self) -> Option<f64> {
        Some(*self)
    }

    fn approx_eq(&self, other: &Self) -> Option<bool> {
        Some(approx_eq_f64(*self, *other))
    }
}

impl Sample for f32 {
    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }

    fn as_scalar(&self) -> Option<f64> {
        Some(f64::from(*self))
    }

    fn approx_eq(&self, other: &Self) -> Option<bool> {
        Some(approx_eq_f32(*self, *other))
    }
}

macro_rules! impl_sample_for_int {
    ($($t:ty),* $(,)?) => {$(
        impl Sample for $t {
            #[allow(clippy::cast_precision_loss)] // range extents are approximate by nature
            fn as_scalar(&self) -> Option<f64> {
                Some(*self as f64)
            }

            fn approx_eq(&self, other: &Self) -> Option<bool> {
                Some(self == other)
            }
        }
    )*};
}

impl_sample_for_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl Sample for String {
    fn approx_eq(&self, other: &Self) -> Option<bool> {
        Some(self == other)
    }
}
