use std::cmp::Ordering;
use std::fmt::Debug;

/// A numeric value that can be fed into a [`crate::MedianTracker`]
///
/// Implemented for every primitive integer type, plus [`f32`] and [`f64`].
/// Medians are always reported as [`f64`], so an even-sized stream of integers
/// can still yield a fractional median such as `2.5`.
pub trait Observation: Copy + PartialOrd + Debug {
    /// Widens the value for median arithmetic
    fn to_f64(self) -> f64;

    /// Whether the value fits in the total order of its domain
    ///
    /// Only NaN-like values return `false`.
    fn is_comparable(&self) -> bool {
        true
    }
}

macro_rules! impl_integer_observation {
    ($($t:ty),* $(,)?) => {
        $(
            impl Observation for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_integer_observation!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Observation for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn is_comparable(&self) -> bool {
        !self.is_nan()
    }
}

impl Observation for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    fn is_comparable(&self) -> bool {
        !self.is_nan()
    }
}

/// Total-order wrapper so observations can live in a [`std::collections::BinaryHeap`]
///
/// Only values passing [`Observation::is_comparable`] are ever wrapped,
/// so the `Equal` fallback is never hit in practice.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Ordered<T>(pub(crate) T);

impl<T: PartialOrd> Ord for Ordered<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}

impl<T: PartialOrd> PartialOrd for Ordered<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: PartialOrd> PartialEq for Ordered<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: PartialOrd> Eq for Ordered<T> {}
