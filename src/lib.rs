#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

mod error;
mod observation;
mod snapshot;

pub use error::MedianError;
pub use observation::Observation;
pub use snapshot::{heap_edges, Snapshot};

use observation::Ordered;

/// Exact running median of a data stream
///
/// The [`Self::new`] constructor creates an empty tracker.
/// Observations are then added one at a time with [`Self::insert`],
/// and the median of everything seen so far can be read at any point with [`Self::median`].
///
/// Internally the stream is split into two halves: a max-heap holding the lower half
/// and a min-heap holding the upper half. Their sizes never differ by more than one,
/// and every value in the lower half is less than or equal to every value in the upper half,
/// so the median always sits at one or both heap roots.
/// Insertion is O(log n) and median retrieval is O(1).
///
/// The tracker does no locking of its own. To share one between threads,
/// wrap it in a [`std::sync::Mutex`] and hold the guard across each insert/query pair.
#[derive(Debug, Clone)]
pub struct MedianTracker<T> {
    /// Lower half of the stream, largest value at the root
    lower: BinaryHeap<Ordered<T>>,
    /// Upper half of the stream, smallest value at the root
    upper: BinaryHeap<Reverse<Ordered<T>>>,
    /// Every observation in insertion order
    ///
    /// Kept for display only, never consulted for the median.
    stream: Vec<T>,
}

impl<T: Observation> Default for MedianTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Observation> MedianTracker<T> {
    /// Constructs a new, empty [`Self`]
    pub fn new() -> Self {
        Self {
            lower: BinaryHeap::new(),
            upper: BinaryHeap::new(),
            stream: Vec::new(),
        }
    }

    /// Constructs a new, empty [`Self`] with room for `capacity` observations
    /// before any container has to reallocate
    pub fn with_capacity(capacity: usize) -> Self {
        let half = capacity / 2 + 1;
        Self {
            lower: BinaryHeap::with_capacity(half),
            upper: BinaryHeap::with_capacity(half),
            stream: Vec::with_capacity(capacity),
        }
    }

    /// Total number of observations inserted so far
    pub fn len(&self) -> usize {
        self.stream.len()
    }

    /// Whether nothing has been inserted since construction or the last [`Self::reset`]
    pub fn is_empty(&self) -> bool {
        self.stream.is_empty()
    }

    /// Number of observations in the lower half
    pub fn lower_len(&self) -> usize {
        self.lower.len()
    }

    /// Number of observations in the upper half
    pub fn upper_len(&self) -> usize {
        self.upper.len()
    }

    /// Largest observation in the lower half
    pub fn lower_max(&self) -> Option<T> {
        self.lower.peek().map(|top| top.0)
    }

    /// Smallest observation in the upper half
    pub fn upper_min(&self) -> Option<T> {
        self.upper.peek().map(|Reverse(top)| top.0)
    }

    /// All observations, in the order they were inserted
    pub fn stream(&self) -> &[T] {
        &self.stream
    }

    /// Processes a new observation, updating the running median
    ///
    /// Placement relative to the current median:
    /// - first observation goes to the lower half
    /// - equal halves: above the median goes up, otherwise down (ties favour the lower half)
    /// - lower half larger: below the median goes down and the lower root moves up,
    ///   otherwise it goes straight up
    /// - upper half larger: above the median goes up and the upper root moves down,
    ///   otherwise it goes straight down
    ///
    /// Returns [`MedianError::NotComparable`] for NaN-like values, leaving the tracker untouched.
    pub fn insert(&mut self, value: T) -> Result<(), MedianError> {
        if !value.is_comparable() {
            #[cfg(feature = "logging")]
            log::warn!("Rejected observation {:?}: not comparable", value);

            return Err(MedianError::NotComparable(format!("{value:?}")));
        }

        if self.is_empty() {
            self.lower.push(Ordered(value));
            self.stream.push(value);
            return Ok(());
        }

        // Placement is decided against the heap roots in `T` itself,
        // so wide integers are never rounded through `f64`
        let incoming = Ordered(value);
        match self.lower.len().cmp(&self.upper.len()) {
            Ordering::Equal => {
                if self.above_midpoint(&incoming) {
                    self.upper.push(Reverse(incoming));
                } else {
                    self.lower.push(incoming);
                }
            }
            Ordering::Greater => {
                // Median is the lower root
                if self.lower.peek().is_some_and(|top| incoming < *top) {
                    self.lower.push(incoming);
                    self.shift_lower_to_upper();
                } else {
                    self.upper.push(Reverse(incoming));
                }
            }
            Ordering::Less => {
                // Median is the upper root
                if self.upper.peek().is_some_and(|Reverse(top)| incoming > *top) {
                    self.upper.push(Reverse(incoming));
                    self.shift_upper_to_lower();
                } else {
                    self.lower.push(incoming);
                }
            }
        }

        #[cfg(feature = "logging")]
        log::trace!(
            "Inserted {:?}: lower={} upper={}",
            value,
            self.lower.len(),
            self.upper.len()
        );

        self.stream.push(value);
        Ok(())
    }

    /// Gets the exact median of the observations inserted so far
    ///
    /// With an odd count this is the middle observation itself; with an even count
    /// it is the mean of the two middle observations, so integer streams can yield
    /// fractional medians. Returns [`MedianError::EmptyStream`] if nothing has been inserted.
    ///
    /// Returns [`MedianError::Indeterminate`] when the two middle observations
    /// are opposite infinities, since their mean is undefined.
    pub fn median(&self) -> Result<f64, MedianError> {
        match self.current_median() {
            None => Err(MedianError::EmptyStream),
            Some(median) if median.is_nan() => Err(MedianError::Indeterminate),
            Some(median) => Ok(median),
        }
    }

    /// Clears both halves and the stream log
    pub fn reset(&mut self) {
        #[cfg(feature = "logging")]
        log::debug!("Resetting median tracker after {} observations", self.stream.len());

        self.lower.clear();
        self.upper.clear();
        self.stream.clear();
    }

    /// Copies out the contents of both halves and the stream log
    ///
    /// See [`Snapshot`] for the layout of each sequence.
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot {
            lower: self.lower.iter().map(|item| item.0).collect(),
            upper: self.upper.iter().map(|Reverse(item)| item.0).collect(),
            stream: self.stream.clone(),
        }
    }

    /// Median derived from the heap roots, if there is anything to derive it from
    fn current_median(&self) -> Option<f64> {
        match self.lower.len().cmp(&self.upper.len()) {
            Ordering::Greater => self.lower_max().map(T::to_f64),
            Ordering::Less => self.upper_min().map(T::to_f64),
            Ordering::Equal => {
                let low = self.lower_max()?.to_f64();
                let high = self.upper_min()?.to_f64();
                Some(midpoint(low, high))
            }
        }
    }

    /// Whether `incoming` belongs in the upper half when both halves are the same size
    ///
    /// Anything at or below the lower root stays low and anything at or above the
    /// upper root goes high. Only values strictly between the roots are compared
    /// against the mean, where either side keeps the halves ordered.
    fn above_midpoint(&self, incoming: &Ordered<T>) -> bool {
        let (Some(low), Some(Reverse(high))) = (self.lower.peek(), self.upper.peek()) else {
            return false;
        };

        if incoming <= low {
            false
        } else if incoming >= high {
            true
        } else {
            incoming.0.to_f64() > midpoint(low.0.to_f64(), high.0.to_f64())
        }
    }

    fn shift_lower_to_upper(&mut self) {
        if let Some(top) = self.lower.pop() {
            #[cfg(feature = "logging")]
            log::trace!("Rebalancing: moving {:?} from lower to upper", top.0);

            self.upper.push(Reverse(top));
        }
    }

    fn shift_upper_to_lower(&mut self) {
        if let Some(Reverse(top)) = self.upper.pop() {
            #[cfg(feature = "logging")]
            log::trace!("Rebalancing: moving {:?} from upper to lower", top.0);

            self.lower.push(top);
        }
    }
}

/// Mean of two values, without overflowing when both are finite
///
/// Opposite infinities give NaN.
fn midpoint(low: f64, high: f64) -> f64 {
    let mean = (low + high) / 2.;
    if mean.is_finite() || !low.is_finite() || !high.is_finite() {
        mean
    } else {
        low / 2. + high / 2.
    }
}
