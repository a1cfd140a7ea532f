/// Errors surfaced by [`crate::MedianTracker`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MedianError {
    /// A median was requested before any observation was inserted
    #[error("median requested from an empty stream")]
    EmptyStream,

    /// The two middle observations are opposite infinities, so their mean is undefined
    #[error("median is undefined between opposite infinities")]
    Indeterminate,

    /// The observation has no place in a total order (e.g. NaN)
    #[error("observation {0} is not comparable")]
    NotComparable(String),
}
