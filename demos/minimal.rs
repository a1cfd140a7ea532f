//! A basic example showing minimal usage
//!
//! We construct a [`MedianTracker`], fill it with data, and then read out the median

use stream_median::{MedianError, MedianTracker};

/// Response times in milliseconds, in arrival order
///
/// Sorted, the middle reading is 38.6
const LATENCIES_MS: [f64; 11] = [
    3.2, 47.9, 15.5, 88.0, 26.4, 61.7, 9.3, 72.1, 38.6, 54.0, 20.8,
];

fn main() -> Result<(), MedianError> {
    let mut tracker = MedianTracker::new();

    for latency in LATENCIES_MS {
        tracker.insert(latency)?;
    }

    let median = tracker.median()?;
    println!("Median latency over {} requests: {median} ms", tracker.len());

    Ok(())
}
