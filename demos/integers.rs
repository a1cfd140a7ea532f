//! Integer streams still produce fractional medians when the count is even

use stream_median::{MedianError, MedianTracker};

fn main() -> Result<(), MedianError> {
    let mut tracker = MedianTracker::<i64>::new();

    for v in 1..=5 {
        tracker.insert(v)?;
        println!("after {v}: median = {}", tracker.median()?);
    }

    Ok(())
}
