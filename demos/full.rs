//! A more fully-fledged example, showcasing every operation on [`MedianTracker`]
//!
//! This is roughly what a visual front end does: feed values in, show the running median,
//! and draw both heaps as trees from a snapshot.

use stream_median::{heap_edges, MedianError, MedianTracker};

const DATA: [i32; 9] = [41, 7, 19, 88, 7, 63, 2, 54, 30];

fn print_tree(name: &str, values: &[i32]) {
    println!("{name} ({} nodes): {values:?}", values.len());
    for (parent, child) in heap_edges(values.len()) {
        println!("  {} -> {}", values[parent], values[child]);
    }
}

fn main() -> Result<(), MedianError> {
    // Pre-size the containers since we know how much data is coming
    let mut tracker = MedianTracker::with_capacity(DATA.len());

    // Nothing inserted yet, so there is no median to show
    match tracker.median() {
        Ok(median) => println!("Median: {median}"),
        Err(err) => println!("No median yet: {err}"),
    }

    for data_point in DATA {
        tracker.insert(data_point)?;

        println!(
            "Inserted {data_point:>3}: median = {:>5}, lower/upper sizes = {}/{}",
            tracker.median()?,
            tracker.lower_len(),
            tracker.upper_len()
        );
    }

    // Malformed input never makes it into the tracker
    let mut floats = MedianTracker::<f64>::new();
    if let Err(err) = floats.insert(f64::NAN) {
        println!("Rejected: {err}");
    }

    let snapshot = tracker.snapshot();
    println!("Stream: {:?}", snapshot.stream);
    print_tree("Lower half (max-heap)", &snapshot.lower);
    print_tree("Upper half (min-heap)", &snapshot.upper);

    tracker.reset();
    println!(
        "After reset: empty = {}, median = {:?}",
        tracker.is_empty(),
        tracker.median()
    );

    Ok(())
}
