//! Insertion sort: grow a sorted prefix by inserting one key at a time
//!
//! Each one-place shift is counted on the swap counter even though it is a
//! single-element move rather than an exchange.

use crate::sink::{SortInterrupted, StepSink};

pub(crate) const PSEUDOCODE: &str = "\
procedure insertion_sort(a)
    n <- length(a)
    for i from 1 to n-1 do
        key <- a[i]
        j <- i
        while j > 0 and a[j-1] > key do
            a[j] <- a[j-1]
            j <- j - 1
        end while
        a[j] <- key
    end for
end procedure";

pub fn sort<T>(a: &mut [T], sink: &StepSink) -> Result<(), SortInterrupted>
where
    T: Ord + Copy + Into<u32>,
{
    let n = a.len();
    if n == 0 {
        return Ok(());
    }

    // Position 0 starts out trivially sorted
    sink.set_sorted(&[0]);

    for i in 1..n {
        sink.highlight_line(3); // for i
        let key = a[i];

        sink.highlight_line(4); // key <- a[i]
        sink.set_comparing(&[i]);
        sink.delay(a)?;

        sink.highlight_line(5); // j <- i
        let mut j = i;
        sink.delay(a)?;

        sink.highlight_line(6); // while j > 0 and a[j-1] > key
        while j > 0 && a[j - 1] > key {
            sink.set_comparing(&[j - 1, i]);
            sink.increment_comparisons();
            sink.delay(a)?;

            sink.highlight_line(7); // a[j] <- a[j-1]
            a[j] = a[j - 1];
            sink.increment_swaps();
            sink.delay(a)?;

            sink.highlight_line(8); // j <- j - 1
            j -= 1;
            sink.delay(a)?;
        }

        sink.highlight_line(10); // a[j] <- key
        a[j] = key;
        sink.set_sorted(&[j]);
        sink.delay(a)?;

        sink.clear_highlights();
    }

    let all: Vec<usize> = (0..n).collect();
    sink.set_sorted(&all);
    Ok(())
}
