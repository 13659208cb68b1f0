//! Merge sort: recursive halving with a buffered merge
//!
//! Write-backs into the destination range are direct assignments; they
//! touch neither counter, so merge's step count grows through its
//! comparisons only.

use crate::sink::{SortInterrupted, StepSink};

pub(crate) const PSEUDOCODE: &str = "\
procedure merge_sort(a, lo, hi)
    if lo < hi then
        mid <- (lo + hi) / 2
        merge_sort(a, lo, mid)
        merge_sort(a, mid+1, hi)
        merge(a, lo, mid, hi)
    end if
end procedure

procedure merge(a, lo, mid, hi)
    left <- a[lo..mid], right <- a[mid+1..hi]
    i <- 0, j <- 0, k <- lo
    while i < length(left) and j < length(right) do
        if left[i] <= right[j] then
            a[k] <- left[i]; i <- i + 1
        else
            a[k] <- right[j]; j <- j + 1
        end if
        k <- k + 1
    end while
    while i < length(left) do
        a[k] <- left[i]; i <- i + 1; k <- k + 1
    end while
    while j < length(right) do
        a[k] <- right[j]; j <- j + 1; k <- k + 1
    end while
end procedure";

pub fn sort<T>(a: &mut [T], sink: &StepSink) -> Result<(), SortInterrupted>
where
    T: Ord + Copy + Into<u32>,
{
    let n = a.len();
    if n > 1 {
        merge_range(a, sink, 0, n - 1)?;
    }

    let all: Vec<usize> = (0..n).collect();
    sink.set_sorted(&all);
    Ok(())
}

/// Sort `a[lo..=hi]`. The caller guarantees `lo < hi`.
fn merge_range<T>(
    a: &mut [T],
    sink: &StepSink,
    lo: usize,
    hi: usize,
) -> Result<(), SortInterrupted>
where
    T: Ord + Copy + Into<u32>,
{
    sink.highlight_line(2); // if lo < hi
    sink.delay(a)?;

    sink.highlight_line(3); // mid <- (lo + hi) / 2
    let mid = (lo + hi) / 2;
    sink.delay(a)?;

    sink.highlight_line(4); // sort the left half
    if lo < mid {
        merge_range(a, sink, lo, mid)?;
    }

    sink.highlight_line(5); // sort the right half
    if mid + 1 < hi {
        merge_range(a, sink, mid + 1, hi)?;
    }

    sink.highlight_line(6); // merge the halves
    merge(a, sink, lo, mid, hi)
}

fn merge<T>(
    a: &mut [T],
    sink: &StepSink,
    lo: usize,
    mid: usize,
    hi: usize,
) -> Result<(), SortInterrupted>
where
    T: Ord + Copy + Into<u32>,
{
    sink.highlight_line(11); // copy out the two halves
    let left: Vec<T> = a[lo..=mid].to_vec();
    let right: Vec<T> = a[mid + 1..=hi].to_vec();
    sink.delay(a)?;

    sink.highlight_line(12); // i <- 0, j <- 0, k <- lo
    let (mut i, mut j, mut k) = (0, 0, lo);

    while i < left.len() && j < right.len() {
        sink.highlight_line(13); // while both halves have elements
        sink.set_comparing(&[lo + i, mid + 1 + j]);
        sink.increment_comparisons();
        sink.delay(a)?;

        sink.highlight_line(14); // if left[i] <= right[j]
        if left[i] <= right[j] {
            sink.highlight_line(15); // a[k] <- left[i]
            a[k] = left[i];
            i += 1;
        } else {
            sink.highlight_line(17); // a[k] <- right[j]
            a[k] = right[j];
            j += 1;
        }

        sink.set_sorted(&[k]);
        k += 1;
        sink.delay(a)?;
    }

    while i < left.len() {
        sink.highlight_line(21); // drain the left half
        a[k] = left[i];
        sink.set_sorted(&[k]);
        i += 1;
        k += 1;
        sink.delay(a)?;
    }

    while j < right.len() {
        sink.highlight_line(24); // drain the right half
        a[k] = right[j];
        sink.set_sorted(&[k]);
        j += 1;
        k += 1;
        sink.delay(a)?;
    }

    sink.clear_highlights();
    Ok(())
}
