//! Quick sort with Lomuto partitioning, pivot = last element of the range
//!
//! Both the in-loop partition exchange and the final pivot placement are
//! skipped (and not counted) when the two indices coincide, so a sorted
//! input finishes with the swap counter at zero.

use crate::sink::{SortInterrupted, StepSink};

pub(crate) const PSEUDOCODE: &str = "\
procedure quick_sort(a, lo, hi)
    if lo < hi then
        p <- partition(a, lo, hi)
        quick_sort(a, lo, p-1)
        quick_sort(a, p+1, hi)
    end if
end procedure

procedure partition(a, lo, hi)
    pivot <- a[hi]
    i <- lo
    for j from lo to hi-1 do
        if a[j] <= pivot then
            swap(a[i], a[j])
            i <- i + 1
        end if
    end for
    swap(a[i], a[hi])
    return i
end procedure";

pub fn sort<T>(a: &mut [T], sink: &StepSink) -> Result<(), SortInterrupted>
where
    T: Ord + Copy + Into<u32>,
{
    let n = a.len();
    if n > 1 {
        quick_range(a, sink, 0, n - 1)?;
    }

    let all: Vec<usize> = (0..n).collect();
    sink.set_sorted(&all);
    Ok(())
}

/// Sort `a[lo..=hi]`. The caller guarantees `lo < hi`.
fn quick_range<T>(
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

    sink.highlight_line(3); // p <- partition(a, lo, hi)
    let p = partition(a, sink, lo, hi)?;

    sink.highlight_line(4); // recurse left of the pivot
    if p > lo + 1 {
        quick_range(a, sink, lo, p - 1)?;
    }

    sink.highlight_line(5); // recurse right of the pivot
    if p + 1 < hi {
        quick_range(a, sink, p + 1, hi)?;
    }

    Ok(())
}

/// Lomuto partition of `a[lo..=hi]` around `a[hi]`; returns the pivot's
/// final position
fn partition<T>(
    a: &mut [T],
    sink: &StepSink,
    lo: usize,
    hi: usize,
) -> Result<usize, SortInterrupted>
where
    T: Ord + Copy + Into<u32>,
{
    sink.highlight_line(10); // pivot <- a[hi]
    let pivot = a[hi];
    sink.set_pivot(&[hi]);
    sink.delay(a)?;

    sink.highlight_line(11); // i <- lo
    let mut i = lo;

    for j in lo..hi {
        sink.highlight_line(12); // for j
        sink.set_comparing(&[j, hi]);
        sink.increment_comparisons();
        sink.delay(a)?;

        sink.highlight_line(13); // if a[j] <= pivot
        if a[j] <= pivot {
            sink.highlight_line(14); // swap(a[i], a[j])
            if i != j {
                sink.set_swapping(&[i, j]);
                sink.delay(a)?;

                a.swap(i, j);
                sink.increment_swaps();
            }

            sink.highlight_line(15); // i <- i + 1
            i += 1;
        }

        sink.clear_highlights();
        sink.set_pivot(&[hi]);
    }

    sink.highlight_line(18); // swap(a[i], a[hi])
    if i != hi {
        sink.set_swapping(&[i, hi]);
        sink.delay(a)?;

        a.swap(i, hi);
        sink.increment_swaps();
    }

    sink.set_sorted(&[i]);
    sink.clear_highlights();
    Ok(i)
}
