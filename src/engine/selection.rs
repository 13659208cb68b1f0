//! Selection sort: repeatedly select the minimum of the unsorted suffix
//!
//! The per-pass exchange is skipped (and not counted) when the minimum is
//! already in place.

use crate::sink::{SortInterrupted, StepSink};

pub(crate) const PSEUDOCODE: &str = "\
procedure selection_sort(a)
    n <- length(a)
    for i from 0 to n-2 do
        min <- i
        for j from i+1 to n-1 do
            if a[j] < a[min] then
                min <- j
            end if
        end for
        if min != i then
            swap(a[i], a[min])
        end if
        mark a[i] sorted
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

    for i in 0..n - 1 {
        sink.highlight_line(3); // for i
        let mut min = i;

        sink.highlight_line(4); // min <- i
        sink.set_comparing(&[i]);
        sink.delay(a)?;

        for j in i + 1..n {
            sink.highlight_line(5); // for j
            sink.set_comparing(&[min, j]);
            sink.increment_comparisons();
            sink.delay(a)?;

            sink.highlight_line(6); // if a[j] < a[min]
            if a[j] < a[min] {
                sink.highlight_line(7); // min <- j
                min = j;
                sink.delay(a)?;
            }
        }

        sink.highlight_line(10); // if min != i
        if min != i {
            sink.highlight_line(11); // swap(a[i], a[min])
            sink.set_swapping(&[i, min]);
            sink.delay(a)?;

            a.swap(i, min);
            sink.increment_swaps();
        }

        sink.set_sorted(&[i]);
        sink.clear_highlights();
        sink.delay(a)?;
    }

    // The last element falls into place by elimination
    sink.set_sorted(&[n - 1]);
    Ok(())
}
