//! Bubble sort: adjacent-pair exchanges with early exit

use crate::sink::{SortInterrupted, StepSink};

pub(crate) const PSEUDOCODE: &str = "\
procedure bubble_sort(a)
    n <- length(a)
    for i from 0 to n-2 do
        swapped <- false
        for j from 0 to n-i-2 do
            if a[j] > a[j+1] then
                swap(a[j], a[j+1])
                swapped <- true
            end if
        end for
        mark a[n-i-1] sorted
        if not swapped then
            break
        end if
    end for
end procedure";

pub fn sort<T>(a: &mut [T], sink: &StepSink) -> Result<(), SortInterrupted>
where
    T: Ord + Copy + Into<u32>,
{
    let n = a.len();

    for i in 0..n.saturating_sub(1) {
        sink.highlight_line(3); // for i
        let mut swapped = false;

        sink.highlight_line(4); // swapped <- false
        sink.delay(a)?;

        for j in 0..n - i - 1 {
            sink.highlight_line(5); // for j
            sink.delay(a)?;

            sink.highlight_line(6); // if a[j] > a[j+1]
            sink.set_comparing(&[j, j + 1]);
            sink.increment_comparisons();
            sink.delay(a)?;

            if a[j] > a[j + 1] {
                sink.highlight_line(7); // swap(a[j], a[j+1])
                sink.set_swapping(&[j, j + 1]);
                sink.delay(a)?;

                a.swap(j, j + 1);
                sink.increment_swaps();
                swapped = true;

                sink.highlight_line(8); // swapped <- true
                sink.delay(a)?;
            }

            sink.clear_highlights();
        }

        // The largest remaining value has bubbled into its final place
        sink.set_sorted(&[n - i - 1]);

        sink.highlight_line(12); // if not swapped
        if !swapped {
            sink.highlight_line(13); // break
            break;
        }
    }

    let all: Vec<usize> = (0..n).collect();
    sink.set_sorted(&all);
    Ok(())
}
