//! Heap sort: in-place max-heap with recursive sift-down

use crate::sink::{SortInterrupted, StepSink};

pub(crate) const PSEUDOCODE: &str = "\
procedure heap_sort(a)
    n <- length(a)
    for i from n/2 - 1 down to 0 do
        sift_down(a, n, i)
    end for
    for i from n-1 down to 1 do
        swap(a[0], a[i])
        sift_down(a, i, 0)
    end for
end procedure

procedure sift_down(a, n, i)
    largest <- i
    left <- 2i + 1
    right <- 2i + 2
    if left < n and a[left] > a[largest] then
        largest <- left
    end if
    if right < n and a[right] > a[largest] then
        largest <- right
    end if
    if largest != i then
        swap(a[i], a[largest])
        sift_down(a, n, largest)
    end if
end procedure";

pub fn sort<T>(a: &mut [T], sink: &StepSink) -> Result<(), SortInterrupted>
where
    T: Ord + Copy + Into<u32>,
{
    let n = a.len();
    if n == 0 {
        return Ok(());
    }

    sink.highlight_line(3); // build the max-heap bottom-up
    for i in (0..n / 2).rev() {
        sift_down(a, sink, n, i)?;
    }

    sink.highlight_line(6); // extract maxima one by one
    for i in (1..n).rev() {
        sink.highlight_line(7); // swap(a[0], a[i])
        sink.set_swapping(&[0, i]);
        sink.delay(a)?;

        a.swap(0, i);
        sink.increment_swaps();
        sink.set_sorted(&[i]);

        sink.highlight_line(8); // sift_down(a, i, 0)
        sift_down(a, sink, i, 0)?;
    }

    sink.set_sorted(&[0]);
    Ok(())
}

/// Restore the max-heap property for the subtree rooted at `i`, within the
/// heap prefix `a[..n]`
fn sift_down<T>(a: &mut [T], sink: &StepSink, n: usize, i: usize) -> Result<(), SortInterrupted>
where
    T: Ord + Copy + Into<u32>,
{
    sink.highlight_line(13); // largest <- i
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    sink.highlight_line(14); // left <- 2i + 1
    sink.highlight_line(15); // right <- 2i + 2
    sink.delay(a)?;

    if left < n {
        sink.highlight_line(16); // compare with the left child
        sink.set_comparing(&[largest, left]);
        sink.increment_comparisons();
        sink.delay(a)?;

        if a[left] > a[largest] {
            sink.highlight_line(17); // largest <- left
            largest = left;
        }
    }

    if right < n {
        sink.highlight_line(19); // compare with the right child
        sink.set_comparing(&[largest, right]);
        sink.increment_comparisons();
        sink.delay(a)?;

        if a[right] > a[largest] {
            sink.highlight_line(20); // largest <- right
            largest = right;
        }
    }

    if largest != i {
        sink.highlight_line(22); // if largest != i
        sink.highlight_line(23); // swap(a[i], a[largest])
        sink.set_swapping(&[i, largest]);
        sink.delay(a)?;

        a.swap(i, largest);
        sink.increment_swaps();

        sink.highlight_line(24); // recursive sift
        sift_down(a, sink, n, largest)?;
    }

    sink.clear_highlights();
    Ok(())
}
