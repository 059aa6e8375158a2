//! Bubble sort with a shrinking window and early exit.

use std::cmp::Ordering;

use crate::exchange::exchange;

#[inline]
pub fn sort<T>(v: &mut Vec<T>)
where
    T: Ord,
{
    bubble_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut Vec<T>, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut total = v.len();

    loop {
        let mut swapped = false;

        for i in 1..total {
            if is_less(&v[i], &v[i - 1]) {
                exchange(v, i - 1, i);
                swapped = true;
            }
        }

        // The largest element of the window is now at its end.
        total = total.saturating_sub(1);

        if !swapped {
            return;
        }
    }
}
