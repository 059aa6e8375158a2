//! Insertion sort built from adjacent exchanges.

use std::cmp::Ordering;

use crate::exchange::exchange;

#[inline]
pub fn sort<T>(v: &mut Vec<T>)
where
    T: Ord,
{
    insertion_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut Vec<T>, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        // Walk v[i] left until its predecessor is not greater. Equal neighbours never swap.
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            exchange(v, j - 1, j);
            j -= 1;
        }
    }
}
