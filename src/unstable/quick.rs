//! Basic recursive quicksort with the first element as pivot.
//!
//! Partitions into freshly allocated buckets instead of swapping in place. The buckets hold
//! positions into the input, which is rearranged once at the end, so a panicking comparison
//! leaves it untouched. Already sorted and reverse sorted inputs hit the quadratic worst case,
//! recursion depth then equals the length.

use std::cmp::Ordering;

use crate::exchange::apply_order;

#[inline]
pub fn sort<T>(v: &mut Vec<T>)
where
    T: Ord,
{
    unstable_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut Vec<T>, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn unstable_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    let order = {
        let elems = &*v;
        quicksort((0..elems.len()).collect(), &mut |&a: &usize, &b: &usize| {
            is_less(&elems[a], &elems[b])
        })
    };

    apply_order(v, &order);
}

fn quicksort<T, F>(v: Vec<T>, is_less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let mut rest = v.into_iter();

    let Some(pivot) = rest.next() else {
        return Vec::new();
    };
    if len < 2 {
        return vec![pivot];
    }

    let (lt, ge) = partition(rest, &pivot, is_less);

    let mut sorted = Vec::with_capacity(len);
    sorted.extend(quicksort(lt, is_less));
    sorted.push(pivot);
    sorted.extend(quicksort(ge, is_less));

    sorted
}

/// Single pass split into elements less than `pivot` and the rest.
fn partition<T, F>(rest: impl Iterator<Item = T>, pivot: &T, is_less: &mut F) -> (Vec<T>, Vec<T>)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut lt = Vec::new();
    let mut ge = Vec::new();

    for elem in rest {
        if is_less(&elem, pivot) {
            lt.push(elem);
        } else {
            ge.push(elem);
        }
    }

    (lt, ge)
}
