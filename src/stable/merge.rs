//! Top-down merge sort that builds fresh sequences at every level.
//!
//! The sequences being split and merged hold positions into the input, not the elements
//! themselves. The input is only rearranged once every comparison has returned, so a panicking
//! comparison leaves it untouched.

use std::cmp::Ordering;

use crate::exchange::apply_order;

#[inline]
pub fn sort<T>(v: &mut Vec<T>)
where
    T: Ord,
{
    stable_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut Vec<T>, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn stable_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    let order = {
        let elems = &*v;
        merge_sort((0..elems.len()).collect(), &mut |&a: &usize, &b: &usize| {
            is_less(&elems[a], &elems[b])
        })
    };

    apply_order(v, &order);
}

fn merge_sort<T, F>(mut v: Vec<T>, is_less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return v;
    }

    // Left gets the floor share.
    let right = v.split_off(len / 2);

    let left = merge_sort(v, is_less);
    let right = merge_sort(right, is_less);

    merge(left, right, is_less)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, is_less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());

    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            // Only a strictly smaller right head goes first, ties keep the left element first.
            (Some(l), Some(r)) => is_less(r, l),
            _ => break,
        };

        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }

    merged.extend(left);
    merged.extend(right);

    merged
}
