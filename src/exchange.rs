/// Swaps the elements at positions `a` and `b`.
///
/// Panics if either position is out of bounds, same as [`slice::swap`].
#[inline]
pub(crate) fn exchange<T>(v: &mut [T], a: usize, b: usize) {
    v.swap(a, b);
}

/// Rearranges `v` so that slot `i` receives the element that was at `order[i]`.
///
/// `order` must be a permutation of `0..v.len()`. Only exchanges are performed, no user code
/// runs, so this cannot be interrupted half way by a panicking comparison.
pub(crate) fn apply_order<T>(v: &mut [T], order: &[usize]) {
    debug_assert_eq!(v.len(), order.len());

    for i in 0..v.len() {
        // Slots before `i` are final. If the wanted element sat in one of them it was exchanged
        // out to where that slot's own source lived, so follow the chain until it leaves them.
        let mut src = order[i];
        while src < i {
            src = order[src];
        }

        exchange(v, i, src);
    }
}
