pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &mut Vec<T>)
    where
        T: Ord;

    fn sort_by<T, F>(v: &mut Vec<T>, compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
