use std::cmp::Ordering;

/// Index of `target` in an ascending slice, or `None`.
///
/// With duplicates, any matching index may be returned.
pub fn binary_search<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    let mut low = 0;
    let mut high = items.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match items[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}

/// Index of the first element equal to `target`.
pub fn linear_search<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    items.iter().position(|item| item == target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_search_finds_bounds() {
        let items = [1, 3, 5, 7, 9];
        assert_eq!(binary_search(&items, &1), Some(0));
        assert_eq!(binary_search(&items, &9), Some(4));
        assert_eq!(binary_search(&items, &5), Some(2));
        assert_eq!(binary_search(&items, &4), None);
        assert_eq!(binary_search(&items, &10), None);
        assert_eq!(binary_search::<i32>(&[], &1), None);
    }

    #[test]
    fn linear_search_returns_first_match() {
        let items = [4, 2, 4, 1];
        assert_eq!(linear_search(&items, &4), Some(0));
        assert_eq!(linear_search(&items, &1), Some(3));
        assert_eq!(linear_search(&items, &8), None);
    }
}
