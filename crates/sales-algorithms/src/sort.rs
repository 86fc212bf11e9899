/// Quicksort with a middle pivot and a three-way partition.
///
/// Returns a new sorted `Vec`; the input is left untouched.
pub fn quicksort<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    if items.len() <= 1 {
        return items.to_vec();
    }
    let pivot = &items[items.len() / 2];
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for item in items {
        if item < pivot {
            less.push(item.clone());
        } else if item > pivot {
            greater.push(item.clone());
        } else {
            equal.push(item.clone());
        }
    }
    let mut sorted = quicksort(&less);
    sorted.append(&mut equal);
    sorted.append(&mut quicksort(&greater));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_with_duplicates() {
        assert_eq!(quicksort(&[3, 1, 2, 3, 0, 1]), vec![0, 1, 1, 2, 3, 3]);
    }

    #[test]
    fn trivial_inputs() {
        assert_eq!(quicksort::<i64>(&[]), Vec::<i64>::new());
        assert_eq!(quicksort(&[7]), vec![7]);
    }

    #[test]
    fn sorts_descending_input() {
        let input: Vec<i64> = (1..=100).rev().collect();
        assert_eq!(quicksort(&input), (1..=100).collect::<Vec<i64>>());
    }
}
