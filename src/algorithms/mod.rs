//! Textbook list algorithms over `i64` numbers.
//!
//! Functions here are pure. Callers validate input with a [`ListPolicy`]
//! first; the aggregations still refuse an empty slice on their own.

pub mod error;
pub mod policy;

pub use error::ListError;
pub use policy::ListPolicy;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub found: bool,
    pub index: i64,
}

impl SearchResult {
    fn at(index: usize) -> Self {
        Self { found: true, index: index as i64 }
    }

    fn missing() -> Self {
        Self { found: false, index: -1 }
    }
}

/// Median of a list: the central value itself for odd lengths, the mean of
/// the two central values for even lengths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Median {
    Exact(i64),
    Midpoint(f64),
}

pub fn bubble_sort(numbers: &[i64]) -> Vec<i64> {
    let mut sorted = numbers.to_vec();
    let n = sorted.len();
    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if sorted[j] > sorted[j + 1] {
                sorted.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    sorted
}

/// Binary search over a sorted copy of `numbers`. The reported index refers to
/// the sorted order, not the caller's order.
pub fn binary_search(numbers: &[i64], target: i64) -> SearchResult {
    let mut sorted = numbers.to_vec();
    sorted.sort_unstable();

    let (mut low, mut high) = (0usize, sorted.len());
    while low < high {
        let mid = low + (high - low) / 2;
        match sorted[mid].cmp(&target) {
            std::cmp::Ordering::Equal => return SearchResult::at(mid),
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => high = mid,
        }
    }
    SearchResult::missing()
}

pub fn filter_even(numbers: &[i64]) -> Vec<i64> {
    numbers.iter().copied().filter(|n| n % 2 == 0).collect()
}

pub fn sum(numbers: &[i64]) -> Result<i64, ListError> {
    numbers
        .iter()
        .try_fold(0i64, |acc, n| acc.checked_add(*n))
        .ok_or(ListError::Overflow)
}

pub fn max_value(numbers: &[i64]) -> Result<i64, ListError> {
    numbers.iter().copied().max().ok_or(ListError::Empty)
}

pub fn min_value(numbers: &[i64]) -> Result<i64, ListError> {
    numbers.iter().copied().min().ok_or(ListError::Empty)
}

pub fn average(numbers: &[i64]) -> Result<f64, ListError> {
    if numbers.is_empty() {
        return Err(ListError::Empty);
    }
    let total: i128 = numbers.iter().map(|n| *n as i128).sum();
    Ok(total as f64 / numbers.len() as f64)
}

pub fn median(numbers: &[i64]) -> Result<Median, ListError> {
    if numbers.is_empty() {
        return Err(ListError::Empty);
    }
    let mut sorted = numbers.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(Median::Exact(sorted[mid]))
    } else {
        let pair = sorted[mid - 1] as i128 + sorted[mid] as i128;
        Ok(Median::Midpoint(pair as f64 / 2.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_sort_orders_ascending() {
        assert_eq!(bubble_sort(&[5, 2, 9, 1, 7]), vec![1, 2, 5, 7, 9]);
        assert_eq!(bubble_sort(&[3, -1, 0]), vec![-1, 0, 3]);
        assert_eq!(bubble_sort(&[1, 2, 3]), vec![1, 2, 3]);
        assert!(bubble_sort(&[]).is_empty());
    }

    #[test]
    fn binary_search_finds_index_in_sorted_order() {
        assert_eq!(binary_search(&[1, 3, 5, 7, 9], 7), SearchResult { found: true, index: 3 });
        assert_eq!(binary_search(&[9, 1, 5], 9), SearchResult { found: true, index: 2 });
        assert_eq!(binary_search(&[1, 3, 5], 1), SearchResult { found: true, index: 0 });
    }

    #[test]
    fn binary_search_reports_missing_target() {
        assert_eq!(binary_search(&[1, 3, 5, 7], 4), SearchResult { found: false, index: -1 });
        assert_eq!(binary_search(&[1, 3], 100), SearchResult { found: false, index: -1 });
        assert_eq!(binary_search(&[1, 3], -100), SearchResult { found: false, index: -1 });
    }

    #[test]
    fn filter_even_keeps_order_and_negatives() {
        assert_eq!(filter_even(&[1, 2, 3, 4, -6, -7, 0]), vec![2, 4, -6, 0]);
        assert!(filter_even(&[1, 3, 5]).is_empty());
    }

    #[test]
    fn sum_detects_overflow() {
        assert_eq!(sum(&[1, 2, 3, -4]), Ok(2));
        assert_eq!(sum(&[i64::MAX, 1]), Err(ListError::Overflow));
    }

    #[test]
    fn min_and_max() {
        assert_eq!(max_value(&[3, 9, -2]), Ok(9));
        assert_eq!(min_value(&[3, 9, -2]), Ok(-2));
        assert_eq!(max_value(&[]), Err(ListError::Empty));
    }

    #[test]
    fn average_is_arithmetic_mean() {
        assert_eq!(average(&[1, 2, 3, 4]), Ok(2.5));
        assert_eq!(average(&[i64::MAX, i64::MAX]), Ok(i64::MAX as f64));
        assert_eq!(average(&[]), Err(ListError::Empty));
    }

    #[test]
    fn median_of_odd_length_is_central_value() {
        assert_eq!(median(&[7, 1, 3]), Ok(Median::Exact(3)));
    }

    #[test]
    fn median_of_even_length_averages_central_values() {
        assert_eq!(median(&[4, 1, 3, 2]), Ok(Median::Midpoint(2.5)));
        assert_eq!(median(&[1, 3]), Ok(Median::Midpoint(2.0)));
    }

    #[test]
    fn median_serializes_as_plain_number() {
        assert_eq!(serde_json::to_value(Median::Exact(3)).unwrap(), serde_json::json!(3));
        assert_eq!(serde_json::to_value(Median::Midpoint(2.5)).unwrap(), serde_json::json!(2.5));
    }
}
