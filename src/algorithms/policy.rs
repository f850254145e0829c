use std::collections::HashSet;
use std::ops::RangeInclusive;

use super::error::ListError;

pub const MAX_LIST_LEN: usize = 1000;
pub const VALUE_RANGE: RangeInclusive<i64> = -1000..=1000;

/// Validation rules applied to a number list before an algorithm runs.
///
/// Rules are checked in a fixed order (empty, length, range, duplicates,
/// minimum length) and the first violation is reported.
#[derive(Debug, Clone)]
pub struct ListPolicy {
    pub max_len: Option<usize>,
    pub range: Option<RangeInclusive<i64>>,
    pub unique: bool,
    pub min_len: Option<(usize, &'static str)>,
}

impl ListPolicy {
    /// Policy for bubble sort.
    pub fn sorting() -> Self {
        Self::strict("sort")
    }

    /// Policy for binary search.
    pub fn searching() -> Self {
        Self::strict("search")
    }

    /// Aggregations only need a non-empty list.
    pub fn aggregate() -> Self {
        Self {
            max_len: None,
            range: None,
            unique: false,
            min_len: None,
        }
    }

    fn strict(action: &'static str) -> Self {
        Self {
            max_len: Some(MAX_LIST_LEN),
            range: Some(VALUE_RANGE),
            unique: true,
            min_len: Some((2, action)),
        }
    }

    pub fn check(&self, numbers: &[i64]) -> Result<(), ListError> {
        if numbers.is_empty() {
            return Err(ListError::Empty);
        }

        if let Some(max) = self.max_len {
            if numbers.len() > max {
                return Err(ListError::TooMany { max });
            }
        }

        if let Some(range) = &self.range {
            if !numbers.iter().all(|n| range.contains(n)) {
                return Err(ListError::OutOfRange {
                    min: *range.start(),
                    max: *range.end(),
                });
            }
        }

        if self.unique {
            let mut seen = HashSet::with_capacity(numbers.len());
            if !numbers.iter().all(|n| seen.insert(*n)) {
                return Err(ListError::Duplicates);
            }
        }

        if let Some((min, action)) = self.min_len {
            if numbers.len() < min {
                return Err(ListError::TooFew { min, action });
            }
        }

        Ok(())
    }
}
