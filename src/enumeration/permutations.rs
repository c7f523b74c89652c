use std::cmp::Ordering;

use log::debug;

/// Rearrange `values` into the next lexicographically greater permutation.
///
/// Returns `false` when `values` was already the last permutation, leaving it
/// sorted ascending again. Equal elements are never swapped with each other,
/// so a multiset only visits its distinct orderings.
pub fn next_permutation_by<T, F>(values: &mut [T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    if values.len() < 2 {
        return false;
    }

    let mut pivot = values.len() - 1;
    while pivot > 0 && compare(&values[pivot - 1], &values[pivot]) != Ordering::Less {
        pivot -= 1;
    }

    if pivot == 0 {
        values.reverse();
        return false;
    }

    let mut successor = values.len() - 1;
    while compare(&values[pivot - 1], &values[successor]) != Ordering::Less {
        successor -= 1;
    }

    values.swap(pivot - 1, successor);
    values[pivot..].reverse();
    true
}

/// Order reals by value, so `-0.0` and `0.0` are equal.
///
/// NaNs, which have no value order, fall back to `f64::total_cmp`.
pub fn value_cmp(a: &f64, b: &f64) -> Ordering {
    a.partial_cmp(b).unwrap_or_else(|| a.total_cmp(b))
}

pub fn next_permutation<T: Ord>(values: &mut [T]) -> bool {
    next_permutation_by(values, T::cmp)
}

/// Distinct orderings of a multiset of reals, starting from ascending order.
#[derive(Debug, Clone)]
pub struct MultisetPermutations {
    current: Vec<f64>,
    exhausted: bool,
}

impl MultisetPermutations {
    pub fn new(values: &[f64]) -> Self {
        let mut current = values.to_vec();
        current.sort_by(value_cmp);

        Self {
            exhausted: current.is_empty(),
            current,
        }
    }
}

impl Iterator for MultisetPermutations {
    type Item = Vec<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let item = self.current.clone();
        if !next_permutation_by(&mut self.current, value_cmp) {
            self.exhausted = true;
        }
        Some(item)
    }
}

/// `N! / (m1! * m2! * ...)` for the multiplicities of `values`, or `None` on overflow.
pub fn distinct_permutation_count(values: &[f64]) -> Option<u128> {
    let mut sorted = values.to_vec();
    sorted.sort_by(value_cmp);

    let mut count: u128 = 1;
    let mut placed: u128 = 0;

    for run in sorted.chunk_by(|a, b| value_cmp(a, b) == Ordering::Equal) {
        for i in 1..=run.len() as u128 {
            placed += 1;
            count = count.checked_mul(placed)? / i;
        }
    }

    debug!(
        "Multiset of {} values has {} distinct permutations",
        values.len(),
        count
    );
    Some(count)
}
