use log::debug;

use crate::enumeration::constants::MAX_PRECOMPUTED_STEPS;
use crate::enumeration::errors::EnumerationError;
use crate::enumeration::permutations::next_permutation;

/// Every permutation of `0..steps` in lexicographic order.
#[derive(Debug, Clone)]
pub struct GroupingOrders {
    current: Option<Vec<usize>>,
    remaining: usize,
}

impl GroupingOrders {
    /// # Errors
    ///
    /// Returns `EnumerationError::TooManySteps` if `steps!` would not be
    /// enumerable.
    pub fn new(steps: usize) -> Result<Self, EnumerationError> {
        if steps > MAX_PRECOMPUTED_STEPS {
            return Err(EnumerationError::TooManySteps {
                steps,
                max: MAX_PRECOMPUTED_STEPS,
            });
        }

        let remaining = (1..=steps).product();
        debug!("Enumerating {} grouping orders of length {}", remaining, steps);

        Ok(Self {
            current: Some((0..steps).collect()),
            remaining,
        })
    }
}

impl Iterator for GroupingOrders {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.as_mut()?;
        let item = current.clone();

        if !next_permutation(current) {
            self.current = None;
        }
        self.remaining = self.remaining.saturating_sub(1);

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for GroupingOrders {}

/// # Errors
///
/// Fails if `steps` is too large to enumerate.
pub fn collect_grouping_orders(steps: usize) -> Result<Vec<Vec<usize>>, EnumerationError> {
    Ok(GroupingOrders::new(steps)?.collect())
}
