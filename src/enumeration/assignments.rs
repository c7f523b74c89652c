use log::debug;

use crate::enumeration::constants::{MAX_PRECOMPUTED_STEPS, OPERATOR_BASE};
use crate::enumeration::errors::EnumerationError;
use crate::operator::{Operator, OperatorError};

/// Every sequence of `steps` operators, in base-4 counting order.
///
/// Assignment `i` holds the base-4 digits of `i`, least significant first,
/// each digit mapped through [`Operator::from_ordinal`].
#[derive(Debug, Clone)]
pub struct OperatorAssignments {
    steps: usize,
    position: usize,
    total: usize,
}

impl OperatorAssignments {
    /// # Errors
    ///
    /// Returns `EnumerationError::TooManySteps` if `4^steps` would not be
    /// enumerable.
    pub fn new(steps: usize) -> Result<Self, EnumerationError> {
        if steps > MAX_PRECOMPUTED_STEPS {
            return Err(EnumerationError::TooManySteps {
                steps,
                max: MAX_PRECOMPUTED_STEPS,
            });
        }

        let total = (0..steps).fold(1usize, |acc, _| acc * OPERATOR_BASE);
        debug!("Enumerating {} operator assignments of length {}", total, steps);

        Ok(Self {
            steps,
            position: 0,
            total,
        })
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    fn decode(&self, index: usize) -> Result<Vec<Operator>, OperatorError> {
        let mut value = index;
        let mut assignment = Vec::with_capacity(self.steps);

        for _ in 0..self.steps {
            assignment.push(Operator::from_ordinal(value % OPERATOR_BASE)?);
            value /= OPERATOR_BASE;
        }

        Ok(assignment)
    }
}

impl Iterator for OperatorAssignments {
    type Item = Result<Vec<Operator>, OperatorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.total {
            return None;
        }

        let item = self.decode(self.position);
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for OperatorAssignments {}

/// Materialise every assignment for `steps` reduction steps.
///
/// # Errors
///
/// Fails if `steps` is too large, or if a base-4 digit ever decodes outside
/// the operator range.
pub fn collect_assignments(steps: usize) -> Result<Vec<Vec<Operator>>, EnumerationError> {
    let assignments = OperatorAssignments::new(steps)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(assignments)
}
