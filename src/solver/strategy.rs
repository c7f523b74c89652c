use log::debug;

use crate::enumeration::{EnumerationError, TreeShape, collect_grouping_orders, tree_shapes};

/// How grouping orders are enumerated and mapped onto the shrinking buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupingStrategy {
    /// All `(N-1)!` permutations of `0..N-1`, shifted down by the number of
    /// reductions already made and clamped into range. Several orders can
    /// collapse onto the same reduction sequence.
    #[default]
    Clamped,
    /// One order per distinct binary tree over the `N` inputs
    /// (`Catalan(N-1)` orders), holding absolute buffer positions.
    Tree,
}

impl GroupingStrategy {
    /// Every grouping order for `steps` reductions.
    ///
    /// # Errors
    ///
    /// Fails if `steps` is too large to enumerate.
    pub fn orders(self, steps: usize) -> Result<Vec<Vec<usize>>, EnumerationError> {
        let orders = match self {
            GroupingStrategy::Clamped => collect_grouping_orders(steps)?,
            GroupingStrategy::Tree => tree_shapes(steps + 1)
                .iter()
                .map(TreeShape::reduction_positions)
                .collect(),
        };
        debug!("{:?} strategy: {} grouping orders", self, orders.len());
        Ok(orders)
    }

    /// Buffer index of the left operand for reduction `step` applied to a
    /// buffer of `len` values.
    #[inline]
    pub fn resolve_position(self, nominal: usize, step: usize, len: usize) -> usize {
        let last_pair = len.saturating_sub(2);
        match self {
            GroupingStrategy::Clamped => nominal.saturating_sub(step).min(last_pair),
            GroupingStrategy::Tree => nominal.min(last_pair),
        }
    }
}
