//! Lazy generators for every axis of the brute-force search

mod assignments;
pub mod constants;
mod errors;
mod groupings;
mod permutations;
mod trees;

pub use assignments::{OperatorAssignments, collect_assignments};
pub use errors::EnumerationError;
pub use groupings::{GroupingOrders, collect_grouping_orders};
pub use permutations::{
    MultisetPermutations, distinct_permutation_count, next_permutation, next_permutation_by,
    value_cmp,
};
pub use trees::{TreeShape, tree_shapes};
