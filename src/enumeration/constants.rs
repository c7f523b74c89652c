// Configuration constants for the enumeration module
use crate::operator::Operator;

pub const OPERATOR_BASE: usize = Operator::COUNT;
/// Largest number of reduction steps whose assignments and orders are materialised up front.
///
/// Eight steps (nine inputs) hold 4^8 assignments and 8! orders, a few MB.
/// Ten steps would already need about 400 MB before the search starts.
pub const MAX_PRECOMPUTED_STEPS: usize = 8;
