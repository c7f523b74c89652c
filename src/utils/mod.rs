//! Input parsing and result rendering used by front ends

mod errors;
mod parsing;
mod timing;

pub use errors::UtilsError;
pub use parsing::{parse_number, parse_numbers, parse_numbers_lenient};
pub use timing::{format_elapsed, summary_line};

#[cfg(test)]
mod tests;
