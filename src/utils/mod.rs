//! Multiset generation, argument parsing and configuration validation

mod errors;
mod multiset;
mod parse;
mod validation;

pub use errors::UtilsError;
pub use multiset::{combinations_with_replacement, generate_multisets, multiset_count};
pub use parse::{parse_number_list, parse_operators, parse_range};
pub use validation::validate_config;
