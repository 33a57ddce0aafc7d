pub mod candidates;
pub mod config;
pub mod constants;
mod core;
pub mod dispatch;
pub mod engine;
mod errors;
pub mod filter;
pub mod report;
pub mod types;

pub use candidates::CandidateSet;
pub use config::{PruneLevel, SearchConfig};
pub use self::core::Solver;
pub use engine::PermutationSearch;
pub use errors::SolverError;
pub use report::{Group, Solution};
pub use types::{Candidate, Record, Template};

#[cfg(test)]
mod tests;
