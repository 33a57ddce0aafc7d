use log::info;

use crate::solver::candidates::CandidateSet;
use crate::solver::config::SearchConfig;
use crate::solver::dispatch::search_candidates;
use crate::solver::engine::PermutationSearch;
use crate::solver::errors::SolverError;
use crate::solver::filter::{filter_duplicate_solutions, filter_empty_groups};
use crate::solver::report::{Group, build_groups};
use crate::solver::types::Record;

/// Runs a full search for one configuration
pub struct Solver {
    config: SearchConfig,
}

impl Solver {
    /// Create a solver; the configuration is expected to be validated
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Header and postfix solution stream after duplicate filtering, and
    /// after empty group removal unless the configuration is verbose
    ///
    /// # Errors
    ///
    /// Returns an error if the worker pool cannot be created.
    pub fn search(&self) -> Result<Vec<Record>, SolverError> {
        let config = &self.config;
        info!(
            "Searching expressions of {} operands equal to {} (prune: {:?}, jobs: {})",
            config.size, config.target, config.prune, config.jobs
        );

        let candidates = CandidateSet::from_config(config);
        let search = PermutationSearch::from_config(config);
        let records = search_candidates(&search, &candidates, config.jobs)?;

        let records = filter_duplicate_solutions(records);
        let records = if config.verbose {
            records
        } else {
            filter_empty_groups(records)
        };

        info!(
            "Search finished: {} groups, {} solutions",
            records.iter().filter(|r| r.is_header()).count(),
            records.iter().filter(|r| !r.is_header()).count()
        );
        Ok(records)
    }

    /// Solutions grouped by operand multiset, in canonical infix form
    ///
    /// # Errors
    ///
    /// Returns an error if the worker pool cannot be created.
    pub fn solve(&self) -> Result<Vec<Group>, SolverError> {
        build_groups(self.search()?)
    }
}
