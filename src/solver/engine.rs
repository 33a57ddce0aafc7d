use log::{debug, trace};

use crate::expression::{Token, evaluate_postfix_with, postfix_to_string};
use crate::solver::config::{PruneLevel, SearchConfig};
use crate::solver::constants::EPSILON;
use crate::solver::types::{Candidate, Record, Template};

/// Enumerates the valid postfix orderings of templates and keeps those that
/// hit the target
#[derive(Debug, Clone, Copy)]
pub struct PermutationSearch {
    target: f64,
    prune: PruneLevel,
}

impl PermutationSearch {
    pub fn new(target: f64, prune: PruneLevel) -> Self {
        Self { target, prune }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.target_value(), config.prune)
    }

    pub fn prune(&self) -> PruneLevel {
        self.prune
    }

    fn accepts(&self, postfix: &[Token], stack: &mut Vec<f64>) -> bool {
        match evaluate_postfix_with(postfix, stack) {
            Ok(value) => (value - self.target).abs() < EPSILON,
            Err(e) => {
                trace!("Rejecting {}: {}", postfix_to_string(postfix), e);
                false
            }
        }
    }

    /// All solutions reachable from one template, in search order
    pub fn search(&self, template: Template) -> Vec<Vec<Token>> {
        let mut run = SearchRun::new(self);
        let mut tokens = template.into_tokens();
        run.permute(&mut tokens, 0, 0);
        run.records
            .into_iter()
            .filter_map(|record| match record {
                Record::Solution(postfix) => Some(postfix),
                Record::Header(_) => None,
            })
            .collect()
    }

    /// Searches a candidate stream and returns headers interleaved with the
    /// solutions of each group, in stream order.
    ///
    /// With operand pruning, a group stops at its first solving template.
    pub fn traverse<I>(&self, candidates: I) -> Vec<Record>
    where
        I: IntoIterator<Item = Candidate>,
    {
        let mut run = SearchRun::new(self);
        let mut group_solutions = 0;

        for candidate in candidates {
            match candidate {
                Candidate::Header(operands) => {
                    run.records.push(Record::Header(operands));
                    group_solutions = 0;
                }
                Candidate::Template(template) => {
                    if self.prune.prunes_operands() && group_solutions > 0 {
                        continue;
                    }
                    let mut tokens = template.into_tokens();
                    group_solutions += run.permute(&mut tokens, 0, 0);
                }
            }
        }

        debug!(
            "Traversal finished with {} records ({} evaluations)",
            run.records.len(),
            run.evaluations
        );
        run.records
    }
}

/// Mutable state owned by one traversal
struct SearchRun<'a> {
    search: &'a PermutationSearch,
    stack: Vec<f64>,
    records: Vec<Record>,
    evaluations: u64,
}

impl<'a> SearchRun<'a> {
    fn new(search: &'a PermutationSearch) -> Self {
        Self {
            search,
            stack: Vec::new(),
            records: Vec::new(),
            evaluations: 0,
        }
    }

    /// Swap based permutation of `tokens[idx..]`, returning the number of
    /// solutions found below this level.
    ///
    /// `op_count` is the number of operators in `tokens[..idx]`. Every prefix
    /// must keep more operands than operators, and a value already tried at
    /// `idx` is not tried again.
    fn permute(&mut self, tokens: &mut [Token], idx: usize, op_count: usize) -> usize {
        let Some(last) = tokens.len().checked_sub(1) else {
            return 0;
        };

        if idx == last {
            self.evaluations += 1;
            if self.search.accepts(tokens, &mut self.stack) {
                self.records.push(Record::Solution(tokens.to_vec()));
                return 1;
            }
            return 0;
        }

        let mut found = 0;
        let mut tried: Vec<Token> = Vec::with_capacity(tokens.len() - idx);
        for i in idx..tokens.len() {
            let Some(&candidate) = tokens.get(i) else {
                continue;
            };
            let next_count = op_count + usize::from(candidate.is_operator());
            if 2 * next_count >= idx + 1 {
                continue;
            }
            if tried.contains(&candidate) {
                continue;
            }
            tried.push(candidate);

            tokens.swap(idx, i);
            found += self.permute(tokens, idx + 1, next_count);
            tokens.swap(idx, i);

            if self.search.prune.prunes_operators() && found > 0 {
                break;
            }
        }
        found
    }
}
