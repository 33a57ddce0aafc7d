use std::collections::HashSet;

use log::warn;

use crate::expression::{Infix, Token, to_canonical_infix};
use crate::solver::errors::SolverError;
use crate::solver::types::Record;

/// An accepted expression in both of its forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub postfix: Vec<Token>,
    pub infix: Infix,
}

/// All printed solutions for one operand multiset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub operands: Vec<u8>,
    pub solutions: Vec<Solution>,
}

impl Group {
    pub fn infix_strings(&self) -> Vec<String> {
        self.solutions
            .iter()
            .map(|solution| solution.infix.to_string())
            .collect()
    }
}

/// Converts a filtered record stream into groups of canonical infix
/// solutions. Solutions whose canonical form was already printed in the same
/// group are dropped.
///
/// # Errors
///
/// Returns an error if a record holds malformed postfix.
pub fn build_groups(records: Vec<Record>) -> Result<Vec<Group>, SolverError> {
    let mut groups: Vec<Group> = Vec::new();
    let mut history: HashSet<Infix> = HashSet::new();

    for record in records {
        match record {
            Record::Header(operands) => {
                history.clear();
                groups.push(Group {
                    operands,
                    solutions: Vec::new(),
                });
            }
            Record::Solution(postfix) => {
                let Some(group) = groups.last_mut() else {
                    warn!("Solution found before any group header, skipping");
                    continue;
                };
                let infix = to_canonical_infix(&postfix)?;
                if history.insert(infix.clone()) {
                    group.solutions.push(Solution { postfix, infix });
                }
            }
        }
    }
    Ok(groups)
}
