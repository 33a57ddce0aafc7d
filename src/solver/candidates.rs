use log::debug;

use crate::expression::Operator;
use crate::solver::config::SearchConfig;
use crate::solver::types::{Candidate, Template};
use crate::utils::{combinations_with_replacement, generate_multisets};

/// Lazily indexed product of operand multisets and operator multisets.
///
/// Index `x * (|O| + 1)` is the header of operand multiset `x`, and the `|O|`
/// indices after it are its templates, one per operator multiset.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    operands: Vec<Vec<u8>>,
    operators: Vec<Vec<Operator>>,
}

impl CandidateSet {
    pub fn new(operands: Vec<Vec<u8>>, operators: Vec<Vec<Operator>>) -> Self {
        Self {
            operands,
            operators,
        }
    }

    /// Enumerates the operand and operator multisets a configuration allows
    pub fn from_config(config: &SearchConfig) -> Self {
        let operands = match config.range {
            Some((min, max)) => generate_multisets(&config.numbers, config.size, min, max),
            None => combinations_with_replacement(&config.numbers, config.size, &[]),
        };
        let operators = combinations_with_replacement(
            &config.operators,
            config.size.saturating_sub(1),
            &Operator::ALL,
        );
        debug!(
            "Built {} operand multisets and {} operator multisets",
            operands.len(),
            operators.len()
        );
        Self::new(operands, operators)
    }

    pub fn operand_sets(&self) -> &[Vec<u8>] {
        &self.operands
    }

    pub fn operator_sets(&self) -> &[Vec<Operator>] {
        &self.operators
    }

    /// Entries per operand group, header included
    pub fn group_stride(&self) -> usize {
        self.operators.len() + 1
    }

    pub fn len(&self) -> usize {
        self.operands.len() * self.group_stride()
    }

    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Candidate> {
        let stride = self.group_stride();
        let operands = self.operands.get(index / stride)?;
        match index % stride {
            0 => Some(Candidate::Header(operands.clone())),
            y => {
                let operators = self.operators.get(y - 1)?;
                Some(Candidate::Template(Template::new(operands, operators)))
            }
        }
    }

    /// Entries `[offset, offset + count)`, built on demand
    pub fn slice(&self, offset: usize, count: usize) -> impl Iterator<Item = Candidate> + '_ {
        let end = offset.saturating_add(count).min(self.len());
        (offset..end).filter_map(move |index| self.get(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.slice(0, self.len())
    }
}
