use crate::expression::Operator;

/// How aggressively the search stops once solutions are found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PruneLevel {
    /// Report every distinct solution
    Off,
    /// Keep at most one solution per operator arrangement
    #[default]
    Standard,
    /// Additionally stop an operand group after its first solution
    Max,
}

impl PruneLevel {
    pub fn prunes_operators(self) -> bool {
        matches!(self, PruneLevel::Standard | PruneLevel::Max)
    }

    pub fn prunes_operands(self) -> bool {
        matches!(self, PruneLevel::Max)
    }
}

/// Immutable description of one search run
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub target: i32,
    /// Number of operands in every expression
    pub size: usize,
    /// Fixed leading operands; the rest is enumerated from `range`
    pub numbers: Vec<u8>,
    pub range: Option<(u8, u8)>,
    /// Fixed leading operators; the rest is enumerated from all four
    pub operators: Vec<Operator>,
    pub jobs: usize,
    pub prune: PruneLevel,
    /// Keep operand groups that have no solution
    pub verbose: bool,
}

impl SearchConfig {
    /// Solve exactly the given operands
    pub fn new(target: i32, numbers: Vec<u8>) -> Self {
        Self {
            target,
            size: numbers.len(),
            numbers,
            range: None,
            operators: Vec::new(),
            jobs: 1,
            prune: PruneLevel::default(),
            verbose: false,
        }
    }

    /// Enumerate every list of `size` operands that starts with `prefix` and
    /// takes its remaining values from `[min, max]`
    pub fn ranged(target: i32, size: usize, prefix: Vec<u8>, min: u8, max: u8) -> Self {
        Self {
            size,
            range: Some((min, max)),
            ..Self::new(target, prefix)
        }
    }

    pub fn with_operators(mut self, operators: Vec<Operator>) -> Self {
        self.operators = operators;
        self
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn with_prune(mut self, prune: PruneLevel) -> Self {
        self.prune = prune;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn target_value(&self) -> f64 {
        f64::from(self.target)
    }
}
