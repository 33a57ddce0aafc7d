/// Tolerance for accepting a computed value as equal to the target
pub const EPSILON: f64 = 1e-5;

/// Candidate streams this short are searched on the calling thread
pub const SEQUENTIAL_THRESHOLD: usize = 2;
