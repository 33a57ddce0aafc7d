use std::ops::Range;

use log::{debug, info};
use rayon::prelude::*;

use crate::solver::candidates::CandidateSet;
use crate::solver::config::PruneLevel;
use crate::solver::constants::SEQUENTIAL_THRESHOLD;
use crate::solver::engine::PermutationSearch;
use crate::solver::errors::SolverError;
use crate::solver::types::Record;

/// Splits `[0, total)` into `workers` contiguous ranges.
///
/// Every range holds `total / workers` entries and the first
/// `total % workers` ranges hold one more.
pub fn chunk_bounds(total: usize, workers: usize) -> Vec<Range<usize>> {
    if workers == 0 {
        return Vec::new();
    }
    let step = total / workers;
    let extra = total % workers;

    let mut start = 0;
    (0..workers)
        .map(|i| {
            let stop = start + step + usize::from(i < extra);
            let range = start..stop;
            start = stop;
            range
        })
        .collect()
}

/// Runs the search over every candidate on up to `jobs` worker threads.
///
/// Each worker takes one contiguous chunk and the outputs are concatenated in
/// chunk order, so the result matches a single threaded run.
///
/// # Errors
///
/// Returns an error if the worker pool cannot be created.
pub fn search_candidates(
    search: &PermutationSearch,
    candidates: &CandidateSet,
    jobs: usize,
) -> Result<Vec<Record>, SolverError> {
    let total = candidates.len();
    if jobs <= 1 || total <= SEQUENTIAL_THRESHOLD {
        debug!("Searching {} candidates on the calling thread", total);
        return Ok(search.traverse(candidates.iter()));
    }

    let workers = jobs.min(total);
    let bounds = chunk_bounds(total, workers);
    info!("Searching {} candidates with {} workers", total, workers);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("search-worker-{}", i))
        .build()?;

    let chunks: Vec<Vec<Record>> = pool.install(|| {
        bounds
            .into_par_iter()
            .map(|range| {
                debug!("Worker chunk {:?} started", range);
                let records = search.traverse(candidates.slice(range.start, range.len()));
                debug!("Worker chunk {:?} produced {} records", range, records.len());
                records
            })
            .collect()
    });

    Ok(merge_chunks(chunks, search.prune()))
}

/// Whether the group still open at the end of `records` has a solution
fn open_group_solved(records: &[Record]) -> bool {
    records
        .iter()
        .rev()
        .take_while(|record| !record.is_header())
        .next()
        .is_some()
}

/// Concatenates worker outputs in chunk order.
///
/// A chunk that starts inside a group searched that group without knowing
/// what earlier chunks found. Under operand pruning its leading solutions are
/// dropped when the group is already solved.
pub fn merge_chunks(chunks: Vec<Vec<Record>>, prune: PruneLevel) -> Vec<Record> {
    let total = chunks.iter().map(Vec::len).sum();
    let mut merged: Vec<Record> = Vec::with_capacity(total);

    for chunk in chunks {
        let mut records = chunk.into_iter().peekable();
        if prune.prunes_operands() && open_group_solved(&merged) {
            let mut dropped = 0;
            while records.next_if(|record| !record.is_header()).is_some() {
                dropped += 1;
            }
            if dropped > 0 {
                debug!("Dropped {} solutions of an already solved group", dropped);
            }
        }
        merged.extend(records);
    }
    merged
}
