use std::collections::HashSet;

use crate::expression::{Operator, Token, evaluate_postfix};
use crate::solver::dispatch::{chunk_bounds, merge_chunks};
use crate::solver::filter::{filter_duplicate_solutions, filter_empty_groups};
use crate::solver::report::build_groups;
use crate::solver::{
    Candidate, CandidateSet, Group, PermutationSearch, PruneLevel, Record, SearchConfig, Solver,
    Template,
};

const ADD: Token = Token::Operator(Operator::Add);
const MUL: Token = Token::Operator(Operator::Mul);

fn num(value: u8) -> Token {
    Token::Operand(value)
}

fn solve(config: SearchConfig) -> Vec<Group> {
    match Solver::new(config).solve() {
        Ok(groups) => groups,
        Err(e) => panic!("search failed: {}", e),
    }
}

fn summary(groups: &[Group]) -> Vec<(Vec<u8>, Vec<String>)> {
    groups
        .iter()
        .map(|group| (group.operands.clone(), group.infix_strings()))
        .collect()
}

fn infix_set(groups: &[Group]) -> HashSet<(Vec<u8>, String)> {
    groups
        .iter()
        .flat_map(|group| {
            group
                .infix_strings()
                .into_iter()
                .map(move |infix| (group.operands.clone(), infix))
        })
        .collect()
}

fn assert_sound(groups: &[Group], target: f64) {
    for group in groups {
        for solution in &group.solutions {
            let value = evaluate_postfix(&solution.postfix);
            assert!(
                value.is_ok_and(|v| (v - target).abs() < 1e-5),
                "{} does not evaluate to {}",
                solution.infix,
                target
            );
        }
    }
}

#[test]
fn test_candidate_set_layout() {
    let set = CandidateSet::new(
        vec![vec![1, 2], vec![3, 4]],
        vec![vec![Operator::Add], vec![Operator::Mul]],
    );
    assert_eq!(set.group_stride(), 3);
    assert_eq!(set.len(), 6);
    assert_eq!(set.get(0), Some(Candidate::Header(vec![1, 2])));
    assert_eq!(
        set.get(2),
        Some(Candidate::Template(Template::new(&[1, 2], &[Operator::Mul])))
    );
    assert_eq!(set.get(3), Some(Candidate::Header(vec![3, 4])));
    assert_eq!(set.get(6), None);

    let slice: Vec<_> = set.slice(2, 2).collect();
    assert_eq!(
        slice,
        vec![
            Candidate::Template(Template::new(&[1, 2], &[Operator::Mul])),
            Candidate::Header(vec![3, 4]),
        ]
    );
    assert_eq!(set.slice(5, 10).count(), 1);
}

#[test]
fn test_candidate_set_from_config() {
    let set = CandidateSet::from_config(&SearchConfig::new(24, vec![1, 2, 3, 4]));
    assert_eq!(set.operand_sets(), &[vec![1, 2, 3, 4]]);
    assert_eq!(set.operator_sets().len(), 20);

    let ranged = SearchConfig::ranged(24, 3, vec![2], 1, 4).with_operators(vec![Operator::Mul]);
    let set = CandidateSet::from_config(&ranged);
    assert_eq!(set.operand_sets().len(), 10);
    assert!(set.operand_sets().iter().all(|s| s.first() == Some(&2)));
    assert_eq!(set.operator_sets().len(), 4);
}

#[test]
fn test_template_layout() {
    let template = Template::new(&[1, 2, 3], &[Operator::Add, Operator::Mul]);
    assert_eq!(template.tokens(), &[num(1), num(2), num(3), ADD, MUL]);
}

#[test]
fn test_search_finds_mirrored_forms_without_pruning() {
    let search = PermutationSearch::new(3.0, PruneLevel::Off);
    let solutions = search.search(Template::new(&[1, 2], &[Operator::Add]));
    assert_eq!(solutions, vec![vec![num(1), num(2), ADD], vec![num(2), num(1), ADD]]);
}

#[test]
fn test_search_operator_pruning_keeps_first() {
    let search = PermutationSearch::new(3.0, PruneLevel::Standard);
    let solutions = search.search(Template::new(&[1, 2], &[Operator::Add]));
    assert_eq!(solutions, vec![vec![num(1), num(2), ADD]]);
}

#[test]
fn test_search_skips_repeated_values() {
    let search = PermutationSearch::new(12.0, PruneLevel::Off);
    let solutions = search.search(Template::new(&[6, 6], &[Operator::Add]));
    assert_eq!(solutions, vec![vec![num(6), num(6), ADD]]);
}

#[test]
fn test_search_single_operand() {
    let search = PermutationSearch::new(7.0, PruneLevel::Off);
    assert_eq!(search.search(Template::new(&[7], &[])), vec![vec![num(7)]]);
    assert!(search.search(Template::new(&[8], &[])).is_empty());
}

#[test]
fn test_search_yields_only_valid_distinct_postfix() {
    let search = PermutationSearch::new(24.0, PruneLevel::Off);
    let template = Template::new(&[1, 2, 3, 4], &[Operator::Mul, Operator::Mul, Operator::Mul]);
    let solutions = search.search(template);
    assert!(!solutions.is_empty());

    let unique: HashSet<_> = solutions.iter().cloned().collect();
    assert_eq!(unique.len(), solutions.len());
    for postfix in &solutions {
        assert_eq!(postfix.len(), 7);
        assert!(evaluate_postfix(postfix).is_ok_and(|v| (v - 24.0).abs() < 1e-5));
    }
}

#[test]
fn test_search_division_by_zero_is_rejected_quietly() {
    let search = PermutationSearch::new(0.0, PruneLevel::Off);
    let solutions = search.search(Template::new(&[0, 0], &[Operator::Div]));
    assert!(solutions.is_empty());
}

#[test]
fn test_traverse_operand_pruning_stops_group() {
    let candidates = vec![
        Candidate::Header(vec![1, 2]),
        Candidate::Template(Template::new(&[1, 2], &[Operator::Add])),
        Candidate::Template(Template::new(&[1, 2], &[Operator::Mul])),
        Candidate::Header(vec![2, 4]),
        Candidate::Template(Template::new(&[2, 4], &[Operator::Sub])),
        Candidate::Template(Template::new(&[2, 4], &[Operator::Div])),
    ];

    // 1+2 = 3, 1*2 = 2, 4-2 = 2, 4/2 = 2
    let max = PermutationSearch::new(2.0, PruneLevel::Max).traverse(candidates.clone());
    assert_eq!(
        max,
        vec![
            Record::Header(vec![1, 2]),
            Record::Solution(vec![num(1), num(2), MUL]),
            Record::Header(vec![2, 4]),
            Record::Solution(vec![num(4), num(2), Token::Operator(Operator::Sub)]),
        ]
    );

    let standard = PermutationSearch::new(2.0, PruneLevel::Standard).traverse(candidates);
    assert_eq!(standard.len(), 5);
}

#[test]
fn test_chunk_bounds() {
    assert_eq!(chunk_bounds(10, 3), vec![0..4, 4..7, 7..10]);
    assert_eq!(chunk_bounds(6, 3), vec![0..2, 2..4, 4..6]);
    assert_eq!(chunk_bounds(2, 4), vec![0..1, 1..2, 2..2, 2..2]);
    assert!(chunk_bounds(5, 0).is_empty());
}

#[test]
fn test_merge_drops_duplicate_group_tail() {
    let chunks = vec![
        vec![Record::Header(vec![1]), Record::Solution(vec![num(1)])],
        vec![
            Record::Solution(vec![num(2)]),
            Record::Header(vec![3]),
            Record::Solution(vec![num(3)]),
        ],
    ];

    let max = merge_chunks(chunks.clone(), PruneLevel::Max);
    assert_eq!(
        max,
        vec![
            Record::Header(vec![1]),
            Record::Solution(vec![num(1)]),
            Record::Header(vec![3]),
            Record::Solution(vec![num(3)]),
        ]
    );

    let standard = merge_chunks(chunks, PruneLevel::Standard);
    assert_eq!(standard.len(), 5);
}

#[test]
fn test_merge_keeps_tail_of_unsolved_group() {
    let chunks = vec![
        vec![Record::Header(vec![1])],
        vec![Record::Solution(vec![num(2)])],
        vec![Record::Solution(vec![num(3)])],
    ];
    let merged = merge_chunks(chunks, PruneLevel::Max);
    assert_eq!(
        merged,
        vec![Record::Header(vec![1]), Record::Solution(vec![num(2)])]
    );
}

#[test]
fn test_filter_duplicates_within_group_only() {
    let records = vec![
        Record::Header(vec![1]),
        Record::Solution(vec![num(1)]),
        Record::Solution(vec![num(1)]),
        Record::Header(vec![2]),
        Record::Solution(vec![num(1)]),
    ];
    assert_eq!(
        filter_duplicate_solutions(records),
        vec![
            Record::Header(vec![1]),
            Record::Solution(vec![num(1)]),
            Record::Header(vec![2]),
            Record::Solution(vec![num(1)]),
        ]
    );
}

#[test]
fn test_filter_empty_groups() {
    let records = vec![
        Record::Header(vec![1]),
        Record::Header(vec![2]),
        Record::Solution(vec![num(2)]),
        Record::Header(vec![3]),
        Record::Header(vec![4]),
    ];
    assert_eq!(
        filter_empty_groups(records),
        vec![Record::Header(vec![2]), Record::Solution(vec![num(2)])]
    );
    assert!(filter_empty_groups(vec![Record::Header(vec![1])]).is_empty());
}

#[test]
fn test_build_groups_merges_mirrored_infix() {
    let records = vec![
        Record::Header(vec![1, 2]),
        Record::Solution(vec![num(1), num(2), ADD]),
        Record::Solution(vec![num(2), num(1), ADD]),
        Record::Header(vec![3]),
    ];
    let groups = build_groups(records);
    assert!(groups.is_ok());
    if let Ok(groups) = groups {
        assert_eq!(
            summary(&groups),
            vec![
                (vec![1, 2], vec!["1+2".to_string()]),
                (vec![3], Vec::new()),
            ]
        );
    }
}

#[test]
fn test_product_of_one_to_four() {
    let groups = solve(SearchConfig::new(24, vec![1, 2, 3, 4]).with_prune(PruneLevel::Off));
    assert_eq!(groups.len(), 1);
    let strings = groups.first().map(Group::infix_strings).unwrap_or_default();
    assert!(strings.contains(&"1*2*3*4".to_string()), "got {:?}", strings);
    assert_sound(&groups, 24.0);
}

#[test]
fn test_four_ones_have_no_solution() {
    for prune in [PruneLevel::Off, PruneLevel::Standard, PruneLevel::Max] {
        let groups = solve(SearchConfig::new(24, vec![1, 1, 1, 1]).with_prune(prune));
        assert!(groups.is_empty(), "{:?} gave {:?}", prune, summary(&groups));
    }
}

#[test]
fn test_four_sixes_sum() {
    let groups = solve(SearchConfig::new(24, vec![6, 6, 6, 6]).with_prune(PruneLevel::Standard));
    let strings = groups.first().map(Group::infix_strings).unwrap_or_default();
    assert!(strings.contains(&"6+6+6+6".to_string()), "got {:?}", strings);
}

#[test]
fn test_classic_fraction_solution() {
    let groups = solve(SearchConfig::new(24, vec![3, 3, 8, 8]).with_prune(PruneLevel::Off));
    let strings = groups.first().map(Group::infix_strings).unwrap_or_default();
    assert!(strings.contains(&"8/(3-8/3)".to_string()), "got {:?}", strings);
    assert_sound(&groups, 24.0);
}

#[test]
fn test_verbose_keeps_empty_groups() {
    let quiet = solve(SearchConfig::new(24, vec![1, 1, 1, 1]));
    assert!(quiet.is_empty());

    let verbose = solve(SearchConfig::new(24, vec![1, 1, 1, 1]).with_verbose(true));
    assert_eq!(summary(&verbose), vec![(vec![1, 1, 1, 1], Vec::new())]);
}

#[test]
fn test_ranged_groups_without_solution_are_dropped() {
    // Two operands in 1..=3 never reach 100
    let groups = solve(SearchConfig::ranged(100, 2, vec![], 1, 3));
    assert!(groups.is_empty());

    let verbose = solve(SearchConfig::ranged(100, 2, vec![], 1, 3).with_verbose(true));
    assert_eq!(verbose.len(), 6);
}

#[test]
fn test_no_duplicate_infix_within_group() {
    let groups = solve(SearchConfig::ranged(24, 3, vec![], 1, 9).with_prune(PruneLevel::Off));
    assert!(!groups.is_empty());
    for group in &groups {
        let strings = group.infix_strings();
        let unique: HashSet<_> = strings.iter().collect();
        assert_eq!(unique.len(), strings.len(), "{:?}", group.operands);
        assert!(!group.solutions.is_empty());
    }
    assert_sound(&groups, 24.0);
}

#[test]
fn test_pruning_is_monotone() {
    let configs = [
        SearchConfig::new(24, vec![1, 2, 3, 4]),
        SearchConfig::new(10, vec![2, 3, 4, 5]),
        SearchConfig::ranged(12, 3, vec![], 1, 6),
    ];
    for config in configs {
        let off = infix_set(&solve(config.clone().with_prune(PruneLevel::Off)));
        let standard = infix_set(&solve(config.clone().with_prune(PruneLevel::Standard)));
        let max = infix_set(&solve(config.clone().with_prune(PruneLevel::Max)));
        assert!(!max.is_empty());
        assert!(standard.is_subset(&off), "{:?}", config);
        assert!(max.is_subset(&standard), "{:?}", config);
    }
}

#[test]
fn test_max_pruning_keeps_one_template_per_group() {
    let groups = solve(SearchConfig::ranged(24, 3, vec![], 1, 9).with_prune(PruneLevel::Max));
    assert!(!groups.is_empty());
    for group in &groups {
        let operators: HashSet<Vec<Token>> = group
            .solutions
            .iter()
            .map(|s| {
                let mut ops: Vec<Token> =
                    s.postfix.iter().copied().filter(Token::is_operator).collect();
                ops.sort();
                ops
            })
            .collect();
        assert_eq!(operators.len(), 1, "{:?}", group.operands);
    }
}

#[test]
fn test_worker_count_does_not_change_result() {
    let configs = [
        SearchConfig::ranged(24, 3, vec![], 1, 8),
        SearchConfig::ranged(10, 3, vec![2], 0, 6).with_operators(vec![Operator::Add]),
        SearchConfig::new(24, vec![4, 7, 8, 8]),
        SearchConfig::new(24, vec![1, 1, 1, 1]),
    ];
    for config in configs {
        for prune in [PruneLevel::Off, PruneLevel::Standard, PruneLevel::Max] {
            for verbose in [false, true] {
                let base = config.clone().with_prune(prune).with_verbose(verbose);
                let single = summary(&solve(base.clone().with_jobs(1)));
                for jobs in [2, 3, 7, 64] {
                    let parallel = summary(&solve(base.clone().with_jobs(jobs)));
                    assert_eq!(
                        single, parallel,
                        "{:?} {:?} verbose={} jobs={}",
                        config, prune, verbose, jobs
                    );
                }
            }
        }
    }
}

#[test]
fn test_search_records_are_sound() {
    let config = SearchConfig::ranged(24, 4, vec![], 1, 6)
        .with_prune(PruneLevel::Standard)
        .with_jobs(4);
    let records = Solver::new(config).search();
    assert!(records.is_ok());
    if let Ok(records) = records {
        assert!(records.first().is_some_and(Record::is_header));
        for record in &records {
            if let Record::Solution(postfix) = record {
                assert!(evaluate_postfix(postfix).is_ok_and(|v| (v - 24.0).abs() < 1e-5));
            }
        }
    }
}
