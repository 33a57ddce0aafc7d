use log::debug;

use crate::solver::types::Record;

/// Drops solutions whose postfix form already occurs earlier in the same
/// group. The backward scan stops at the group header.
pub fn filter_duplicate_solutions(records: Vec<Record>) -> Vec<Record> {
    let mut filtered: Vec<Record> = Vec::with_capacity(records.len());
    for record in records {
        if !record.is_header() {
            let exists = filtered
                .iter()
                .rev()
                .take_while(|previous| !previous.is_header())
                .any(|previous| *previous == record);
            if exists {
                continue;
            }
        }
        filtered.push(record);
    }
    debug!("{} records left after duplicate filtering", filtered.len());
    filtered
}

/// Drops every group header that is not followed by at least one solution
pub fn filter_empty_groups(records: Vec<Record>) -> Vec<Record> {
    let mut filtered: Vec<Record> = Vec::with_capacity(records.len());
    for record in records {
        if record.is_header() && filtered.last().is_some_and(Record::is_header) {
            filtered.pop();
        }
        filtered.push(record);
    }
    while filtered.last().is_some_and(Record::is_header) {
        filtered.pop();
    }
    filtered
}
