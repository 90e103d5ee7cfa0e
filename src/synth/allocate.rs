use crate::model::tables::Tables;
use std::collections::HashSet;

pub const ID_PREFIX: &str = "S";

/// Proposes `S{n + c}` for `c = 1, 2, ...` until the name is free, where `n`
/// is the current subcatchment count.
///
/// Not a strict counter: after deletions, gaps may be reused or skipped.
pub fn allocate_id(tables: &Tables) -> String {
    let taken: HashSet<&str> = tables.subcatchments.iter().map(|s| s.name.as_str()).collect();
    let count = tables.subcatchment_count();

    let mut offset = 1;
    loop {
        let candidate = format!("{ID_PREFIX}{}", count + offset);
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
        offset += 1;
    }
}
