//! Ordered grouping of joined rows

use std::collections::HashMap;
use std::hash::Hash;

use super::level::{EngineeringLevel, LevelCriterion, LevelWithCriteria};

/// Group items by key, keeping keys in first-seen order and items in input
/// order within each group.
pub fn group_by_key<T, K, I, F>(items: I, mut key: F) -> Vec<(K, Vec<T>)>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();

    for item in items {
        let k = key(&item);
        if let Some(&slot) = slots.get(&k) {
            groups[slot].1.push(item);
        } else {
            slots.insert(k.clone(), groups.len());
            groups.push((k, vec![item]));
        }
    }

    groups
}

/// Fold left-join rows into one entry per level.
///
/// Every level present in `rows` yields exactly one entry, even when `keep`
/// rejects all of its criteria or the join produced none.
pub fn assemble_levels<I, F>(rows: I, keep: F) -> Vec<LevelWithCriteria>
where
    I: IntoIterator<Item = (EngineeringLevel, Option<LevelCriterion>)>,
    F: Fn(&LevelCriterion) -> bool,
{
    group_by_key(rows, |(level, _)| level.id.clone())
        .into_iter()
        .filter_map(|(_, group)| {
            let mut group = group.into_iter();
            let (level, first) = group.next()?;
            let criteria = first
                .into_iter()
                .chain(group.filter_map(|(_, criterion)| criterion))
                .filter(|criterion| keep(criterion))
                .collect();
            Some(LevelWithCriteria { level, criteria })
        })
        .collect()
}
