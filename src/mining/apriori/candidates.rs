use crate::mining::utils::{FrequentLevel, ItemId};
use std::collections::HashSet;

/// Candidate `k`-itemsets built from the frequent `(k-1)`-itemsets.
///
/// Every candidate is sorted and produced exactly once: the join only pairs
/// itemsets sharing their first `k-2` items, and only in ascending order of
/// their last item.
pub fn generate_candidates(previous: &FrequentLevel, k: usize) -> Vec<Vec<ItemId>> {
    debug_assert_eq!(previous.itemset_size + 1, k);

    if k == 2 {
        return generate_pairs(previous);
    }

    let mut itemsets: Vec<&[ItemId]> = previous.iter_itemsets().map(|(ids, _)| ids).collect();
    itemsets.sort_unstable();
    let known: HashSet<&[ItemId]> = itemsets.iter().copied().collect();

    let mut candidates = Vec::new();
    for i in 0..itemsets.len() {
        let first = itemsets[i];
        for &second in &itemsets[i + 1..] {
            if first[..k - 2] != second[..k - 2] {
                // sorted: no later itemset shares this prefix either
                break;
            }
            if first[k - 2] < second[k - 2] {
                let mut candidate = Vec::with_capacity(k);
                candidate.extend_from_slice(first);
                candidate.push(second[k - 2]);

                if all_subsets_frequent(&candidate, &known) {
                    candidates.push(candidate);
                }
            }
        }
    }
    candidates
}

fn generate_pairs(singletons: &FrequentLevel) -> Vec<Vec<ItemId>> {
    let mut items: Vec<ItemId> = singletons.iter_itemsets().map(|(ids, _)| ids[0]).collect();
    items.sort_unstable();
    items.dedup();

    let mut pairs = Vec::with_capacity(items.len() * items.len().saturating_sub(1) / 2);
    for (i, &a) in items.iter().enumerate() {
        for &b in &items[i + 1..] {
            pairs.push(vec![a, b]);
        }
    }
    pairs
}

/// Prune step. Dropping either of the last two items yields one of the joined
/// parents, so only the earlier positions need a lookup.
fn all_subsets_frequent(candidate: &[ItemId], known: &HashSet<&[ItemId]>) -> bool {
    let k = candidate.len();
    let mut subset = Vec::with_capacity(k - 1);

    (0..k.saturating_sub(2)).all(|skip| {
        subset.clear();
        subset.extend(
            candidate
                .iter()
                .enumerate()
                .filter(|&(idx, _)| idx != skip)
                .map(|(_, &item)| item),
        );
        known.contains(subset.as_slice())
    })
}
