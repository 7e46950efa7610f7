use super::catalog::{ItemCatalog, ItemId};
use crate::mining::types::FrequentItemset;

/// Flat storage for itemsets of mixed sizes, each with its occurrence count.
#[derive(Debug, Clone, Default)]
pub struct ItemsetStorage {
    pub items: Vec<ItemId>,
    pub offsets: Vec<(usize, usize)>,
    pub counts: Vec<usize>,
}

/// All frequent itemsets of one size.
#[derive(Debug, Clone)]
pub struct FrequentLevel {
    pub storage: ItemsetStorage,
    pub itemset_size: usize,
}

impl ItemsetStorage {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_itemset(&mut self, mut items: Vec<ItemId>, count: usize) {
        items.sort_unstable();
        items.dedup();
        let start = self.items.len();
        self.items.extend_from_slice(&items);
        self.offsets.push((start, items.len()));
        self.counts.push(count);
    }

    pub(crate) fn get_itemset(&self, idx: usize) -> &[ItemId] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub(crate) fn len(&self) -> usize {
        self.offsets.len()
    }
}

impl FrequentLevel {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            storage: ItemsetStorage::new(),
            itemset_size,
        }
    }

    pub fn add_itemset(&mut self, items: Vec<ItemId>, count: usize) -> usize {
        debug_assert_eq!(items.len(), self.itemset_size);
        self.storage.add_itemset(items, count);
        self.storage.len() - 1
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    pub fn get_itemset(&self, idx: usize) -> &[ItemId] {
        self.storage.get_itemset(idx)
    }

    pub fn get_count(&self, idx: usize) -> usize {
        self.storage.counts[idx]
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = (&[ItemId], usize)> {
        (0..self.storage.len()).map(move |idx| (self.get_itemset(idx), self.get_count(idx)))
    }
}

/// Append `pattern` to the level matching its size, creating levels as needed.
pub fn add_pattern_to_result(pattern: &[ItemId], count: usize, result: &mut Vec<FrequentLevel>) {
    let pattern_size = pattern.len();

    while result.len() < pattern_size {
        result.push(FrequentLevel::new(result.len() + 1));
    }

    if pattern_size > 0 {
        result[pattern_size - 1].add_itemset(pattern.to_vec(), count);
    }
}

/// Resolve stored ids back into labelled itemsets, smallest level first.
pub fn levels_to_itemsets(
    levels: &[FrequentLevel],
    catalog: &ItemCatalog,
    num_transactions: usize,
) -> Vec<FrequentItemset> {
    let total: usize = levels.iter().map(FrequentLevel::len).sum();
    let mut itemsets = Vec::with_capacity(total);

    for level in levels {
        for (ids, count) in level.iter_itemsets() {
            itemsets.push(FrequentItemset {
                items: catalog.labels_of(ids),
                support: count as f64 / num_transactions as f64,
                count,
            });
        }
    }
    itemsets
}
