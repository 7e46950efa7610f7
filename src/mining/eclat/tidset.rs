use crate::mining::utils::{ItemId, SupportIndex};

/// Sorted, duplicate-free transaction indices.
pub type TidSet = Vec<usize>;

/// Vertical layout of a transaction list: one TID-set per item id.
#[derive(Debug, Clone)]
pub struct VerticalIndex {
    tidsets: Vec<TidSet>,
}

impl VerticalIndex {
    pub fn build(index: &SupportIndex) -> Self {
        let mut tidsets: Vec<TidSet> = vec![Vec::new(); index.catalog().len()];
        for (tid, row) in index.rows().iter().enumerate() {
            for &item in row {
                tidsets[item].push(tid);
            }
        }
        Self { tidsets }
    }

    pub fn tidset(&self, item: ItemId) -> &[usize] {
        &self.tidsets[item]
    }

    pub fn support_count(&self, item: ItemId) -> usize {
        self.tidsets[item].len()
    }

    pub fn num_items(&self) -> usize {
        self.tidsets.len()
    }

    pub fn total_entries(&self) -> usize {
        self.tidsets.iter().map(Vec::len).sum()
    }

    /// Items with at least `min_count` occurrences, most frequent first and
    /// ascending id (equivalently, label) among equals.
    pub fn frequent_items_ordered(&self, min_count: usize) -> Vec<ItemId> {
        let mut items: Vec<ItemId> = (0..self.tidsets.len())
            .filter(|&item| {
                let count = self.support_count(item);
                count > 0 && count >= min_count
            })
            .collect();
        items.sort_by(|&a, &b| {
            self.support_count(b)
                .cmp(&self.support_count(a))
                .then(a.cmp(&b))
        });
        items
    }
}

/// Merge intersection of two sorted TID-sets.
pub fn intersect(a: &[usize], b: &[usize]) -> TidSet {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}
