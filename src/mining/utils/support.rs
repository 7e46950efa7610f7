use super::catalog::{ItemCatalog, ItemId};
use crate::mining::types::Transaction;

/// Smallest occurrence count whose support reaches `min_support`.
///
/// Starts from `ceil(min_support * n)` and corrects it against the threshold
/// in both directions, so products like `0.3 * 10 = 3.0000000000000004`
/// resolve to 3 and no returned itemset ever falls under `min_support`.
/// Never below 1 for a non-empty population, so an itemset that occurs
/// nowhere is never reported as frequent.
pub fn min_support_count(min_support: f64, num_transactions: usize) -> usize {
    if num_transactions == 0 {
        return 0;
    }
    let total = num_transactions as f64;
    let mut count = ((min_support * total).ceil().max(1.0) as usize).min(num_transactions);
    while count < num_transactions && (count as f64 / total) < min_support {
        count += 1;
    }
    while count > 1 && (count - 1) as f64 / total >= min_support {
        count -= 1;
    }
    count
}

/// Read-only horizontal view of a transaction list: every row holds the
/// distinct item ids of one transaction, sorted ascending.
#[derive(Debug, Clone)]
pub struct SupportIndex {
    catalog: ItemCatalog,
    rows: Vec<Vec<ItemId>>,
}

impl SupportIndex {
    pub fn build(transactions: &[Transaction]) -> Self {
        let catalog = ItemCatalog::from_transactions(transactions);
        let rows = transactions
            .iter()
            .map(|transaction| {
                let mut row: Vec<ItemId> = transaction
                    .items
                    .iter()
                    .filter_map(|label| catalog.id(label))
                    .collect();
                row.sort_unstable();
                row.dedup();
                row
            })
            .collect();

        Self { catalog, rows }
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn rows(&self) -> &[Vec<ItemId>] {
        &self.rows
    }

    pub fn num_transactions(&self) -> usize {
        self.rows.len()
    }

    /// Occurrence count of every item, indexed by id.
    pub fn item_counts(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.catalog.len()];
        for row in &self.rows {
            for &item in row {
                counts[item] += 1;
            }
        }
        counts
    }

    /// Occurrence count of every sorted `k`-itemset in `candidates`, in one
    /// pass over the rows.
    pub fn count_itemsets(&self, candidates: &[Vec<ItemId>], k: usize) -> Vec<usize> {
        let mut counts = vec![0usize; candidates.len()];
        if candidates.is_empty() {
            return counts;
        }

        for row in self.rows.iter().filter(|row| row.len() >= k) {
            for (count, candidate) in counts.iter_mut().zip(candidates) {
                if is_sorted_subset(candidate, row) {
                    *count += 1;
                }
            }
        }
        counts
    }
}

/// Merge-walk subset test; both slices must be sorted ascending.
pub fn is_sorted_subset(needle: &[ItemId], haystack: &[ItemId]) -> bool {
    if needle.len() > haystack.len() {
        return false;
    }

    let mut hay = haystack.iter();
    'outer: for &wanted in needle {
        for &candidate in hay.by_ref() {
            if candidate == wanted {
                continue 'outer;
            }
            if candidate > wanted {
                return false;
            }
        }
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_support_count() {
        assert_eq!(min_support_count(0.5, 4), 2);
        assert_eq!(min_support_count(0.3, 10), 3);
        assert_eq!(min_support_count(0.51, 4), 3);
        assert_eq!(min_support_count(1.0, 7), 7);
        assert_eq!(min_support_count(1e-12, 3), 1);
        assert_eq!(min_support_count(0.5, 0), 0);
    }

    #[test]
    fn test_min_support_count_never_undershoots() {
        // just above 1/2: one of two transactions is no longer enough
        assert_eq!(min_support_count(0.5 + 1e-10, 2), 2);
        assert_eq!(min_support_count(0.3 + 1e-12, 10), 4);
        assert_eq!(min_support_count(0.7, 10), 7);

        for n in 1..=50 {
            for step in 1..=100 {
                let min_support = step as f64 / 100.0;
                let count = min_support_count(min_support, n);
                assert!(count as f64 / n as f64 >= min_support);
                if count > 1 {
                    assert!(((count - 1) as f64 / n as f64) < min_support);
                }
            }
        }
    }

    #[test]
    fn test_sorted_subset() {
        assert!(is_sorted_subset(&[], &[1, 2]));
        assert!(is_sorted_subset(&[1, 3], &[0, 1, 2, 3]));
        assert!(!is_sorted_subset(&[1, 4], &[0, 1, 2, 3]));
        assert!(!is_sorted_subset(&[0, 2], &[1, 2]));
        assert!(!is_sorted_subset(&[1, 2, 3], &[1, 2]));
    }

    #[test]
    fn test_rows_are_deduplicated() {
        let transactions = vec![
            Transaction::new("1", ["b", "a", "b"]),
            Transaction::new("2", ["a"]),
        ];
        let index = SupportIndex::build(&transactions);

        assert_eq!(index.rows()[0], vec![0, 1]);
        assert_eq!(index.item_counts(), vec![2, 1]);
    }

    #[test]
    fn test_count_itemsets() {
        let transactions = vec![
            Transaction::new("1", ["a", "b", "c"]),
            Transaction::new("2", ["a", "c"]),
            Transaction::new("3", ["b"]),
        ];
        let index = SupportIndex::build(&transactions);

        let pairs = vec![vec![0, 1], vec![0, 2], vec![1, 2]];
        assert_eq!(index.count_itemsets(&pairs, 2), vec![1, 2, 1]);
        assert_eq!(index.count_itemsets(&[vec![0, 1, 2]], 3), vec![1]);
        assert!(index.count_itemsets(&[], 2).is_empty());
    }
}
