//! Transaction cleaning: label normalization, duplicate and blank removal,
//! and the before/after report that accompanies it.

use super::types::Transaction;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStats {
    pub transaction_count: usize,
    pub total_items: usize,
    pub unique_items: usize,
    pub empty_transactions: usize,
    pub singleton_transactions: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovedCounts {
    pub empty_transactions: usize,
    pub singleton_transactions: usize,
    pub duplicate_items: usize,
    pub invalid_items: usize,
}

impl RemovedCounts {
    pub fn is_zero(&self) -> bool {
        *self == RemovedCounts::default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreprocessReport {
    pub before: TransactionStats,
    pub after: TransactionStats,
    pub removed: RemovedCounts,
}

/// Normalize and clean `transactions` without touching the input.
///
/// `removed.singleton_transactions` only counts transactions dropped because
/// `remove_singletons` was requested; `after.singleton_transactions` is the
/// singleton count of the cleaned population and is computed regardless.
pub fn preprocess(
    transactions: &[Transaction],
    remove_singletons: bool,
) -> (Vec<Transaction>, PreprocessReport) {
    let before = compute_stats(transactions);
    let mut removed = RemovedCounts::default();

    let mut cleaned: Vec<Transaction> = transactions
        .iter()
        .map(|transaction| clean_transaction(transaction, &mut removed))
        .collect();

    let count_before_empty = cleaned.len();
    cleaned.retain(|t| !t.items.is_empty());
    removed.empty_transactions = count_before_empty - cleaned.len();

    if remove_singletons {
        let count_before_singletons = cleaned.len();
        cleaned.retain(|t| t.items.len() > 1);
        removed.singleton_transactions = count_before_singletons - cleaned.len();
    }

    let after = compute_stats(&cleaned);
    log::debug!(
        "preprocessed {} -> {} transactions ({} invalid, {} duplicate items dropped)",
        before.transaction_count,
        after.transaction_count,
        removed.invalid_items,
        removed.duplicate_items
    );

    (
        cleaned,
        PreprocessReport {
            before,
            after,
            removed,
        },
    )
}

fn clean_transaction(transaction: &Transaction, removed: &mut RemovedCounts) -> Transaction {
    let mut seen: HashSet<String> = HashSet::with_capacity(transaction.items.len());
    let mut items = Vec::with_capacity(transaction.items.len());

    for raw in &transaction.items {
        let label = raw.trim().to_lowercase();
        if label.is_empty() {
            removed.invalid_items += 1;
        } else if seen.contains(&label) {
            removed.duplicate_items += 1;
        } else {
            seen.insert(label.clone());
            items.push(label);
        }
    }

    Transaction {
        id: transaction.id.clone(),
        items,
    }
}

/// Population statistics; applied identically to raw and cleaned input.
pub fn compute_stats(transactions: &[Transaction]) -> TransactionStats {
    let mut unique: HashSet<&str> = HashSet::new();
    let mut stats = TransactionStats {
        transaction_count: transactions.len(),
        ..TransactionStats::default()
    };

    for transaction in transactions {
        stats.total_items += transaction.items.len();
        unique.extend(transaction.items.iter().map(String::as_str));
        match transaction.items.len() {
            0 => stats.empty_transactions += 1,
            1 => stats.singleton_transactions += 1,
            _ => {}
        }
    }

    stats.unique_items = unique.len();
    stats
}
