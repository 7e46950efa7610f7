use crate::mining::types::{Item, Transaction};
use std::collections::{BTreeSet, HashMap};

pub type ItemId = usize;

/// Dense ids for item labels.
///
/// Ids are assigned in ascending label order, so a sorted id slice maps to a
/// sorted label sequence: canonical order can be reasoned about on ids alone.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    labels: Vec<Item>,
    ids: HashMap<Item, ItemId>,
}

impl ItemCatalog {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let distinct: BTreeSet<&str> = transactions
            .iter()
            .flat_map(|t| t.items.iter().map(String::as_str))
            .collect();

        let labels: Vec<Item> = distinct.into_iter().map(str::to_owned).collect();
        let ids = labels
            .iter()
            .enumerate()
            .map(|(id, label)| (label.clone(), id))
            .collect();

        Self { labels, ids }
    }

    pub fn id(&self, label: &str) -> Option<ItemId> {
        self.ids.get(label).copied()
    }

    pub fn label(&self, id: ItemId) -> &str {
        &self.labels[id]
    }

    pub fn labels_of(&self, ids: &[ItemId]) -> Vec<Item> {
        ids.iter().map(|&id| self.labels[id].clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
