//! Association rule derivation shared by every engine.
//!
//! Rules are derived from nothing but the itemsets and their supports, so two
//! engines that agree on itemsets necessarily agree on rules.

use super::combinations::for_each_split;
use super::types::{AssociationRule, FrequentItemset};
use std::collections::HashMap;

/// Support of every known itemset keyed by its canonical label sequence.
pub struct SupportLookup<'a> {
    supports: HashMap<Vec<&'a str>, f64>,
}

impl<'a> SupportLookup<'a> {
    pub fn new(itemsets: &'a [FrequentItemset]) -> Self {
        let supports = itemsets
            .iter()
            .map(|itemset| (canonical_key(&itemset.items), itemset.support))
            .collect();
        Self { supports }
    }

    /// `items` need not be sorted.
    pub fn get(&self, items: &[&str]) -> Option<f64> {
        let mut key = items.to_vec();
        key.sort_unstable();
        self.supports.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.supports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supports.is_empty()
    }
}

fn canonical_key(items: &[String]) -> Vec<&str> {
    let mut key: Vec<&str> = items.iter().map(String::as_str).collect();
    key.sort_unstable();
    key.dedup();
    key
}

pub fn generate_rules(frequent_itemsets: &[FrequentItemset]) -> Vec<AssociationRule> {
    let lookup = SupportLookup::new(frequent_itemsets);
    let mut rules = Vec::new();

    for itemset in frequent_itemsets.iter().filter(|f| f.items.len() >= 2) {
        let items = canonical_key(&itemset.items);
        let itemset_support = itemset.support;

        // single-item antecedents first, then 2..size-1
        for antecedent_size in 1..items.len() {
            for_each_split(&items, antecedent_size, |antecedent, consequent| {
                let rule = derive_rule(&lookup, itemset_support, &antecedent, &consequent);
                rules.extend(rule);
            });
        }
    }

    log::debug!(
        "derived {} rules from {} itemsets",
        rules.len(),
        frequent_itemsets.len()
    );
    rules
}

fn derive_rule(
    lookup: &SupportLookup<'_>,
    itemset_support: f64,
    antecedent: &[&str],
    consequent: &[&str],
) -> Option<AssociationRule> {
    let antecedent_support = match lookup.get(antecedent) {
        Some(support) if support > 0.0 => support,
        _ => {
            log::trace!(
                "skipping rule {:?} -> {:?}: no antecedent support",
                antecedent,
                consequent
            );
            return None;
        }
    };

    let confidence = itemset_support / antecedent_support;
    let lift = match lookup.get(consequent) {
        Some(support) if support > 0.0 => confidence / support,
        _ => 0.0,
    };

    Some(AssociationRule {
        antecedent: antecedent.iter().map(|s| s.to_string()).collect(),
        consequent: consequent.iter().map(|s| s.to_string()).collect(),
        support: itemset_support,
        confidence,
        lift,
    })
}
