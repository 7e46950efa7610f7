//! Read-only consumers of mining results: confidence filtering, product
//! recommendations and a side-by-side comparison of both engines.

use super::types::{Algorithm, AssociationRule, FrequentItemset, Item, MiningResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

pub fn filter_rules(rules: &[AssociationRule], min_confidence: f64) -> Vec<&AssociationRule> {
    rules
        .iter()
        .filter(|rule| rule.confidence >= min_confidence)
        .collect()
}

/// The `limit` most confident rules passing `min_confidence`.
pub fn top_rules(
    rules: &[AssociationRule],
    min_confidence: f64,
    limit: usize,
) -> Vec<&AssociationRule> {
    let mut kept = filter_rules(rules, min_confidence);
    kept.sort_by(|a, b| b.confidence.partial_cmp(&a.confidence).unwrap_or(Ordering::Equal));
    kept.truncate(limit);
    kept
}

/// Distinct items of every frequent itemset across `results`, sorted.
pub fn products(results: &[&MiningResult]) -> Vec<Item> {
    let items: BTreeSet<&Item> = results
        .iter()
        .flat_map(|result| result.frequent_itemsets.iter())
        .flat_map(|itemset| itemset.items.iter())
        .collect();
    items.into_iter().cloned().collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub item: Item,
    pub strength: f64,
    pub confidence: f64,
    pub lift: f64,
    pub rule: AssociationRule,
}

/// Confidence weighted 0.7, plus lift capped at 0.3 once halved, as a percentage.
pub fn recommendation_strength(confidence: f64, lift: f64) -> f64 {
    (confidence * 0.7 + (lift / 2.0).min(0.3)) * 100.0
}

/// Items co-occurring with `product`, strongest first.
///
/// Every rule with `product` in its antecedent and confidence at least
/// `min_confidence` proposes each consequent item; an item keeps the
/// strongest proposal across all `results`.
pub fn recommend(
    product: &str,
    results: &[&MiningResult],
    min_confidence: f64,
) -> Vec<Recommendation> {
    let mut best: HashMap<&str, Recommendation> = HashMap::new();

    let rules = results
        .iter()
        .flat_map(|result| result.rules.iter())
        .filter(|rule| rule.confidence >= min_confidence)
        .filter(|rule| rule.antecedent.iter().any(|item| item == product));

    for rule in rules {
        let strength = recommendation_strength(rule.confidence, rule.lift);
        for item in &rule.consequent {
            let stronger = best
                .get(item.as_str())
                .map_or(true, |existing| strength > existing.strength);
            if stronger {
                best.insert(
                    item.as_str(),
                    Recommendation {
                        item: item.clone(),
                        strength,
                        confidence: rule.confidence,
                        lift: rule.lift,
                        rule: rule.clone(),
                    },
                );
            }
        }
    }

    let mut recommendations: Vec<Recommendation> = best.into_values().collect();
    recommendations.sort_by(|a, b| {
        b.strength
            .partial_cmp(&a.strength)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.item.cmp(&b.item))
    });
    recommendations
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmSummary {
    pub algorithm: Algorithm,
    pub execution_time_ms: f64,
    pub frequent_itemset_count: usize,
    pub rule_count: usize,
    pub filtered_rule_count: usize,
    pub memory_usage_bytes: Option<u64>,
}

impl AlgorithmSummary {
    pub fn of(result: &MiningResult, min_confidence: f64) -> Self {
        Self {
            algorithm: result.algorithm,
            execution_time_ms: result.metrics.execution_time_ms,
            frequent_itemset_count: result.metrics.frequent_itemset_count,
            rule_count: result.metrics.rule_count,
            filtered_rule_count: filter_rules(&result.rules, min_confidence).len(),
            memory_usage_bytes: result.metrics.memory_usage_bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub apriori: AlgorithmSummary,
    pub eclat: AlgorithmSummary,
    pub itemsets_agree: bool,
}

pub fn compare(apriori: &MiningResult, eclat: &MiningResult, min_confidence: f64) -> Comparison {
    Comparison {
        apriori: AlgorithmSummary::of(apriori, min_confidence),
        eclat: AlgorithmSummary::of(eclat, min_confidence),
        itemsets_agree: canonical_itemsets(&apriori.frequent_itemsets)
            == canonical_itemsets(&eclat.frequent_itemsets),
    }
}

/// Order-independent view of an itemset list; supports are `count / total`
/// over the same total, so counts identify them exactly.
pub fn canonical_itemsets(itemsets: &[FrequentItemset]) -> BTreeSet<(Vec<Item>, usize)> {
    itemsets
        .iter()
        .map(|itemset| {
            let mut items = itemset.items.clone();
            items.sort();
            (items, itemset.count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mining::types::MiningMetrics;

    fn rule(
        antecedent: &[&str],
        consequent: &[&str],
        confidence: f64,
        lift: f64,
    ) -> AssociationRule {
        AssociationRule {
            antecedent: antecedent.iter().map(|s| s.to_string()).collect(),
            consequent: consequent.iter().map(|s| s.to_string()).collect(),
            support: 0.5,
            confidence,
            lift,
        }
    }

    fn result(algorithm: Algorithm, rules: Vec<AssociationRule>) -> MiningResult {
        MiningResult {
            algorithm,
            metrics: MiningMetrics {
                execution_time_ms: 1.0,
                rule_count: rules.len(),
                frequent_itemset_count: 0,
                memory_usage_bytes: None,
            },
            frequent_itemsets: Vec::new(),
            rules,
        }
    }

    #[test]
    fn test_strength_formula() {
        assert!((recommendation_strength(1.0, 2.0) - 100.0).abs() < 1e-9);
        assert!((recommendation_strength(0.5, 0.2) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_recommend_keeps_strongest_per_item() {
        let apriori = result(
            Algorithm::Apriori,
            vec![
                rule(&["milk"], &["bread"], 0.6, 1.0),
                rule(&["milk"], &["eggs", "bread"], 0.9, 1.2),
                rule(&["bread"], &["milk"], 0.9, 1.2),
                rule(&["milk"], &["jam"], 0.1, 3.0),
            ],
        );
        let recs = recommend("milk", &[&apriori], 0.5);

        let items: Vec<&str> = recs.iter().map(|r| r.item.as_str()).collect();
        // bread and eggs tie on strength and fall back to item order
        assert_eq!(items, vec!["bread", "eggs"]);
        assert!((recs[0].confidence - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_top_rules() {
        let rules = vec![
            rule(&["a"], &["b"], 0.4, 1.0),
            rule(&["b"], &["a"], 0.9, 1.0),
            rule(&["c"], &["a"], 0.7, 1.0),
        ];
        let top = top_rules(&rules, 0.5, 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].antecedent, vec!["b"]);
        assert_eq!(filter_rules(&rules, 0.5).len(), 2);
    }
}
