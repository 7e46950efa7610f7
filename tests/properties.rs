use basket::mining::recommend::canonical_itemsets;
use basket::mining::{
    mine_apriori, mine_eclat, preprocess, AssociationRule, FrequentItemset, Transaction,
};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

fn label() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "milk", "Milk", "bread", " bread ", "eggs", "jam", "tea", "rice", "", "  ",
    ])
    .prop_map(str::to_owned)
}

fn transactions() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(prop::collection::vec(label(), 0..7), 0..25).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(idx, items)| Transaction::new(idx.to_string(), items))
            .collect()
    })
}

fn cleaned_transactions() -> impl Strategy<Value = Vec<Transaction>> {
    transactions().prop_map(|raw| preprocess(&raw, false).0)
}

fn rule_key(rule: &AssociationRule) -> (Vec<String>, Vec<String>, u64, u64) {
    (
        rule.antecedent.clone(),
        rule.consequent.clone(),
        rule.confidence.to_bits(),
        rule.lift.to_bits(),
    )
}

proptest! {
    #[test]
    fn apriori_and_eclat_agree(
        txs in cleaned_transactions(),
        min_support in 0.05f64..=1.0,
    ) {
        let apriori = mine_apriori(&txs, min_support).unwrap();
        let eclat = mine_eclat(&txs, min_support).unwrap();

        prop_assert_eq!(
            canonical_itemsets(&apriori.frequent_itemsets),
            canonical_itemsets(&eclat.frequent_itemsets)
        );

        let supports = |itemsets: &[FrequentItemset]| -> BTreeSet<(Vec<String>, u64)> {
            itemsets
                .iter()
                .map(|f| (f.items.clone(), f.support.to_bits()))
                .collect()
        };
        prop_assert_eq!(
            supports(&apriori.frequent_itemsets),
            supports(&eclat.frequent_itemsets)
        );

        let apriori_rules: BTreeSet<_> = apriori.rules.iter().map(rule_key).collect();
        let eclat_rules: BTreeSet<_> = eclat.rules.iter().map(rule_key).collect();
        prop_assert_eq!(apriori_rules, eclat_rules);
    }

    #[test]
    fn raising_min_support_never_adds_itemsets(
        txs in cleaned_transactions(),
        low in 0.05f64..=1.0,
        bump in 0.0f64..=1.0,
    ) {
        let high = (low + bump).min(1.0);
        let at_low = mine_apriori(&txs, low).unwrap().frequent_itemsets.len();
        let at_high = mine_apriori(&txs, high).unwrap().frequent_itemsets.len();
        prop_assert!(at_high <= at_low);

        let at_low = mine_eclat(&txs, low).unwrap().frequent_itemsets.len();
        let at_high = mine_eclat(&txs, high).unwrap().frequent_itemsets.len();
        prop_assert!(at_high <= at_low);
    }

    #[test]
    fn supports_are_exact_and_above_threshold(
        txs in transactions(),
        min_support in 0.05f64..=1.0,
    ) {
        let total = txs.len() as f64;
        let results = [
            mine_apriori(&txs, min_support).unwrap(),
            mine_eclat(&txs, min_support).unwrap(),
        ];
        for result in results {
            for itemset in &result.frequent_itemsets {
                prop_assert!(itemset.support >= min_support);
                prop_assert!((itemset.support - itemset.count as f64 / total).abs() < 1e-9);
                prop_assert_eq!(itemset.count, (itemset.support * total).round() as usize);

                let mut sorted = itemset.items.clone();
                sorted.sort();
                sorted.dedup();
                prop_assert_eq!(&sorted, &itemset.items);
            }
        }
    }

    #[test]
    fn rules_are_consistent_with_itemsets(
        txs in cleaned_transactions(),
        min_support in 0.05f64..=1.0,
    ) {
        let result = mine_apriori(&txs, min_support).unwrap();
        let supports: HashMap<Vec<String>, f64> = result
            .frequent_itemsets
            .iter()
            .map(|f| (f.items.clone(), f.support))
            .collect();

        for rule in &result.rules {
            prop_assert!(!rule.antecedent.is_empty());
            prop_assert!(!rule.consequent.is_empty());
            prop_assert!(rule.antecedent.iter().all(|item| !rule.consequent.contains(item)));

            let mut union: Vec<String> = rule
                .antecedent
                .iter()
                .chain(&rule.consequent)
                .cloned()
                .collect();
            union.sort();
            let union_support = supports.get(&union).copied();
            prop_assert_eq!(union_support, Some(rule.support));

            prop_assert!(rule.confidence >= 0.0 && rule.confidence <= 1.0 + 1e-9);
            prop_assert!(rule.lift >= 0.0);

            let mut antecedent = rule.antecedent.clone();
            antecedent.sort();
            let antecedent_support = supports[&antecedent];
            prop_assert!((rule.confidence - rule.support / antecedent_support).abs() < 1e-9);
        }
    }

    #[test]
    fn preprocessing_is_idempotent(txs in transactions(), remove_singletons in any::<bool>()) {
        let (once, _) = preprocess(&txs, remove_singletons);
        let (twice, report) = preprocess(&once, remove_singletons);

        prop_assert!(report.removed.is_zero());
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(report.before, report.after);
    }
}

#[test]
fn scenario_d_normalizes_duplicates() {
    let raw = vec![Transaction::new("1", ["Milk", "milk", " Bread "])];
    let (cleaned, report) = preprocess(&raw, false);

    assert_eq!(cleaned[0].items, vec!["milk", "bread"]);
    assert_eq!(report.removed.duplicate_items, 1);
    assert_eq!(report.removed.invalid_items, 0);
    assert_eq!(report.before.total_items, 3);
    assert_eq!(report.after.total_items, 2);
}

#[test]
fn concurrent_runs_share_input_read_only() {
    let raw: Vec<Transaction> = (0..200)
        .map(|i| {
            let items: Vec<String> = (0..6)
                .filter(|j| (i + j) % 3 != 0)
                .map(|j| format!("item{}", (i * j) % 9))
                .collect();
            Transaction::new(i.to_string(), items)
        })
        .collect();
    let (cleaned, _) = preprocess(&raw, false);

    let (apriori, eclat) = rayon::join(
        || mine_apriori(&cleaned, 0.1),
        || mine_eclat(&cleaned, 0.1),
    );
    let (apriori, eclat) = (apriori.unwrap(), eclat.unwrap());

    assert_eq!(
        canonical_itemsets(&apriori.frequent_itemsets),
        canonical_itemsets(&eclat.frequent_itemsets)
    );
    assert!(!apriori.frequent_itemsets.is_empty());
}
