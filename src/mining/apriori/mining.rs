use super::candidates::generate_candidates;
use crate::mining::control::{Checkpoint, MiningContext};
use crate::mining::error::{validate_min_support, MiningError, Result};
use crate::mining::metrics::{
    build_metrics, estimate_itemset_storage_size, measure_time, MemoryTracker,
};
use crate::mining::rules::generate_rules;
use crate::mining::types::{Algorithm, MiningResult, Transaction};
use crate::mining::utils::{levels_to_itemsets, min_support_count, FrequentLevel, SupportIndex};

pub fn mine_apriori(transactions: &[Transaction], min_support: f64) -> Result<MiningResult> {
    mine_apriori_with(transactions, min_support, &MiningContext::default())
}

pub fn mine_apriori_with(
    transactions: &[Transaction],
    min_support: f64,
    ctx: &MiningContext<'_>,
) -> Result<MiningResult> {
    validate_min_support(min_support)?;

    let mut memory = MemoryTracker::new();
    let (outcome, elapsed) = measure_time(|| {
        let index = SupportIndex::build(transactions);
        let levels = apriori_algorithm(&index, min_support, ctx, &mut memory)?;
        let itemsets = levels_to_itemsets(&levels, index.catalog(), index.num_transactions());
        let rules = generate_rules(&itemsets);
        Ok::<_, MiningError>((itemsets, rules))
    });
    let (frequent_itemsets, rules) = outcome?;

    log::info!(
        "apriori: {} itemsets, {} rules in {:.3}ms",
        frequent_itemsets.len(),
        rules.len(),
        elapsed
    );

    Ok(MiningResult {
        algorithm: Algorithm::Apriori,
        metrics: build_metrics(elapsed, &frequent_itemsets, &rules, &memory),
        frequent_itemsets,
        rules,
    })
}

/// Level-wise search. `result[k - 1]` holds the frequent `k`-itemsets.
pub fn apriori_algorithm(
    index: &SupportIndex,
    min_support: f64,
    ctx: &MiningContext<'_>,
    memory: &mut MemoryTracker,
) -> Result<Vec<FrequentLevel>> {
    ctx.check(Algorithm::Apriori)?;
    let min_count = min_support_count(min_support, index.num_transactions());
    let row_bytes: usize = index
        .rows()
        .iter()
        .map(|row| row.len() * std::mem::size_of::<usize>())
        .sum();
    memory.allocate(row_bytes);

    let mut result = Vec::new();
    let mut current = frequent_singletons(index, min_count);
    ctx.notify(
        Algorithm::Apriori,
        Checkpoint::Level {
            itemset_size: 1,
            frequent: current.len(),
        },
    );

    let mut k = 2;
    while !current.is_empty() {
        ctx.check(Algorithm::Apriori)?;
        memory.allocate(estimate_itemset_storage_size(current.len(), k - 1));

        let candidates = generate_candidates(&current, k);
        let candidate_bytes = estimate_itemset_storage_size(candidates.len(), k);
        memory.allocate(candidate_bytes);

        let counts = index.count_itemsets(&candidates, k);
        let mut next = FrequentLevel::new(k);
        for (candidate, count) in candidates.into_iter().zip(counts) {
            if count >= min_count {
                next.add_itemset(candidate, count);
            }
        }
        memory.deallocate(candidate_bytes);

        log::debug!(
            "apriori level {}: {} frequent of min_count {}",
            k,
            next.len(),
            min_count
        );
        ctx.notify(
            Algorithm::Apriori,
            Checkpoint::Level {
                itemset_size: k,
                frequent: next.len(),
            },
        );

        result.push(std::mem::replace(&mut current, next));
        k += 1;
    }

    Ok(result)
}

fn frequent_singletons(index: &SupportIndex, min_count: usize) -> FrequentLevel {
    let mut level = FrequentLevel::new(1);
    for (item, count) in index.item_counts().into_iter().enumerate() {
        if count >= min_count && count > 0 {
            level.add_itemset(vec![item], count);
        }
    }
    level
}

