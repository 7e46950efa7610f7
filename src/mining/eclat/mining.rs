use super::tidset::{intersect, TidSet, VerticalIndex};
use crate::mining::control::{Checkpoint, MiningContext};
use crate::mining::error::{validate_min_support, MiningError, Result};
use crate::mining::metrics::{build_metrics, estimate_tidset_size, measure_time, MemoryTracker};
use crate::mining::rules::generate_rules;
use crate::mining::types::{Algorithm, MiningResult, Transaction};
use crate::mining::utils::{
    add_pattern_to_result, levels_to_itemsets, min_support_count, FrequentLevel, ItemId,
    SupportIndex,
};

pub fn mine_eclat(transactions: &[Transaction], min_support: f64) -> Result<MiningResult> {
    mine_eclat_with(transactions, min_support, &MiningContext::default())
}

pub fn mine_eclat_with(
    transactions: &[Transaction],
    min_support: f64,
    ctx: &MiningContext<'_>,
) -> Result<MiningResult> {
    validate_min_support(min_support)?;

    let mut memory = MemoryTracker::new();
    let (outcome, elapsed) = measure_time(|| {
        let index = SupportIndex::build(transactions);
        let levels = eclat_algorithm(&index, min_support, ctx, &mut memory)?;
        let itemsets = levels_to_itemsets(&levels, index.catalog(), index.num_transactions());
        let rules = generate_rules(&itemsets);
        Ok::<_, MiningError>((itemsets, rules))
    });
    let (frequent_itemsets, rules) = outcome?;

    log::info!(
        "eclat: {} itemsets, {} rules in {:.3}ms",
        frequent_itemsets.len(),
        rules.len(),
        elapsed
    );

    Ok(MiningResult {
        algorithm: Algorithm::Eclat,
        metrics: build_metrics(elapsed, &frequent_itemsets, &rules, &memory),
        frequent_itemsets,
        rules,
    })
}

/// One pending extension point of the depth-first search.
struct Frame {
    items: Vec<ItemId>,
    tids: TidSet,
    /// Position in the item order of the next extension to try.
    next: usize,
}

/// Depth-first search over TID-set intersections, driven by an explicit stack.
pub fn eclat_algorithm(
    index: &SupportIndex,
    min_support: f64,
    ctx: &MiningContext<'_>,
    memory: &mut MemoryTracker,
) -> Result<Vec<FrequentLevel>> {
    ctx.check(Algorithm::Eclat)?;
    let min_count = min_support_count(min_support, index.num_transactions());

    let vertical = VerticalIndex::build(index);
    memory.allocate(
        vertical.num_items() * estimate_tidset_size(0)
            + vertical.total_entries() * std::mem::size_of::<usize>(),
    );

    let order = vertical.frequent_items_ordered(min_count);
    let mut result: Vec<FrequentLevel> = Vec::new();
    for &item in &order {
        add_pattern_to_result(&[item], vertical.support_count(item), &mut result);
    }

    for (position, &root) in order.iter().enumerate() {
        ctx.check(Algorithm::Eclat)?;

        let root_tids = vertical.tidset(root).to_vec();
        memory.allocate(estimate_tidset_size(root_tids.len()));
        let mut stack = vec![Frame {
            items: vec![root],
            tids: root_tids,
            next: position + 1,
        }];
        let mut found = 0usize;

        while let Some(frame) = stack.last_mut() {
            if frame.next >= order.len() {
                if let Some(done) = stack.pop() {
                    memory.deallocate(estimate_tidset_size(done.tids.len()));
                }
                continue;
            }

            let candidate = order[frame.next];
            frame.next += 1;

            let tids = intersect(&frame.tids, vertical.tidset(candidate));
            if tids.len() < min_count {
                continue;
            }

            let mut items = frame.items.clone();
            items.push(candidate);
            let next = frame.next;

            add_pattern_to_result(&items, tids.len(), &mut result);
            found += 1;

            memory.allocate(estimate_tidset_size(tids.len()));
            stack.push(Frame { items, tids, next });
        }

        log::debug!(
            "eclat branch {}/{}: {} itemsets extend item {}",
            position + 1,
            order.len(),
            found,
            index.catalog().label(root)
        );
        ctx.notify(
            Algorithm::Eclat,
            Checkpoint::Branch {
                index: position,
                of: order.len(),
            },
        );
    }

    Ok(result)
}
