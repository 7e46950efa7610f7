use super::types::{AssociationRule, FrequentItemset, MiningMetrics};
use super::utils::ItemId;
use std::time::Instant;

/// Running and peak byte estimate of an engine's working structures.
///
/// Engines report what they allocate and release; nothing here touches the
/// allocator, so tracking cannot influence a result.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryTracker {
    current_bytes: usize,
    peak_bytes: usize,
}

impl MemoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, bytes: usize) {
        self.current_bytes += bytes;
        self.peak_bytes = self.peak_bytes.max(self.current_bytes);
    }

    pub fn deallocate(&mut self, bytes: usize) {
        self.current_bytes = self.current_bytes.saturating_sub(bytes);
    }

    pub fn current_usage(&self) -> usize {
        self.current_bytes
    }

    pub fn peak_usage(&self) -> usize {
        self.peak_bytes
    }
}

pub fn estimate_itemset_storage_size(num_itemsets: usize, avg_itemset_size: usize) -> usize {
    let offset_size = std::mem::size_of::<(usize, usize)>() + std::mem::size_of::<usize>();
    let item_size = std::mem::size_of::<ItemId>();
    num_itemsets * offset_size + num_itemsets * avg_itemset_size * item_size
}

pub fn estimate_tidset_size(len: usize) -> usize {
    std::mem::size_of::<Vec<usize>>() + len * std::mem::size_of::<usize>()
}

/// Times `f` with a monotonic clock, in fractional milliseconds.
pub fn measure_time<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64() * 1000.0)
}

pub fn build_metrics(
    execution_time_ms: f64,
    itemsets: &[FrequentItemset],
    rules: &[AssociationRule],
    memory: &MemoryTracker,
) -> MiningMetrics {
    MiningMetrics {
        execution_time_ms,
        rule_count: rules.len(),
        frequent_itemset_count: itemsets.len(),
        memory_usage_bytes: Some(memory.peak_usage() as u64),
    }
}

pub fn format_time(ms: f64) -> String {
    if ms < 1.0 {
        format!("{:.2}μs", ms * 1000.0)
    } else if ms < 1000.0 {
        format!("{:.2}ms", ms)
    } else {
        format!("{:.2}s", ms / 1000.0)
    }
}

pub fn format_memory(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;

    if bytes < KB {
        format!("{}B", bytes)
    } else if bytes < MB {
        format!("{:.2}KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.2}MB", bytes as f64 / MB as f64)
    }
}
