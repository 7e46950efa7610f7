pub mod catalog;
pub mod storage;
pub mod support;

pub use catalog::{ItemCatalog, ItemId};
pub use storage::{add_pattern_to_result, levels_to_itemsets, FrequentLevel, ItemsetStorage};
pub use support::{is_sorted_subset, min_support_count, SupportIndex};
