//! Vertical, depth-first frequent itemset mining over TID-sets.

pub mod mining;
pub mod tidset;

pub use mining::{eclat_algorithm, mine_eclat, mine_eclat_with};
pub use tidset::{intersect, TidSet, VerticalIndex};
