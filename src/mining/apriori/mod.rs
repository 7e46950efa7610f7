//! Horizontal, level-wise frequent itemset mining.

pub mod candidates;
pub mod mining;

pub use candidates::generate_candidates;
pub use mining::{apriori_algorithm, mine_apriori, mine_apriori_with};
