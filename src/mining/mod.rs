pub mod apriori;
pub mod combinations;
pub mod config;
pub mod control;
pub mod eclat;
pub mod error;
pub mod metrics;
pub mod orchestrator;
pub mod preprocess;
pub mod recommend;
pub mod rules;
pub mod types;
pub mod utils;

pub use apriori::{mine_apriori, mine_apriori_with};
pub use config::MiningConfig;
pub use control::{CancelToken, Checkpoint, MiningContext, MiningObserver};
pub use eclat::{mine_eclat, mine_eclat_with};
pub use error::{MiningError, Result};
pub use orchestrator::{mine, mine_with, run, run_with, MiningOutcome};
pub use preprocess::{preprocess, PreprocessReport, RemovedCounts, TransactionStats};
pub use recommend::{compare, recommend, Comparison, Recommendation};
pub use rules::generate_rules;
pub use types::{
    Algorithm, AssociationRule, FrequentItemset, Item, MiningMetrics, MiningResult, Transaction,
};
pub use utils::{FrequentLevel, ItemsetStorage, SupportIndex};
