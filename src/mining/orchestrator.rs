use super::apriori::mine_apriori_with;
use super::config::MiningConfig;
use super::control::MiningContext;
use super::eclat::mine_eclat_with;
use super::error::Result;
use super::preprocess::{preprocess, PreprocessReport};
use super::types::{Algorithm, MiningResult, Transaction};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiningOutcome {
    pub report: PreprocessReport,
    pub apriori: MiningResult,
    pub eclat: MiningResult,
}

pub fn mine(
    algorithm: Algorithm,
    transactions: &[Transaction],
    min_support: f64,
) -> Result<MiningResult> {
    mine_with(algorithm, transactions, min_support, &MiningContext::default())
}

pub fn mine_with(
    algorithm: Algorithm,
    transactions: &[Transaction],
    min_support: f64,
    ctx: &MiningContext<'_>,
) -> Result<MiningResult> {
    match algorithm {
        Algorithm::Apriori => mine_apriori_with(transactions, min_support, ctx),
        Algorithm::Eclat => mine_eclat_with(transactions, min_support, ctx),
    }
}

/// Preprocess, then mine the cleaned transactions with both engines at once.
pub fn run(transactions: &[Transaction], config: &MiningConfig) -> Result<MiningOutcome> {
    run_with(transactions, config, &MiningContext::default())
}

pub fn run_with(
    transactions: &[Transaction],
    config: &MiningConfig,
    ctx: &MiningContext<'_>,
) -> Result<MiningOutcome> {
    config.validate()?;

    let (cleaned, report) = preprocess(transactions, config.remove_singletons);
    let cleaned = cleaned.as_slice();

    let (apriori, eclat) = rayon::join(
        || mine_apriori_with(cleaned, config.min_support, ctx),
        || mine_eclat_with(cleaned, config.min_support, ctx),
    );

    Ok(MiningOutcome {
        report,
        apriori: apriori?,
        eclat: eclat?,
    })
}
