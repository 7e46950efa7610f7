//! Market-basket analysis: frequent itemsets mined by two independent
//! strategies (level-wise Apriori, depth-first Eclat) and association rules
//! scored by support, confidence and lift.
//!
//! ```
//! use basket::mining::{mine_apriori, mine_eclat, preprocess, Transaction};
//!
//! let raw = vec![
//!     Transaction::new("1", ["Milk", "Bread"]),
//!     Transaction::new("2", ["milk", "bread", "eggs"]),
//!     Transaction::new("3", ["bread", "eggs"]),
//!     Transaction::new("4", ["milk"]),
//! ];
//! let (cleaned, _report) = preprocess(&raw, false);
//!
//! let apriori = mine_apriori(&cleaned, 0.5).unwrap();
//! let eclat = mine_eclat(&cleaned, 0.5).unwrap();
//! assert_eq!(apriori.metrics.frequent_itemset_count, 5);
//! assert_eq!(eclat.metrics.frequent_itemset_count, 5);
//! ```

pub mod mining;

pub use mining::{
    mine_apriori, mine_eclat, preprocess, AssociationRule, FrequentItemset, MiningError,
    MiningResult, Transaction,
};

#[cfg(feature = "python")]
mod python {
    use crate::mining::{self, MiningConfig, MiningError, Transaction};
    use pyo3::exceptions::{PyRuntimeError, PyValueError};
    use pyo3::prelude::*;

    type RawTransaction = (String, Vec<String>);

    fn to_transactions(raw: Vec<RawTransaction>) -> Vec<Transaction> {
        raw.into_iter()
            .map(|(id, items)| Transaction { id, items })
            .collect()
    }

    fn to_py_err(err: MiningError) -> PyErr {
        match err {
            MiningError::Cancelled { .. } => PyRuntimeError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }

    fn to_json<T: serde::Serialize>(value: &T) -> PyResult<String> {
        serde_json::to_string(value).map_err(|e| PyRuntimeError::new_err(e.to_string()))
    }

    #[pyfunction]
    #[pyo3(name = "preprocess", signature = (transactions, remove_singletons = false))]
    fn preprocess_py(
        py: Python<'_>,
        transactions: Vec<RawTransaction>,
        remove_singletons: bool,
    ) -> PyResult<String> {
        let transactions = to_transactions(transactions);
        let (cleaned, report) =
            py.allow_threads(|| mining::preprocess(&transactions, remove_singletons));
        to_json(&serde_json::json!({ "cleaned": cleaned, "report": report }))
    }

    #[pyfunction]
    #[pyo3(name = "mine_apriori")]
    fn mine_apriori_py(
        py: Python<'_>,
        transactions: Vec<RawTransaction>,
        min_support: f64,
    ) -> PyResult<String> {
        let transactions = to_transactions(transactions);
        let result = py
            .allow_threads(|| mining::mine_apriori(&transactions, min_support))
            .map_err(to_py_err)?;
        to_json(&result)
    }

    #[pyfunction]
    #[pyo3(name = "mine_eclat")]
    fn mine_eclat_py(
        py: Python<'_>,
        transactions: Vec<RawTransaction>,
        min_support: f64,
    ) -> PyResult<String> {
        let transactions = to_transactions(transactions);
        let result = py
            .allow_threads(|| mining::mine_eclat(&transactions, min_support))
            .map_err(to_py_err)?;
        to_json(&result)
    }

    /// `config_json` uses the camelCase keys of `MiningConfig`; omitted keys
    /// take their defaults.
    #[pyfunction]
    #[pyo3(name = "run", signature = (transactions, config_json = None))]
    fn run_py(
        py: Python<'_>,
        transactions: Vec<RawTransaction>,
        config_json: Option<String>,
    ) -> PyResult<String> {
        let config = match config_json {
            Some(json) => MiningConfig::from_json(&json).map_err(to_py_err)?,
            None => MiningConfig::default(),
        };
        let transactions = to_transactions(transactions);
        let outcome = py
            .allow_threads(|| mining::run(&transactions, &config))
            .map_err(to_py_err)?;
        to_json(&outcome)
    }

    #[pymodule]
    fn basket(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(preprocess_py, m)?)?;
        m.add_function(wrap_pyfunction!(mine_apriori_py, m)?)?;
        m.add_function(wrap_pyfunction!(mine_eclat_py, m)?)?;
        m.add_function(wrap_pyfunction!(run_py, m)?)?;
        Ok(())
    }
}
