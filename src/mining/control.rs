//! Cooperative cancellation and progress checkpoints for long mining runs.
//!
//! Neither has any effect on what a completed run returns.

use super::error::{MiningError, Result};
use super::types::Algorithm;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkpoint {
    /// Apriori finished counting one level.
    Level { itemset_size: usize, frequent: usize },
    /// Eclat finished the subtree rooted at the `index`-th frequent item.
    Branch { index: usize, of: usize },
}

pub trait MiningObserver: Sync {
    fn checkpoint(&self, algorithm: Algorithm, checkpoint: Checkpoint);
}

#[derive(Default, Clone, Copy)]
pub struct MiningContext<'a> {
    pub cancel: Option<&'a CancelToken>,
    pub observer: Option<&'a dyn MiningObserver>,
}

impl<'a> MiningContext<'a> {
    pub fn with_cancel(mut self, token: &'a CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn with_observer(mut self, observer: &'a dyn MiningObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    pub(crate) fn check(&self, algorithm: Algorithm) -> Result<()> {
        match self.cancel {
            Some(token) if token.is_cancelled() => {
                log::warn!("{algorithm} mining cancelled");
                Err(MiningError::Cancelled { algorithm })
            }
            _ => Ok(()),
        }
    }

    pub(crate) fn notify(&self, algorithm: Algorithm, checkpoint: Checkpoint) {
        if let Some(observer) = self.observer {
            observer.checkpoint(algorithm, checkpoint);
        }
    }
}
