use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::loader::LoadError;
use crate::models::Editorial;

/// Load status reported to clients / 加载状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadStatus {
    Pending,
    Ready { count: usize },
    Failed { reason: String, message: String },
}

/// Write-once editorial collection / 一次写入的社论集合
///
/// Holds the outcome of the single startup load. Readers see an empty slice
/// while the load is pending or after it failed.
#[derive(Debug, Default)]
pub struct EditorialStore {
    outcome: OnceCell<Result<Vec<Editorial>, LoadError>>,
}

impl EditorialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish the load outcome; returns false if one was already published / 发布加载结果
    pub fn publish(&self, outcome: Result<Vec<Editorial>, LoadError>) -> bool {
        self.outcome.set(outcome).is_ok()
    }

    pub fn records(&self) -> &[Editorial] {
        match self.outcome.get() {
            Some(Ok(records)) => records,
            _ => &[],
        }
    }

    pub fn load_error(&self) -> Option<&LoadError> {
        match self.outcome.get() {
            Some(Err(err)) => Some(err),
            _ => None,
        }
    }

    pub fn status(&self) -> LoadStatus {
        match self.outcome.get() {
            None => LoadStatus::Pending,
            Some(Ok(records)) => LoadStatus::Ready {
                count: records.len(),
            },
            Some(Err(err)) => LoadStatus::Failed {
                reason: err.reason().to_string(),
                message: err.to_string(),
            },
        }
    }
}
