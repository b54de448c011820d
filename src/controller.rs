//! Controller - startup load and user-triggered search / 控制器
//!
//! Owns the editorial store. The engine and renderer only ever receive borrowed
//! views of its records for the duration of one call.

use std::sync::Arc;

use crate::loader::{self, Source};
use crate::models::Editorial;
use crate::render::{render, ResultsView};
use crate::search::{self, normalize_query, Scope};
use crate::state::{EditorialStore, LoadStatus};

/// Result of one search trigger / 一次搜索的结果
#[derive(Debug)]
pub struct SearchOutcome<'a> {
    /// Normalized query used for matching and highlighting / 规范化查询词
    pub query: String,
    /// `None` when the scope string was not recognized / 未识别的范围
    pub scope: Option<Scope>,
    pub records: Vec<&'a Editorial>,
}

#[derive(Debug, Clone, Default)]
pub struct Controller {
    store: Arc<EditorialStore>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &EditorialStore {
        &self.store
    }

    pub fn status(&self) -> LoadStatus {
        self.store.status()
    }

    /// Run the loader once and publish its outcome / 加载并发布结果
    pub async fn startup(&self, source: &Source, client: &reqwest::Client) {
        let outcome = loader::load(source, client).await;
        match &outcome {
            Ok(records) => tracing::info!("Editorials loaded from {}: {} items", source, records.len()),
            Err(e) => tracing::error!("Failed to load editorials from {}: {}", source, e),
        }
        if !self.store.publish(outcome) {
            tracing::warn!("Editorial collection already published, ignoring second load");
        }
    }

    /// Fire-and-forget startup load / 后台启动加载
    pub fn spawn_startup(&self, source: Source, client: reqwest::Client) -> tokio::task::JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move { controller.startup(&source, &client).await })
    }

    /// View shown before any search / 初始视图
    pub fn initial_view(&self) -> ResultsView {
        match self.store.load_error() {
            Some(err) => ResultsView::LoadFailed {
                reason: err.to_string(),
            },
            None => ResultsView::Idle,
        }
    }

    /// Filter the store by raw query and scope strings / 按原始输入过滤
    ///
    /// An empty query lists every record whatever the scope; otherwise an
    /// unrecognized scope matches nothing.
    pub fn search_records(&self, raw_query: &str, raw_scope: &str) -> SearchOutcome<'_> {
        let query = normalize_query(raw_query);
        let scope = raw_scope.parse::<Scope>().ok();

        let records = if query.is_empty() {
            self.store.records().iter().collect()
        } else {
            match scope {
                Some(scope) => search::search(self.store.records(), &query, scope),
                None => {
                    tracing::debug!("Unknown search scope {:?}, returning no matches", raw_scope);
                    Vec::new()
                }
            }
        };
        tracing::debug!(
            "Search query={:?} scope={} matched {} of {}",
            query,
            raw_scope,
            records.len(),
            self.store.records().len()
        );

        SearchOutcome {
            query,
            scope,
            records,
        }
    }

    /// Search and build the results view / 搜索并渲染
    pub fn perform_search(&self, raw_query: &str, raw_scope: &str) -> ResultsView {
        let outcome = self.search_records(raw_query, raw_scope);
        render(&outcome.records, &outcome.query)
    }
}
