//! Search engine - case-insensitive substring filter / 搜索引擎
//!
//! No scoring, no tokenizing: a record matches when the lower-cased query is a
//! substring of one of the scoped fields. Input order is preserved.

use super::schema::Scope;
use crate::models::Editorial;

/// Trim and lower-case a raw query / 规范化查询词
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Filter records by query and scope (stable) / 按查询词和范围过滤
///
/// An empty query (after trimming) returns every record.
pub fn search<'a>(records: &'a [Editorial], query: &str, scope: Scope) -> Vec<&'a Editorial> {
    let query = normalize_query(query);
    if query.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| matches(record, &query, scope))
        .collect()
}

/// Test one record against an already normalized query / 检测单条记录
pub fn matches(record: &Editorial, normalized_query: &str, scope: Scope) -> bool {
    scope
        .fields()
        .iter()
        .any(|field| record.field(*field).to_lowercase().contains(normalized_query))
}
