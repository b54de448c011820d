//! Search module - only provides search capabilities (primitives), does not control flow / 搜索模块
//!
//! Architecture principles / 架构原则：
//! - Search module only exposes primitive operations: normalize_query, search, matches
//! - Controller owns the records and decides when to search / 记录归控制器所有
//! - Call direction: Controller → Search (unidirectional) / 调用方向
//!
//! Matching / 匹配规则：
//! - Exact case-insensitive substring containment, no tokenizing or fuzzy matching
//! - Stable filter: results keep their input order / 结果保持原有顺序

pub mod engine;
pub mod schema;

pub use engine::{matches, normalize_query, search};
pub use schema::{Scope, UnknownScope};
