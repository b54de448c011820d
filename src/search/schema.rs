//! Search scope definition / 搜索范围定义

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::models::Field;

/// Which fields a query is matched against / 查询匹配的字段范围
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Title, author and all four structure sections / 全部字段
    #[default]
    All,
    Title,
    Author,
    Background,
    Evidence,
    Argument,
    Fact,
}

/// Scope string outside the known set / 未知的搜索范围
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search scope: {0}")]
pub struct UnknownScope(pub String);

impl Scope {
    /// Every scope in selector order / 选择器中的全部范围
    pub const ALL: [Scope; 7] = [
        Scope::All,
        Scope::Title,
        Scope::Author,
        Scope::Background,
        Scope::Evidence,
        Scope::Argument,
        Scope::Fact,
    ];

    /// Fields tested for this scope / 该范围需要检测的字段
    pub fn fields(self) -> &'static [Field] {
        match self {
            Scope::All => &Field::ALL,
            Scope::Title => &[Field::Title],
            Scope::Author => &[Field::Author],
            Scope::Background => &[Field::Background],
            Scope::Evidence => &[Field::Evidence],
            Scope::Argument => &[Field::Argument],
            Scope::Fact => &[Field::Fact],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scope::All => "all",
            Scope::Title => "title",
            Scope::Author => "author",
            Scope::Background => "background",
            Scope::Evidence => "evidence",
            Scope::Argument => "argument",
            Scope::Fact => "fact",
        }
    }

    /// Option label in the scope selector / 选择器显示文本
    pub fn label(self) -> &'static str {
        match self {
            Scope::All => "전체",
            Scope::Title => "제목",
            Scope::Author => "작성자",
            Scope::Background => "배경",
            Scope::Evidence => "근거",
            Scope::Argument => "주장",
            Scope::Fact => "사실",
        }
    }
}

impl FromStr for Scope {
    type Err = UnknownScope;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scope::ALL
            .into_iter()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| UnknownScope(s.to_string()))
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
