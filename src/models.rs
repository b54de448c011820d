use serde::{Deserialize, Serialize};

/// One parsed editorial / 一篇社论
///
/// Every field is always present; absent source values become empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Editorial {
    /// Identifier taken from the source `id` attribute / 来源 id 属性
    pub id: String,
    pub title: String,
    pub author: String,
    /// Free-form display date, never parsed / 展示用日期，不做解析
    pub date: String,
    pub structure: Structure,
}

/// Four-part rhetorical structure / 四段式结构
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    pub background: String,
    pub evidence: String,
    pub argument: String,
    pub fact: String,
}

/// Searchable text fields of an editorial / 可搜索字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Author,
    Background,
    Evidence,
    Argument,
    Fact,
}

impl Field {
    /// All searchable fields in display order / 全部可搜索字段
    pub const ALL: [Field; 6] = [
        Field::Title,
        Field::Author,
        Field::Background,
        Field::Evidence,
        Field::Argument,
        Field::Fact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Background => "background",
            Field::Evidence => "evidence",
            Field::Argument => "argument",
            Field::Fact => "fact",
        }
    }
}

impl Editorial {
    /// Borrow the text of a searchable field / 获取字段文本
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::Background => &self.structure.background,
            Field::Evidence => &self.structure.evidence,
            Field::Argument => &self.structure.argument,
            Field::Fact => &self.structure.fact,
        }
    }
}
