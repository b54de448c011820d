//! Query highlighting / 查询词高亮
//!
//! Matches are found on the raw text, then every piece (matched or not) is
//! HTML-escaped before it is written out. Output is `Markup`, never a bare `String`.

use std::fmt;

use quick_xml::escape::escape;

/// Opening tag of the highlight marker / 高亮标记开始
pub const HIGHLIGHT_OPEN: &str = r#"<span class="highlight">"#;
/// Closing tag of the highlight marker / 高亮标记结束
pub const HIGHLIGHT_CLOSE: &str = "</span>";

/// Trusted HTML fragment / 可信HTML片段
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Escape plain text into markup / 转义纯文本
    pub fn escape(text: &str) -> Self {
        Markup(escape(text).into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wrap every case-insensitive occurrence of `query` in `text` / 高亮所有匹配
///
/// Case folding is `str::to_lowercase`, the same folding the search filter
/// uses, so a record that matched always shows its match. The query is
/// matched literally. An empty query yields the escaped text with no markers.
pub fn highlight(text: &str, query: &str) -> Markup {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return Markup::escape(text);
    }

    // Lowercased text plus (lowered offset, original offset) at every char boundary
    let mut lowered = String::with_capacity(text.len());
    let mut bounds: Vec<(usize, usize)> = Vec::with_capacity(text.len() + 1);
    for (offset, ch) in text.char_indices() {
        bounds.push((lowered.len(), offset));
        lowered.extend(ch.to_lowercase());
    }
    bounds.push((lowered.len(), text.len()));

    let original_at = |lowered_offset: usize| {
        bounds
            .binary_search_by_key(&lowered_offset, |&(at, _)| at)
            .ok()
            .map(|i| bounds[i].1)
    };

    let mut out = String::with_capacity(text.len() + 32);
    let mut last = 0;
    let mut from = 0;
    while let Some(pos) = lowered[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        match (original_at(start), original_at(end)) {
            (Some(match_start), Some(match_end)) => {
                out.push_str(&escape(&text[last..match_start]));
                out.push_str(HIGHLIGHT_OPEN);
                out.push_str(&escape(&text[match_start..match_end]));
                out.push_str(HIGHLIGHT_CLOSE);
                last = match_end;
                from = end;
            }
            // Match cuts through the expansion of a single source char
            _ => {
                from = start + lowered[start..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    out.push_str(&escape(&text[last..]));

    Markup(out)
}
