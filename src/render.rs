//! Result rendering / 结果渲染
//!
//! `render` turns records into a view-model; `ResultsView::to_html` writes the
//! results region. Icons are `data-lucide` placeholders materialized by the page
//! after insertion.

use crate::highlight::{highlight, Markup};
use crate::models::{Editorial, Field};

/// Empty-state message / 无结果提示
pub const EMPTY_MESSAGE: &str = "검색 결과가 없습니다.";
/// Load-error message / 加载失败提示
pub const LOAD_ERROR_MESSAGE: &str = "데이터를 불러오는 중 오류가 발생했습니다.";

/// Structure sections in card order, with their labels / 卡片段落及标题
const SECTIONS: [(Field, &str); 4] = [
    (Field::Background, "Background"),
    (Field::Evidence, "Evidence"),
    (Field::Argument, "Argument"),
    (Field::Fact, "Fact"),
];

/// One labeled structure section / 结构段落
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub field: Field,
    pub label: &'static str,
    pub text: Markup,
}

/// One result card / 结果卡片
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub title: Markup,
    pub author: Markup,
    /// Date is shown as-is, never highlighted / 日期不高亮
    pub date: Markup,
    pub sections: Vec<SectionView>,
}

impl CardView {
    pub fn build(record: &Editorial, query: &str) -> Self {
        Self {
            id: record.id.clone(),
            title: highlight(&record.title, query),
            author: highlight(&record.author, query),
            date: Markup::escape(&record.date),
            sections: SECTIONS
                .iter()
                .map(|&(field, label)| SectionView {
                    field,
                    label,
                    text: highlight(record.field(field), query),
                })
                .collect(),
        }
    }
}

/// Content of the results region / 结果区域内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    /// Nothing searched yet / 尚未搜索
    Idle,
    /// Search matched nothing / 无匹配结果
    Empty,
    /// Startup load failed / 启动加载失败
    LoadFailed { reason: String },
    Listing(Vec<CardView>),
}

/// Build the view for a result set / 构建结果视图
pub fn render(records: &[&Editorial], query: &str) -> ResultsView {
    if records.is_empty() {
        return ResultsView::Empty;
    }
    ResultsView::Listing(
        records
            .iter()
            .map(|record| CardView::build(record, query))
            .collect(),
    )
}

impl ResultsView {
    /// Write the whole results region, replacing any previous listing / 输出结果区域HTML
    pub fn to_html(&self) -> String {
        match self {
            ResultsView::Idle => String::new(),
            ResultsView::Empty => format!(
                "<div class=\"empty-state\">\n  <i data-lucide=\"search-x\"></i>\n  <p>{}</p>\n</div>\n",
                EMPTY_MESSAGE
            ),
            ResultsView::LoadFailed { reason } => format!(
                "<div class=\"empty-state\"><p>{}<br>({})</p></div>\n",
                LOAD_ERROR_MESSAGE,
                Markup::escape(reason)
            ),
            ResultsView::Listing(cards) => {
                let mut out = String::new();
                for card in cards {
                    write_card(&mut out, card);
                }
                out
            }
        }
    }
}

fn write_card(out: &mut String, card: &CardView) {
    out.push_str(&format!(
        "<article class=\"editorial-card\" data-id=\"{}\">\n",
        Markup::escape(&card.id)
    ));
    out.push_str("  <div class=\"card-header\">\n");
    out.push_str(&format!("    <h2 class=\"card-title\">{}</h2>\n", card.title));
    out.push_str("    <div class=\"card-meta\">\n");
    out.push_str(&format!(
        "      <span class=\"meta-item\"><i data-lucide=\"user\" size=\"14\"></i> {}</span>\n",
        card.author
    ));
    out.push_str(&format!(
        "      <span class=\"meta-item\"><i data-lucide=\"calendar\" size=\"14\"></i> {}</span>\n",
        card.date
    ));
    out.push_str("    </div>\n  </div>\n  <div class=\"card-content\">\n");
    for section in &card.sections {
        out.push_str(&format!(
            "    <div class=\"section-block {}\">\n      <div class=\"section-label\">{}</div>\n      <p class=\"section-text\">{}</p>\n    </div>\n",
            section.field.as_str(),
            section.label,
            section.text
        ));
    }
    out.push_str("  </div>\n</article>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Structure;

    fn record() -> Editorial {
        Editorial {
            id: "e1".to_string(),
            title: "Tax Reform".to_string(),
            author: "Kim".to_string(),
            date: "2024 <spring>".to_string(),
            structure: Structure {
                background: "economy grows".to_string(),
                evidence: "wages & prices".to_string(),
                argument: String::new(),
                fact: "tax data".to_string(),
            },
        }
    }

    #[test]
    fn test_empty_records_render_empty_state() {
        let view = render(&[], "zzz");
        assert_eq!(view, ResultsView::Empty);
        let html = view.to_html();
        assert!(html.contains("empty-state"));
        assert!(html.contains("data-lucide=\"search-x\""));
        assert!(html.contains(EMPTY_MESSAGE));
        assert!(!html.contains("editorial-card"));
    }

    #[test]
    fn test_card_fields_and_sections() {
        let record = record();
        let ResultsView::Listing(cards) = render(&[&record], "tax") else {
            panic!("expected listing");
        };
        assert_eq!(cards.len(), 1);
        let card = &cards[0];
        assert_eq!(card.title.as_str(), r#"<span class="highlight">Tax</span> Reform"#);
        assert_eq!(card.author.as_str(), "Kim");
        let labels: Vec<&str> = card.sections.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Background", "Evidence", "Argument", "Fact"]);
        assert_eq!(
            card.sections[3].text.as_str(),
            r#"<span class="highlight">tax</span> data"#
        );
    }

    #[test]
    fn test_date_is_not_highlighted() {
        let mut record = record();
        record.date = "2024-01-01".to_string();
        let view = render(&[&record], "2024");
        let html = view.to_html();
        assert!(html.contains("<i data-lucide=\"calendar\" size=\"14\"></i> 2024-01-01</span>"));
    }

    #[test]
    fn test_html_contains_icons_and_escapes_text() {
        let record = record();
        let html = render(&[&record], "").to_html();
        assert!(html.contains("data-lucide=\"user\""));
        assert!(html.contains("data-lucide=\"calendar\""));
        assert!(html.contains("2024 &lt;spring&gt;"));
        assert!(html.contains("wages &amp; prices"));
        assert!(html.contains("<div class=\"section-block argument\">"));
        assert!(!html.contains("highlight"));
    }

    #[test]
    fn test_listing_keeps_order() {
        let first = record();
        let mut second = record();
        second.id = "e2".to_string();
        let html = render(&[&first, &second], "").to_html();
        let a = html.find("data-id=\"e1\"").expect("first card");
        let b = html.find("data-id=\"e2\"").expect("second card");
        assert!(a < b);
    }

    #[test]
    fn test_load_failed_and_idle() {
        let view = ResultsView::LoadFailed {
            reason: "source responded with HTTP 404".to_string(),
        };
        let html = view.to_html();
        assert!(html.contains(LOAD_ERROR_MESSAGE));
        assert!(html.contains("(source responded with HTTP 404)"));
        assert_eq!(ResultsView::Idle.to_html(), "");
    }
}
