//! Server-rendered search page / 搜索页面
//!
//! The form submits `q` and `scope` back to `/`; both the button and Enter in
//! the query field trigger it. A request without `q` shows the initial view.

use axum::{
    extract::{Query, State},
    response::Html,
};

use crate::controller::Controller;
use crate::highlight::Markup;
use crate::render::ResultsView;
use crate::search::Scope;
use super::search::SearchParams;

/// GET / - 搜索页面
pub async fn index(
    State(controller): State<Controller>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let view = match params.q.as_deref() {
        Some(raw_query) => controller.perform_search(raw_query, &params.scope),
        None => controller.initial_view(),
    };
    Html(render_page(
        params.q.as_deref().unwrap_or_default(),
        &params.scope,
        &view,
    ))
}

/// Full page shell around the results region / 页面外壳
pub fn render_page(query: &str, scope: &str, view: &ResultsView) -> String {
    let mut options = String::new();
    for option in Scope::ALL {
        let selected = if option.as_str() == scope { " selected" } else { "" };
        options.push_str(&format!(
            "        <option value=\"{}\"{}>{}</option>\n",
            option.as_str(),
            selected,
            option.label()
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>사설 구조 검색</title>
  <link rel="stylesheet" href="/style.css">
  <script src="https://unpkg.com/lucide@latest"></script>
</head>
<body>
  <main class="container">
    <header class="search-header">
      <h1>사설 구조 검색</h1>
      <form class="search-box" method="get" action="/">
        <select id="searchField" name="scope">
{options}        </select>
        <input id="searchInput" type="text" name="q" value="{query}" placeholder="검색어를 입력하세요" autofocus>
        <button id="searchBtn" type="submit"><i data-lucide="search"></i> 검색</button>
      </form>
    </header>
    <section id="resultsArea" class="results">
{results}    </section>
  </main>
  <script>lucide.createIcons();</script>
</body>
</html>
"#,
        options = options,
        query = Markup::escape(query),
        results = view.to_html(),
    )
}
