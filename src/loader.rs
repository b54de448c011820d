//! Editorial loader - fetch the source document and parse editorials / 社论加载器
//!
//! - fetch: read raw content from an HTTP URL or a local file / 读取原始内容
//! - parse: build a tree of labeled nodes, then extract editorial records / 构建节点树并提取记录
//!
//! Missing fields always resolve to empty strings; only retrieval failures are errors.

use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;
use url::Url;

use crate::config::SourceConfig;
use crate::models::{Editorial, Structure};

/// Source retrieval failure / 数据源读取失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Network or IO failure, including body read errors / 网络或IO错误
    #[error("source unreachable: {detail}")]
    Unreachable { detail: String },
    /// HTTP source answered with a non-success status / 非成功状态码
    #[error("source responded with HTTP {status}")]
    HttpStatus { status: u16 },
}

impl LoadError {
    /// Stable machine-readable reason / 稳定的错误原因标识
    pub fn reason(&self) -> &'static str {
        match self {
            LoadError::Unreachable { .. } => "unreachable",
            LoadError::HttpStatus { .. } => "http-status",
        }
    }
}

/// Where the editorial document lives / 社论文档位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Http(Url),
    File(PathBuf),
}

impl Source {
    /// http/https URLs become `Http`, everything else is read from disk / 解析数据源位置
    pub fn parse(location: &str) -> Self {
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Source::Http(url),
            Ok(url) if url.scheme() == "file" => url
                .to_file_path()
                .map(Source::File)
                .unwrap_or_else(|_| Source::File(PathBuf::from(location))),
            _ => Source::File(PathBuf::from(location)),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Http(url) => write!(f, "{}", url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Build the HTTP client used for the startup fetch / 创建HTTP客户端
pub fn http_client(config: &SourceConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
}

/// Load and parse all editorials from the source / 加载并解析全部社论
pub async fn load(source: &Source, client: &reqwest::Client) -> Result<Vec<Editorial>, LoadError> {
    let content = fetch(source, client).await?;
    Ok(parse_editorials(&content))
}

/// Retrieve the raw document text / 获取原始文档文本
pub async fn fetch(source: &Source, client: &reqwest::Client) -> Result<String, LoadError> {
    match source {
        Source::Http(url) => {
            let response = client
                .get(url.clone())
                .send()
                .await
                .map_err(|e| LoadError::Unreachable { detail: e.to_string() })?;

            if !response.status().is_success() {
                return Err(LoadError::HttpStatus {
                    status: response.status().as_u16(),
                });
            }

            response
                .text()
                .await
                .map_err(|e| LoadError::Unreachable { detail: e.to_string() })
        }
        Source::File(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| LoadError::Unreachable {
                detail: format!("{}: {}", path.display(), e),
            }),
    }
}

/// Labeled element node / 元素节点
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

/// Child node: nested element or text run / 子节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

impl XmlElement {
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Concatenated text of all descendants / 所有后代文本拼接
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                XmlNode::Text(text) => out.push_str(text),
                XmlNode::Element(element) => element.push_text(out),
            }
        }
    }

    /// Descendants with the given name, in document order / 按文档顺序查找后代
    pub fn descendants_named<'a>(&'a self, name: &str) -> Vec<&'a XmlElement> {
        let mut out = Vec::new();
        self.collect_named(name, &mut out);
        out
    }

    fn collect_named<'a>(&'a self, name: &str, out: &mut Vec<&'a XmlElement>) {
        for child in &self.children {
            if let XmlNode::Element(element) = child {
                if element.name == name {
                    out.push(element);
                }
                element.collect_named(name, out);
            }
        }
    }

    /// First descendant with the given name / 第一个同名后代
    pub fn first_descendant(&self, name: &str) -> Option<&XmlElement> {
        for child in &self.children {
            if let XmlNode::Element(element) = child {
                if element.name == name {
                    return Some(element);
                }
                if let Some(found) = element.first_descendant(name) {
                    return Some(found);
                }
            }
        }
        None
    }
}

/// Parse a document into a node tree under a nameless root / 解析为节点树
///
/// Parsing stops at the first syntax error; open elements are closed in place so
/// entries read before the error survive.
pub fn parse_document(xml: &str) -> XmlElement {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<XmlElement> = vec![XmlElement::default()];

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => stack.push(element_from(e)),
            Ok(Event::Empty(ref e)) => append(&mut stack, XmlNode::Element(element_from(e))),
            Ok(Event::End(_)) => close_top(&mut stack),
            Ok(Event::Text(e)) => {
                let text = match e.unescape() {
                    Ok(text) => text.into_owned(),
                    Err(_) => String::from_utf8_lossy(&e).into_owned(),
                };
                append(&mut stack, XmlNode::Text(text));
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                append(&mut stack, XmlNode::Text(text));
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                tracing::warn!(
                    "Malformed editorial document at byte {}: {}",
                    reader.buffer_position(),
                    e
                );
                break;
            }
            _ => {}
        }
    }

    while stack.len() > 1 {
        close_top(&mut stack);
    }
    stack.pop().unwrap_or_default()
}

fn element_from(start: &BytesStart<'_>) -> XmlElement {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let attributes = start
        .attributes()
        .filter_map(Result::ok)
        .map(|attr| {
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map(Cow::into_owned)
                .unwrap_or_else(|_| String::from_utf8_lossy(&attr.value).into_owned());
            (key, value)
        })
        .collect();

    XmlElement {
        name,
        attributes,
        children: Vec::new(),
    }
}

fn append(stack: &mut [XmlElement], node: XmlNode) {
    if let Some(top) = stack.last_mut() {
        top.children.push(node);
    }
}

fn close_top(stack: &mut Vec<XmlElement>) {
    if stack.len() > 1 {
        if let Some(element) = stack.pop() {
            append(stack, XmlNode::Element(element));
        }
    }
}

/// Extract every `editorial` entry from the document / 提取全部社论条目
pub fn parse_editorials(xml: &str) -> Vec<Editorial> {
    let document = parse_document(xml);
    document
        .descendants_named("editorial")
        .into_iter()
        .map(editorial_from)
        .collect()
}

fn editorial_from(node: &XmlElement) -> Editorial {
    let structure = node.first_descendant("structure");
    Editorial {
        id: node.attribute("id").unwrap_or_default().to_string(),
        title: child_text(Some(node), "title"),
        author: child_text(Some(node), "author"),
        date: child_text(Some(node), "date"),
        structure: Structure {
            background: child_text(structure, "background"),
            evidence: child_text(structure, "evidence"),
            argument: child_text(structure, "argument"),
            fact: child_text(structure, "fact"),
        },
    }
}

fn child_text(scope: Option<&XmlElement>, tag: &str) -> String {
    scope
        .and_then(|element| element.first_descendant(tag))
        .map(XmlElement::text_content)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use std::net::SocketAddr;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<editorials>
  <editorial id="e1">
    <title>Tax Reform</title>
    <author>Kim</author>
    <date>2024-03-01</date>
    <structure>
      <background>economy grows</background>
      <evidence>GDP &amp; wages</evidence>
      <argument><![CDATA[cut <rates>]]></argument>
      <fact>fact one</fact>
    </structure>
  </editorial>
  <editorial id="e2">
    <title>Housing Policy</title>
    <author>Lee</author>
    <structure>
      <evidence>prices rose</evidence>
    </structure>
  </editorial>
</editorials>"#;

    async fn serve(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("test server");
        });
        addr
    }

    #[test]
    fn test_parse_full_entry() {
        let editorials = parse_editorials(SAMPLE);
        assert_eq!(editorials.len(), 2);

        let first = &editorials[0];
        assert_eq!(first.id, "e1");
        assert_eq!(first.title, "Tax Reform");
        assert_eq!(first.author, "Kim");
        assert_eq!(first.date, "2024-03-01");
        assert_eq!(first.structure.background, "economy grows");
        assert_eq!(first.structure.evidence, "GDP & wages");
        assert_eq!(first.structure.argument, "cut <rates>");
        assert_eq!(first.structure.fact, "fact one");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let editorials = parse_editorials(SAMPLE);
        let second = &editorials[1];
        assert_eq!(second.date, "");
        assert_eq!(second.structure.background, "");
        assert_eq!(second.structure.evidence, "prices rose");
        assert_eq!(second.structure.argument, "");
        assert_eq!(second.structure.fact, "");
    }

    #[test]
    fn test_missing_structure_and_id() {
        let editorials = parse_editorials("<root><editorial><title>Only</title></editorial></root>");
        assert_eq!(editorials.len(), 1);
        assert_eq!(editorials[0].id, "");
        assert_eq!(editorials[0].title, "Only");
        assert_eq!(editorials[0].structure, Structure::default());
    }

    #[test]
    fn test_empty_elements_and_nested_text() {
        let xml = r#"<editorial id="x"><title>Tax <b>Reform</b> now</title><author/><structure><fact/></structure></editorial>"#;
        let editorials = parse_editorials(xml);
        assert_eq!(editorials[0].title, "Tax Reform now");
        assert_eq!(editorials[0].author, "");
        assert_eq!(editorials[0].structure.fact, "");
    }

    #[test]
    fn test_structure_fields_only_read_inside_structure() {
        let xml = "<editorial><fact>outside</fact><structure><background>in</background></structure></editorial>";
        let editorials = parse_editorials(xml);
        assert_eq!(editorials[0].structure.background, "in");
        assert_eq!(editorials[0].structure.fact, "");
    }

    #[test]
    fn test_malformed_document_keeps_complete_entries() {
        let xml = "<root><editorial id=\"a\"><title>First</title></editorial><editorial id=\"b\"><title>Second</oops></editorial></root>";
        let editorials = parse_editorials(xml);
        assert_eq!(editorials[0].id, "a");
        assert_eq!(editorials[0].title, "First");
    }

    #[test]
    fn test_no_editorials() {
        assert!(parse_editorials("<root><other/></root>").is_empty());
        assert!(parse_editorials("").is_empty());
    }

    #[test]
    fn test_source_parse() {
        assert!(matches!(Source::parse("https://example.com/editor.xml"), Source::Http(_)));
        assert!(matches!(Source::parse("http://localhost:8080/editor.xml"), Source::Http(_)));
        assert_eq!(Source::parse("editor.xml"), Source::File(PathBuf::from("editor.xml")));
        assert_eq!(
            Source::parse("file:///tmp/editor.xml"),
            Source::File(PathBuf::from("/tmp/editor.xml"))
        );
    }

    #[test]
    fn test_error_reasons() {
        let unreachable = LoadError::Unreachable { detail: "refused".to_string() };
        let status = LoadError::HttpStatus { status: 404 };
        assert_eq!(unreachable.reason(), "unreachable");
        assert_eq!(status.reason(), "http-status");
        assert_eq!(status.to_string(), "source responded with HTTP 404");
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("editor.xml");
        std::fs::write(&path, SAMPLE).expect("write sample");

        let client = reqwest::Client::new();
        let editorials = load(&Source::File(path), &client).await.expect("load");
        assert_eq!(editorials.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_unreachable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let client = reqwest::Client::new();
        let err = load(&Source::File(dir.path().join("missing.xml")), &client)
            .await
            .unwrap_err();
        assert_eq!(err.reason(), "unreachable");
    }

    #[tokio::test]
    async fn test_load_over_http() {
        let addr = serve(Router::new().route("/editor.xml", get(|| async { SAMPLE }))).await;
        let source = Source::parse(&format!("http://{}/editor.xml", addr));

        let editorials = load(&source, &reqwest::Client::new()).await.expect("load");
        assert_eq!(editorials.len(), 2);
        assert_eq!(editorials[1].title, "Housing Policy");
    }

    #[tokio::test]
    async fn test_http_status_failure() {
        let addr = serve(Router::new().route(
            "/editor.xml",
            get(|| async { (StatusCode::NOT_FOUND, "missing") }),
        ))
        .await;
        let source = Source::parse(&format!("http://{}/editor.xml", addr));

        let err = load(&source, &reqwest::Client::new()).await.unwrap_err();
        assert_eq!(err, LoadError::HttpStatus { status: 404 });
        assert_eq!(err.reason(), "http-status");
    }

    #[tokio::test]
    async fn test_closed_port_is_unreachable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let source = Source::parse(&format!("http://{}/editor.xml", addr));
        let err = load(&source, &reqwest::Client::new()).await.unwrap_err();
        assert_eq!(err.reason(), "unreachable");
    }
}
