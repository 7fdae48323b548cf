//! Source citations attached to a rendered document.
//!
//! Citations arrive from the generation pipeline's grounding metadata,
//! often repeated across stream chunks. They are deduplicated by URL
//! (first occurrence wins) and rendered as a reference list after the
//! document body.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Options;
use crate::render::HtmlWriter;

/// Errors from reading citation data.
#[derive(Debug, Error)]
pub enum SourcesError {
    #[error("invalid citation list: {0}")]
    Sources(#[source] serde_json::Error),

    #[error("invalid grounding metadata: {0}")]
    Grounding(#[source] serde_json::Error),
}

/// A source reference: display title and target URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub url: String,
}

impl Citation {
    /// A citation without a title.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            title: None,
            url: url.into(),
        }
    }

    /// A citation with a display title.
    pub fn with_title(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            url: url.into(),
        }
    }

    /// Text shown for the link: the title, or the URL when the title is
    /// missing or empty.
    pub fn display_text(&self) -> &str {
        self.title
            .as_deref()
            .filter(|title| !title.is_empty())
            .unwrap_or(&self.url)
    }
}

/// Deduplicate citations by URL, keeping the first occurrence of each
/// and the original order. Citations with an empty URL are dropped.
pub fn dedup_citations(sources: &[Citation]) -> Vec<&Citation> {
    let mut seen = FxHashSet::default();
    sources
        .iter()
        .filter(|citation| !citation.url.is_empty())
        .filter(|citation| seen.insert(citation.url.as_str()))
        .collect()
}

/// Parse a JSON array of `{"title"?, "url"}` records.
pub fn parse_sources(json: &str) -> Result<Vec<Citation>, SourcesError> {
    serde_json::from_str(json).map_err(SourcesError::Sources)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GroundingDocument {
    Chunks(Vec<GroundingChunk>),
    Metadata {
        #[serde(rename = "groundingChunks", default)]
        grounding_chunks: Vec<GroundingChunk>,
    },
}

#[derive(Deserialize)]
struct GroundingChunk {
    #[serde(default)]
    web: Option<WebSource>,
}

#[derive(Deserialize)]
struct WebSource {
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

/// Extract citations from grounding metadata.
///
/// Accepts either the bare chunk array (`[{"web": {"uri", "title"}}]`)
/// or an object carrying it under `groundingChunks`. Chunks without a
/// web URI are skipped. Duplicates are kept; rendering deduplicates.
pub fn parse_grounding_chunks(json: &str) -> Result<Vec<Citation>, SourcesError> {
    let chunks = match serde_json::from_str(json).map_err(SourcesError::Grounding)? {
        GroundingDocument::Chunks(chunks) => chunks,
        GroundingDocument::Metadata { grounding_chunks } => grounding_chunks,
    };

    Ok(chunks
        .into_iter()
        .filter_map(|chunk| chunk.web)
        .filter_map(|web| {
            let url = web.uri.filter(|uri| !uri.is_empty())?;
            Some(Citation {
                title: web.title,
                url,
            })
        })
        .collect())
}

/// Write the reference section. Writes nothing for an empty list.
pub(crate) fn write_references(
    writer: &mut HtmlWriter,
    citations: &[&Citation],
    options: &Options,
) {
    if citations.is_empty() {
        return;
    }
    let theme = &options.theme;

    writer.open_tag("div", theme.references);
    writer.open_tag("h3", theme.references_heading);
    writer.write_external_text(options.references_title);
    writer.close_tag("h3");
    writer.newline();

    writer.open_tag("ul", theme.references_list);
    writer.newline();
    for citation in citations {
        writer.write_str("  ");
        writer.open_tag("li", theme.list_item);
        writer.write_str("<a href=\"");
        writer.write_escaped_attr(&citation.url);
        writer.write_str("\" target=\"_blank\" rel=\"noopener noreferrer\"");
        writer.write_class(theme.reference_link);
        writer.write_str(">");
        writer.write_external_text(citation.display_text());
        writer.write_str("</a>");
        writer.close_tag("li");
        writer.newline();
    }
    writer.close_tag("ul");
    writer.newline();
    writer.close_tag("div");
    writer.newline();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text_fallback() {
        assert_eq!(Citation::new("https://a.dev").display_text(), "https://a.dev");
        assert_eq!(
            Citation::with_title("", "https://a.dev").display_text(),
            "https://a.dev"
        );
        assert_eq!(Citation::with_title("A", "https://a.dev").display_text(), "A");
    }

    #[test]
    fn test_dedup_first_wins() {
        let sources = vec![
            Citation::new("a"),
            Citation::with_title("A2", "a"),
            Citation::new("b"),
        ];
        let deduped = dedup_citations(&sources);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].title, None);
        assert_eq!(deduped[0].display_text(), "a");
        assert_eq!(deduped[1].url, "b");
    }

    #[test]
    fn test_dedup_drops_empty_url() {
        let sources = vec![Citation::with_title("nothing", ""), Citation::new("x")];
        let deduped = dedup_citations(&sources);
        assert_eq!(deduped, vec![&sources[1]]);
    }

    #[test]
    fn test_parse_sources() {
        let sources =
            parse_sources(r#"[{"url":"https://a.dev"},{"title":"B","url":"https://b.dev"}]"#)
                .unwrap();
        assert_eq!(
            sources,
            vec![
                Citation::new("https://a.dev"),
                Citation::with_title("B", "https://b.dev")
            ]
        );
    }

    #[test]
    fn test_parse_sources_invalid() {
        let err = parse_sources(r#"[{"title":"no url"}]"#).unwrap_err();
        assert!(matches!(err, SourcesError::Sources(_)));
        assert!(err.to_string().starts_with("invalid citation list"));
    }

    #[test]
    fn test_parse_grounding_chunks() {
        let json = r#"[
            {"web": {"uri": "https://a.dev", "title": "A"}},
            {"retrievedContext": {}},
            {"web": {"title": "no uri"}},
            {"web": {"uri": "https://b.dev"}}
        ]"#;
        let sources = parse_grounding_chunks(json).unwrap();
        assert_eq!(
            sources,
            vec![
                Citation::with_title("A", "https://a.dev"),
                Citation::new("https://b.dev")
            ]
        );
    }

    #[test]
    fn test_parse_grounding_metadata_object() {
        let json = r#"{"groundingChunks": [{"web": {"uri": "https://a.dev"}}]}"#;
        let sources = parse_grounding_chunks(json).unwrap();
        assert_eq!(sources, vec![Citation::new("https://a.dev")]);
    }

    #[test]
    fn test_parse_grounding_invalid() {
        let err = parse_grounding_chunks("not json").unwrap_err();
        assert!(matches!(err, SourcesError::Grounding(_)));
    }

    #[test]
    fn test_write_references_empty() {
        let mut writer = HtmlWriter::new();
        write_references(&mut writer, &[], &Options::default());
        assert!(writer.is_empty());
    }

    #[test]
    fn test_write_references_plain() {
        let options = Options {
            theme: crate::Theme::plain(),
            ..Options::default()
        };
        let a = Citation::with_title("A <1>", "https://a.dev/?x=1&y=2");
        let mut writer = HtmlWriter::new();
        write_references(&mut writer, &[&a], &options);
        assert_eq!(
            writer.as_str(),
            "<div><h3>Sources &amp; References</h3>\n<ul>\n  \
             <li><a href=\"https://a.dev/?x=1&amp;y=2\" target=\"_blank\" \
             rel=\"noopener noreferrer\">A &lt;1&gt;</a></li>\n</ul>\n</div>\n"
        );
    }
}
