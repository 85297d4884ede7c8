//! Book table-of-contents document and its flattening into panel entries.

use super::models::{Entry, TargetIndex};
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookToc {
    pub meta: BookMeta,
    #[serde(default)]
    pub front_matter: Vec<TocNode>,
    #[serde(default)]
    pub sections: Vec<TocSection>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookMeta {
    pub book_title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Part,
    Epilogue,
    Postscriptum,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TocSection {
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub id: String,
    #[serde(default)]
    pub label: String,
    pub title: String,
    #[serde(default)]
    pub items: Vec<TocNode>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Poem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub page: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TocNode {
    Chapter {
        id: String,
        #[serde(default)]
        label: String,
        title: String,
        #[serde(default)]
        items: Vec<TocNode>,
    },
    Poem(Poem),
    Marker {
        id: String,
        title: String,
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        items: Vec<Poem>,
    },
    Block {
        id: String,
        title: String,
    },
    Subsection {
        id: String,
        title: String,
    },
    Interlude {
        id: String,
        title: String,
        #[serde(default)]
        items: Vec<Poem>,
    },
}

impl BookToc {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.meta.book_title
    }

    /// Poems in reading order: front matter first, then sections.
    #[must_use]
    pub fn poems(&self) -> Vec<&Poem> {
        let mut out = Vec::new();
        for node in &self.front_matter {
            collect_poems(node, &mut out);
        }
        for section in &self.sections {
            for node in &section.items {
                collect_poems(node, &mut out);
            }
        }
        out
    }

    /// One entry per distinct poem id, numbered in reading order.
    #[must_use]
    pub fn flatten(&self) -> Vec<Entry> {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for poem in self.poems() {
            if !seen.insert(poem.id.as_str()) {
                tracing::warn!(id = %poem.id, "duplicate poem id in table of contents, keeping first");
                continue;
            }
            let ordinal = entries.len();
            let mut entry = Entry::new(&poem.id, &poem.title, ordinal as TargetIndex)
                .with_sequence_number(u32::try_from(ordinal + 1).unwrap_or(u32::MAX));
            if let Ok(page) = u32::try_from(poem.page) {
                if page > 0 {
                    entry = entry.with_display_number(page);
                }
            }
            entries.push(entry);
        }

        entries
    }
}

fn collect_poems<'a>(node: &'a TocNode, out: &mut Vec<&'a Poem>) {
    match node {
        TocNode::Poem(poem) => out.push(poem),
        TocNode::Chapter { items, .. } => {
            for child in items {
                collect_poems(child, out);
            }
        }
        TocNode::Marker { items, .. } | TocNode::Interlude { items, .. } => out.extend(items),
        TocNode::Block { .. } | TocNode::Subsection { .. } => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "meta": { "bookTitle": "Night Letters" },
        "frontMatter": [
            { "type": "marker", "id": "dedication", "title": "Dedication",
              "items": [ { "type": "poem", "id": "to-mother", "title": "To Mother", "page": 5 } ] }
        ],
        "sections": [
            { "type": "part", "id": "part-1", "label": "Part I", "title": "Roads",
              "items": [
                { "type": "chapter", "id": "ch-1", "label": "Chapter 1", "title": "Winter",
                  "items": [
                    { "type": "subsection", "id": "sub-1", "title": "Entry" },
                    { "type": "poem", "id": "winter-road", "title": "Winter Road", "page": 9 },
                    { "type": "poem", "id": "snow", "title": "Snow", "page": 0 }
                  ] },
                { "type": "interlude", "id": "int-1", "title": "Interlude",
                  "items": [ { "type": "poem", "id": "pause", "title": "Pause", "page": 14 } ] },
                { "type": "block", "id": "blk", "title": "Block" }
              ] },
            { "type": "epilogue", "id": "epi", "title": "Epilogue",
              "items": [ { "type": "poem", "id": "snow", "title": "Snow Again", "page": 20 } ] }
        ]
    }"#;

    #[test]
    fn test_parse_and_flatten() {
        let toc: BookToc = serde_json::from_str(DOC).unwrap();
        assert_eq!(toc.title(), "Night Letters");
        assert_eq!(toc.sections[1].kind, SectionKind::Epilogue);

        let entries = toc.flatten();
        let ids: Vec<_> = entries.iter().map(|e| e.id.0.as_str()).collect();
        assert_eq!(ids, vec!["to-mother", "winter-road", "snow", "pause"]);

        assert_eq!(entries[1].target_index, 1);
        assert_eq!(entries[1].sequence_number, Some(2));
        assert_eq!(entries[1].display_number, Some(9));
        // page 0 means "no page"
        assert_eq!(entries[2].display_number, None);
        assert_eq!(entries[3].target_index, 3);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let toc: BookToc = serde_json::from_str(DOC).unwrap();
        let entries = toc.flatten();
        let snow = entries.iter().find(|e| e.id.0 == "snow").unwrap();
        assert_eq!(snow.title, "Snow");
    }

    #[test]
    fn test_minimal_document() {
        let toc: BookToc = serde_json::from_str(r#"{ "meta": { "bookTitle": "Empty" } }"#).unwrap();
        assert!(toc.flatten().is_empty());
    }

    #[test]
    fn test_unknown_node_type_is_rejected() {
        let res = serde_json::from_str::<BookToc>(
            r#"{ "meta": { "bookTitle": "X" }, "frontMatter": [ { "type": "footnote", "id": "f" } ] }"#,
        );
        assert!(res.is_err());
    }
}
