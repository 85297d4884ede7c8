#[must_use]
pub fn get_suggestions(msg: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("cannot read") {
        suggestions.push("Check the path passed to tocview and its permissions".to_string());
    }

    if msg_lower.contains("invalid table of contents") {
        suggestions.push(
            "Every node needs a \"type\": part, chapter, poem, marker, block, subsection or interlude"
                .to_string(),
        );
        if msg_lower.contains("missing field") {
            suggestions.push("Poems need an \"id\" and a \"title\"".to_string());
        }
    }

    if msg_lower.contains("has no poems") {
        suggestions.push("Add at least one poem node under frontMatter or sections".to_string());
    }

    if msg_lower.contains("favorites") {
        suggestions.push("Favorites are stored in ~/.config/tocview/favorites.toml".to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions() {
        let s = get_suggestions("cannot read /x.json: No such file or directory");
        assert!(s.contains(&"Check the path passed to tocview and its permissions".to_string()));

        let s = get_suggestions("invalid table of contents in toc.json: missing field `title`");
        assert_eq!(s.len(), 2);

        let s = get_suggestions("table of contents in toc.json has no poems");
        assert!(s[0].starts_with("Add at least one poem"));

        assert!(get_suggestions("something else").is_empty());
    }
}
