//! String manipulation utilities

/// English plural of `word` for `count` items
///
/// Handles the consonant + `y` ending ("dependency" -> "dependencies"),
/// every other word just gains an `s`.
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        return word.to_string();
    }

    match word.strip_suffix('y') {
        Some(stem) if !stem.ends_with(['a', 'e', 'i', 'o', 'u']) => format!("{stem}ies"),
        _ => format!("{word}s"),
    }
}

/// `count` followed by `word` in the matching number, e.g. `3 projects`
pub fn counted(word: &str, count: usize) -> String {
    format!("{count} {}", pluralize(word, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("project", 0), "projects");
        assert_eq!(pluralize("project", 1), "project");
        assert_eq!(pluralize("dependency", 2), "dependencies");
        assert_eq!(pluralize("key", 2), "keys");
    }

    #[test]
    fn test_counted() {
        assert_eq!(counted("test project", 1), "1 test project");
        assert_eq!(counted("dependency", 3), "3 dependencies");
    }
}
