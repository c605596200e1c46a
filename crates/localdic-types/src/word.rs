use serde::Serialize;

/// An ordered list of dictionary words, in file order.
///
/// Loading never deduplicates: words that appear twice in the backing file
/// appear twice here. Only `add` in the core crate guarantees uniqueness of
/// the words it appends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordList(Vec<String>);

impl WordList {
    /// Line separator of the backing file.
    pub const SEPARATOR: char = '\n';

    /// Create an empty word list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse the backing file content: one word per line, empty lines skipped.
    pub fn parse(content: &str) -> Self {
        content
            .split(Self::SEPARATOR)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Render the list as backing file content (no trailing newline).
    pub fn to_content(&self) -> String {
        self.0.join("\n")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.0.iter().any(|w| w == word)
    }

    /// Word at a zero-based index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Append a word at the end, without any uniqueness check.
    pub fn push(&mut self, word: impl Into<String>) {
        self.0.push(word.into());
    }

    /// Keep only the words for which `keep` returns true, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.0.retain(|w| keep(w.as_str()));
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for WordList {
    fn from(words: Vec<String>) -> Self {
        Self(words)
    }
}

impl FromIterator<String> for WordList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> WordList {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_splits_on_newline_in_file_order() {
        let list = WordList::parse("llvm\nffmpeg\nrustc");
        assert_eq!(list, words(&["llvm", "ffmpeg", "rustc"]));
    }

    #[test]
    fn test_parse_skips_empty_lines_and_trailing_newline() {
        let list = WordList::parse("llvm\n\nffmpeg\n");
        assert_eq!(list, words(&["llvm", "ffmpeg"]));
    }

    #[test]
    fn test_parse_empty_content_is_empty_list() {
        assert!(WordList::parse("").is_empty());
        assert!(WordList::parse("\n\n").is_empty());
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let list = WordList::parse("llvm\nllvm");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_to_content_has_no_trailing_separator() {
        assert_eq!(words(&["a", "b"]).to_content(), "a\nb");
        assert_eq!(WordList::new().to_content(), "");
    }

    #[test]
    fn test_content_roundtrip_is_stable() {
        let content = "Tauri\nffmpeg\nllvm";
        assert_eq!(WordList::parse(content).to_content(), content);
    }

    #[test]
    fn test_contains_is_case_sensitive() {
        let list = words(&["LLVM"]);
        assert!(list.contains("LLVM"));
        assert!(!list.contains("llvm"));
    }

    #[test]
    fn test_get_out_of_range() {
        let list = words(&["a"]);
        assert_eq!(list.get(0), Some("a"));
        assert_eq!(list.get(1), None);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let json = serde_json::to_string(&words(&["a", "b"])).unwrap();
        assert_eq!(json, r#"["a","b"]"#);
    }
}
