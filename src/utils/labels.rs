// Reverse lookup of a key by its display label

/// Returns the key of the first entry whose label exactly equals `label`.
///
/// Entries are scanned in declaration order, so duplicate labels resolve to
/// the earliest key. An empty `label` never matches.
pub fn mapped_key<'a>(map: &'a [(&'a str, &'a str)], label: &str) -> Option<&'a str> {
    if label.is_empty() {
        return None;
    }
    map.iter()
        .find(|(_, entry_label)| *entry_label == label)
        .map(|(key, _)| *key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPANY_LABELS: &[(&str, &str)] = &[
        ("supertree", "수퍼트리"),
        ("d.dive", "디다이브"),
        ("ellen", "엘렌"),
    ];

    #[test]
    fn test_returns_key_for_matching_label() {
        assert_eq!(mapped_key(COMPANY_LABELS, "디다이브"), Some("d.dive"));
        assert_eq!(mapped_key(COMPANY_LABELS, "수퍼트리"), Some("supertree"));
        assert_eq!(mapped_key(COMPANY_LABELS, "엘렌"), Some("ellen"));
    }

    #[test]
    fn test_returns_none_when_no_label_matches() {
        assert_eq!(mapped_key(COMPANY_LABELS, "없는 값"), None);
    }

    #[test]
    fn test_returns_none_for_empty_label() {
        assert_eq!(mapped_key(COMPANY_LABELS, ""), None);
    }

    #[test]
    fn test_duplicate_labels_resolve_to_first_key() {
        let map = &[("a", "dup"), ("b", "dup")];
        assert_eq!(mapped_key(map, "dup"), Some("a"));
    }

    #[test]
    fn test_matching_is_exact() {
        // no normalization or case folding
        assert_eq!(mapped_key(&[("key", "Label")], "label"), None);
        assert_eq!(mapped_key(&[("key", "Label")], "Label "), None);
    }
}
