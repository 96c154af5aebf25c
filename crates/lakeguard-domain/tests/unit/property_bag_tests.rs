//! Unit tests for the property bag

#[cfg(test)]
mod tests {
    use lakeguard_domain::PropertyBag;

    #[test]
    fn test_get_and_contains() {
        let bag = PropertyBag::new().with("a", "1").with("empty", "");
        assert_eq!(bag.get("a"), Some("1"));
        assert_eq!(bag.get("missing"), None);
        assert!(bag.contains("empty"));
        assert!(!bag.contains("missing"));
        assert_eq!(bag.len(), 2);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let bag = PropertyBag::new().with("clusterByAuto", "true");
        assert!(bag.get("clusterbyauto").is_none());
    }

    #[test]
    fn test_has_value_ignores_case() {
        let bag = PropertyBag::new()
            .with("upper", "TRUE")
            .with("mixed", "True")
            .with("empty", "")
            .with("other", "yes");
        assert!(bag.has_value("upper", "true"));
        assert!(bag.has_value("mixed", "true"));
        assert!(!bag.has_value("empty", ""));
        assert!(!bag.has_value("other", "true"));
        assert!(!bag.has_value("missing", "true"));
    }

    #[test]
    fn test_from_iterator_and_serde() {
        let bag: PropertyBag = [("b", "2"), ("a", "1")].into_iter().collect();
        let keys: Vec<&str> = bag.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);

        let json = serde_json::to_value(&bag).expect("Serializing a bag should succeed");
        assert_eq!(json, serde_json::json!({ "a": "1", "b": "2" }));
    }
}
