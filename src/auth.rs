use std::collections::HashSet;

/// Static credential set for the pro endpoint.
///
/// Exact-match membership only; issuance and rotation live elsewhere, so
/// swapping in a real validator later only touches this type.
#[derive(Debug, Clone)]
pub struct ApiKeySet {
    keys: HashSet<String>,
}

impl ApiKeySet {
    pub fn new(keys: impl IntoIterator<Item = String>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Check a credential taken from the `X-API-Key` header.
    pub fn validate(&self, key: Option<&str>) -> bool {
        match key {
            Some(k) => self.keys.contains(k),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_set() -> ApiKeySet {
        ApiKeySet::new(["DEMO-KEY-123".to_string()])
    }

    #[test]
    fn valid_key_passes() {
        assert!(demo_set().validate(Some("DEMO-KEY-123")));
    }

    #[test]
    fn missing_key_fails() {
        assert!(!demo_set().validate(None));
    }

    #[test]
    fn unknown_key_fails() {
        assert!(!demo_set().validate(Some("NOT-A-KEY")));
    }

    #[test]
    fn match_is_exact() {
        let keys = demo_set();
        assert!(!keys.validate(Some("demo-key-123")));
        assert!(!keys.validate(Some(" DEMO-KEY-123")));
        assert!(!keys.validate(Some("")));
    }

    #[test]
    fn multiple_keys_all_validate() {
        let keys = ApiKeySet::new(["A".to_string(), "B".to_string()]);
        assert!(keys.validate(Some("A")));
        assert!(keys.validate(Some("B")));
        assert_eq!(keys.len(), 2);
    }
}
