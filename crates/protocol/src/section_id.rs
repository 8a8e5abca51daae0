use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of an anchorable `<section id="…">` of the page.
///
/// Wraps `Arc<str>` so that `.clone()` is a pointer copy + refcount
/// increment. Section ids are cloned into every nav-link command emitted
/// on a scroll tick, so this stays cheap.
///
/// Implements `PartialEq<&str>` so assertions like
/// `assert_eq!(active, "about")` work naturally.
#[derive(Debug, Clone, Eq)]
pub struct SectionId(Arc<str>);

impl SectionId {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The URL fragment form, e.g. `#about`.
    pub fn to_hash(&self) -> String {
        format!("#{}", self.0)
    }

    /// Parse a URL fragment or `href` value (`#about`) into a section id.
    ///
    /// Returns `None` for a bare `#`, an empty string, or a value that is not
    /// a same-page fragment.
    pub fn from_hash(hash: &str) -> Option<Self> {
        let id = hash.strip_prefix('#')?;
        if id.is_empty() {
            return None;
        }
        Some(Self::from(id))
    }
}

impl PartialEq for SectionId {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || *self.0 == *other.0
    }
}

impl PartialEq<str> for SectionId {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl Ord for SectionId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for SectionId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::hash::Hash for SectionId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (*self.0).hash(state);
    }
}

impl std::ops::Deref for SectionId {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SectionId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for SectionId {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    #[inline]
    fn from(s: &str) -> Self {
        SectionId(Arc::from(s))
    }
}

impl From<String> for SectionId {
    #[inline]
    fn from(s: String) -> Self {
        SectionId(Arc::from(s.as_str()))
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// Hand-rolled to avoid serde's `rc` feature.

impl Serialize for SectionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SectionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(SectionId::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_forms() {
        let id = SectionId::from("about");
        assert_eq!(id.to_hash(), "#about");
        assert_eq!(SectionId::from_hash("#about"), Some(id));
    }

    #[test]
    fn bare_fragment_is_not_a_section() {
        assert_eq!(SectionId::from_hash("#"), None);
        assert_eq!(SectionId::from_hash(""), None);
        assert_eq!(SectionId::from_hash("about"), None);
        assert_eq!(SectionId::from_hash("https://example.com/#about"), None);
    }

    #[test]
    fn eq_str() {
        let s = SectionId::from("skills");
        assert_eq!(s, "skills");
        assert!(s != "projects");
    }

    #[test]
    fn hashmap_lookup_by_str() {
        let mut map = std::collections::HashMap::new();
        map.insert(SectionId::from("contact"), 7);
        assert_eq!(map.get("contact"), Some(&7));
    }

    #[test]
    fn serializes_as_plain_string() {
        let s = SectionId::from("home");
        let json = serde_json::to_string(&s).unwrap_or_default();
        assert_eq!(json, "\"home\"");
        let back: SectionId =
            serde_json::from_str(&json).unwrap_or_else(|_| SectionId::from(""));
        assert_eq!(back, "home");
    }
}
