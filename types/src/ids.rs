use std::fmt;

/// Stable identity of a list row (conversation id, friend id).
///
/// Unique within one list and stable across re-renders of the same logical
/// row. The value is opaque; only equality and hashing matter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct RowId(String);

impl RowId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RowId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RowId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::RowId;

    #[test]
    fn display_is_raw_id() {
        let id = RowId::new("5adad39555703565e7903f79");
        assert_eq!(id.to_string(), "5adad39555703565e7903f79");
        assert_eq!(id.as_str(), "5adad39555703565e7903f79");
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(RowId::from("a"), RowId::from(String::from("a")));
        assert_ne!(RowId::from("a"), RowId::from("b"));
    }
}
