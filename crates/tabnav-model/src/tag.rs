use std::fmt;

/// Key correlating a stack entry with a host-managed screen unit.
///
/// Tags are `<type-name><counter>` and are never empty or the literal `null`
/// (in any case), which older saved states used as a placeholder.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Validates a raw tag, returning `None` for placeholder values.
    pub fn parse(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() || value.eq_ignore_ascii_case("null") {
            return None;
        }
        Some(Self(value))
    }

    /// Builds the tag for the `counter`-th unit of `type_name`.
    pub fn generate(type_name: &str, counter: u64) -> Self {
        Self(format!("{type_name}{counter}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
