use serde::Deserialize;
use serde::Serialize;

/// Identifier of a structure within a collection.
///
/// Aids key every cached result and group local environments
/// back to the structure they came from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Aid(String);

impl Aid {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Aid {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
impl From<String> for Aid {
    fn from(s: String) -> Self {
        Self(s)
    }
}
impl From<Aid> for String {
    fn from(aid: Aid) -> Self {
        aid.0
    }
}

impl std::fmt::Display for Aid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
