use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Named parameters that identify a cached result.
///
/// Keys are kept sorted, and nested objects serialize with sorted keys too,
/// so two parameter sets are equal exactly when their [`Params::key`]s are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }
    /// builder-style insert
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }
    pub fn insert(&mut self, name: &str, value: impl Into<Value>) {
        self.0.insert(name.to_string(), value.into());
    }
    /// Flatten another parameter set into this one. Names already
    /// present here win.
    pub fn merge(mut self, other: &Params) -> Self {
        for (name, value) in other.0.iter() {
            self.0.entry(name.clone()).or_insert_with(|| value.clone());
        }
        self
    }
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Canonical string form used as a cache key.
    pub fn key(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_default()
    }
}

impl From<BTreeMap<String, Value>> for Params {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Params> for Value {
    fn from(params: Params) -> Self {
        Value::Object(params.0.into_iter().collect())
    }
}

impl std::fmt::Display for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_ignores_insertion_order() {
        let a = Params::new().with("rcut", 5.0).with("nmax", 4);
        let b = Params::new().with("nmax", 4).with("rcut", 5.0);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn nested_params_compare_by_value() {
        let inner1 = Params::new().with("lmax", 4).with("sigma", 0.5);
        let inner2 = Params::new().with("sigma", 0.5).with("lmax", 4);
        let a = Params::new().with("soap", inner1);
        let b = Params::new().with("soap", inner2);
        assert_eq!(a.key(), b.key());
        assert_ne!(a.key(), Params::new().with("soap", Params::new()).key());
    }

    #[test]
    fn merge_keeps_existing_names() {
        let a = Params::new().with("eps", 0.1);
        let b = Params::new().with("eps", 0.2).with("rcut", 5.0);
        let merged = a.merge(&b);
        assert_eq!(merged.get("eps"), Some(&Value::from(0.1)));
        assert_eq!(merged.len(), 2);
    }
}
